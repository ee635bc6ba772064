//! `rmi` provides a learned index: a regression model fitted to the
//! empirical CDF of a static set of numeric keys, which predicts where a
//! key sits in the sorted dataset.
//!
//! At build time the index measures the largest error its model makes on
//! the training keys. Every lookup then starts from the model's guess and
//! only searches that many positions around it.
//!
//! ```
//! use rmi::prelude::*;
//!
//! // Offsets are the positions of the keys in the dataset
//! let ages = [31.0, 25.0, 47.0, 25.0, 52.0, 38.0];
//! let index: LearnedIndex = LearnedIndex::build(&ages)?;
//!
//! assert_eq!(index.lookup(47.0)?, 2);
//! assert_eq!(index.lookup_all(25.0)?, vec![1, 3]);
//! assert!(index.lookup(26.0).is_err());
//!
//! // The window searched around each guess
//! let ApproxPos { lo, hi, .. } = index.guess(38.0);
//! assert!(hi - lo <= 2 * index.max_error());
//! # Ok::<(), rmi::Error>(())
//! ```
//!
//! The index is immutable once built. If the dataset changes, build a new
//! index over it.
#![deny(missing_docs)]

/// Include this at the top of the file when building or querying an index.
pub mod prelude {
    pub use rmi_core::{ApproxPos, LearnedIndex, LinearModel, Regression};
}

pub use rmi_core::{
    BinarySearch, CurvePoint, EmpiricalCdf, Entry, Error, FitError, IndexSummary, Key,
    LinearSearch, OptimalSearch, Result, Search, SortedTable,
};
