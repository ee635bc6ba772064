//! A learned index over a static set of numeric keys.
//!
//! ```
//! use rmi_core::{Error, LearnedIndex};
//!
//! let index: LearnedIndex = LearnedIndex::build(&[5.0, 1.0, 3.0, 3.0, 9.0])?;
//!
//! assert_eq!(index.lookup(9.0)?, 4);
//! assert_eq!(index.lookup_all(3.0)?, vec![2, 3]);
//! assert_eq!(index.lookup(7.0), Err(Error::KeyNotFound(7.0)));
//! # Ok::<(), Error>(())
//! ```

mod error;
mod index;
mod position;
mod report;
mod table;
mod traits;

pub use error::{Error, Result};
pub use index::{ApproxPos, LearnedIndex};
pub use position::{position, scale};
pub use report::{CurvePoint, IndexSummary};
pub use table::{Entry, SortedTable};
pub use traits::Key;

pub use cdf_model::{EmpiricalCdf, FitError, LinearModel, Regression};
pub use slice_search::{BinarySearch, LinearSearch, OptimalSearch, Search};
