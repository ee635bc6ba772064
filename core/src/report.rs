//! Read-only views of a built index, for printing and plotting.

use serde::{Deserialize, Serialize};

/// One distinct key of the training set, in the scale of table positions.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub key: f64,

    /// Position of the last occurrence of the key in the sorted table
    pub position: usize,

    /// The model's estimate of the position before rounding
    pub scaled: f64,

    /// The rounded estimate used for guessing, not clamped to the table
    pub predicted: i64,
}

/// Statistics of a built index
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary<M> {
    pub len: usize,
    pub distinct_keys: usize,
    pub max_error: usize,
    pub min_residual: i64,
    pub max_residual: i64,
    pub model: M,
}
