use thiserror::Error;

pub type Result<T> = std::result::Result<T, FitError>;

/// Failures while preparing training data or fitting a model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("cannot compute an empirical CDF over an empty dataset")]
    EmptyDataset,

    #[error("training inputs differ in length: {x} x-values, {y} y-values")]
    LengthMismatch { x: usize, y: usize },

    #[error("need at least 2 distinct x-values to fit a model, got {distinct}")]
    InsufficientData { distinct: usize },

    #[error("the training keys have no usable spread, the model cannot be fitted")]
    Degenerate,

    #[error("key at position {position} is not finite")]
    NonFinite { position: usize },

    #[error("keys are not sorted: key at position {position} is smaller than its predecessor")]
    NotSorted { position: usize },
}
