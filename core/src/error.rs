use cdf_model::FitError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The dataset cannot be indexed, so no index was built
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// The key is not present within the bounded search window
    #[error("the key <{0}> is not found in the index")]
    KeyNotFound(f64),
}

impl From<FitError> for Error {
    fn from(err: FitError) -> Self {
        Error::InvalidDataset(err.to_string())
    }
}
