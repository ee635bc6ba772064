//! Building blocks for fitting a model to the distribution of a key set.
//!
//! [`EmpiricalCdf`] turns raw keys into `(x, y)` training pairs, and a
//! [`Regression`] model such as [`LinearModel`] learns `y` as a function of `x`.

mod cdf;
mod error;
mod model;

pub use cdf::EmpiricalCdf;
pub use error::{FitError, Result};
pub use model::{LinearModel, Regression};
