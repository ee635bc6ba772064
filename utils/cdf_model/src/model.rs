//! Models which learn the CDF of a key set.
//!
//! NOTE: The only model provided for now is a single least-squares line over the
//! whole key range, so heavily skewed data will get a wide error window.

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// A model approximating `y` as a function of `x`, trained once and then
/// queried read-only.
pub trait Regression: Sized + 'static {
    /// Fit a model over the training pairs `(x[i], y[i])`.
    fn fit(x: &[f64], y: &[f64]) -> Result<Self>;

    /// Estimate `y` at `x`. Must be pure and defined for any input, extrapolating
    /// outside of the training range.
    fn predict(&self, x: f64) -> f64;
}

/// A simple linear model `y = slope * (x / scale) + intercept`.
///
/// Keys are divided by `scale`, the largest key magnitude seen in training, so
/// the model is fitted on values within `[-1, 1]`. Fits over keys close to
/// `f64::MAX` or over subnormal keys then neither overflow nor underflow.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    slope: f64,
    intercept: f64,
    scale: f64,
}

impl LinearModel {
    /// Construct a model from an explicit slope and intercept over unscaled keys
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self {
            slope,
            intercept,
            scale: 1.0,
        }
    }

    /// Slope per unit of key. May over- or underflow for extreme key ranges,
    /// predictions do not go through it.
    pub fn slope(&self) -> f64 {
        self.slope / self.scale
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Magnitude keys are divided by before applying the slope
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Regression for LinearModel {
    /// Ordinary least squares over `x / scale`, with sums taken around the means
    /// so that large keys with a narrow spread do not lose precision.
    fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        let distinct = count_distinct(x);
        if distinct < 2 {
            return Err(FitError::InsufficientData { distinct });
        }

        // The key of largest magnitude maps to +/-1 and any other distinct key to
        // a different value, so the scaled keys keep a non-zero spread
        let scale = x.iter().fold(0.0f64, |scale, xi| scale.max(xi.abs()));
        let u: Vec<f64> = x.iter().map(|xi| xi / scale).collect();

        let n = x.len() as f64;
        let mean_u = u.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (suu, suy) = u
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(suu, suy), (ui, yi)| {
                let du = ui - mean_u;
                (suu + du * du, suy + du * (yi - mean_y))
            });

        if suu == 0.0 || !suu.is_finite() || !suy.is_finite() {
            return Err(FitError::Degenerate);
        }

        let slope = suy / suu;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_u,
            scale,
        })
    }

    #[inline]
    fn predict(&self, x: f64) -> f64 {
        self.slope * (x / self.scale) + self.intercept
    }
}

fn count_distinct(x: &[f64]) -> usize {
    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}
