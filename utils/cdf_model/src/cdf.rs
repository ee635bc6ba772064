//! The empirical cumulative distribution function of a key set.
//!
//! For every distinct key `x[i]`, `y[i]` is the fraction of the dataset that is
//! less than or equal to `x[i]`. Multiplying back by the dataset size gives a
//! rank, so `y[i] * len - 1` is the zero-based position of the *last*
//! occurrence of `x[i]` in the sorted dataset.

use crate::error::{FitError, Result};

/// Training pairs `(x, y)` derived from a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct EmpiricalCdf {
    x: Vec<f64>,
    y: Vec<f64>,
    len: usize,
}

impl EmpiricalCdf {
    /// Compute the empirical CDF of an unsorted dataset. Duplicates are allowed.
    ///
    /// Fails with [`FitError::EmptyDataset`] for no keys and with
    /// [`FitError::NonFinite`] if any key is NaN or infinite.
    pub fn new(keys: &[f64]) -> Result<Self> {
        let mut sorted = keys.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(sorted)
    }

    /// Same as [`EmpiricalCdf::new`] for keys which are already in non-decreasing
    /// order, which avoids sorting the dataset a second time.
    ///
    /// Fails with [`FitError::NotSorted`] at the first key smaller than its
    /// predecessor.
    pub fn from_sorted(keys: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut x: Vec<f64> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        let mut len = 0;

        for key in keys {
            if !key.is_finite() {
                return Err(FitError::NonFinite { position: len });
            }
            if x.last().map_or(false, |last| *last > key) {
                return Err(FitError::NotSorted { position: len });
            }

            len += 1;
            match x.last() {
                // Extend the current run of equal keys
                Some(last) if *last == key => {
                    if let Some(count) = counts.last_mut() {
                        *count = len;
                    }
                }
                _ => {
                    x.push(key);
                    counts.push(len);
                }
            }
        }

        if len == 0 {
            return Err(FitError::EmptyDataset);
        }

        let y = counts
            .into_iter()
            .map(|count| count as f64 / len as f64)
            .collect();

        Ok(Self { x, y, len })
    }

    /// Distinct keys, strictly increasing
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// CDF value of each distinct key, non-decreasing and within `(0, 1]`
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of keys in the dataset, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct keys, i.e. training pairs
    pub fn distinct(&self) -> usize {
        self.x.len()
    }

    /// Always `false`: an empty dataset is rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the `(x, y)` training pairs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
