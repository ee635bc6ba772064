//! A learned index which replaces a binary search over the whole dataset by a
//! model of the keys' CDF plus a search over a small window.
//!
//! Building the index fits a [`Regression`] to the empirical CDF of the keys and
//! records the largest error the model makes on its own training set. A lookup
//! then only needs to search `max_error` positions around the model's guess.
//!
//! The error bound is measured, not proven: keys drawn from a different
//! distribution than the training set can fall outside of the window, and are
//! then reported as missing rather than searched for in the rest of the table.

use cdf_model::{EmpiricalCdf, LinearModel, Regression};
use log::{debug, trace};
use slice_search::{BinarySearch, Search};

use crate::error::{Error, Result};
use crate::position::{clamp, position, scale};
use crate::report::{CurvePoint, IndexSummary};
use crate::table::{Entry, SortedTable};
use crate::traits::{key_to_f64, Key};

/// The model's guess for a key, and the inclusive window around it which
/// contains the key if it is present.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ApproxPos {
    pub guess: usize,
    pub lo: usize,
    pub hi: usize,
}

/// An immutable learned index over a static dataset of keys.
pub struct LearnedIndex<K: Key = f64, M: Regression = LinearModel> {
    model: M,
    table: SortedTable<K>,
    distinct: usize,
    max_error: usize,

    /// Most negative and most positive signed training residual
    residuals: (i64, i64),
}

impl<K: Key, M: Regression> LearnedIndex<K, M> {
    /// Build an index over `dataset`, where the offset of a key is its position
    /// in `dataset`.
    ///
    /// Fails with [`Error::InvalidDataset`] if the dataset is empty, contains a
    /// key which is not finite, or has fewer than 2 distinct keys.
    pub fn build(dataset: &[K]) -> Result<Self> {
        if dataset.is_empty() {
            return Err(Error::InvalidDataset("the dataset is empty".to_string()));
        }

        if let Some((offset, key)) = dataset.iter().enumerate().find(|(_, key)| !key.is_finite())
        {
            return Err(Error::InvalidDataset(format!(
                "key {:?} at offset {} is not finite",
                key, offset
            )));
        }

        let table = SortedTable::new(dataset);
        let cdf = EmpiricalCdf::from_sorted(table.keys().map(|key| key_to_f64(*key)))?;
        let model = M::fit(cdf.x(), cdf.y())?;

        let len = table.len();
        let residuals = cdf.pairs().fold((0i64, 0i64), |(min, max), (x, y)| {
            let residual = position(model.predict(x), len).saturating_sub(position(y, len));
            (min.min(residual), max.max(residual))
        });
        let max_error = residuals.0.unsigned_abs().max(residuals.1.unsigned_abs());
        let max_error = usize::try_from(max_error).unwrap_or(usize::MAX);

        debug!(
            "built learned index over {} keys ({} distinct), max error {}, residuals {:?}",
            len,
            cdf.distinct(),
            max_error,
            residuals
        );

        Ok(Self {
            model,
            table,
            distinct: cdf.distinct(),
            max_error,
            residuals,
        })
    }

    /// Number of keys in the index, duplicates included
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false`: an empty dataset cannot be indexed.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn distinct_keys(&self) -> usize {
        self.distinct
    }

    /// The largest distance between a predicted and a true position observed
    /// on the training set, i.e. the half-width of every search window.
    pub fn max_error(&self) -> usize {
        self.max_error
    }

    /// The most negative and the most positive `predicted - true` position
    /// observed on the training set.
    pub fn residual_range(&self) -> (i64, i64) {
        self.residuals
    }

    /// The model's estimate of the CDF at `key`.
    pub fn predict(&self, key: K) -> f64 {
        self.model.predict(key_to_f64(key))
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn table(&self) -> &SortedTable<K> {
        &self.table
    }

    /// Predict the position of `key` in the sorted table together with the
    /// window `[lo, hi]` to search. Always in range, even for keys far outside
    /// of the training range.
    pub fn guess(&self, key: K) -> ApproxPos {
        let len = self.len();
        if len <= 1 {
            return ApproxPos {
                guess: 0,
                lo: 0,
                hi: 0,
            };
        }

        let guess = clamp(position(self.predict(key), len), len);

        ApproxPos {
            guess,
            lo: guess.saturating_sub(self.max_error),
            hi: guess.saturating_add(self.max_error).min(len - 1),
        }
    }

    /// Find the offset of `key`. When `key` occurs several times this is the
    /// offset of one of its occurrences: the guessed one on an exact hit, and the
    /// leftmost one within the window otherwise.
    pub fn lookup(&self, key: K) -> Result<usize> {
        self.lookup_with::<BinarySearch>(key)
    }

    /// Same as [`LearnedIndex::lookup`], searching the window with `S`.
    pub fn lookup_with<S: Search>(&self, key: K) -> Result<usize> {
        self.locate::<S>(key)
            .and_then(|position| self.table.get(position))
            .map(|entry| entry.offset)
            .ok_or_else(|| Error::KeyNotFound(key_to_f64(key)))
    }

    /// Find the offsets of every occurrence of `key`, in sorted table order.
    pub fn lookup_all(&self, key: K) -> Result<Vec<usize>> {
        let entries = self.table.entries();
        let position = self
            .locate::<BinarySearch>(key)
            .ok_or_else(|| Error::KeyNotFound(key_to_f64(key)))?;

        // Equal keys are contiguous, widen the match in both directions
        let start = entries[..position]
            .iter()
            .rposition(|entry| entry.key != key)
            .map_or(0, |i| i + 1);
        let end = entries[position..]
            .iter()
            .position(|entry| entry.key != key)
            .map_or(entries.len(), |i| position + i);

        Ok(entries[start..end].iter().map(|entry| entry.offset).collect())
    }

    pub fn contains(&self, key: K) -> bool {
        self.locate::<BinarySearch>(key).is_some()
    }

    /// Position of a matching entry in the sorted table
    fn locate<S: Search>(&self, key: K) -> Option<usize> {
        let ApproxPos { guess, lo, hi } = self.guess(key);
        let probe = self.table.get(guess)?;

        if probe.key == key {
            trace!("{:?} found at guessed position {}", key, guess);
            return Some(guess);
        }

        let window = if probe.key < key {
            (guess + 1)..(hi + 1)
        } else {
            lo..guess
        };
        trace!("{:?} guessed at {}, searching {:?}", key, guess, window);

        S::search_by_key_with_offset::<K, Entry<K>>(
            &self.table.entries()[window.clone()],
            &key,
            window.start,
        )
        .ok()
    }

    /// For each distinct key, its true position and the model's prediction,
    /// in the scale of table positions.
    pub fn curve(&self) -> Vec<CurvePoint> {
        let len = self.len();
        let entries = self.table.entries();

        entries
            .iter()
            .enumerate()
            // The last entry of each run of equal keys carries the run's CDF
            .filter(|(i, entry)| entries.get(i + 1).map_or(true, |next| next.key != entry.key))
            .map(|(i, entry)| {
                let prediction = self.predict(entry.key);
                CurvePoint {
                    key: key_to_f64(entry.key),
                    position: i,
                    scaled: scale(prediction, len),
                    predicted: position(prediction, len),
                }
            })
            .collect()
    }

    pub fn summary(&self) -> IndexSummary<M>
    where
        M: Clone,
    {
        IndexSummary {
            len: self.len(),
            distinct_keys: self.distinct,
            max_error: self.max_error,
            min_residual: self.residuals.0,
            max_residual: self.residuals.1,
            model: self.model.clone(),
        }
    }
}
