#![no_std]

//! A collection of algorithms for searching within sorted slices.
//!
//! Keys only need to be `PartialOrd`, so floating point keys can be searched
//! directly. Every strategy returns the *leftmost* match when the slice holds
//! runs of equal keys, which makes them interchangeable: a binary search and a
//! linear scan over the same slice always agree.
#![deny(missing_docs)]

use core::borrow::Borrow;

/// An algorithm for searching a sorted slice, e.g. Binary or Linear
pub trait Search {
    /// Search a slice of `T` by comparing with a given value of `T`
    ///
    /// If the value is found then `Result::Ok` is returned, containing the index of
    /// the leftmost matching element. If the value is not found then `Result::Err`
    /// is returned, containing the index where a matching element could be inserted
    /// while maintaining sorted order.
    ///
    /// This method assumes that the given slice is sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use slice_search::*;
    ///
    /// let slice = [1.0, 2.0, 3.0, 3.0, 8.0];
    /// assert_eq!(BinarySearch::search(&slice, &3.0), Ok(2));
    /// assert_eq!(BinarySearch::search(&slice, &6.0), Err(4));
    /// ```
    fn search<T: PartialOrd>(slice: &[T], x: &T) -> Result<usize, usize> {
        Self::search_by_key(slice, x)
    }

    /// Search a slice of `T`, where `T: Borrow<K>` and comparing to a given
    /// value of `K`, using the `Borrow<K>` trait like a key extraction
    /// function.
    ///
    /// ```
    /// use slice_search::*;
    ///
    /// struct Object {
    ///     key: f64,
    /// }
    ///
    /// impl core::borrow::Borrow<f64> for Object {
    ///     fn borrow(&self) -> &f64 {
    ///         &self.key
    ///     }
    /// }
    ///
    /// let slice = [
    ///     Object { key: 1.0 },
    ///     Object { key: 3.0 },
    ///     Object { key: 5.0 }
    /// ];
    ///
    /// assert_eq!(LinearSearch::search_by_key(&slice, &3.0), Ok(1));
    /// ```
    fn search_by_key<K: PartialOrd, T: Borrow<K>>(slice: &[T], x: &K) -> Result<usize, usize>;

    /// Same as calling `search_by_key`, but adjusts for the case
    /// when the slice's index 0 is actually `offset` in some larger slice
    fn search_by_key_with_offset<K: PartialOrd, T: Borrow<K>>(
        slice: &[T],
        x: &K,
        offset: usize,
    ) -> Result<usize, usize> {
        Self::search_by_key(slice, x)
            .map(|x| x + offset)
            .map_err(|x| x + offset)
    }
}

/// Performs a binary search on a slice, with computational complexity `O(log n)`
/// However, for small searches, a linear search may be faster.
pub struct BinarySearch;

impl Search for BinarySearch {
    fn search_by_key<K: PartialOrd, T: Borrow<K>>(slice: &[T], x: &K) -> Result<usize, usize> {
        // Narrow `[left, right)` until `left` is the first element not below `x`
        let mut left = 0;
        let mut right = slice.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if slice[mid].borrow() < x {
                left = mid + 1;
            } else {
                right = mid;
            }
        }

        match slice.get(left) {
            Some(found) if found.borrow() == x => Ok(left),
            _ => Err(left),
        }
    }
}

/// Performs a simple linear search on a slice, with computational complexity `O(n)`
pub struct LinearSearch;

impl Search for LinearSearch {
    fn search_by_key<K: PartialOrd, T: Borrow<K>>(slice: &[T], x: &K) -> Result<usize, usize> {
        let index = slice
            .iter()
            .position(|y| !(y.borrow() < x))
            .unwrap_or(slice.len());

        match slice.get(index) {
            Some(found) if found.borrow() == x => Ok(index),
            _ => Err(index),
        }
    }
}

/// If a slice has fewer than `BINARY_SEARCH_CUTOFF` bytes, use a linear search
const BINARY_SEARCH_CUTOFF: usize = 8 * 64;

/// Chooses between binary and linear search depending on the size of the slice to search
pub struct OptimalSearch;

impl Search for OptimalSearch {
    fn search_by_key<K: PartialOrd, T: Borrow<K>>(slice: &[T], x: &K) -> Result<usize, usize> {
        if slice.len() * core::mem::size_of::<T>() > BINARY_SEARCH_CUTOFF {
            BinarySearch::search_by_key(slice, x)
        } else {
            LinearSearch::search_by_key(slice, x)
        }
    }
}
