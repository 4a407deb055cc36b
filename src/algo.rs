//! LSD radix sort over caller-projected integer keys.
//!
//! The sort runs in four phases:
//! - **Key extraction**: the projection is applied exactly once per element while the
//!   minimum and maximum key are tracked.
//! - **Normalization**: every key is shifted by the minimum so the working range is `0..=span`.
//! - **Base selection**: the digit width is `ceil(log2(n))` bits (see [`DigitWidth`](crate::DigitWidth)).
//! - **Bucket passes**: stable distribution by each digit, least significant first, until
//!   every digit covering `span` has been consumed.
//!
//! The main entry points are [`radix_sort_by_key`] and [`RadixSorter`].

use crate::config::SortConfig;
use crate::core::{KeyRange, KeyedPair, RadixKey};
use crate::error::{KeySourceError, Result, SortError};
use log::{debug, trace};
use std::convert::Infallible;

/// A stable radix sorter with a fixed configuration.
///
/// The free functions in this module use `RadixSorter::default()`, which selects the
/// digit width from the input size.
///
/// # Examples
///
/// ```
/// use radixsorter::{DigitWidth, RadixSorter, SortConfig};
///
/// let sorter = RadixSorter::with_config(SortConfig::new(DigitWidth::Fixed(8))).unwrap();
/// assert_eq!(sorter.sort(&[300u32, 2, 70_000, 2]), vec![2, 2, 300, 70_000]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RadixSorter {
    config: SortConfig,
}

impl RadixSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sorter, rejecting an invalid configuration.
    pub fn with_config(config: SortConfig) -> Result<Self> {
        config.validate()?;
        Ok(RadixSorter { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Returns a sorted copy of `keys`.
    pub fn sort<K: RadixKey>(&self, keys: &[K]) -> Vec<K> {
        self.sort_by_key(keys.to_vec(), |key| *key)
    }

    /// Sorts `elements` by `key_of`, moving each element into the result.
    ///
    /// `key_of` is called exactly once per element. Elements with equal keys keep their
    /// input order.
    pub fn sort_by_key<T, K, F>(&self, elements: Vec<T>, mut key_of: F) -> Vec<T>
    where
        K: RadixKey,
        F: FnMut(&T) -> K,
    {
        let extracted = extract(elements, |element| Ok::<K, Infallible>(key_of(element)));
        let (pairs, range) = match extracted {
            Ok(extracted) => extracted,
            Err((_, never)) => match never {},
        };
        self.run(pairs, range)
            .into_iter()
            .map(|pair| pair.element)
            .collect()
    }

    /// Like [`sort_by_key`](Self::sort_by_key), with a projection that may fail.
    ///
    /// The first failing element aborts the sort with [`SortError::InvalidKey`]; the
    /// elements are dropped and no partial result is returned.
    pub fn try_sort_by_key<T, K, E, F>(&self, elements: Vec<T>, key_of: F) -> Result<Vec<T>>
    where
        K: RadixKey,
        E: Into<KeySourceError>,
        F: FnMut(&T) -> std::result::Result<K, E>,
    {
        let (pairs, range) = extract(elements, key_of).map_err(|(index, source)| {
            debug!("Key projection failed at element {}", index);
            SortError::InvalidKey {
                index,
                source: source.into(),
            }
        })?;
        Ok(self
            .run(pairs, range)
            .into_iter()
            .map(|pair| pair.element)
            .collect())
    }

    /// Returns the stable sorting permutation of `elements` under `key_of`.
    ///
    /// The result holds indices such that
    /// `key_of(&elements[indices[i]]) <= key_of(&elements[indices[i + 1]])`.
    pub fn sort_indices<T, K, F>(&self, elements: &[T], mut key_of: F) -> Vec<usize>
    where
        K: RadixKey,
        F: FnMut(&T) -> K,
    {
        let extracted = extract(0..elements.len(), |&index| {
            Ok::<K, Infallible>(key_of(&elements[index]))
        });
        let (pairs, range) = match extracted {
            Ok(extracted) => extracted,
            Err((_, never)) => match never {},
        };
        self.run(pairs, range)
            .into_iter()
            .map(|pair| pair.element)
            .collect()
    }

    /// Normalizes the keys and runs the bucket passes.
    fn run<T>(&self, mut pairs: Vec<KeyedPair<T>>, range: KeyRange) -> Vec<KeyedPair<T>> {
        let len = pairs.len();
        if len <= 1 {
            trace!("Nothing to sort ({} elements)", len);
            return pairs;
        }

        let span = range.span();
        if span == 0 {
            trace!("All {} keys are equal, skipping bucket passes", len);
            return pairs;
        }

        pairs.iter_mut().for_each(|pair| pair.key -= range.min);

        let digit_bits = self.config.digit_bits(len);
        debug!(
            "Radix sorting {} elements, key span {}, {} bit digits ({:?}), {} passes",
            len,
            span,
            digit_bits,
            self.config.digit_width,
            pass_count(span, digit_bits)
        );
        lsd_passes(pairs, span, digit_bits)
    }
}

/// Applies `key_of` once per item and collects the keyed pairs and their key range.
///
/// Stops at the first failing item and reports its position.
fn extract<I, K, E, F>(
    items: I,
    mut key_of: F,
) -> std::result::Result<(Vec<KeyedPair<I::Item>>, KeyRange), (usize, E)>
where
    I: IntoIterator,
    K: RadixKey,
    F: FnMut(&I::Item) -> std::result::Result<K, E>,
{
    let items = items.into_iter();
    let mut pairs = Vec::with_capacity(items.size_hint().0);
    let mut range = KeyRange::empty();

    for (index, element) in items.enumerate() {
        let key = key_of(&element).map_err(|e| (index, e))?.to_radix();
        range.include(key);
        pairs.push(KeyedPair { element, key });
    }

    Ok((pairs, range))
}

/// Stable least-significant-digit bucket passes over normalized keys in `0..=span`.
///
/// The base is `2^digit_bits`; pass `p` buckets by `(key >> (p * digit_bits)) & (base - 1)`,
/// which is `(key / divisor) % base` with `divisor = base^p`. Passes continue while
/// `divisor <= span`.
///
/// Bucket storage is allocated once and drained back into `pairs` after every pass, so
/// capacity is reused across passes.
fn lsd_passes<T>(
    mut pairs: Vec<KeyedPair<T>>,
    span: u128,
    digit_bits: u32,
) -> Vec<KeyedPair<T>> {
    let base = 1usize << digit_bits;
    let mask = (base - 1) as u128;
    let mut buckets: Vec<Vec<KeyedPair<T>>> = (0..base).map(|_| Vec::new()).collect();

    let mut shift = 0u32;
    let mut pass = 0usize;
    while shift < u128::BITS && (span >> shift) != 0 {
        trace!("Bucket pass {} (shift {})", pass, shift);

        // Arrival order within a bucket is input order, which keeps the pass stable.
        for pair in pairs.drain(..) {
            let digit = ((pair.key >> shift) & mask) as usize;
            buckets[digit].push(pair);
        }
        for bucket in buckets.iter_mut() {
            pairs.append(bucket);
        }

        shift += digit_bits;
        pass += 1;
    }

    pairs
}

/// Returns `ceil(log_base(span + 1))` for a base of `2^digit_bits`, the number of bucket
/// passes needed to cover `span`.
pub fn pass_count(span: u128, digit_bits: u32) -> u32 {
    let significant = u128::BITS - span.leading_zeros();
    significant.div_ceil(digit_bits)
}

/// Returns a sorted copy of `keys`, using each key as its own sort key.
///
/// # Examples
///
/// ```
/// use radixsorter::radix_sort;
///
/// assert_eq!(radix_sort(&[-4i32, 10, -4, 0]), vec![-4, -4, 0, 10]);
/// ```
pub fn radix_sort<K: RadixKey>(keys: &[K]) -> Vec<K> {
    RadixSorter::default().sort(keys)
}

/// Sorts `elements` in ascending order of `key_of`, keeping equal keys in input order.
///
/// The elements are moved, never cloned, and `key_of` runs exactly once per element.
///
/// # Examples
///
/// ```
/// use radixsorter::radix_sort_by_key;
///
/// let people = vec![("a", 30u8), ("b", 25), ("c", 30)];
/// let sorted = radix_sort_by_key(people, |&(_, age)| age);
///
/// assert_eq!(sorted, vec![("b", 25), ("a", 30), ("c", 30)]);
/// ```
pub fn radix_sort_by_key<T, K, F>(elements: Vec<T>, key_of: F) -> Vec<T>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    RadixSorter::default().sort_by_key(elements, key_of)
}

/// Sorts `elements` by a projection that may fail.
///
/// # Examples
///
/// ```
/// use radixsorter::{SortError, try_radix_sort_by_key};
///
/// let words = vec!["12", "-3", "7"];
/// let sorted = try_radix_sort_by_key(words, |w| w.parse::<i64>()).unwrap();
/// assert_eq!(sorted, vec!["-3", "7", "12"]);
///
/// let err = try_radix_sort_by_key(vec!["1", "two"], |w| w.parse::<i64>()).unwrap_err();
/// assert!(matches!(err, SortError::InvalidKey { index: 1, .. }));
/// ```
pub fn try_radix_sort_by_key<T, K, E, F>(elements: Vec<T>, key_of: F) -> Result<Vec<T>>
where
    K: RadixKey,
    E: Into<KeySourceError>,
    F: FnMut(&T) -> std::result::Result<K, E>,
{
    RadixSorter::default().try_sort_by_key(elements, key_of)
}

/// Returns the indices that stably order `elements` by `key_of`.
///
/// This does not move or clone the elements.
///
/// # Examples
///
/// ```
/// use radixsorter::radix_sort_indices;
///
/// let data = ["ccc", "a", "bb"];
/// assert_eq!(radix_sort_indices(&data, |s| s.len()), vec![1, 2, 0]);
/// ```
pub fn radix_sort_indices<T, K, F>(elements: &[T], key_of: F) -> Vec<usize>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    RadixSorter::default().sort_indices(elements, key_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_of(keys: &[u128]) -> Vec<KeyedPair<usize>> {
        keys.iter()
            .enumerate()
            .map(|(element, &key)| KeyedPair { element, key })
            .collect()
    }

    fn order(pairs: Vec<KeyedPair<usize>>) -> Vec<usize> {
        pairs.into_iter().map(|p| p.element).collect()
    }

    #[test]
    fn pass_count_matches_digits() {
        assert_eq!(pass_count(0, 3), 0);
        assert_eq!(pass_count(1, 3), 1);
        assert_eq!(pass_count(7, 3), 1);
        // span equal to the base needs a second digit
        assert_eq!(pass_count(8, 3), 2);
        assert_eq!(pass_count(63, 3), 2);
        assert_eq!(pass_count(64, 3), 3);
        assert_eq!(pass_count(u128::MAX, 1), 128);
    }

    #[test]
    fn span_equal_to_base_is_fully_sorted() {
        // Base 4: a key of exactly 4 differs from 0 only in the second digit.
        let keys = [4, 0, 3, 4, 1, 0, 2, 4];
        let sorted = order(lsd_passes(pairs_of(&keys), 4, 2));
        assert_eq!(sorted, vec![1, 5, 4, 6, 2, 0, 3, 7]);
    }

    #[test]
    fn span_equal_to_base_power_is_fully_sorted() {
        // Base 2: span 8 = 2^3 needs four passes.
        let keys = [8, 7, 0, 8, 1];
        let sorted = order(lsd_passes(pairs_of(&keys), 8, 1));
        assert_eq!(sorted, vec![2, 4, 1, 0, 3]);
    }

    #[test]
    fn span_one_below_base_power_is_fully_sorted() {
        let keys = [15, 0, 9, 15, 6];
        let sorted = order(lsd_passes(pairs_of(&keys), 15, 2));
        assert_eq!(sorted, vec![1, 4, 2, 0, 3]);
    }

    #[test]
    fn full_width_span_terminates() {
        let keys = [u128::MAX, 0, 1 << 127, u128::MAX - 1];
        let sorted = order(lsd_passes(pairs_of(&keys), u128::MAX, 2));
        assert_eq!(sorted, vec![1, 2, 3, 0]);
    }

    #[test]
    fn extract_stops_at_first_failure() {
        let mut calls = 0;
        let result = extract(vec![1i32, -2, 3], |&x| {
            calls += 1;
            if x < 0 { Err("negative") } else { Ok(x) }
        });
        assert!(matches!(result, Err((1, "negative"))));
        assert_eq!(calls, 2);
    }

    #[test]
    fn extract_tracks_range() {
        let result = extract(vec![5i32, -3, 8], |&x| Ok::<_, Infallible>(x));
        let (pairs, range) = match result {
            Ok(extracted) => extracted,
            Err((_, never)) => match never {},
        };
        assert_eq!(pairs.len(), 3);
        assert_eq!(range.min, (-3i32).to_radix());
        assert_eq!(range.span(), 11);
    }
}
