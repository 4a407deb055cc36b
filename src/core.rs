//! Core traits and types for radix sorting.
//!
//! This module defines:
//! - [`RadixKey`]: The trait mapping integer keys onto an order-preserving `u128`.
//! - KeyedPair: Internal element/key association carried through the passes.
//! - KeyRange: Internal running bounds collected during key extraction.

use cuneiform::cuneiform;

const SIGN_BIT: u128 = 1 << 127;

/// An integer key that can be sorted by digits.
///
/// Implementors map themselves onto `u128` such that the mapping is strictly
/// monotonic: `a < b` must imply `a.to_radix() < b.to_radix()`. Equal keys must
/// map to equal values.
///
/// Every primitive integer type implements this trait. Signed keys are sign
/// extended and have their sign bit flipped, so negative keys order before
/// non-negative ones.
///
/// # Examples
///
/// Implementing for an integer-like newtype:
///
/// ```
/// use radixsorter::core::RadixKey;
///
/// #[derive(Clone, Copy)]
/// struct Priority(u8);
///
/// impl RadixKey for Priority {
///     fn to_radix(self) -> u128 {
///         self.0.to_radix()
///     }
/// }
/// ```
pub trait RadixKey: Copy {
    /// Returns the order-preserving unsigned image of this key.
    fn to_radix(self) -> u128;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline(always)]
                fn to_radix(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline(always)]
                fn to_radix(self) -> u128 {
                    (self as i128 as u128) ^ SIGN_BIT
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, u128, usize);
impl_radix_key_signed!(i8, i16, i32, i64, i128, isize);

/// An element together with its key, moved through every bucket pass.
///
/// The key is stored normalized (shifted by the minimum key) once extraction
/// has finished.
#[derive(Debug)]
pub(crate) struct KeyedPair<T> {
    pub element: T,
    pub key: u128,
}

/// Running bounds over radix keys.
// Cache-aligned, updated once per element during extraction.
#[cuneiform]
pub(crate) struct KeyRange {
    pub min: u128,
    pub max: u128,
}

impl KeyRange {
    /// A range that any key widens.
    pub fn empty() -> Self {
        KeyRange {
            min: u128::MAX,
            max: u128::MIN,
        }
    }

    #[inline(always)]
    pub fn include(&mut self, key: u128) {
        self.min = self.min.min(key);
        self.max = self.max.max(key);
    }

    /// Returns `max - min`, or 0 if no key was included.
    pub fn span(&self) -> u128 {
        self.max.saturating_sub(self.min)
    }
}
