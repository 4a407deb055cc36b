//! Sorter configuration.

use crate::error::{Result, SortError};

/// Largest digit width accepted by [`DigitWidth::Fixed`].
///
/// A 16 bit digit already needs 65536 buckets per pass.
pub const MAX_FIXED_DIGIT_BITS: u32 = 16;

/// How many key bits each bucket pass consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigitWidth {
    /// `ceil(log2(n))` bits, so the base is the smallest power of two `>= n`.
    #[default]
    Auto,
    /// A fixed number of bits, independent of the input size.
    Fixed(u32),
}

/// Options for [`RadixSorter`](crate::RadixSorter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub digit_width: DigitWidth,
}

impl SortConfig {
    pub fn new(digit_width: DigitWidth) -> Self {
        SortConfig { digit_width }
    }

    /// Rejects fixed widths outside `1..=MAX_FIXED_DIGIT_BITS`.
    pub fn validate(&self) -> Result<()> {
        match self.digit_width {
            DigitWidth::Auto => Ok(()),
            DigitWidth::Fixed(bits) if (1..=MAX_FIXED_DIGIT_BITS).contains(&bits) => Ok(()),
            DigitWidth::Fixed(bits) => Err(SortError::InvalidDigitWidth {
                bits,
                max: MAX_FIXED_DIGIT_BITS,
            }),
        }
    }

    /// Resolves the digit width for `len` elements. `len` must be at least 2.
    pub fn digit_bits(&self, len: usize) -> u32 {
        match self.digit_width {
            DigitWidth::Auto => auto_digit_bits(len),
            DigitWidth::Fixed(bits) => bits,
        }
    }
}

impl From<DigitWidth> for SortConfig {
    fn from(digit_width: DigitWidth) -> Self {
        SortConfig::new(digit_width)
    }
}

/// `ceil(log2(len))`.
///
/// Computed from the next power of two, which is `2^ceil(log2(len))` for any
/// `len >= 1`.
#[inline]
pub fn auto_digit_bits(len: usize) -> u32 {
    len.next_power_of_two().trailing_zeros()
}
