#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// How many digits to write.
///
/// Most callers come from a signed digit count; see [`Width::from_digits`] for how
/// that maps onto the variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
pub enum Width {
    /// The integer's whole bit width (64 characters for a `u64`). Zero is written as
    /// the single digit `"0"`.
    Full,
    /// Exactly this many digits, clamped to the integer's bit width: left-padded with
    /// zeros when the value is shorter, truncated to the low bits when it is longer.
    /// `Digits(0)` behaves like [`Width::Full`].
    Digits(u32),
    /// No leading zeros at all; zero is written as `"0"`.
    Minimal,
}

impl Width {
    /// Maps a signed digit count onto a width: positive counts become
    /// [`Width::Digits`], zero and negative counts [`Width::Full`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bin_format::Width;
    ///
    /// assert_eq!(Width::from_digits(8), Width::Digits(8));
    /// assert_eq!(Width::from_digits(0), Width::Full);
    /// assert_eq!(Width::from_digits(-3), Width::Full);
    /// ```
    pub fn from_digits(digits: i32) -> Width {
        match u32::try_from(digits) {
            Ok(n) if n > 0 => Width::Digits(n),
            _ => Width::Full,
        }
    }

    // Number of bit positions the scan covers; also the capacity requested from the
    // allocator. Always in 1..=bits.
    pub(crate) fn window(self, bits: u32) -> u32 {
        match self {
            Width::Digits(n) if n > 0 => n.min(bits),
            _ => bits,
        }
    }

    // Field width that leading zeros pad up to.
    pub(crate) fn pad_to(self, bits: u32) -> u32 {
        match self {
            Width::Minimal => 0,
            _ => self.window(bits),
        }
    }

    // Number of zeros written for the value zero.
    pub(crate) fn zero_len(self, bits: u32) -> u32 {
        match self {
            Width::Digits(n) if n > 0 => n.min(bits),
            _ => 1,
        }
    }
}

impl Default for Width {
    fn default() -> Width {
        Width::Full
    }
}

impl From<i32> for Width {
    fn from(digits: i32) -> Width {
        Width::from_digits(digits)
    }
}
