mod integers;

use crate::chars::BinChar;
use crate::constants::{MAX_DIGITS, TOP_BIT};
use crate::sealed::Sealed;
use crate::width::Width;

/// An unsigned integer that can be written in base 2.
///
/// This trait is sealed; so you may not implement it on your own types.
pub trait Unsigned: Copy + Sealed {
    /// Bit width of the type; the widest field it can be written in.
    const BITS: u32;

    /// Widens the value to a `u64` without changing it.
    fn to_u64(self) -> u64;
}

/// Writes the base-2 digits of `value` followed by a terminator into `out` and returns
/// the number of digits written.
///
/// `bits` is the bit width of the source integer; `out` must hold at least
/// `width.window(bits) + 1` units.
#[inline(never)]
pub(crate) fn write_bits<C: BinChar>(value: u64, bits: u32, width: Width, out: &mut [C]) -> usize {
    let mut pos = 0;

    if value == 0 {
        for _ in 0..width.zero_len(bits) {
            out[pos] = C::ZERO;
            pos += 1;
        }
    } else {
        let window = width.window(bits);
        // align the window's most significant bit with bit 63
        let mut n = value << (MAX_DIGITS as u32 - window);

        let mut i = 0;
        while i < window && n & TOP_BIT == 0 {
            i += 1;
            n <<= 1;
        }

        let pad = width.pad_to(bits).saturating_sub(window - i);
        for _ in 0..pad {
            out[pos] = C::ZERO;
            pos += 1;
        }

        while i < window {
            out[pos] = if n & TOP_BIT != 0 { C::ONE } else { C::ZERO };
            pos += 1;
            i += 1;
            n <<= 1;
        }
    }

    out[pos] = C::NUL;
    pos
}
