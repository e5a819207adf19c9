use crate::constants::MAX_BUF_LEN;
use crate::itob::{self, Unsigned};
use crate::sealed::Sealed;
use crate::width::Width;

/// <b><u>A key trait</u></b>. Gives every [`Unsigned`] integer a method for producing
/// its base-2 digits as an owned [`String`] (requires the `std` feature).
///
/// The digits are written through a stack buffer, so this never fails.
///
/// # Examples
///
/// ```
/// use bin_format::{ToBinaryString, Width};
///
/// assert_eq!(5u64.to_binary_string(8), "00000101");
/// assert_eq!(5u16.to_binary_string(Width::Full), "0000000000000101");
/// assert_eq!(0u32.to_binary_string(Width::Minimal), "0");
/// ```
pub trait ToBinaryString: Sealed {
    /// Returns the base-2 digits of `self` at the given width.
    fn to_binary_string<W>(&self, width: W) -> String
    where
        W: Into<Width>;
}

impl<N> ToBinaryString for N
where
    N: Unsigned,
{
    fn to_binary_string<W>(&self, width: W) -> String
    where
        W: Into<Width>,
    {
        let mut buf = [0u8; MAX_BUF_LEN];
        let len = itob::write_bits(self.to_u64(), N::BITS, width.into(), &mut buf);
        buf[..len].iter().map(|&b| char::from(b)).collect()
    }
}
