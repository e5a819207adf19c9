use core::fmt::{self, Write};
use core::marker::PhantomData;
use core::str;

use crate::chars::BinChar;
use crate::error::Error;
use crate::itob::{self, Unsigned};
use crate::temp_alloc::TempAlloc;
use crate::width::Width;

/// Writes unsigned integers in base 2 into buffers acquired from a [`TempAlloc`].
///
/// Every call makes exactly one request to the allocator. When the allocator refuses,
/// the call fails with [`ErrorKind::AllocationFailure`] and nothing is written.
///
/// `C` is the character unit of the output; [`BinaryFormatter::new`] picks `u8`,
/// [`BinaryFormatter::with_chars`] any other [`BinChar`].
///
/// [`ErrorKind::AllocationFailure`]: enum.ErrorKind.html#variant.AllocationFailure
#[derive(Clone, Debug)]
pub struct BinaryFormatter<A, C = u8> {
    alloc: A,
    _chars: PhantomData<fn() -> C>,
}

impl<A> BinaryFormatter<A> {
    /// Creates a formatter writing `u8` digits into buffers from `alloc`.
    pub fn new(alloc: A) -> BinaryFormatter<A> {
        BinaryFormatter::with_chars(alloc)
    }
}

impl<A, C> BinaryFormatter<A, C> {
    /// Creates a formatter writing digits of character type `C`.
    pub fn with_chars(alloc: A) -> BinaryFormatter<A, C> {
        BinaryFormatter {
            alloc,
            _chars: PhantomData,
        }
    }

    /// Returns a reference to the allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a mutable reference to the allocator.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.alloc
    }

    /// Consumes the formatter, returning the allocator.
    pub fn into_allocator(self) -> A {
        self.alloc
    }
}

impl<A, C> BinaryFormatter<A, C>
where
    A: TempAlloc<C>,
    C: BinChar,
{
    /// Formats `value` with a signed digit count.
    ///
    /// * `digits > 0`: exactly `min(digits, 64)` digits, left-padded with zeros or
    ///   truncated to the low bits.
    /// * `digits <= 0`: the full 64-digit field, or `"0"` for zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bin_format::{BinaryFormatter, Stack};
    ///
    /// let mut formatter = BinaryFormatter::new(Stack);
    /// assert_eq!(formatter.format_with_width(5, 8).unwrap().as_str(), "00000101");
    /// assert_eq!(formatter.format_with_width(0, 3).unwrap().as_str(), "000");
    /// ```
    pub fn format_with_width(
        &mut self,
        value: u64,
        digits: i32,
    ) -> Result<Binary<A::Buffer, C>, Error> {
        self.format(value, Width::from_digits(digits))
    }

    /// Formats `value` as the full 64-digit field; zero is written as `"0"`.
    pub fn format_default(&mut self, value: u64) -> Result<Binary<A::Buffer, C>, Error> {
        self.format(value, Width::Full)
    }

    /// Formats `value` without leading zeros.
    pub fn format_trimmed(&mut self, value: u64) -> Result<Binary<A::Buffer, C>, Error> {
        self.format(value, Width::Minimal)
    }

    /// Formats any [`Unsigned`] integer; widths are clamped to the integer's own bit
    /// width instead of 64.
    ///
    /// # Examples
    ///
    /// ```
    /// use bin_format::{BinaryFormatter, Stack, Width};
    ///
    /// let mut formatter = BinaryFormatter::new(Stack);
    /// assert_eq!(formatter.format(5u8, Width::Full).unwrap().as_str(), "00000101");
    /// assert_eq!(formatter.format(5u8, Width::Digits(40)).unwrap().len(), 8);
    /// ```
    pub fn format<N: Unsigned>(
        &mut self,
        value: N,
        width: Width,
    ) -> Result<Binary<A::Buffer, C>, Error> {
        let value = value.to_u64();
        let window = width.window(N::BITS) as usize;

        let mut buf = match self.alloc.acquire(window) {
            Some(buf) => buf,
            None => {
                log::debug!("allocator refused a buffer for {} binary digits", window);
                return Err(Error::allocation_failure(window));
            }
        };

        let slice = buf.as_mut();
        if slice.len() <= window {
            log::debug!(
                "allocator returned {} units for {} binary digits and a terminator",
                slice.len(),
                window
            );
            return Err(Error::allocation_failure(window));
        }

        let len = itob::write_bits(value, N::BITS, width, slice);
        Ok(Binary {
            buf,
            len,
            _chars: PhantomData,
        })
    }
}

/// A formatted binary number: the acquired buffer plus the number of digits in it.
///
/// The digits occupy the start of the buffer and are followed by one terminator. Any
/// capacity past the terminator is not part of the result.
#[derive(Clone, Debug)]
pub struct Binary<B, C> {
    buf: B,
    len: usize,
    _chars: PhantomData<fn() -> C>,
}

impl<B, C> Binary<B, C>
where
    B: AsRef<[C]>,
    C: BinChar,
{
    /// Returns the digits, without the terminator.
    pub fn as_slice(&self) -> &[C] {
        &self.buf.as_ref()[..self.len]
    }

    /// Returns the digits followed by the terminator.
    pub fn as_slice_with_nul(&self) -> &[C] {
        &self.buf.as_ref()[..=self.len]
    }

    /// Number of digits, not counting the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: every result holds at least one digit.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying buffer, handing its ownership to the caller.
    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<B> Binary<B, u8>
where
    B: AsRef<[u8]>,
{
    /// Returns the digits as a `&str`.
    pub fn as_str(&self) -> &str {
        // SAFETY: only b'0' and b'1' are ever written in front of the terminator
        unsafe { str::from_utf8_unchecked(self.as_slice()) }
    }
}

impl<B, C> fmt::Display for Binary<B, C>
where
    B: AsRef<[C]>,
    C: BinChar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.as_slice() {
            f.write_char(c.to_char())?;
        }
        Ok(())
    }
}

impl<B, C> PartialEq<str> for Binary<B, C>
where
    B: AsRef<[C]>,
    C: BinChar,
{
    fn eq(&self, other: &str) -> bool {
        self.len == other.len()
            && self
                .as_slice()
                .iter()
                .zip(other.chars())
                .all(|(c, o)| c.to_char() == o)
    }
}

impl<'s, B, C> PartialEq<&'s str> for Binary<B, C>
where
    B: AsRef<[C]>,
    C: BinChar,
{
    fn eq(&self, other: &&'s str) -> bool {
        *self == **other
    }
}
