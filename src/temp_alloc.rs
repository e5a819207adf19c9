mod arena;

pub use self::arena::Arena;

use arrayvec::ArrayVec;

use crate::chars::BinChar;
use crate::constants::{MAX_BUF_LEN, MAX_DIGITS};

/// A provider of transient character buffers.
///
/// [`BinaryFormatter`] asks for one buffer per call and hands it, filled, to the
/// caller. Providers decide where the memory comes from and when it is reclaimed;
/// the formatter never frees or reuses a buffer itself.
///
/// [`BinaryFormatter`]: struct.BinaryFormatter.html
pub trait TempAlloc<C: BinChar> {
    /// The buffer handed out by [`acquire`](TempAlloc::acquire).
    type Buffer: AsRef<[C]> + AsMut<[C]>;

    /// Returns a writable buffer of at least `len + 1` units (`len` digits and a
    /// terminator), or `None` when the request can't be satisfied.
    ///
    /// Contents of the returned buffer are unspecified; the formatter overwrites every
    /// unit it reports as part of its result.
    fn acquire(&mut self, len: usize) -> Option<Self::Buffer>;
}

impl<C, A> TempAlloc<C> for &mut A
where
    C: BinChar,
    A: TempAlloc<C> + ?Sized,
{
    type Buffer = A::Buffer;

    #[inline]
    fn acquire(&mut self, len: usize) -> Option<Self::Buffer> {
        (**self).acquire(len)
    }
}

/// Heap-backed provider; each buffer is a freshly allocated `Vec`.
///
/// Allocation failure is reported instead of aborting the process.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Heap;

#[cfg(feature = "std")]
impl<C: BinChar> TempAlloc<C> for Heap {
    type Buffer = Vec<C>;

    fn acquire(&mut self, len: usize) -> Option<Vec<C>> {
        let cap = len.checked_add(1)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(cap).ok()?;
        buf.resize(cap, C::NUL);
        Some(buf)
    }
}

/// Stack-backed provider; each buffer is an inline array sized for the widest
/// result (64 digits and a terminator).
///
/// Requests above 64 digits are refused.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Stack;

impl<C: BinChar> TempAlloc<C> for Stack {
    type Buffer = ArrayVec<C, MAX_BUF_LEN>;

    fn acquire(&mut self, len: usize) -> Option<Self::Buffer> {
        if len > MAX_DIGITS {
            return None;
        }
        Some((0..=len).map(|_| C::NUL).collect())
    }
}
