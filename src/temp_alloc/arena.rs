use core::mem;

use crate::chars::BinChar;
use crate::temp_alloc::TempAlloc;

/// Bump provider over caller-owned storage.
///
/// Each buffer is carved off the front of the remaining storage and lives as long as
/// the storage borrow. Nothing is reclaimed individually; the whole region comes back
/// when the caller drops the arena and its buffers. A request that doesn't fit leaves
/// the remaining storage untouched.
///
/// # Examples
///
/// ```
/// use bin_format::{Arena, BinaryFormatter};
///
/// let mut storage = [0u8; 16];
/// let mut formatter = BinaryFormatter::new(Arena::new(&mut storage));
///
/// let a = formatter.format_with_width(2, 4).unwrap();
/// let b = formatter.format_with_width(3, 4).unwrap();
/// assert_eq!((a.as_str(), b.as_str()), ("0010", "0011"));
///
/// // 10 of 16 units are in use; 8 digits and a terminator no longer fit
/// assert!(formatter.format_with_width(1, 8).is_err());
/// assert_eq!(formatter.allocator().remaining(), 6);
/// ```
#[derive(Debug)]
pub struct Arena<'a, C> {
    free: &'a mut [C],
    used: usize,
}

impl<'a, C: BinChar> Arena<'a, C> {
    /// Creates an arena handing out pieces of `storage`.
    pub fn new(storage: &'a mut [C]) -> Arena<'a, C> {
        Arena {
            free: storage,
            used: 0,
        }
    }

    /// Units not yet handed out.
    pub fn remaining(&self) -> usize {
        self.free.len()
    }

    /// Units handed out so far, terminators included.
    pub fn used(&self) -> usize {
        self.used
    }
}

impl<'a, C: BinChar> TempAlloc<C> for Arena<'a, C> {
    type Buffer = &'a mut [C];

    fn acquire(&mut self, len: usize) -> Option<&'a mut [C]> {
        let need = len.checked_add(1)?;
        if need > self.free.len() {
            log::trace!(
                "arena exhausted: {} units requested, {} remaining",
                need,
                self.free.len()
            );
            return None;
        }
        let (head, tail) = mem::take(&mut self.free).split_at_mut(need);
        self.free = tail;
        self.used += need;
        Some(head)
    }
}
