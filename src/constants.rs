// Widest integer the formatter accepts, in bits; also the longest digit run it writes.
pub(crate) const MAX_DIGITS: usize = 64;

// Digits plus the NUL terminator.
pub(crate) const MAX_BUF_LEN: usize = MAX_DIGITS + 1;

pub(crate) const TOP_BIT: u64 = 0x8000_0000_0000_0000;
