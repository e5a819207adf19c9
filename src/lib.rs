/*!
[![Crates.io](https://img.shields.io/crates/v/bin-format.svg)](https://crates.io/crates/bin-format)
[![Documentation](https://docs.rs/bin-format/badge.svg)](https://docs.rs/bin-format/)

A Rust crate for writing unsigned integers as base-2 digit strings.

Output is written into buffers handed out by a [`TempAlloc`] provider, so the same
formatting routine works with the heap, a fixed stack buffer, or an arena backed by
caller-owned storage. Every result is exactly the computed digits followed by one
`NUL` terminator.

# Widths

The digit count follows the classic `BIN$(value, digits)` rules:

* `digits > 0` produces exactly `digits` characters (clamped to the integer's bit
  width), left-padded with `'0'` or truncated to the low bits.
* `digits <= 0` produces the full 64-character field, except that zero is written as
  a single `"0"`.

[`Width::Minimal`] drops leading zeros altogether.

# Examples

```rust
use bin_format::{BinaryFormatter, Stack};

let mut formatter = BinaryFormatter::new(Stack);

assert_eq!(formatter.format_with_width(5, 8).unwrap().as_str(), "00000101");
assert_eq!(formatter.format_with_width(5, 2).unwrap().as_str(), "01");
assert_eq!(formatter.format_with_width(0, -1).unwrap().as_str(), "0");
assert_eq!(formatter.format_trimmed(5).unwrap().as_str(), "101");
assert_eq!(formatter.format_default(u64::MAX).unwrap().len(), 64);
```

Wide characters come from the character type of the formatter:

```rust
use bin_format::{BinaryFormatter, Stack};

let mut formatter = BinaryFormatter::<Stack, u16>::with_chars(Stack);
let bin = formatter.format_with_width(6, 4).unwrap();

assert_eq!(bin.as_slice(), &[0x30, 0x31, 0x31, 0x30]);
assert_eq!(bin.as_slice_with_nul().last(), Some(&0));
```

# Features

* `std` (default): the [`Heap`] provider, [`format_with_width`], [`format_default`]
  and [`ToBinaryString`].
* `with-serde`: `Serialize`/`Deserialize` for [`Width`] and [`Error`].
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused
)]
#![doc(html_root_url = "https://docs.rs/bin-format/0.1.0")]

mod chars;
mod constants;
mod error;
mod formatter;
mod itob;
mod sealed;
mod temp_alloc;
#[cfg(feature = "std")]
mod to_binary_string;
mod width;

pub use self::chars::BinChar;
pub use self::error::{Error, ErrorKind};
pub use self::formatter::{Binary, BinaryFormatter};
pub use self::itob::Unsigned;
#[cfg(feature = "std")]
pub use self::temp_alloc::Heap;
pub use self::temp_alloc::{Arena, Stack, TempAlloc};
#[cfg(feature = "std")]
pub use self::to_binary_string::ToBinaryString;
pub use self::width::Width;

/// Formats `value` on the heap using the signed `digits` rules (see [`Width::from_digits`]).
///
/// # Examples
///
/// ```
/// assert_eq!(bin_format::format_with_width(5, 3).unwrap().as_str(), "101");
/// ```
#[cfg(feature = "std")]
pub fn format_with_width(value: u64, digits: i32) -> Result<Binary<Vec<u8>, u8>, Error> {
    BinaryFormatter::new(Heap).format_with_width(value, digits)
}

/// Formats `value` on the heap as the full 64-character field (`"0"` for zero).
///
/// # Examples
///
/// ```
/// let bin = bin_format::format_default(5).unwrap();
/// assert_eq!(bin.len(), 64);
/// assert!(bin.as_str().ends_with("0101"));
/// ```
#[cfg(feature = "std")]
pub fn format_default(value: u64) -> Result<Binary<Vec<u8>, u8>, Error> {
    BinaryFormatter::new(Heap).format_default(value)
}
