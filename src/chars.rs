use core::fmt;

/// A character unit that binary digits can be written as.
///
/// Implemented for `u8` (narrow strings), `u16` and `u32` (wide strings) and `char`.
/// This trait is sealed; so you may not implement it on your own types.
pub trait BinChar: Copy + Eq + fmt::Debug + private::Sealed {
    /// The digit `'0'`.
    const ZERO: Self;
    /// The digit `'1'`.
    const ONE: Self;
    /// The terminator written after the last digit.
    const NUL: Self;

    /// Returns the unit as a `char`, for display.
    fn to_char(self) -> char;
}

macro_rules! impl_BinChar {
    ($($t:ident),*) => {$(
        #[allow(trivial_numeric_casts)]
        impl BinChar for $t {
            const ZERO: Self = b'0' as $t;
            const ONE: Self = b'1' as $t;
            const NUL: Self = 0;

            #[inline]
            fn to_char(self) -> char {
                char::from_u32(u32::from(self)).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
        }

        impl private::Sealed for $t {}
    )*};
}

impl_BinChar!(u8, u16, u32);

impl BinChar for char {
    const ZERO: Self = '0';
    const ONE: Self = '1';
    const NUL: Self = '\0';

    #[inline]
    fn to_char(self) -> char {
        self
    }
}

impl private::Sealed for char {}

// Seal to prevent downstream implementations of the BinChar trait.
mod private {
    pub trait Sealed {}
}
