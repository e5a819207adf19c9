use crate::sealed::Sealed;

macro_rules! impl_Unsigned {
    ($($t:ident),*) => {$(
        impl super::Unsigned for $t {
            const BITS: u32 = $t::BITS;

            #[allow(trivial_numeric_casts)]
            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }

        impl Sealed for $t {}
    )*};
}

impl_Unsigned!(u8, u16, u32, u64);

#[cfg(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
))]
impl_Unsigned!(usize);
