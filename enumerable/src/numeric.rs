//! Numeric element types accepted by `sum` and `average`.
use sealed::sealed;

/// A primitive number that can be summed and averaged.
#[sealed]
pub trait Numeric: Copy + core::ops::Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// Lossy conversion used by `average`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($zero:literal => $( $ty:ty ),+) => {
        $(
            #[sealed]
            impl Numeric for $ty {
                const ZERO: Self = $zero;

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);
