//! Numeric coordinate type.

use num_traits::{Num, Signed, ToPrimitive};
use std::fmt::Debug;

/// Coordinate type accepted by every algorithm in the crate.
///
/// Implemented for all signed primitive numbers. Predicates multiply
/// coordinate differences together, so they widen their inputs to
/// [`Scalar::Wide`] first: integers are evaluated in `i128`, floats in `f64`.
pub trait Scalar: Num + Signed + ToPrimitive + Copy + PartialOrd + Debug {
    /// Type that products of coordinates are computed in.
    type Wide: Scalar;

    /// Converts the coordinate to [`Scalar::Wide`] without loss.
    fn widen(self) -> Self::Wide;
}

macro_rules! impl_scalar {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Wide = $wide;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn widen(self) -> $wide {
                    self as $wide
                }
            }
        )*
    };
}

impl_scalar!(
    i8 => i128,
    i16 => i128,
    i32 => i128,
    i64 => i128,
    i128 => i128,
    isize => i128,
    f32 => f64,
    f64 => f64,
);
