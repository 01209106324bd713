//! Point type and the numeric coordinate trait.

mod point2;
mod scalar;

pub use point2::Point2;
pub(crate) use point2::sorted_unique;
pub use scalar::Scalar;
