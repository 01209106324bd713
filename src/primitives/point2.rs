//! 2D point type.

use super::Scalar;
use std::cmp::Ordering;

/// A 2D point.
///
/// Points are plain values; ordering for sorting and tie-breaking is
/// lexicographic (x, then y) through [`Point2::lex_cmp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Compares two points by x, then by y.
    ///
    /// Incomparable coordinates (NaN) compare as equal.
    #[inline]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }

    /// Returns the squared Euclidean distance to another point, computed in
    /// [`Scalar::Wide`].
    #[inline]
    pub fn distance_squared(self, other: Self) -> T::Wide {
        let dx = other.x.widen() - self.x.widen();
        let dy = other.y.widen() - self.y.widen();
        dx * dx + dy * dy
    }

    /// Converts the coordinates to `f64`, if representable.
    #[inline]
    pub fn to_f64(self) -> Option<(f64, f64)> {
        Some((self.x.to_f64()?, self.y.to_f64()?))
    }
}

impl<T: Scalar> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// Sorts points lexicographically and removes exact duplicates.
pub(crate) fn sorted_unique<T: Scalar>(points: &[Point2<T>]) -> Vec<Point2<T>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.lex_cmp(b));
    sorted.dedup();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_cmp_orders_by_x_then_y() {
        let a = Point2::new(1, 5);
        let b = Point2::new(2, 0);
        let c = Point2::new(1, 7);

        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(b.lex_cmp(&a), Ordering::Greater);
        assert_eq!(a.lex_cmp(&c), Ordering::Less);
        assert_eq!(a.lex_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_lex_cmp_nan_is_equal() {
        let a = Point2::new(f64::NAN, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert_eq!(a.lex_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_distance_squared() {
        let a = Point2::new(0_i64, 0);
        let b = Point2::new(3, 4);
        assert_eq!(a.distance_squared(b), 25);

        let far = Point2::new(i32::MIN, i32::MIN);
        let near = Point2::new(i32::MAX, i32::MAX);
        assert_eq!(far.distance_squared(near), 2 * (u32::MAX as i128).pow(2));
    }

    #[test]
    fn test_sorted_unique() {
        let points = vec![
            Point2::new(2, 1),
            Point2::new(0, 0),
            Point2::new(2, 1),
            Point2::new(0, 3),
        ];
        let unique = sorted_unique(&points);
        assert_eq!(
            unique,
            vec![Point2::new(0, 0), Point2::new(0, 3), Point2::new(2, 1)]
        );
    }

    #[test]
    fn test_to_f64() {
        let p = Point2::new(3_i32, -4);
        assert_eq!(p.to_f64(), Some((3.0, -4.0)));
    }
}
