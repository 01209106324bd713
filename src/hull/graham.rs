//! Graham scan over x-sorted points (upper and lower chains).

use super::{canonicalize, trivial_hull};
use crate::canvas::{Canvas, NullCanvas, Style};
use crate::predicates::orientation;
use crate::primitives::{sorted_unique, Point2, Scalar};
use num_traits::Zero;

/// Computes the convex hull with the x-sorted Graham scan.
///
/// Returns the hull vertices in counter-clockwise order starting from the
/// lexicographically smallest point. The hull is open (the first point is not
/// repeated) and points lying inside a hull edge are excluded.
///
/// # Algorithm
///
/// 1. Sort points lexicographically and drop duplicates
/// 2. Scan left to right building the upper chain, popping while the last
///    two chain points and the new point turn left or go straight
/// 3. Scan left to right building the lower chain, popping while they turn
///    right or go straight
/// 4. Concatenate the lower chain with the reversed upper chain, dropping the
///    shared endpoints
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// # Example
///
/// ```
/// use trigon::hull::graham_scan;
/// use trigon::Point2;
///
/// let points = vec![
///     Point2::new(0, 0),
///     Point2::new(4, 0),
///     Point2::new(2, 1),
///     Point2::new(4, 4),
///     Point2::new(0, 4),
/// ];
///
/// let hull = graham_scan(&points);
/// assert_eq!(hull.len(), 4);
/// assert_eq!(hull[0], Point2::new(0, 0));
/// ```
pub fn graham_scan<T: Scalar>(points: &[Point2<T>]) -> Vec<Point2<T>> {
    graham_scan_observed(points, &mut NullCanvas)
}

/// [`graham_scan`] reporting each finished chain and the final hull to `canvas`.
pub fn graham_scan_observed<T: Scalar>(
    points: &[Point2<T>],
    canvas: &mut dyn Canvas<T>,
) -> Vec<Point2<T>> {
    let sorted = sorted_unique(points);
    if let Some(hull) = trivial_hull(&sorted) {
        return hull;
    }

    let upper = chain(&sorted, |turn| turn >= T::Wide::zero());
    let upper_handle = canvas.render_polyline(&upper, Style::Chain);

    let lower = chain(&sorted, |turn| turn <= T::Wide::zero());
    let lower_handle = canvas.render_polyline(&lower, Style::Chain);

    let mut hull = lower;
    // Upper runs left to right; walk it back without its two endpoints.
    hull.extend(upper[1..upper.len() - 1].iter().rev());

    canvas.clear(upper_handle);
    canvas.clear(lower_handle);

    canonicalize(&mut hull);
    hull
}

/// Builds one monotone chain, popping while `pop(turn)` holds for the turn
/// formed by the last two chain points and the incoming point.
fn chain<T: Scalar>(sorted: &[Point2<T>], pop: impl Fn(T::Wide) -> bool) -> Vec<Point2<T>> {
    let mut stack: Vec<Point2<T>> = Vec::with_capacity(sorted.len());
    for &p in sorted {
        while stack.len() >= 2 && pop(orientation(stack[stack.len() - 2], stack[stack.len() - 1], p))
        {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graham_square_with_center() {
        let points = vec![
            Point2::new(0, 0),
            Point2::new(4, 0),
            Point2::new(4, 4),
            Point2::new(0, 4),
            Point2::new(2, 2),
        ];
        let hull = graham_scan(&points);
        assert_eq!(
            hull,
            vec![
                Point2::new(0, 0),
                Point2::new(4, 0),
                Point2::new(4, 4),
                Point2::new(0, 4)
            ]
        );
    }

    #[test]
    fn test_graham_drops_edge_points() {
        let points = vec![
            Point2::new(0, 0),
            Point2::new(1, 0),
            Point2::new(2, 0),
            Point2::new(1, 1),
        ];
        let hull = graham_scan(&points);
        assert_eq!(
            hull,
            vec![Point2::new(0, 0), Point2::new(2, 0), Point2::new(1, 1)]
        );
    }

    #[test]
    fn test_graham_chains() {
        let sorted = sorted_unique(&[
            Point2::new(0, 0),
            Point2::new(1, 2),
            Point2::new(2, -1),
            Point2::new(3, 0),
        ]);
        let upper = chain(&sorted, |turn| turn >= 0_i128);
        let lower = chain(&sorted, |turn| turn <= 0_i128);
        assert_eq!(
            upper,
            vec![Point2::new(0, 0), Point2::new(1, 2), Point2::new(3, 0)]
        );
        assert_eq!(
            lower,
            vec![Point2::new(0, 0), Point2::new(2, -1), Point2::new(3, 0)]
        );
    }

    #[test]
    fn test_graham_collinear() {
        let points = vec![Point2::new(0, 0), Point2::new(2, 0), Point2::new(1, 0)];
        assert_eq!(graham_scan(&points), vec![Point2::new(0, 0), Point2::new(2, 0)]);
    }

    #[test]
    fn test_graham_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.25, 0.75),
        ];
        assert_eq!(graham_scan(&points).len(), 4);
    }
}
