//! Gift wrapping (Jarvis march).

use super::{canonicalize, trivial_hull};
use crate::canvas::{Canvas, NullCanvas, Style};
use crate::predicates::orientation;
use crate::primitives::{sorted_unique, Point2, Scalar};
use num_traits::Zero;
use std::cmp::Ordering;

/// Computes the convex hull by gift wrapping.
///
/// Starts from the lowest point (ties broken by smallest x), which is always
/// on the hull, and repeatedly picks the point that has every other point on
/// its left or on the line. Candidates on the same line as the current best
/// are resolved in favour of the farther one, so collinear edge points are
/// skipped and no zero-length edge is produced.
///
/// The result follows the same convention as the other hull functions: open,
/// counter-clockwise, starting from the lexicographically smallest point.
///
/// # Complexity
///
/// - Time: O(n·k) where k is the number of hull vertices
/// - Space: O(n)
///
/// # Example
///
/// ```
/// use trigon::hull::gift_wrap;
/// use trigon::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 0.5),
///     Point2::new(1.0, 2.0),
/// ];
///
/// let hull = gift_wrap(&points);
/// assert_eq!(hull.len(), 3);
/// ```
pub fn gift_wrap<T: Scalar>(points: &[Point2<T>]) -> Vec<Point2<T>> {
    gift_wrap_observed(points, &mut NullCanvas)
}

/// [`gift_wrap`] reporting the partial hull after every accepted vertex.
pub fn gift_wrap_observed<T: Scalar>(
    points: &[Point2<T>],
    canvas: &mut dyn Canvas<T>,
) -> Vec<Point2<T>> {
    let unique = sorted_unique(points);
    if let Some(hull) = trivial_hull(&unique) {
        return hull;
    }

    let start = lowest(&unique);
    let mut hull = vec![start];
    let mut handle = canvas.render_polyline(&hull, Style::Chain);

    // A strictly convex hull has at most n vertices; more steps means the
    // predicate answered inconsistently.
    for _ in 0..=unique.len() {
        let current = hull[hull.len() - 1];
        let next = wrap_step(&unique, current);
        if next == start {
            canvas.clear(handle);
            canonicalize(&mut hull);
            return hull;
        }
        hull.push(next);
        canvas.clear(handle);
        handle = canvas.render_polyline(&hull, Style::Chain);
    }

    log::warn!(
        "gift wrapping did not return to its start after {} steps; stopping",
        unique.len() + 1
    );
    canvas.clear(handle);
    canonicalize(&mut hull);
    hull
}

/// Lowest point, ties broken by smallest x.
fn lowest<T: Scalar>(points: &[Point2<T>]) -> Point2<T> {
    let mut best = points[0];
    for &p in &points[1..] {
        let ord = p
            .y
            .partial_cmp(&best.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| p.x.partial_cmp(&best.x).unwrap_or(Ordering::Equal));
        if ord == Ordering::Less {
            best = p;
        }
    }
    best
}

/// Picks the hull vertex following `current`: every point lies left of or on
/// the segment `current -> candidate`, with the farthest winning ties.
fn wrap_step<T: Scalar>(points: &[Point2<T>], current: Point2<T>) -> Point2<T> {
    let mut candidate = match points.iter().find(|&&p| p != current) {
        Some(&p) => p,
        None => return current,
    };

    for &p in points {
        if p == current || p == candidate {
            continue;
        }
        let turn = orientation(current, candidate, p);
        if turn < T::Wide::zero()
            || (turn == T::Wide::zero()
                && current.distance_squared(p) > current.distance_squared(candidate))
        {
            candidate = p;
        }
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_breaks_ties_by_x() {
        let points = [Point2::new(3, 0), Point2::new(1, 0), Point2::new(0, 2)];
        assert_eq!(lowest(&points), Point2::new(1, 0));
    }

    #[test]
    fn test_wrap_step_prefers_farther_collinear() {
        let points = [
            Point2::new(0, 0),
            Point2::new(1, 0),
            Point2::new(3, 0),
            Point2::new(2, 0),
            Point2::new(1, 5),
        ];
        assert_eq!(wrap_step(&points, Point2::new(0, 0)), Point2::new(3, 0));
    }

    #[test]
    fn test_gift_wrap_square_with_edge_points() {
        let points = vec![
            Point2::new(0, 0),
            Point2::new(2, 0),
            Point2::new(4, 0),
            Point2::new(4, 2),
            Point2::new(4, 4),
            Point2::new(0, 4),
            Point2::new(0, 2),
            Point2::new(1, 1),
        ];
        let hull = gift_wrap(&points);
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
    fn test_gift_wrap_collinear_vertical() {
        let points = vec![Point2::new(0, 2), Point2::new(0, 0), Point2::new(0, 1)];
        assert_eq!(gift_wrap(&points), vec![Point2::new(0, 0), Point2::new(0, 2)]);
    }

    #[test]
    fn test_gift_wrap_starts_at_lex_min_not_lowest() {
        // Lowest point is (2, -1) but the canonical start is (0, 0).
        let points = vec![Point2::new(2, -1), Point2::new(0, 0), Point2::new(1, 3)];
        let hull = gift_wrap(&points);
        assert_eq!(
            hull,
            vec![Point2::new(0, 0), Point2::new(2, -1), Point2::new(1, 3)]
        );
    }
}
