//! Convex hull algorithms.
//!
//! Three independent algorithms compute the same hull:
//!
//! - [`graham_scan`]: sorted upper/lower chain scan, O(n log n)
//! - [`gift_wrap`]: Jarvis march, O(n·k)
//! - [`divide_and_conquer`]: recursive halving with common-tangent merges, O(n log n)
//!
//! # Hull convention
//!
//! Every function returns an **open** hull: distinct points in
//! counter-clockwise order, starting from the lexicographically smallest point,
//! with the first point not repeated at the end. Only strictly convex corners
//! are reported; points in the interior of a hull edge are dropped. Use
//! [`close_ring`] when a closed ring is needed (e.g. for drawing).
//!
//! Degenerate inputs produce degenerate hulls instead of failing: an empty
//! input gives an empty hull, a single distinct point gives `[p]`, and a
//! collinear set gives its two extreme points.
//!
//! # Example
//!
//! ```
//! use trigon::hull::{convex_hull, close_ring, HullAlgorithm};
//! use trigon::Point2;
//!
//! let points = vec![
//!     Point2::new(0, 0),
//!     Point2::new(4, 0),
//!     Point2::new(4, 4),
//!     Point2::new(0, 4),
//!     Point2::new(2, 2), // Interior point
//! ];
//!
//! let hull = convex_hull(&points, HullAlgorithm::GiftWrap);
//! assert_eq!(hull.len(), 4);
//!
//! let ring = close_ring(&hull);
//! assert_eq!(ring.first(), ring.last());
//! ```

mod divide_conquer;
mod gift_wrap;
mod graham;

pub use divide_conquer::{divide_and_conquer, divide_and_conquer_observed};
pub use gift_wrap::{gift_wrap, gift_wrap_observed};
pub use graham::{graham_scan, graham_scan_observed};

use crate::canvas::{Canvas, NullCanvas};
use crate::predicates::orientation;
use crate::primitives::{sorted_unique, Point2, Scalar};
use num_traits::Zero;

/// Selects one of the hull algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HullAlgorithm {
    /// [`graham_scan`]
    #[default]
    GrahamScan,
    /// [`gift_wrap`]
    GiftWrap,
    /// [`divide_and_conquer`]
    DivideAndConquer,
}

/// Computes the convex hull with the chosen algorithm.
pub fn convex_hull<T: Scalar>(points: &[Point2<T>], algorithm: HullAlgorithm) -> Vec<Point2<T>> {
    convex_hull_observed(points, algorithm, &mut NullCanvas)
}

/// Computes the convex hull with the chosen algorithm, reporting its
/// intermediate states to `canvas`.
pub fn convex_hull_observed<T: Scalar>(
    points: &[Point2<T>],
    algorithm: HullAlgorithm,
    canvas: &mut dyn Canvas<T>,
) -> Vec<Point2<T>> {
    log::debug!("computing {:?} hull of {} points", algorithm, points.len());
    let hull = match algorithm {
        HullAlgorithm::GrahamScan => graham_scan_observed(points, canvas),
        HullAlgorithm::GiftWrap => gift_wrap_observed(points, canvas),
        HullAlgorithm::DivideAndConquer => divide_and_conquer_observed(points, canvas),
    };
    log::debug!("{:?} hull has {} vertices", algorithm, hull.len());
    hull
}

/// Returns the hull as a closed ring: the first point repeated at the end.
///
/// An empty hull stays empty.
pub fn close_ring<T: Scalar>(hull: &[Point2<T>]) -> Vec<Point2<T>> {
    let mut ring = hull.to_vec();
    if let Some(&first) = hull.first() {
        ring.push(first);
    }
    ring
}

/// Computes twice the area of a hull with the shoelace formula.
///
/// Positive for CCW order. Doubling keeps the result exact for integer
/// coordinates, which are summed in [`Scalar::Wide`]. Returns 0 for fewer
/// than 3 vertices.
pub fn doubled_area<T: Scalar>(hull: &[Point2<T>]) -> T::Wide {
    if hull.len() < 3 {
        return T::Wide::zero();
    }

    (1..hull.len() - 1).fold(T::Wide::zero(), |area, i| {
        area + orientation(hull[0], hull[i], hull[i + 1])
    })
}

/// Tests if a point is inside a CCW convex hull. Boundary points count as inside.
///
/// # Example
///
/// ```
/// use trigon::hull::{graham_scan, point_in_convex_hull};
/// use trigon::Point2;
///
/// let hull = graham_scan(&[
///     Point2::new(0, 0),
///     Point2::new(2, 0),
///     Point2::new(2, 2),
///     Point2::new(0, 2),
/// ]);
///
/// assert!(point_in_convex_hull(&hull, Point2::new(1, 1))); // Center
/// assert!(point_in_convex_hull(&hull, Point2::new(0, 0))); // Corner
/// assert!(!point_in_convex_hull(&hull, Point2::new(3, 3))); // Outside
/// ```
pub fn point_in_convex_hull<T: Scalar>(hull: &[Point2<T>], point: Point2<T>) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == point,
        2 => {
            orientation(hull[0], hull[1], point) == T::Wide::zero()
                && hull[0].distance_squared(point) <= hull[0].distance_squared(hull[1])
                && hull[1].distance_squared(point) <= hull[0].distance_squared(hull[1])
        }
        n => (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], point) >= T::Wide::zero()),
    }
}

/// Tests if a point lies strictly inside a CCW convex hull.
pub fn point_strictly_in_convex_hull<T: Scalar>(hull: &[Point2<T>], point: Point2<T>) -> bool {
    let n = hull.len();
    n >= 3 && (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], point) > T::Wide::zero())
}

/// Checks that `hull` is the convex hull of `points` under the crate's convention.
///
/// Verifies that the hull vertices are distinct input points, turn strictly
/// left at every corner, start at the lexicographically smallest point, and
/// that no input point lies outside any hull edge.
pub fn is_convex_hull_of<T: Scalar>(hull: &[Point2<T>], points: &[Point2<T>]) -> bool {
    let unique = sorted_unique(points);
    if unique.len() <= 2 || hull.len() <= 2 {
        return expected_degenerate(&unique) == hull;
    }

    let n = hull.len();
    let corners_ok = (0..n).all(|i| {
        orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) > T::Wide::zero()
    });
    let members_ok = hull.iter().all(|h| unique.contains(h));
    let start_ok = hull[0] == unique[0];
    let covers = unique.iter().all(|&p| point_in_convex_hull(hull, p));

    corners_ok && members_ok && start_ok && covers
}

/// Extreme points of a collinear or tiny sorted point set.
fn expected_degenerate<T: Scalar>(unique: &[Point2<T>]) -> Vec<Point2<T>> {
    match unique {
        [] => Vec::new(),
        [p] => vec![*p],
        [first, .., last] => {
            let all_collinear = unique
                .iter()
                .all(|&p| orientation(*first, *last, p) == T::Wide::zero());
            if all_collinear {
                vec![*first, *last]
            } else {
                // Not degenerate: never equal to a hull of at most two points.
                unique.to_vec()
            }
        }
    }
}

/// Hull of a sorted, duplicate-free set with at most two points.
fn trivial_hull<T: Scalar>(sorted: &[Point2<T>]) -> Option<Vec<Point2<T>>> {
    if sorted.len() <= 2 {
        Some(sorted.to_vec())
    } else {
        None
    }
}

/// Rotates a CCW hull so it starts at its lexicographically smallest point.
fn canonicalize<T: Scalar>(hull: &mut [Point2<T>]) {
    if hull.is_empty() {
        return;
    }
    let start = (1..hull.len()).fold(0, |best, i| {
        if hull[i].lex_cmp(&hull[best]).is_lt() {
            i
        } else {
            best
        }
    });
    hull.rotate_left(start);
}
