//! Divide-and-conquer hull with common-tangent merging.

use super::{canonicalize, trivial_hull};
use crate::canvas::{render_ring, Canvas, NullCanvas, PolylineHandle, Style};
use crate::predicates::{next_index, orientation, prev_index};
use crate::primitives::{sorted_unique, Point2, Scalar};
use num_traits::Zero;

/// Computes the convex hull by divide and conquer.
///
/// Points are sorted lexicographically and split in halves recursively. Two
/// sub-hulls are merged by walking to their upper and lower common tangents
/// and splicing the outer boundary arcs together.
///
/// The result is open, counter-clockwise and starts from the lexicographically
/// smallest point, like the other hull functions.
///
/// # Complexity
///
/// - Time: O(n log n)
/// - Space: O(n)
///
/// # Example
///
/// ```
/// use trigon::hull::divide_and_conquer;
/// use trigon::Point2;
///
/// let points = vec![
///     Point2::new(0, 0),
///     Point2::new(4, 0),
///     Point2::new(4, 4),
///     Point2::new(0, 4),
///     Point2::new(2, 2),
/// ];
///
/// let hull = divide_and_conquer(&points);
/// assert_eq!(hull, vec![
///     Point2::new(0, 0),
///     Point2::new(4, 0),
///     Point2::new(4, 4),
///     Point2::new(0, 4),
/// ]);
/// ```
pub fn divide_and_conquer<T: Scalar>(points: &[Point2<T>]) -> Vec<Point2<T>> {
    divide_and_conquer_observed(points, &mut NullCanvas)
}

/// [`divide_and_conquer`] reporting every merged sub-hull and tangent to `canvas`.
///
/// Each merge clears the drawings of the two sub-hulls it replaces, so at any
/// time the canvas shows the current frontier of the recursion.
pub fn divide_and_conquer_observed<T: Scalar>(
    points: &[Point2<T>],
    canvas: &mut dyn Canvas<T>,
) -> Vec<Point2<T>> {
    let sorted = sorted_unique(points);
    if let Some(hull) = trivial_hull(&sorted) {
        return hull;
    }

    let (mut hull, handle) = recurse(&sorted, canvas);
    canvas.clear(handle);
    canonicalize(&mut hull);
    hull
}

fn recurse<T: Scalar>(
    sorted: &[Point2<T>],
    canvas: &mut dyn Canvas<T>,
) -> (Vec<Point2<T>>, PolylineHandle) {
    if sorted.len() <= 3 {
        let hull = base_hull(sorted);
        let handle = render_ring(canvas, &hull, Style::Chain);
        return (hull, handle);
    }

    let mid = sorted.len() / 2;
    let (left, left_handle) = recurse(&sorted[..mid], canvas);
    let (right, right_handle) = recurse(&sorted[mid..], canvas);

    let merged = merge(&left, &right, canvas);

    canvas.clear(left_handle);
    canvas.clear(right_handle);
    let handle = render_ring(canvas, &merged, Style::Chain);
    (merged, handle)
}

/// Orders at most three sorted, distinct points counter-clockwise.
fn base_hull<T: Scalar>(sorted: &[Point2<T>]) -> Vec<Point2<T>> {
    match *sorted {
        [a, b, c] => {
            let turn = orientation(a, b, c);
            if turn > T::Wide::zero() {
                vec![a, b, c]
            } else if turn < T::Wide::zero() {
                vec![a, c, b]
            } else {
                // Sorted and collinear: a and c are the extremes.
                vec![a, c]
            }
        }
        _ => sorted.to_vec(),
    }
}

/// Tangent endpoints as indices into the left and right hulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tangent {
    left: usize,
    right: usize,
}

/// Merges two CCW hulls where every point of `left` sorts before every point
/// of `right`.
fn merge<T: Scalar>(
    left: &[Point2<T>],
    right: &[Point2<T>],
    canvas: &mut dyn Canvas<T>,
) -> Vec<Point2<T>> {
    let upper = upper_tangent(left, right);
    let upper_handle = canvas.render_polyline(&[left[upper.left], right[upper.right]], Style::Tangent);
    let lower = lower_tangent(left, right);
    let lower_handle = canvas.render_polyline(&[left[lower.left], right[lower.right]], Style::Tangent);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    push_arc(left, upper.left, lower.left, &mut merged);
    push_arc(right, lower.right, upper.right, &mut merged);

    canvas.clear(upper_handle);
    canvas.clear(lower_handle);
    merged
}

/// Appends `hull[from..=to]` walking counter-clockwise, wrapping past the end.
fn push_arc<T: Copy>(hull: &[T], from: usize, to: usize, out: &mut Vec<T>) {
    let mut k = from;
    loop {
        out.push(hull[k]);
        if k == to {
            break;
        }
        k = next_index(hull.len(), k);
    }
}

fn rightmost<T: Scalar>(hull: &[Point2<T>]) -> usize {
    (1..hull.len()).fold(0, |best, i| {
        if hull[i].lex_cmp(&hull[best]).is_gt() {
            i
        } else {
            best
        }
    })
}

fn leftmost<T: Scalar>(hull: &[Point2<T>]) -> usize {
    (1..hull.len()).fold(0, |best, i| {
        if hull[i].lex_cmp(&hull[best]).is_lt() {
            i
        } else {
            best
        }
    })
}

/// True if `candidate` should replace `current` as the tangent endpoint seen
/// from `pivot`: it lies strictly on the `outward` side, or on the line and
/// farther away.
#[inline]
fn improves<T: Scalar>(
    pivot: Point2<T>,
    current: Point2<T>,
    candidate: Point2<T>,
    outward: impl Fn(T::Wide) -> bool,
) -> bool {
    let turn = orientation(pivot, current, candidate);
    outward(turn)
        || (turn == T::Wide::zero()
            && pivot.distance_squared(candidate) > pivot.distance_squared(current))
}

/// Upper common tangent: the right endpoint walks clockwise, the left
/// endpoint counter-clockwise, until neither neighbour lies above the line.
fn upper_tangent<T: Scalar>(left: &[Point2<T>], right: &[Point2<T>]) -> Tangent {
    let mut t = Tangent {
        left: rightmost(left),
        right: leftmost(right),
    };

    loop {
        let r_prev = prev_index(right.len(), t.right);
        if improves(left[t.left], right[t.right], right[r_prev], |turn| turn > T::Wide::zero()) {
            t.right = r_prev;
            continue;
        }
        let l_next = next_index(left.len(), t.left);
        if improves(right[t.right], left[t.left], left[l_next], |turn| turn < T::Wide::zero()) {
            t.left = l_next;
            continue;
        }
        return t;
    }
}

/// Lower common tangent: the mirror image of [`upper_tangent`].
fn lower_tangent<T: Scalar>(left: &[Point2<T>], right: &[Point2<T>]) -> Tangent {
    let mut t = Tangent {
        left: rightmost(left),
        right: leftmost(right),
    };

    loop {
        let r_next = next_index(right.len(), t.right);
        if improves(left[t.left], right[t.right], right[r_next], |turn| turn < T::Wide::zero()) {
            t.right = r_next;
            continue;
        }
        let l_prev = prev_index(left.len(), t.left);
        if improves(right[t.right], left[t.left], left[l_prev], |turn| turn > T::Wide::zero()) {
            t.left = l_prev;
            continue;
        }
        return t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::is_convex_hull_of;

    fn p(x: i64, y: i64) -> Point2<i64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_base_hull_orders_ccw() {
        assert_eq!(base_hull(&[p(0, 0), p(1, 1), p(2, 0)]), vec![p(0, 0), p(2, 0), p(1, 1)]);
        assert_eq!(base_hull(&[p(0, 0), p(1, -1), p(2, 0)]), vec![p(0, 0), p(1, -1), p(2, 0)]);
        assert_eq!(base_hull(&[p(0, 0), p(1, 1), p(2, 2)]), vec![p(0, 0), p(2, 2)]);
        assert_eq!(base_hull(&[p(0, 0), p(1, 1)]), vec![p(0, 0), p(1, 1)]);
    }

    #[test]
    fn test_tangents_between_triangles() {
        let left = vec![p(0, 0), p(2, 1), p(0, 2)];
        let right = vec![p(4, 0), p(6, 1), p(4, 2)];

        let upper = upper_tangent(&left, &right);
        assert_eq!((left[upper.left], right[upper.right]), (p(0, 2), p(4, 2)));

        let lower = lower_tangent(&left, &right);
        assert_eq!((left[lower.left], right[lower.right]), (p(0, 0), p(4, 0)));
    }

    #[test]
    fn test_merge_square_halves() {
        let left = vec![p(0, 0), p(0, 4)];
        let right = vec![p(2, 2), p(4, 0), p(4, 4)];
        let merged = merge(&left, &right, &mut NullCanvas);
        assert_eq!(merged, vec![p(0, 4), p(0, 0), p(4, 0), p(4, 4)]);
    }

    #[test]
    fn test_merge_collinear_sub_hulls() {
        let left = vec![p(0, 0), p(1, 0)];
        let right = vec![p(2, 0), p(3, 0)];
        let merged = merge(&left, &right, &mut NullCanvas);
        assert_eq!(merged, vec![p(0, 0), p(3, 0)]);
    }

    #[test]
    fn test_merge_result_is_hull_of_union() {
        let left = vec![p(0, 0), p(3, -2), p(2, 3)];
        let right = vec![p(4, 1), p(7, -1), p(8, 2), p(5, 4)];
        let merged = merge(&left, &right, &mut NullCanvas);

        let mut union = left.clone();
        union.extend(&right);
        let mut merged_canonical = merged.clone();
        canonicalize(&mut merged_canonical);
        assert!(is_convex_hull_of(&merged_canonical, &union));
    }

    #[test]
    fn test_shared_vertical_line_between_halves() {
        // The lexicographic split puts (2, 0) left and (2, 5) right.
        let points = vec![p(0, 1), p(2, 0), p(2, 5), p(4, 1)];
        let hull = divide_and_conquer(&points);
        assert_eq!(hull, vec![p(0, 1), p(2, 0), p(4, 1), p(2, 5)]);
    }

    #[test]
    fn test_push_arc_wraps() {
        let seq = [0, 1, 2, 3, 4];
        let mut out = Vec::new();
        push_arc(&seq, 3, 1, &mut out);
        assert_eq!(out, vec![3, 4, 0, 1]);

        out.clear();
        push_arc(&seq, 2, 2, &mut out);
        assert_eq!(out, vec![2]);
    }
}
