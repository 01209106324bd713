//! Geometric predicates and cyclic sequence helpers.
//!
//! Every algorithm in the crate takes its turn decisions from [`orientation`],
//! so ties resolve the same way in the hull code, the point-location
//! structure and the triangulation.

use crate::error::TrigonError;
use crate::primitives::{Point2, Scalar};
use num_traits::Zero;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` is strictly left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` is strictly right of the directed line `a -> b`.
    Clockwise,
    /// The three points are collinear.
    Collinear,
}

/// Cross product of `(b - a)` and `(c - a)`, computed in [`Scalar::Wide`].
///
/// Positive if `c` lies left of the directed segment `a -> b`, negative if it
/// lies right, zero if the three points are collinear. The magnitude is twice
/// the signed area of the triangle `abc`.
///
/// Exact for every `i32` input and for `i64` coordinates within ±2^61.
#[inline]
pub fn orientation<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> T::Wide {
    let (ax, ay) = (a.x.widen(), a.y.widen());
    (b.x.widen() - ax) * (c.y.widen() - ay) - (b.y.widen() - ay) * (c.x.widen() - ax)
}

/// Classifies the turn `a -> b -> c`.
#[inline]
pub fn orient<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Orientation {
    let cross = orientation(a, b, c);
    if cross > T::Wide::zero() {
        Orientation::CounterClockwise
    } else if cross < T::Wide::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests if `p` lies strictly inside the circumcircle of the CCW triangle `abc`.
///
/// Uses the lifted determinant instead of constructing the circumcenter, so
/// integer inputs are decided exactly. Points on the circle are not inside.
///
/// The determinant is of degree four in the coordinate differences and is
/// evaluated in [`Scalar::Wide`]. For integers that is `i128`, which stays
/// exact while the differences between `p` and `a`, `b`, `c` fit in 30 bits.
pub fn in_circumcircle<T: Scalar>(p: Point2<T>, a: Point2<T>, b: Point2<T>, c: Point2<T>) -> bool {
    // | ax-px  ay-py  (ax-px)²+(ay-py)² |
    // | bx-px  by-py  (bx-px)²+(by-py)² | > 0
    // | cx-px  cy-py  (cx-px)²+(cy-py)² |
    let (px, py) = (p.x.widen(), p.y.widen());
    let ax = a.x.widen() - px;
    let ay = a.y.widen() - py;
    let bx = b.x.widen() - px;
    let by = b.y.widen() - py;
    let cx = c.x.widen() - px;
    let cy = c.y.widen() - py;

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);

    det > T::Wide::zero()
}

/// Index preceding `i` in a cyclic sequence of length `len`.
#[inline]
pub(crate) fn prev_index(len: usize, i: usize) -> usize {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

/// Index following `i` in a cyclic sequence of length `len`.
#[inline]
pub(crate) fn next_index(len: usize, i: usize) -> usize {
    if i + 1 == len {
        0
    } else {
        i + 1
    }
}

/// Returns the element before `seq[i]`, wrapping from the first to the last.
///
/// # Errors
///
/// [`TrigonError::IndexOutOfRange`] if `i` is not a valid index (which is
/// always the case for an empty sequence).
pub fn cyclic_prev<E>(seq: &[E], i: usize) -> Result<&E, TrigonError> {
    check_index(seq.len(), i)?;
    Ok(&seq[prev_index(seq.len(), i)])
}

/// Returns the element after `seq[i]`, wrapping from the last to the first.
///
/// # Errors
///
/// [`TrigonError::IndexOutOfRange`] if `i` is not a valid index (which is
/// always the case for an empty sequence).
pub fn cyclic_next<E>(seq: &[E], i: usize) -> Result<&E, TrigonError> {
    check_index(seq.len(), i)?;
    Ok(&seq[next_index(seq.len(), i)])
}

fn check_index(len: usize, index: usize) -> Result<(), TrigonError> {
    if index < len {
        Ok(())
    } else {
        Err(TrigonError::IndexOutOfRange { index, len })
    }
}
