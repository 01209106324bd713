//! Drawing collaborator used to observe algorithms while they run.
//!
//! The algorithms call a [`Canvas`] at fixed points (finished hull chains,
//! merge steps, point insertions) so a front end can show intermediate
//! states. A canvas only observes: results are identical whether it draws,
//! records, or does nothing like [`NullCanvas`].

use crate::primitives::{Point2, Scalar};

/// Identifies a polyline previously drawn on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolylineHandle(pub usize);

/// What a polyline represents, so a canvas can pick colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// A finished convex hull.
    Hull,
    /// A partial hull or chain still being built.
    Chain,
    /// A common tangent found while merging sub-hulls.
    Tangent,
    /// A triangle of the triangulation.
    Triangle,
    /// Triangles touched by the most recent insertion.
    Highlight,
}

/// Receiver of drawing calls.
pub trait Canvas<T: Scalar> {
    /// Draws `points` connected in order and returns a handle for [`Canvas::clear`].
    fn render_polyline(&mut self, points: &[Point2<T>], style: Style) -> PolylineHandle;

    /// Erases a polyline drawn earlier. Unknown handles are ignored.
    fn clear(&mut self, handle: PolylineHandle);
}

/// A canvas that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl<T: Scalar> Canvas<T> for NullCanvas {
    #[inline]
    fn render_polyline(&mut self, _points: &[Point2<T>], _style: Style) -> PolylineHandle {
        PolylineHandle(0)
    }

    #[inline]
    fn clear(&mut self, _handle: PolylineHandle) {}
}

/// Draws a closed ring: the points followed by the first point again.
pub(crate) fn render_ring<T: Scalar>(
    canvas: &mut dyn Canvas<T>,
    ring: &[Point2<T>],
    style: Style,
) -> PolylineHandle {
    let mut closed = Vec::with_capacity(ring.len() + 1);
    closed.extend_from_slice(ring);
    if let Some(&first) = ring.first() {
        closed.push(first);
    }
    canvas.render_polyline(&closed, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        calls: Vec<(usize, Style)>,
    }

    impl Canvas<i32> for Counting {
        fn render_polyline(&mut self, points: &[Point2<i32>], style: Style) -> PolylineHandle {
            self.calls.push((points.len(), style));
            PolylineHandle(self.calls.len())
        }

        fn clear(&mut self, _handle: PolylineHandle) {}
    }

    #[test]
    fn test_render_ring_closes() {
        let mut canvas = Counting { calls: Vec::new() };
        let ring = [Point2::new(0, 0), Point2::new(1, 0), Point2::new(0, 1)];
        let handle = render_ring(&mut canvas, &ring, Style::Triangle);
        assert_eq!(handle, PolylineHandle(1));
        assert_eq!(canvas.calls, vec![(4, Style::Triangle)]);
    }

    #[test]
    fn test_null_canvas_accepts_everything() {
        let mut canvas = NullCanvas;
        let handle = Canvas::<f64>::render_polyline(&mut canvas, &[], Style::Hull);
        Canvas::<f64>::clear(&mut canvas, handle);
    }
}
