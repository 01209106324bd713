//! SVG export of drawing calls.
//!
//! [`SvgCanvas`] implements [`Canvas`] by keeping the polylines that are
//! currently visible (drawn and not yet cleared). [`SvgCanvas::to_svg`] writes
//! them out as a standalone SVG document, one `<path>` per polyline, with the
//! y axis pointing up.
//!
//! # Example
//!
//! ```
//! use trigon::delaunay::{triangulate_with, DelaunayConfig};
//! use trigon::io::SvgCanvas;
//! use trigon::Point2;
//!
//! let points = vec![
//!     Point2::new(0, 0),
//!     Point2::new(4, 0),
//!     Point2::new(4, 4),
//!     Point2::new(0, 4),
//!     Point2::new(2, 2),
//! ];
//!
//! let mut canvas = SvgCanvas::new();
//! let triangulation = triangulate_with(&points, &DelaunayConfig::default(), &mut canvas).unwrap();
//! triangulation.render(&mut canvas);
//!
//! let svg = canvas.to_svg(400, 400);
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<path").count(), 5); // hull + 4 triangles
//! ```

use crate::canvas::{Canvas, PolylineHandle, Style};
use crate::primitives::{Point2, Scalar};

/// A polyline kept by [`SvgCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T> {
    pub handle: PolylineHandle,
    pub style: Style,
    pub points: Vec<Point2<T>>,
}

/// Canvas that records visible polylines for SVG export.
#[derive(Debug, Clone)]
pub struct SvgCanvas<T> {
    issued: usize,
    visible: Vec<Polyline<T>>,
}

impl<T: Scalar> Default for SvgCanvas<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> SvgCanvas<T> {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self {
            issued: 0,
            visible: Vec::new(),
        }
    }

    /// Polylines currently visible, oldest first.
    pub fn polylines(&self) -> &[Polyline<T>] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Clears everything drawn so far.
    pub fn clear_all(&mut self) {
        self.visible.clear();
    }

    /// Renders the visible polylines as an SVG document of the given pixel size.
    ///
    /// The view box is the bounding box of all points plus a 5% margin.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let margin = ((max_x - min_x).max(max_y - min_y) * 0.05).max(1.0);

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
            width,
            height,
            min_x - margin,
            -max_y - margin,
            max_x - min_x + 2.0 * margin,
            max_y - min_y + 2.0 * margin
        );
        svg.push_str("<g transform=\"scale(1 -1)\" fill=\"none\">\n");
        for polyline in &self.visible {
            svg.push_str(&format!(
                "<path d=\"{}\" stroke=\"{}\" stroke-width=\"1\" vector-effect=\"non-scaling-stroke\"/>\n",
                polyline_to_svg_path(&polyline.points, false),
                stroke_colour(polyline.style)
            ));
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut coords = self
            .visible
            .iter()
            .flat_map(|polyline| polyline.points.iter())
            .filter_map(|p| p.to_f64());

        let (x0, y0) = match coords.next() {
            Some(first) => first,
            None => return (0.0, 0.0, 1.0, 1.0),
        };
        coords.fold((x0, y0, x0, y0), |(min_x, min_y, max_x, max_y), (x, y)| {
            (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
        })
    }
}

impl<T: Scalar> Canvas<T> for SvgCanvas<T> {
    fn render_polyline(&mut self, points: &[Point2<T>], style: Style) -> PolylineHandle {
        self.issued += 1;
        let handle = PolylineHandle(self.issued);
        self.visible.push(Polyline {
            handle,
            style,
            points: points.to_vec(),
        });
        handle
    }

    fn clear(&mut self, handle: PolylineHandle) {
        self.visible.retain(|polyline| polyline.handle != handle);
    }
}

fn stroke_colour(style: Style) -> &'static str {
    match style {
        Style::Hull => "black",
        Style::Chain => "steelblue",
        Style::Tangent => "darkorange",
        Style::Triangle => "gray",
        Style::Highlight => "crimson",
    }
}

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline vertices
/// * `closed` - Whether to close the path with 'Z'
///
/// Coordinates that do not fit an `f64` are skipped.
///
/// # Example
///
/// ```
/// use trigon::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![Point2::new(0, 0), Point2::new(10, 0), Point2::new(10, 10)];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert_eq!(svg, "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<T: Scalar>(points: &[Point2<T>], closed: bool) -> String {
    let mut result = String::new();

    for (i, (x, y)) in points.iter().filter_map(|p| p.to_f64()).enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        result.push_str(&format!("{} {} {}", command, x, y));
    }

    if closed && !result.is_empty() {
        result.push_str(" Z");
    }

    result
}
