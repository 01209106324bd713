//! Output utilities for drawings.
//!
//! Provides an SVG-backed canvas and SVG path serialisation for polylines.

mod svg;

pub use svg::{polyline_to_svg_path, Polyline, SvgCanvas};
