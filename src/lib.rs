//! trigon - Planar convex hulls and incremental Delaunay triangulation
//!
//! Three hull algorithms (Graham scan, gift wrapping, divide and conquer) that
//! agree point for point, a half-edge mesh, and a hull-seeded incremental
//! Delaunay triangulation with a point-location DAG. Algorithms can report
//! intermediate states to a [`Canvas`] for visualisation.

pub mod canvas;
pub mod delaunay;
pub mod error;
pub mod hull;
pub mod io;
pub mod mesh;
pub mod predicates;
pub mod primitives;

pub use canvas::{Canvas, NullCanvas, PolylineHandle, Style};
pub use error::{MeshError, TrigonError};
pub use predicates::{cyclic_next, cyclic_prev, in_circumcircle, orient, orientation, Orientation};
pub use primitives::{Point2, Scalar};
