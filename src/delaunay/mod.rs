//! Incremental Delaunay triangulation seeded from the convex hull.
//!
//! The triangulation is built in four steps:
//!
//! 1. Compute the convex hull with [`divide_and_conquer`]
//! 2. Fan the hull polygon from a point strictly inside it (or from the first
//!    hull vertex if there is no such point)
//! 3. Insert the remaining points one at a time, locating each through the
//!    point-location DAG and splitting the face or edge it falls on
//! 4. After every insertion, flip edges that violate the empty-circumcircle
//!    criterion (Lawson flips), starting from the edges opposite the new point
//!
//! The result keeps both the half-edge [`Mesh`] and the [`PointLocation`]
//! structure. Leaves of the DAG correspond one to one to live mesh faces.
//!
//! # Complexity
//!
//! - Time: O(n log n) expected for random insertion order, O(n²) worst case
//! - Space: O(n) for the mesh, O(n) expected for the DAG
//!
//! # Example
//!
//! ```
//! use trigon::delaunay::triangulate;
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
//! let triangulation = triangulate(&points).unwrap();
//! assert_eq!(triangulation.triangle_count(), 4);
//! assert!(triangulation.is_delaunay());
//! ```

mod dag;
mod insert;

pub use dag::{Node, NodeId, NodeKind, PointLocation};

use crate::canvas::{render_ring, Canvas, NullCanvas, PolylineHandle, Style};
use crate::error::TrigonError;
use crate::hull::{divide_and_conquer, point_in_convex_hull, point_strictly_in_convex_hull};
use crate::mesh::{FaceId, HalfEdgeId, Mesh, VertexId};
use crate::predicates::{in_circumcircle, next_index, orientation};
use crate::primitives::{sorted_unique, Point2, Scalar};
use num_traits::Zero;
use std::collections::HashMap;

/// Options for [`triangulate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaunayConfig {
    /// Run Lawson flips after seeding and after every insertion. Without them
    /// the result is a valid triangulation of the hull but not necessarily a
    /// Delaunay one.
    pub legalize: bool,
}

impl Default for DelaunayConfig {
    fn default() -> Self {
        Self { legalize: true }
    }
}

/// Where a query point falls in a triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside a face.
    Inside(FaceId),
    /// On the interior of an edge; the half-edge belongs to a face containing
    /// the point.
    OnEdge(HalfEdgeId),
    /// On an existing vertex.
    Vertex(VertexId),
}

/// A triangulation of a point set's convex hull.
#[derive(Debug, Clone)]
pub struct Triangulation<T> {
    mesh: Mesh<T>,
    dag: PointLocation<T>,
    hull: Vec<Point2<T>>,
    flips: usize,
}

/// Computes the Delaunay triangulation of `points`.
///
/// # Errors
///
/// - [`TrigonError::NotEnoughPoints`] for fewer than three distinct points
/// - [`TrigonError::DegenerateInput`] if all points are collinear
pub fn triangulate<T: Scalar>(points: &[Point2<T>]) -> Result<Triangulation<T>, TrigonError> {
    triangulate_with(points, &DelaunayConfig::default(), &mut NullCanvas)
}

/// Computes a triangulation of `points` with explicit options, reporting
/// progress to `canvas`.
///
/// The canvas receives the hull once it is known and, after every insertion,
/// the triangles around the new point (replacing the previous insertion's
/// drawing). Insertion drawings are cleared before returning; the hull stays.
///
/// # Errors
///
/// Same as [`triangulate`].
pub fn triangulate_with<T: Scalar>(
    points: &[Point2<T>],
    config: &DelaunayConfig,
    canvas: &mut dyn Canvas<T>,
) -> Result<Triangulation<T>, TrigonError> {
    let distinct = sorted_unique(points).len();
    if distinct < 3 {
        return Err(TrigonError::NotEnoughPoints {
            required: 3,
            found: distinct,
        });
    }

    let hull = divide_and_conquer(points);
    if hull.len() < 3 {
        return Err(TrigonError::DegenerateInput);
    }
    render_ring(canvas, &hull, Style::Hull);

    let centre = points
        .iter()
        .copied()
        .find(|&p| !hull.contains(&p) && point_strictly_in_convex_hull(&hull, p));

    let mut triangulation = Triangulation::seed(hull, centre);
    log::debug!(
        "seeded {} triangles from a hull of {} vertices",
        triangulation.mesh.face_count(),
        triangulation.hull.len()
    );

    if config.legalize {
        let interior = triangulation.interior_edges();
        triangulation.legalize(interior);
    }

    let mut highlight: Vec<PolylineHandle> = Vec::new();
    for &p in points {
        let vertex = match triangulation.insert(p, config) {
            Some(vertex) => vertex,
            None => continue,
        };

        for handle in highlight.drain(..) {
            canvas.clear(handle);
        }
        for face in triangulation.faces_around(vertex) {
            let corners = triangulation.mesh.face_points(face);
            highlight.push(render_ring(canvas, &corners, Style::Highlight));
        }
    }
    for handle in highlight {
        canvas.clear(handle);
    }

    log::debug!(
        "triangulated {} distinct points into {} triangles with {} flips",
        distinct,
        triangulation.triangle_count(),
        triangulation.flips
    );
    Ok(triangulation)
}

impl<T: Scalar> Triangulation<T> {
    /// Builds the mesh and DAG for the hull fan.
    fn seed(hull: Vec<Point2<T>>, centre: Option<Point2<T>>) -> Self {
        let mut mesh = Mesh::new();
        let corners: Vec<VertexId> = hull.iter().map(|&p| mesh.add_vertex(p)).collect();

        let fan: Vec<[VertexId; 3]> = match centre {
            Some(centre) => {
                let apex = mesh.add_vertex(centre);
                (0..corners.len())
                    .map(|i| [corners[i], corners[next_index(corners.len(), i)], apex])
                    .collect()
            }
            None => (1..corners.len() - 1)
                .map(|i| [corners[0], corners[i], corners[i + 1]])
                .collect(),
        };

        let mut edges: HashMap<(VertexId, VertexId), HalfEdgeId> = HashMap::new();
        let mut dag = PointLocation::new();
        for [a, b, c] in fan {
            let ab = half_edge_between(&mut mesh, &mut edges, a, b);
            let bc = half_edge_between(&mut mesh, &mut edges, b, c);
            let ca = half_edge_between(&mut mesh, &mut edges, c, a);
            let face = mesh.link_triangle(ab, bc, ca);
            dag.add_seed(face, mesh.face_points(face));
        }
        mesh.close_boundary();

        Self {
            mesh,
            dag,
            hull,
            flips: 0,
        }
    }

    /// One half-edge per edge with faces on both sides.
    fn interior_edges(&self) -> Vec<HalfEdgeId> {
        self.mesh
            .faces()
            .flat_map(|face| self.mesh.face_half_edges(face))
            .filter(|&h| {
                let twin = self.mesh.twin(h);
                self.mesh.face_of(twin).is_some() && h < twin
            })
            .collect()
    }

    fn classify(&self, face: FaceId, p: Point2<T>) -> Location {
        let edges = self.mesh.face_half_edges(face);
        for &h in &edges {
            let v = self.mesh.origin(h);
            if self.mesh.point(v) == p {
                return Location::Vertex(v);
            }
        }
        for &h in &edges {
            let a = self.mesh.point(self.mesh.origin(h));
            let b = self.mesh.point(self.mesh.destination(h));
            if orientation(a, b, p) == T::Wide::zero() {
                return Location::OnEdge(h);
            }
        }
        Location::Inside(face)
    }

    fn faces_around(&self, v: VertexId) -> Vec<FaceId> {
        self.mesh
            .outgoing(v)
            .into_iter()
            .filter_map(|h| self.mesh.face_of(h))
            .collect()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The half-edge mesh.
    pub fn mesh(&self) -> &Mesh<T> {
        &self.mesh
    }

    /// The point-location structure.
    pub fn dag(&self) -> &PointLocation<T> {
        &self.dag
    }

    /// The convex hull the triangulation covers (open, CCW).
    pub fn hull(&self) -> &[Point2<T>] {
        &self.hull
    }

    /// Leaf nodes of the DAG with their faces.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, FaceId)> + '_ {
        self.dag.leaves()
    }

    /// Final triangles as CCW corner triples, in DAG leaf order.
    pub fn triangles(&self) -> Vec<[Point2<T>; 3]> {
        self.leaves()
            .map(|(_, face)| self.mesh.face_points(face))
            .collect()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// Number of edge flips performed while building.
    pub fn flip_count(&self) -> usize {
        self.flips
    }

    /// Locates `p`, or returns `None` if it lies outside the hull.
    pub fn locate(&self, p: Point2<T>) -> Option<Location> {
        if !point_in_convex_hull(&self.hull, p) {
            return None;
        }
        let face = self.dag.locate(p);
        Some(self.classify(face, p))
    }

    /// Checks the empty-circumcircle criterion on every interior edge.
    ///
    /// Cocircular configurations pass: a fourth point on the circle is not
    /// inside it.
    pub fn is_delaunay(&self) -> bool {
        self.mesh.faces().all(|face| {
            let [a, b, c] = self.mesh.face_points(face);
            self.mesh.face_half_edges(face).iter().all(|&h| {
                let twin = self.mesh.twin(h);
                if self.mesh.face_of(twin).is_none() {
                    return true;
                }
                let opposite = self.mesh.point(self.mesh.origin(self.mesh.prev(twin)));
                !in_circumcircle(opposite, a, b, c)
            })
        })
    }

    /// Draws every triangle as a closed ring.
    pub fn render(&self, canvas: &mut dyn Canvas<T>) -> Vec<PolylineHandle> {
        self.triangles()
            .iter()
            .map(|corners| render_ring(canvas, corners, Style::Triangle))
            .collect()
    }
}

/// Returns the half-edge `u -> v`, creating the twinned pair on first use.
fn half_edge_between<T: Scalar>(
    mesh: &mut Mesh<T>,
    edges: &mut HashMap<(VertexId, VertexId), HalfEdgeId>,
    u: VertexId,
    v: VertexId,
) -> HalfEdgeId {
    if let Some(&h) = edges.get(&(u, v)) {
        return h;
    }
    let (uv, vu) = mesh.add_edge_pair(u, v);
    edges.insert((u, v), uv);
    edges.insert((v, u), vu);
    uv
}
