//! Doubly-connected edge list (half-edge mesh) for planar triangulations.
//!
//! Vertices, half-edges and faces live in flat arenas and refer to each other
//! through the index types [`VertexId`], [`HalfEdgeId`] and [`FaceId`], so the
//! cyclic `twin`/`next`/`prev` relations need no shared ownership.
//!
//! # Invariants
//!
//! For every half-edge `e` of a finished mesh:
//!
//! - `twin(twin(e)) == e` and the twins start at different vertices
//! - `prev(next(e)) == e` and `next(e)` starts where `e` ends
//! - if `e` bounds a face, walking `next` three times returns to `e`
//! - if `e` bounds no face it lies on the outer boundary, and the `next`
//!   cycle through it visits only boundary half-edges
//!
//! Half-edges are only ever created in twinned pairs, so twin symmetry holds
//! by construction. The mesh knows nothing about geometry beyond storing a
//! point per vertex; the triangulation engine decides what to link.
//!
//! # Example
//!
//! ```
//! use trigon::mesh::Mesh;
//! use trigon::Point2;
//!
//! let mut mesh = Mesh::new();
//! let a = mesh.add_vertex(Point2::new(0, 0));
//! let b = mesh.add_vertex(Point2::new(1, 0));
//! let c = mesh.add_vertex(Point2::new(0, 1));
//!
//! let (ab, _) = mesh.add_edge_pair(a, b);
//! let (bc, _) = mesh.add_edge_pair(b, c);
//! let (ca, _) = mesh.add_edge_pair(c, a);
//! let face = mesh.link_triangle(ab, bc, ca);
//! mesh.close_boundary();
//!
//! assert_eq!(mesh.face_vertices(face), [a, b, c]);
//! assert!(mesh.validate().is_ok());
//! ```

use crate::error::MeshError;
use crate::primitives::{Point2, Scalar};
use std::collections::HashMap;
use std::fmt;

macro_rules! index_type {
    ($name:ident, $label:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }
    };
}

index_type!(VertexId, "vertex");
index_type!(HalfEdgeId, "half-edge");
index_type!(FaceId, "face");

/// A mesh vertex.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub point: Point2<T>,
    /// Any half-edge leaving this vertex; `None` until an edge is attached.
    pub incident: Option<HalfEdgeId>,
}

/// A directed half-edge.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    pub origin: VertexId,
    pub twin: HalfEdgeId,
    pub next: HalfEdgeId,
    pub prev: HalfEdgeId,
    /// Face on the left; `None` on the outer side of the boundary.
    pub face: Option<FaceId>,
}

/// A triangular face.
#[derive(Debug, Clone)]
pub struct Face {
    /// First half-edge of the face cycle.
    pub edge: HalfEdgeId,
    /// Cleared when the face is replaced by a split or flip.
    pub live: bool,
}

/// Half-edge mesh over points with coordinates of type `T`.
#[derive(Debug, Clone, Default)]
pub struct Mesh<T> {
    vertices: Vec<Vertex<T>>,
    half_edges: Vec<HalfEdge>,
    faces: Vec<Face>,
}

impl<T: Scalar> Mesh<T> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Adds an isolated vertex.
    pub fn add_vertex(&mut self, point: Point2<T>) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            point,
            incident: None,
        });
        id
    }

    /// Adds the two half-edges `u -> v` and `v -> u`, twinned to each other.
    ///
    /// Both start unlinked (`next`/`prev` point at themselves) and without a
    /// face until [`Mesh::link_triangle`] or [`Mesh::close_boundary`] picks
    /// them up. Returns `(uv, vu)`.
    ///
    /// # Panics
    ///
    /// If `u == v`.
    pub fn add_edge_pair(&mut self, u: VertexId, v: VertexId) -> (HalfEdgeId, HalfEdgeId) {
        assert_ne!(u, v, "half-edge pair must join two distinct vertices");

        let uv = HalfEdgeId(self.half_edges.len());
        let vu = HalfEdgeId(self.half_edges.len() + 1);
        self.half_edges.push(HalfEdge {
            origin: u,
            twin: vu,
            next: uv,
            prev: uv,
            face: None,
        });
        self.half_edges.push(HalfEdge {
            origin: v,
            twin: uv,
            next: vu,
            prev: vu,
            face: None,
        });

        if self.vertices[u.0].incident.is_none() {
            self.vertices[u.0].incident = Some(uv);
        }
        if self.vertices[v.0].incident.is_none() {
            self.vertices[v.0].incident = Some(vu);
        }

        (uv, vu)
    }

    /// Links three half-edges into the cycle `e0 -> e1 -> e2 -> e0` of a new face.
    ///
    /// The face's first edge is `e0`, so [`Mesh::face_vertices`] reports the
    /// origins of `e0`, `e1`, `e2` in that order.
    ///
    /// # Panics
    ///
    /// If the edges do not chain head to tail and close after three hops.
    /// That is a defect in the caller, not a recoverable condition.
    pub fn link_triangle(&mut self, e0: HalfEdgeId, e1: HalfEdgeId, e2: HalfEdgeId) -> FaceId {
        let cycle = [e0, e1, e2];
        for i in 0..3 {
            let (e, next) = (cycle[i], cycle[(i + 1) % 3]);
            assert_eq!(
                self.destination(e),
                self.origin(next),
                "half-edge cycle {} -> {} -> {} does not close",
                e0,
                e1,
                e2
            );
        }

        let face = FaceId(self.faces.len());
        self.faces.push(Face {
            edge: e0,
            live: true,
        });
        for i in 0..3 {
            let e = cycle[i];
            let next = cycle[(i + 1) % 3];
            self.half_edges[e.0].face = Some(face);
            self.half_edges[e.0].next = next;
            self.half_edges[next.0].prev = e;
        }
        face
    }

    /// Marks a face as replaced.
    ///
    /// The face keeps its id but is skipped by [`Mesh::faces`] and
    /// [`Mesh::validate`]. Its half-edges must be relinked into new faces in
    /// the same operation.
    pub fn retire_face(&mut self, face: FaceId) {
        self.faces[face.0].live = false;
    }

    /// Links every faceless half-edge to the faceless half-edge leaving its
    /// destination, forming the outer boundary cycle.
    ///
    /// # Panics
    ///
    /// If a boundary vertex has more than one (or no) outgoing boundary
    /// half-edge, which means the linked faces do not form a disk.
    pub fn close_boundary(&mut self) {
        let mut leaving: HashMap<VertexId, HalfEdgeId> = HashMap::new();
        for (i, he) in self.half_edges.iter().enumerate() {
            if he.face.is_none() {
                let previous = leaving.insert(he.origin, HalfEdgeId(i));
                assert!(
                    previous.is_none(),
                    "{} has two outgoing boundary half-edges",
                    he.origin
                );
            }
        }

        let boundary: Vec<HalfEdgeId> = leaving.values().copied().collect();
        for h in boundary {
            let end = self.destination(h);
            let next = match leaving.get(&end) {
                Some(&next) => next,
                None => panic!("boundary is open at {}", end),
            };
            self.link_boundary(h, next);
        }
    }

    /// Sets `next(h) = next` and `prev(next) = h` on the outer boundary.
    pub(crate) fn link_boundary(&mut self, h: HalfEdgeId, next: HalfEdgeId) {
        debug_assert!(self.half_edges[h.0].face.is_none());
        debug_assert!(self.half_edges[next.0].face.is_none());
        self.half_edges[h.0].next = next;
        self.half_edges[next.0].prev = h;
    }

    /// Moves the start of a half-edge to another vertex.
    ///
    /// Used when splits and flips reuse an edge pair; the caller relinks the
    /// surrounding cycles in the same operation.
    pub(crate) fn set_origin(&mut self, h: HalfEdgeId, v: VertexId) {
        self.half_edges[h.0].origin = v;
    }

    /// Chooses the half-edge recorded as leaving `v`.
    pub(crate) fn set_incident(&mut self, v: VertexId, h: HalfEdgeId) {
        debug_assert_eq!(self.half_edges[h.0].origin, v);
        self.vertices[v.0].incident = Some(h);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn vertex(&self, id: VertexId) -> &Vertex<T> {
        &self.vertices[id.0]
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    pub fn point(&self, v: VertexId) -> Point2<T> {
        self.vertices[v.0].point
    }

    pub fn origin(&self, h: HalfEdgeId) -> VertexId {
        self.half_edges[h.0].origin
    }

    pub fn destination(&self, h: HalfEdgeId) -> VertexId {
        self.origin(self.twin(h))
    }

    pub fn twin(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[h.0].twin
    }

    pub fn next(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[h.0].next
    }

    pub fn prev(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[h.0].prev
    }

    pub fn face_of(&self, h: HalfEdgeId) -> Option<FaceId> {
        self.half_edges[h.0].face
    }

    /// The three half-edges of a face, starting at its first edge.
    pub fn face_half_edges(&self, face: FaceId) -> [HalfEdgeId; 3] {
        let e0 = self.faces[face.0].edge;
        let e1 = self.next(e0);
        [e0, e1, self.next(e1)]
    }

    /// The three corners of a face, in cycle order.
    pub fn face_vertices(&self, face: FaceId) -> [VertexId; 3] {
        self.face_half_edges(face).map(|h| self.origin(h))
    }

    /// The three corner points of a face, in cycle order.
    pub fn face_points(&self, face: FaceId) -> [Point2<T>; 3] {
        self.face_vertices(face).map(|v| self.point(v))
    }

    /// Half-edges leaving `v`, in counter-clockwise order starting from its
    /// incident edge.
    pub fn outgoing(&self, v: VertexId) -> Vec<HalfEdgeId> {
        let start = match self.vertices[v.0].incident {
            Some(h) => h,
            None => return Vec::new(),
        };
        let mut out = vec![start];
        let mut h = self.twin(self.prev(start));
        while h != start && out.len() <= self.half_edges.len() {
            out.push(h);
            h = self.twin(self.prev(h));
        }
        out
    }

    /// Live faces.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.live)
            .map(|(i, _)| FaceId(i))
    }

    /// Half-edges on the outer side of the boundary.
    pub fn boundary_half_edges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(_, he)| he.face.is_none())
            .map(|(i, _)| HalfEdgeId(i))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of live faces.
    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.live).count()
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Checks every structural invariant and reports the first violation.
    pub fn validate(&self) -> Result<(), MeshError> {
        for i in 0..self.half_edges.len() {
            let h = HalfEdgeId(i);
            let twin = self.twin(h);
            if self.twin(twin) != h {
                return Err(MeshError::TwinAsymmetry(h));
            }
            if self.origin(twin) == self.origin(h) {
                return Err(MeshError::TwinSameOrigin(h));
            }
            let next = self.next(h);
            if self.prev(next) != h {
                return Err(MeshError::NextPrevMismatch(h));
            }
            if self.origin(next) != self.destination(h) {
                return Err(MeshError::BrokenChain { edge: h });
            }
            if let Some(face) = self.face_of(h) {
                if !self.faces[face.0].live {
                    return Err(MeshError::RetiredFaceReferenced { face });
                }
            }
        }

        for face in self.faces() {
            let start = self.faces[face.0].edge;
            let mut h = start;
            for _ in 0..3 {
                if self.face_of(h) != Some(face) {
                    return Err(MeshError::FaceMismatch { edge: h, face });
                }
                h = self.next(h);
            }
            if h != start {
                return Err(MeshError::NotTriangular { face });
            }
        }

        for start in self.boundary_half_edges() {
            let mut h = self.next(start);
            let mut steps = 1;
            while h != start {
                if self.face_of(h).is_some() || steps > self.half_edges.len() {
                    return Err(MeshError::OpenBoundary(start));
                }
                h = self.next(h);
                steps += 1;
            }
        }

        for (i, vertex) in self.vertices.iter().enumerate() {
            if let Some(h) = vertex.incident {
                if self.origin(h) != VertexId(i) {
                    return Err(MeshError::BadIncidentEdge(VertexId(i)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit square split along the diagonal a-c.
    fn square() -> (Mesh<i32>, [VertexId; 4], [FaceId; 2]) {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point2::new(0, 0));
        let b = mesh.add_vertex(Point2::new(1, 0));
        let c = mesh.add_vertex(Point2::new(1, 1));
        let d = mesh.add_vertex(Point2::new(0, 1));

        let (ab, _) = mesh.add_edge_pair(a, b);
        let (bc, _) = mesh.add_edge_pair(b, c);
        let (ca, ac) = mesh.add_edge_pair(c, a);
        let (cd, _) = mesh.add_edge_pair(c, d);
        let (da, _) = mesh.add_edge_pair(d, a);

        let lower = mesh.link_triangle(ab, bc, ca);
        let upper = mesh.link_triangle(ac, cd, da);
        mesh.close_boundary();
        (mesh, [a, b, c, d], [lower, upper])
    }

    #[test]
    fn test_square_is_valid() {
        let (mesh, [a, b, c, d], [lower, upper]) = square();
        assert_eq!(mesh.validate(), Ok(()));
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.half_edge_count(), 10);
        assert_eq!(mesh.face_vertices(lower), [a, b, c]);
        assert_eq!(mesh.face_vertices(upper), [a, c, d]);
        assert_eq!(mesh.boundary_half_edges().count(), 4);
    }

    #[test]
    fn test_traversal_invariants() {
        let (mesh, _, _) = square();
        for i in 0..mesh.half_edge_count() {
            let h = HalfEdgeId(i);
            assert_eq!(mesh.twin(mesh.twin(h)), h);
            assert_eq!(mesh.prev(mesh.next(h)), h);
            if mesh.face_of(h).is_some() {
                assert_eq!(mesh.next(mesh.next(mesh.next(h))), h);
            }
        }
    }

    #[test]
    fn test_boundary_cycle_is_clockwise() {
        let (mesh, [a, b, _, _], _) = square();
        let outer_ba = mesh
            .boundary_half_edges()
            .find(|&h| mesh.origin(h) == b)
            .unwrap();
        assert_eq!(mesh.destination(outer_ba), a);

        let mut h = outer_ba;
        let mut visited = vec![mesh.origin(h)];
        for _ in 0..3 {
            h = mesh.next(h);
            visited.push(mesh.origin(h));
        }
        assert_eq!(mesh.next(h), outer_ba);
        assert_eq!(
            visited,
            vec![VertexId(1), VertexId(0), VertexId(3), VertexId(2)]
        );
    }

    #[test]
    fn test_outgoing_rotates_ccw() {
        let (mesh, [a, b, c, d], _) = square();
        let around_a: Vec<VertexId> = mesh
            .outgoing(a)
            .into_iter()
            .map(|h| mesh.destination(h))
            .collect();
        assert_eq!(around_a, vec![b, c, d]);
        assert_eq!(mesh.outgoing(b).len(), 2);
    }

    #[test]
    fn test_face_points() {
        let (mesh, _, [lower, _]) = square();
        assert_eq!(
            mesh.face_points(lower),
            [Point2::new(0, 0), Point2::new(1, 0), Point2::new(1, 1)]
        );
    }

    #[test]
    fn test_retired_face_is_skipped() {
        let (mut mesh, _, [lower, upper]) = square();
        mesh.retire_face(lower);
        assert_eq!(mesh.faces().collect::<Vec<_>>(), vec![upper]);
        // Its edges still carry the retired label.
        assert_eq!(
            mesh.validate(),
            Err(MeshError::RetiredFaceReferenced { face: lower })
        );
    }

    #[test]
    #[should_panic(expected = "does not close")]
    fn test_link_triangle_rejects_open_cycle() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point2::new(0, 0));
        let b = mesh.add_vertex(Point2::new(1, 0));
        let c = mesh.add_vertex(Point2::new(0, 1));
        let (ab, _) = mesh.add_edge_pair(a, b);
        let (bc, _) = mesh.add_edge_pair(b, c);
        let (_, ac) = mesh.add_edge_pair(c, a);
        // a -> c does not lead back to a.
        mesh.link_triangle(ab, bc, ac);
    }

    #[test]
    #[should_panic(expected = "distinct vertices")]
    fn test_edge_pair_rejects_loop() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point2::new(0, 0));
        mesh.add_edge_pair(a, a);
    }

    #[test]
    fn test_validate_detects_unlinked_pair() {
        let (mut mesh, [a, _, c, _], _) = square();
        let (dangling, _) = mesh.add_edge_pair(a, c);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::BrokenChain { edge: dangling })
        );
    }

    #[test]
    fn test_validate_detects_twin_asymmetry() {
        let (mut mesh, _, _) = square();
        mesh.half_edges[0].twin = HalfEdgeId(4);
        assert_eq!(mesh.validate(), Err(MeshError::TwinAsymmetry(HalfEdgeId(0))));
    }

    #[test]
    fn test_validate_detects_bad_incident_edge() {
        let (mut mesh, [a, b, _, _], _) = square();
        let from_b = mesh.vertex(b).incident.unwrap();
        mesh.vertices[a.0].incident = Some(from_b);
        assert_eq!(mesh.validate(), Err(MeshError::BadIncidentEdge(a)));
    }

    #[test]
    fn test_error_messages() {
        let err = MeshError::NotTriangular { face: FaceId(3) };
        assert_eq!(err.to_string(), "face 3 does not close after three edges");
        let err = MeshError::TwinAsymmetry(HalfEdgeId(7));
        assert_eq!(err.to_string(), "half-edge 7 is not the twin of its twin");
    }
}
