//! Mesh surgery for point insertion: face splits, edge splits and Lawson flips.
//!
//! Every operation retires the faces it replaces, links the new faces in the
//! same step and records the replacement in the point-location DAG. Existing
//! half-edges are reused by moving their origins, so half-edges are never
//! removed from the mesh.

use super::{DelaunayConfig, Location, Triangulation};
use crate::mesh::{FaceId, HalfEdgeId, VertexId};
use crate::predicates::{in_circumcircle, orientation};
use crate::primitives::{Point2, Scalar};
use num_traits::Zero;

impl<T: Scalar> Triangulation<T> {
    /// Inserts `p`, which must lie inside the hull, and restores the Delaunay
    /// property around it if `config.legalize` is set.
    ///
    /// Returns `None` if `p` coincides with an existing vertex.
    pub(super) fn insert(&mut self, p: Point2<T>, config: &DelaunayConfig) -> Option<VertexId> {
        let face = self.dag.locate(p);
        let (vertex, opposite) = match self.classify(face, p) {
            Location::Vertex(_) => return None,
            Location::Inside(face) => self.split_face(face, p),
            Location::OnEdge(edge) => self.split_edge(edge, p),
        };
        log::trace!("inserted {:?} as {}", p, vertex);

        if config.legalize {
            self.legalize(opposite);
        }
        Some(vertex)
    }

    /// Splits `face` into three triangles meeting at `p`, which must lie
    /// strictly inside it. Returns the new vertex and the edges opposite it.
    fn split_face(&mut self, face: FaceId, p: Point2<T>) -> (VertexId, Vec<HalfEdgeId>) {
        let [e0, e1, e2] = self.mesh.face_half_edges(face);
        let [a, b, c] = self.mesh.face_vertices(face);

        let v = self.mesh.add_vertex(p);
        let (pa, ap) = self.mesh.add_edge_pair(v, a);
        let (pb, bp) = self.mesh.add_edge_pair(v, b);
        let (pc, cp) = self.mesh.add_edge_pair(v, c);

        self.mesh.retire_face(face);
        let created = [
            self.mesh.link_triangle(e0, bp, pa),
            self.mesh.link_triangle(e1, cp, pb),
            self.mesh.link_triangle(e2, ap, pc),
        ];
        self.refine(&[face], &created);

        (v, vec![e0, e1, e2])
    }

    /// Splits the edge of `edge` at `p`, which must lie strictly between its
    /// endpoints.
    ///
    /// `edge` keeps its origin and now ends at `p`; its twin is moved to start
    /// at `p`. Each side with a face becomes two triangles. If the twin lies
    /// on the outer boundary, the boundary cycle gains the half-edge from the
    /// far endpoint to `p` instead.
    fn split_edge(&mut self, edge: HalfEdgeId, p: Point2<T>) -> (VertexId, Vec<HalfEdgeId>) {
        let twin = self.mesh.twin(edge);
        let near = match self.mesh.face_of(edge) {
            Some(face) => face,
            None => panic!("{} to split has no face", edge),
        };
        let far = self.mesh.face_of(twin);

        let (en, ep) = (self.mesh.next(edge), self.mesh.prev(edge));
        let (tn, tp) = (self.mesh.next(twin), self.mesh.prev(twin));
        let b = self.mesh.origin(twin);
        let c = self.mesh.origin(ep);

        let v = self.mesh.add_vertex(p);
        self.mesh.set_origin(twin, v);
        let (pb, bp) = self.mesh.add_edge_pair(v, b);
        let (pc, cp) = self.mesh.add_edge_pair(v, c);
        // The twin used to leave b.
        self.mesh.set_incident(b, bp);

        self.mesh.retire_face(near);
        let near_split = [
            self.mesh.link_triangle(edge, pc, ep),
            self.mesh.link_triangle(pb, en, cp),
        ];
        self.refine(&[near], &near_split);

        let mut opposite = vec![en, ep];
        match far {
            Some(far) => {
                let d = self.mesh.origin(tp);
                let (pd, dp) = self.mesh.add_edge_pair(v, d);

                self.mesh.retire_face(far);
                let far_split = [
                    self.mesh.link_triangle(twin, tn, dp),
                    self.mesh.link_triangle(bp, pd, tp),
                ];
                self.refine(&[far], &far_split);
                opposite.extend([tn, tp]);
            }
            None => {
                self.mesh.link_boundary(tp, bp);
                self.mesh.link_boundary(bp, twin);
            }
        }

        (v, opposite)
    }

    /// Flips edges until none of those reachable from `pending` violates the
    /// empty-circumcircle criterion.
    pub(super) fn legalize(&mut self, mut pending: Vec<HalfEdgeId>) {
        while let Some(edge) = pending.pop() {
            if let Some(quad) = self.flip_if_illegal(edge) {
                pending.extend(quad);
            }
        }
    }

    /// Replaces the diagonal `a-b` of the quadrilateral `a, d, b, p` by `p-d`
    /// if `d` lies strictly inside the circumcircle of `a, b, p`.
    ///
    /// Boundary edges, cocircular ties and flips that would produce a
    /// degenerate triangle are left alone. Returns the quadrilateral's four
    /// sides when a flip happened.
    fn flip_if_illegal(&mut self, edge: HalfEdgeId) -> Option<[HalfEdgeId; 4]> {
        let twin = self.mesh.twin(edge);
        let near = self.mesh.face_of(edge)?;
        let far = self.mesh.face_of(twin)?;

        let (en, ep) = (self.mesh.next(edge), self.mesh.prev(edge));
        let (tn, tp) = (self.mesh.next(twin), self.mesh.prev(twin));
        let a = self.mesh.origin(edge);
        let b = self.mesh.origin(twin);
        let p = self.mesh.origin(ep);
        let d = self.mesh.origin(tp);

        let [pa, pb, pp, pd] = [a, b, p, d].map(|v| self.mesh.point(v));
        if !in_circumcircle(pd, pa, pb, pp) {
            return None;
        }
        if orientation(pp, pd, pb) <= T::Wide::zero() || orientation(pd, pp, pa) <= T::Wide::zero() {
            return None;
        }

        self.mesh.set_origin(edge, p);
        self.mesh.set_origin(twin, d);
        self.mesh.set_incident(a, tn);
        self.mesh.set_incident(b, en);

        self.mesh.retire_face(near);
        self.mesh.retire_face(far);
        let created = [
            self.mesh.link_triangle(edge, tp, en),
            self.mesh.link_triangle(twin, ep, tn),
        ];
        self.refine(&[near, far], &created);

        self.flips += 1;
        log::trace!("flipped edge {}-{} to {}-{}", a.0, b.0, p.0, d.0);
        Some([en, ep, tn, tp])
    }

    fn refine(&mut self, replaced: &[FaceId], created: &[FaceId]) {
        let children: Vec<(FaceId, [Point2<T>; 3])> = created
            .iter()
            .map(|&face| (face, self.mesh.face_points(face)))
            .collect();
        self.dag.refine(replaced, &children);
    }
}
