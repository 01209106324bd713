//! Point-location DAG over the history of triangle splits and flips.

use crate::mesh::FaceId;
use crate::predicates::orientation;
use crate::primitives::{Point2, Scalar};
use num_traits::Zero;
use std::collections::HashMap;

/// Index of a node in a [`PointLocation`] structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Whether a node still stands for a live face or has been refined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal node for a live mesh face.
    Leaf(FaceId),
    /// Refined node; its children cover its triangle.
    Internal(Vec<NodeId>),
}

/// A DAG node.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// CCW corners of the region, `None` for the root (which covers the hull).
    pub triangle: Option<[Point2<T>; 3]>,
    pub kind: NodeKind,
}

/// Search structure mapping points to the live face containing them.
///
/// Every split or flip turns the leaves of the replaced faces into internal
/// nodes pointing at the new faces. Nodes are never removed, so a query
/// descends through the full refinement history, O(log n) steps in expectation
/// for random insertion order.
#[derive(Debug, Clone)]
pub struct PointLocation<T> {
    nodes: Vec<Node<T>>,
    leaf_of: HashMap<FaceId, NodeId>,
}

const ROOT: NodeId = NodeId(0);

impl<T: Scalar> Default for PointLocation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> PointLocation<T> {
    /// Creates a structure holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                triangle: None,
                kind: NodeKind::Internal(Vec::new()),
            }],
            leaf_of: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The leaf standing for `face`, if the face is live.
    pub fn leaf_for(&self, face: FaceId) -> Option<NodeId> {
        self.leaf_of.get(&face).copied()
    }

    /// All leaves with their faces, in creation order.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, FaceId)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| match node.kind {
                NodeKind::Leaf(face) => Some((NodeId(i), face)),
                NodeKind::Internal(_) => None,
            })
    }

    /// Registers a seed triangle directly under the root.
    pub(crate) fn add_seed(&mut self, face: FaceId, triangle: [Point2<T>; 3]) -> NodeId {
        let id = self.push_leaf(face, triangle);
        if let NodeKind::Internal(children) = &mut self.nodes[ROOT.0].kind {
            children.push(id);
        }
        id
    }

    /// Turns the leaves of `replaced` into internal nodes whose children are
    /// new leaves for `created`.
    ///
    /// # Panics
    ///
    /// If a replaced face has no leaf.
    pub(crate) fn refine(&mut self, replaced: &[FaceId], created: &[(FaceId, [Point2<T>; 3])]) {
        let parents: Vec<NodeId> = replaced
            .iter()
            .map(|face| match self.leaf_of.remove(face) {
                Some(node) => node,
                None => panic!("{} has no point-location leaf", face),
            })
            .collect();

        let children: Vec<NodeId> = created
            .iter()
            .map(|&(face, triangle)| self.push_leaf(face, triangle))
            .collect();

        for parent in parents {
            self.nodes[parent.0].kind = NodeKind::Internal(children.clone());
        }
    }

    /// Descends from the root to the leaf whose closed triangle contains `p`.
    ///
    /// At every internal node the first child containing `p` is taken, so a
    /// point on a shared edge resolves to whichever neighbour was created
    /// first.
    ///
    /// # Panics
    ///
    /// If an internal node has no child containing `p`. For points inside
    /// the triangulated hull that means the structure is corrupt.
    pub fn locate(&self, p: Point2<T>) -> FaceId {
        let mut id = ROOT;
        loop {
            match &self.nodes[id.0].kind {
                NodeKind::Leaf(face) => return *face,
                NodeKind::Internal(children) => {
                    id = match children.iter().copied().find(|&c| self.covers(c, p)) {
                        Some(child) => child,
                        None => panic!("no triangle below node {} covers {:?}", id.0, p),
                    };
                }
            }
        }
    }

    fn covers(&self, id: NodeId, p: Point2<T>) -> bool {
        match &self.nodes[id.0].triangle {
            Some(triangle) => triangle_contains(triangle, p),
            None => true,
        }
    }

    fn push_leaf(&mut self, face: FaceId, triangle: [Point2<T>; 3]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            triangle: Some(triangle),
            kind: NodeKind::Leaf(face),
        });
        self.leaf_of.insert(face, id);
        id
    }
}

/// Closed containment test against a CCW triangle.
#[inline]
pub(crate) fn triangle_contains<T: Scalar>(triangle: &[Point2<T>; 3], p: Point2<T>) -> bool {
    let [a, b, c] = *triangle;
    orientation(a, b, p) >= T::Wide::zero()
        && orientation(b, c, p) >= T::Wide::zero()
        && orientation(c, a, p) >= T::Wide::zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2<i64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_triangle_contains_is_closed() {
        let tri = [p(0, 0), p(4, 0), p(0, 4)];
        assert!(triangle_contains(&tri, p(1, 1)));
        assert!(triangle_contains(&tri, p(2, 0)));
        assert!(triangle_contains(&tri, p(2, 2)));
        assert!(triangle_contains(&tri, p(0, 0)));
        assert!(!triangle_contains(&tri, p(3, 3)));
        // On the line through an edge but outside the triangle.
        assert!(!triangle_contains(&tri, p(6, 0)));
    }

    #[test]
    fn test_seed_and_refine() {
        let mut dag = PointLocation::new();
        assert_eq!(dag.node_count(), 1);
        let left = dag.add_seed(FaceId(0), [p(0, 0), p(4, 4), p(0, 4)]);
        let right = dag.add_seed(FaceId(1), [p(0, 0), p(4, 0), p(4, 4)]);
        assert_eq!(dag.locate(p(1, 3)), FaceId(0));
        assert_eq!(dag.locate(p(3, 1)), FaceId(1));

        // Split the right triangle at (3, 1).
        dag.refine(
            &[FaceId(1)],
            &[
                (FaceId(2), [p(0, 0), p(4, 0), p(3, 1)]),
                (FaceId(3), [p(4, 0), p(4, 4), p(3, 1)]),
                (FaceId(4), [p(4, 4), p(0, 0), p(3, 1)]),
            ],
        );

        assert_eq!(dag.node(right).kind, NodeKind::Internal(vec![NodeId(3), NodeId(4), NodeId(5)]));
        assert_eq!(dag.node(left).kind, NodeKind::Leaf(FaceId(0)));
        assert_eq!(dag.leaf_for(FaceId(1)), None);
        assert_eq!(dag.leaf_for(FaceId(3)), Some(NodeId(4)));

        assert_eq!(dag.locate(p(2, 0)), FaceId(2));
        assert_eq!(dag.locate(p(4, 2)), FaceId(3));
        assert_eq!(dag.locate(p(2, 1)), FaceId(4));
        assert_eq!(dag.leaves().count(), 4);
        assert_eq!(dag.node_count(), 6);
    }

    #[test]
    fn test_flip_shares_children() {
        let mut dag = PointLocation::new();
        dag.add_seed(FaceId(0), [p(0, 0), p(4, 0), p(4, 4)]);
        dag.add_seed(FaceId(1), [p(0, 0), p(4, 4), p(0, 4)]);
        dag.refine(
            &[FaceId(0), FaceId(1)],
            &[
                (FaceId(2), [p(4, 0), p(0, 4), p(0, 0)]),
                (FaceId(3), [p(0, 4), p(4, 0), p(4, 4)]),
            ],
        );

        let expected = NodeKind::Internal(vec![NodeId(3), NodeId(4)]);
        assert_eq!(dag.node(NodeId(1)).kind, expected);
        assert_eq!(dag.node(NodeId(2)).kind, expected);
        assert_eq!(dag.locate(p(1, 1)), FaceId(2));
        assert_eq!(dag.locate(p(3, 3)), FaceId(3));
    }

    #[test]
    #[should_panic(expected = "no triangle")]
    fn test_locate_outside_panics() {
        let mut dag = PointLocation::new();
        dag.add_seed(FaceId(0), [p(0, 0), p(4, 0), p(0, 4)]);
        dag.locate(p(5, 5));
    }
}
