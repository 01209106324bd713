//! Error types for trigon operations.

use crate::mesh::{FaceId, HalfEdgeId, VertexId};
use thiserror::Error;

/// Errors returned by fallible trigon operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrigonError {
    /// Fewer distinct points than the operation needs.
    #[error("not enough distinct points: need {required}, found {found}")]
    NotEnoughPoints {
        /// Minimum number of distinct points.
        required: usize,
        /// Number of distinct points supplied.
        found: usize,
    },

    /// All points are collinear, so there is no area to triangulate.
    #[error("degenerate input: all points are collinear")]
    DegenerateInput,

    /// A cyclic lookup was made outside the sequence.
    #[error("index {index} out of range for cyclic sequence of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Sequence length.
        len: usize,
    },
}

/// A violated half-edge mesh invariant, reported by [`Mesh::validate`](crate::mesh::Mesh::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("{0} is not the twin of its twin")]
    TwinAsymmetry(HalfEdgeId),

    #[error("{0} and its twin share the same origin")]
    TwinSameOrigin(HalfEdgeId),

    #[error("prev of next of {0} is not {0}")]
    NextPrevMismatch(HalfEdgeId),

    #[error("{edge} does not end where its next edge starts")]
    BrokenChain { edge: HalfEdgeId },

    #[error("{face} does not close after three edges")]
    NotTriangular { face: FaceId },

    #[error("{edge} is in the cycle of {face} but labelled with another face")]
    FaceMismatch { edge: HalfEdgeId, face: FaceId },

    #[error("a half-edge still refers to retired {face}")]
    RetiredFaceReferenced { face: FaceId },

    #[error("outer boundary cycle through {0} does not close")]
    OpenBoundary(HalfEdgeId),

    #[error("{0} has an incident edge that does not start at it")]
    BadIncidentEdge(VertexId),
}
