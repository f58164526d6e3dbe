//! Errors for shape construction and the optional geometric check.

use thiserror::Error;

/// Reasons a vertex/edge list cannot form (or does not geometrically form) a shape.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("need at least {needed} vertices, got {got}")]
    TooFewVertices { needed: usize, got: usize },
    #[error("need at least {needed} edges, got {got}")]
    TooFewEdges { needed: usize, got: usize },
    #[error("expected exactly {expected} vertices, got {got}")]
    WrongVertexCount { expected: usize, got: usize },
    #[error("expected exactly {expected} edges, got {got}")]
    WrongEdgeCount { expected: usize, got: usize },
    #[error("edge {index} does not join vertex {index} to the next vertex")]
    DisconnectedEdge { index: usize },
    #[error("shape has zero area")]
    Degenerate,
    #[error("corner at vertex {index} is not a right angle")]
    NotRightAngle { index: usize },
}
