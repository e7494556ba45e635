//! Errors reported by graph operations.
use std::fmt::Debug;
use thiserror::Error;

/// What kind of element an [GraphError::UnknownElement] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Vertex => write!(f, "vertex"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

/// Errors that can occur during graph operations.
///
/// Every mutation validates its arguments before touching any store,
/// so a returned error means the graph is unchanged.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no such {kind} in graph: {element}")]
    UnknownElement { kind: ElementKind, element: String },

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("edge {edge} is already attached to ({tail}, {head})")]
    EdgeAlreadyAttached {
        edge: String,
        tail: String,
        head: String,
    },

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub fn unknown_vertex<V: Debug>(v: &V) -> Self {
        GraphError::UnknownElement {
            kind: ElementKind::Vertex,
            element: format!("{:?}", v),
        }
    }

    pub fn unknown_edge<E: Debug>(e: &E) -> Self {
        GraphError::UnknownElement {
            kind: ElementKind::Edge,
            element: format!("{:?}", e),
        }
    }

    pub fn already_attached<E: Debug, V: Debug>(e: &E, source: &V, target: &V) -> Self {
        GraphError::EdgeAlreadyAttached {
            edge: format!("{:?}", e),
            tail: format!("{:?}", source),
            head: format!("{:?}", target),
        }
    }

    pub(crate) fn unmodifiable() -> Self {
        GraphError::Unsupported("the graph is not modifiable".to_string())
    }

    pub(crate) fn unweighted() -> Self {
        GraphError::Unsupported("the graph is not weighted".to_string())
    }
}
