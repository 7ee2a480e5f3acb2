//! Error types for graph operations.
//!
//! Every fallible operation on a graph returns [`GraphError`] synchronously at the point of the
//! offending call. All variants describe bad input (a programming error on the caller side) rather
//! than transient conditions, so there is nothing to retry.

use std::fmt::{self, Debug};

use thiserror::Error;

/// Stable machine-readable code of a [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// See [`GraphError::UnknownVertex`].
    UnknownVertex,
    /// See [`GraphError::InvalidEdge`].
    InvalidEdge,
    /// See [`GraphError::InvalidParameter`].
    InvalidParameter,
    /// See [`GraphError::Disconnected`].
    Disconnected,
}

impl GraphErrorCode {
    /// Returns the stable string representation of this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownVertex => "GRAPH_UNKNOWN_VERTEX",
            Self::InvalidEdge => "GRAPH_INVALID_EDGE",
            Self::InvalidParameter => "GRAPH_INVALID_PARAMETER",
            Self::Disconnected => "GRAPH_DISCONNECTED",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by graph operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The operation referenced a vertex that is not part of the graph.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex {
        /// Debug-representation of the offending vertex.
        vertex: String,
    },
    /// The edge cannot be part of a simple undirected graph.
    #[error("invalid edge: {reason}")]
    InvalidEdge {
        /// Why the edge was rejected.
        reason: String,
    },
    /// A generator or statistic was called with a parameter outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Full connectivity was required but some vertex pairs are unreachable.
    #[error("graph is disconnected: {unreachable_pairs} ordered vertex pairs are unreachable")]
    Disconnected {
        /// Number of ordered pairs `(s, t)` without a path from `s` to `t`.
        unreachable_pairs: usize,
    },
}

impl GraphError {
    /// Returns the stable [`GraphErrorCode`] for this error.
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::InvalidEdge { .. } => GraphErrorCode::InvalidEdge,
            Self::InvalidParameter { .. } => GraphErrorCode::InvalidParameter,
            Self::Disconnected { .. } => GraphErrorCode::Disconnected,
        }
    }

    pub(crate) fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        Self::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn self_loop<V: Debug>(vertex: &V) -> Self {
        Self::InvalidEdge {
            reason: format!("self-loop at vertex {vertex:?}"),
        }
    }

    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            GraphError::unknown_vertex(&3u32).code().as_str(),
            "GRAPH_UNKNOWN_VERTEX"
        );
        assert_eq!(
            GraphError::self_loop(&"a").code(),
            GraphErrorCode::InvalidEdge
        );
        assert_eq!(
            GraphError::Disconnected {
                unreachable_pairs: 2
            }
            .code()
            .to_string(),
            "GRAPH_DISCONNECTED"
        );
    }

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            GraphError::unknown_vertex(&"x").to_string(),
            "vertex \"x\" is not part of the graph"
        );
        assert_eq!(
            GraphError::invalid_parameter("k", "must be at least 1").to_string(),
            "invalid parameter `k`: must be at least 1"
        );
    }
}
