//! Error taxonomy shared by both graph variants, the dispatcher and the session

use thiserror::Error;

use crate::{NodeId, session::GraphKind};

/// All ways an operation on a graph can be refused.
///
/// Every variant except [`GraphError::InvariantViolation`] is a deterministic user error: the
/// operation was validated before anything was mutated, so the graph is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("self-edges are not allowed: '{node}'")]
    SelfLoopRejected { node: NodeId },

    #[error("edge '{from}' -> '{to}' already exists")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("edge '{from}' -> '{to}' would create a cycle")]
    CycleRejected { from: NodeId, to: NodeId },

    #[error("node '{node}' does not exist")]
    NodeNotFound { node: NodeId },

    #[error("'{operation}' requires a non-empty graph")]
    EmptyGraph { operation: &'static str },

    #[error("node identifiers must be non-empty")]
    InvalidNodeId,

    #[error("'{operation}' is not available on {kind} graphs")]
    UnsupportedOperation {
        operation: &'static str,
        kind: GraphKind,
    },

    #[error("there is no earlier graph to restore")]
    NothingToUndo,

    /// Internal defect: an invariant the graph maintains by construction does not hold.
    #[error("internal consistency violated: {details}")]
    InvariantViolation { details: String },
}

impl GraphError {
    /// Returns *true* for errors caused by a defect rather than by the request
    pub fn is_internal(&self) -> bool {
        matches!(self, GraphError::InvariantViolation { .. })
    }

    pub(crate) fn node_not_found(node: &str) -> Self {
        GraphError::NodeNotFound {
            node: NodeId::new(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_nodes() {
        let err = GraphError::CycleRejected {
            from: "C".into(),
            to: "A".into(),
        };
        assert_eq!(err.to_string(), "edge 'C' -> 'A' would create a cycle");

        let err = GraphError::UnsupportedOperation {
            operation: "topologicalSort",
            kind: GraphKind::Undirected,
        };
        assert_eq!(
            err.to_string(),
            "'topologicalSort' is not available on undirected graphs"
        );
        assert!(!err.is_internal());
    }
}
