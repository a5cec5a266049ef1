use tracing::debug;

use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// A simple undirected graph: no self-loops, no parallel edges.
///
/// Each logical edge `{u, v}` is stored as the two entries `(u,v)` and `(v,u)`, so
/// `has_edge(u, v) == has_edge(v, u)` holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndirectedGraph {
    base: BaseGraph,
}

impl_common_graph_ops!(UndirectedGraph => Undirected);

impl UndirectedGraph {
    fn detach_node(&mut self, u: &NodeId) {
        let neighbors = self.neighbors_of(u).to_vec();
        for v in neighbors {
            self.delete_edge(u, &v);
        }
    }
}

impl GraphEdgeOrder for UndirectedGraph {
    fn number_of_edges(&self) -> usize {
        self.base.number_of_arcs() / 2
    }
}

impl AdjacencyTest for UndirectedGraph {
    fn has_edge(&self, u: &str, v: &str) -> bool {
        self.base.contains_arc(u, v) || self.base.contains_arc(v, u)
    }
}

impl GraphEdgeEditing for UndirectedGraph {
    fn add_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        let rejected = |err: GraphError| {
            debug!(%u, %v, %err, "undirected edge rejected");
            Err(err)
        };

        let u = match self.base.resolve(u) {
            Ok(u) => u,
            Err(err) => return rejected(err),
        };
        let v = match self.base.resolve(v) {
            Ok(v) => v,
            Err(err) => return rejected(err),
        };
        if u == v {
            return rejected(GraphError::SelfLoopRejected { node: u });
        }
        if self.has_edge(&u, &v) {
            return rejected(GraphError::DuplicateEdge { from: u, to: v });
        }

        self.base.insert_arc(&u, &v);
        self.base.insert_arc(&v, &u);
        Ok(())
    }

    fn delete_edge(&mut self, u: &str, v: &str) -> bool {
        let forward = self.base.remove_arc(u, v);
        let backward = self.base.remove_arc(v, u);
        debug_assert_eq!(forward, backward);
        forward || backward
    }
}

crate::testing::test_graph_ops!(
    undirected_invariants,
    UndirectedGraph,
    true,
    (GraphNodeEditing, GraphEdgeEditing, Clone)
);
