/*!
# Directed Acyclic Graphs

[`Dag`] stores outgoing neighborhoods (`connections`) **and** incoming neighborhoods
(`in_edges`) for every node, so parents can be enumerated as cheaply as children.
The second view is what makes the cycle check on insertion affordable: an edge
`source -> target` is refused if `target` is already an ancestor of `source`.

The graph is acyclic at every observable state. Validation happens before any mutation,
so a refused edge leaves the graph untouched.
*/

use tracing::debug;

use crate::{algo::Cycles, repr::macros::impl_common_graph_ops};

use super::*;

/// A directed graph that refuses every edge insertion that would introduce a cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dag {
    base: BaseGraph,
}

impl_common_graph_ops!(Dag => Directed);

impl Dag {
    fn detach_node(&mut self, u: &NodeId) {
        let children = self.children_of(u).to_vec();
        for child in children {
            self.delete_edge(u, &child);
        }

        let parents = self.parents_of(u).to_vec();
        for parent in parents {
            self.delete_edge(&parent, u);
        }
    }
}

impl DirectedAdjacencyList for Dag {
    fn parents_of(&self, u: &str) -> &[NodeId] {
        self.base
            .record(u)
            .map_or(&[], |record| record.in_edges.as_slice())
    }
}

impl GraphEdgeOrder for Dag {
    fn number_of_edges(&self) -> usize {
        self.base.number_of_arcs()
    }
}

impl AdjacencyTest for Dag {
    fn has_edge(&self, u: &str, v: &str) -> bool {
        self.base.contains_arc(u, v)
    }
}

impl GraphEdgeEditing for Dag {
    fn add_edge(&mut self, source: &str, target: &str) -> Result<(), GraphError> {
        let rejected = |err: GraphError| {
            debug!(%source, %target, %err, "directed edge rejected");
            Err(err)
        };

        let from = match self.base.resolve(source) {
            Ok(id) => id,
            Err(err) => return rejected(err),
        };
        let to = match self.base.resolve(target) {
            Ok(id) => id,
            Err(err) => return rejected(err),
        };
        if from == to {
            return rejected(GraphError::SelfLoopRejected { node: from });
        }
        if self.has_edge(&from, &to) {
            return rejected(GraphError::DuplicateEdge { from, to });
        }
        if self.will_create_cycle(&from, &to) {
            return rejected(GraphError::CycleRejected { from, to });
        }

        self.base.insert_arc(&from, &to);
        self.base.insert_in_arc(&from, &to);
        Ok(())
    }

    fn delete_edge(&mut self, source: &str, target: &str) -> bool {
        if self.base.remove_arc(source, target) {
            self.base.remove_in_arc(source, target);
            true
        } else {
            false
        }
    }
}

crate::testing::test_graph_ops!(
    dag_invariants,
    Dag,
    false,
    (GraphNodeEditing, GraphEdgeEditing, Clone, Acyclic)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    fn abc_chain() -> Dag {
        Dag::from_edges(["A", "B", "C"], [("A", "B"), ("B", "C")]).unwrap()
    }

    #[test]
    fn closing_edge_is_rejected() {
        let mut dag = abc_chain();
        assert_eq!(
            dag.add_edge("C", "A"),
            Err(GraphError::CycleRejected {
                from: "C".into(),
                to: "A".into()
            })
        );
        assert_eq!(dag.number_of_edges(), 2);
        assert!(!dag.has_edge("C", "A"));
        assert!(dag.parents_of("A").is_empty());
        assert!(dag.children_of("C").is_empty());
        dag.base().check_consistency(false).unwrap();
    }

    #[test]
    fn two_cycle_is_rejected() {
        let mut dag = abc_chain();
        assert!(matches!(
            dag.add_edge("B", "A"),
            Err(GraphError::CycleRejected { .. })
        ));
    }

    #[test]
    fn shortcut_edges_are_accepted() {
        let mut dag = abc_chain();
        dag.add_edge("A", "C").unwrap();
        assert_eq!(dag.children_of("A"), ["B", "C"]);
        assert_eq!(dag.parents_of("C"), ["B", "A"]);
        assert_eq!(dag.number_of_edges(), 3);
    }

    #[test]
    fn directed_edges_are_not_symmetric() {
        let dag = abc_chain();
        assert!(dag.has_edge("A", "B"));
        assert!(!dag.has_edge("B", "A"));
        assert!(!dag.has_bidirected_edge("A", "B"));
        assert_eq!(dag.in_degree_of("B"), 1);
        assert_eq!(dag.out_degree_of("B"), 1);
    }

    #[test]
    fn validation_order() {
        let mut dag = abc_chain();
        assert_eq!(
            dag.add_edge("A", "A"),
            Err(GraphError::SelfLoopRejected { node: "A".into() })
        );
        assert_eq!(
            dag.add_edge("A", "B"),
            Err(GraphError::DuplicateEdge {
                from: "A".into(),
                to: "B".into()
            })
        );
        assert_eq!(
            dag.add_edge("X", "A"),
            Err(GraphError::NodeNotFound { node: "X".into() })
        );
    }

    #[test]
    fn delete_node_removes_in_and_out_edges() {
        let mut dag = abc_chain();
        assert!(dag.delete_node("B"));
        assert_eq!(dag.number_of_edges(), 0);
        assert!(dag.children_of("A").is_empty());
        assert!(dag.parents_of("C").is_empty());
        dag.base().check_consistency(false).unwrap();

        // edge that would have closed a cycle through B is fine now
        dag.add_edge("C", "A").unwrap();
    }

    #[test]
    fn delete_then_readd_restores_adjacency() {
        let mut dag = abc_chain();
        let before = dag.clone();
        assert!(dag.delete_edge("A", "B"));
        assert!(!dag.delete_edge("A", "B"));
        dag.add_edge("A", "B").unwrap();
        assert_eq!(dag.children_of("A"), before.children_of("A"));
        assert_eq!(dag.parents_of("B"), before.parents_of("B"));
    }

    #[test]
    fn accessors_on_missing_nodes() {
        let dag = abc_chain();
        assert!(dag.parents_of("Z").is_empty());
        assert!(dag.children_of("Z").is_empty());
        assert!(!dag.has_edge("Z", "A"));
    }

    #[test]
    fn clone_does_not_alias() {
        let original = abc_chain();
        let mut copy = original.clone();
        copy.delete_edge("A", "B");
        copy.add_edge("C", "A").unwrap();

        assert!(original.has_edge("A", "B"));
        assert!(!original.has_edge("C", "A"));
        assert_eq!(original.parents_of("A").len(), 0);
        assert!(original.is_acyclic());
    }
}
