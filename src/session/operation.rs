use std::fmt;

use tracing::debug;

use super::graph::with_graph;
use crate::{algo::*, prelude::*};

/// A single request against a graph, named after the actions a front end offers.
///
/// Mutations (`AddNode`, `DeleteNode`, `AddEdge`, `DeleteEdge`, `Clear`) are available on both
/// variants, as are the structural queries `IsEmpty`, `HasEdge` and `Neighbors`. The remaining
/// queries are bound to one variant, see [`Operation::supported_by`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    AddNode(NodeId),
    DeleteNode(NodeId),
    AddEdge(NodeId, NodeId),
    DeleteEdge(NodeId, NodeId),
    Clear,

    IsEmpty,
    HasEdge(NodeId, NodeId),
    Neighbors(NodeId),

    HasCycle,
    Bfs(NodeId),
    Dfs(NodeId),
    ConnectedComponents,

    Parents(NodeId),
    Children(NodeId),
    IsReachable(NodeId, NodeId),
    TopologicalSort,
    LongestPath,
    ShortestPath(NodeId, NodeId),
}

/// Result value of an [`Operation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation was applied to the returned graph
    Mutated,
    Flag(bool),
    Nodes(Vec<NodeId>),
    Components(Vec<Vec<NodeId>>),
}

impl Operation {
    /// Action name as shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddNode(_) => "addNode",
            Operation::DeleteNode(_) => "deleteNode",
            Operation::AddEdge(..) => "addEdge",
            Operation::DeleteEdge(..) => "deleteEdge",
            Operation::Clear => "clearGraph",
            Operation::IsEmpty => "isEmpty",
            Operation::HasEdge(..) => "hasEdge",
            Operation::Neighbors(_) => "getNeighbors",
            Operation::HasCycle => "hasCycle",
            Operation::Bfs(_) => "bfs",
            Operation::Dfs(_) => "dfs",
            Operation::ConnectedComponents => "connectedComponents",
            Operation::Parents(_) => "getParents",
            Operation::Children(_) => "getChildren",
            Operation::IsReachable(..) => "isReachable",
            Operation::TopologicalSort => "topologicalSort",
            Operation::LongestPath => "longestPath",
            Operation::ShortestPath(..) => "shortestPath",
        }
    }

    /// Returns *true* if the operation changes the graph when it succeeds
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Operation::AddNode(_)
                | Operation::DeleteNode(_)
                | Operation::AddEdge(..)
                | Operation::DeleteEdge(..)
                | Operation::Clear
        )
    }

    /// Returns *true* if the result of the operation is a node sequence a front end
    /// animates or highlights
    pub fn is_highlighting(&self) -> bool {
        matches!(
            self,
            Operation::Bfs(_)
                | Operation::Dfs(_)
                | Operation::TopologicalSort
                | Operation::LongestPath
                | Operation::ShortestPath(..)
        )
    }

    /// Returns *true* if the operation can be applied to graphs of the given kind
    pub fn supported_by(&self, kind: GraphKind) -> bool {
        match self {
            Operation::HasCycle
            | Operation::Bfs(_)
            | Operation::Dfs(_)
            | Operation::ConnectedComponents => kind == GraphKind::Undirected,
            Operation::Parents(_)
            | Operation::Children(_)
            | Operation::IsReachable(..)
            | Operation::TopologicalSort
            | Operation::LongestPath
            | Operation::ShortestPath(..) => kind == GraphKind::Dag,
            _ => true,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Operation::AddNode(u)
            | Operation::DeleteNode(u)
            | Operation::Neighbors(u)
            | Operation::Bfs(u)
            | Operation::Dfs(u)
            | Operation::Parents(u)
            | Operation::Children(u) => write!(f, "({u})"),
            Operation::AddEdge(u, v)
            | Operation::DeleteEdge(u, v)
            | Operation::HasEdge(u, v)
            | Operation::IsReachable(u, v)
            | Operation::ShortestPath(u, v) => write!(f, "({u}, {v})"),
            _ => Ok(()),
        }
    }
}

fn nodes<'a>(iter: impl IntoIterator<Item = &'a NodeId>) -> Outcome {
    Outcome::Nodes(iter.into_iter().cloned().collect())
}

/// Applies exactly one operation to a copy of `graph`.
///
/// On success the copy is returned together with the outcome; queries return an unchanged copy.
/// On failure the copy is dropped. `graph` itself is never modified, so a caller can always keep
/// it as the state before the operation.
///
/// # Examples
/// ```
/// use algographs::session::*;
///
/// let graph = Graph::new_dag();
/// let (graph, _) = apply(&graph, &Operation::AddNode("a".into())).unwrap();
/// let (graph, _) = apply(&graph, &Operation::AddNode("b".into())).unwrap();
/// let (graph, _) = apply(&graph, &Operation::AddEdge("a".into(), "b".into())).unwrap();
///
/// assert!(apply(&graph, &Operation::AddEdge("b".into(), "a".into())).is_err());
/// assert_eq!(
///     apply(&graph, &Operation::TopologicalSort).unwrap().1,
///     Outcome::Nodes(vec!["a".into(), "b".into()])
/// );
/// ```
pub fn apply(graph: &Graph, operation: &Operation) -> Result<(Graph, Outcome), GraphError> {
    if !operation.supported_by(graph.kind()) {
        let err = GraphError::UnsupportedOperation {
            operation: operation.name(),
            kind: graph.kind(),
        };
        debug!(%operation, %err, "operation rejected");
        return Err(err);
    }

    let mut next = graph.clone();
    let outcome = match common_operation(&mut next, operation)? {
        Some(outcome) => outcome,
        None => {
            let outcome = match &next {
                Graph::Undirected(g) => apply_undirected(g, operation)?,
                Graph::Dag(g) => apply_dag(g, operation)?,
            };
            outcome.ok_or(GraphError::UnsupportedOperation {
                operation: operation.name(),
                kind: next.kind(),
            })?
        }
    };

    Ok((next, outcome))
}

/// Operations shared by both variants. Returns `None` for variant-specific operations.
fn common_operation(graph: &mut Graph, operation: &Operation) -> Result<Option<Outcome>, GraphError> {
    with_graph!(graph, g => {
        let outcome = match operation {
            Operation::AddNode(u) => {
                g.add_node(u)?;
                Outcome::Mutated
            }
            Operation::DeleteNode(u) => {
                g.delete_node(u);
                Outcome::Mutated
            }
            Operation::AddEdge(u, v) => {
                g.add_edge(u, v)?;
                Outcome::Mutated
            }
            Operation::DeleteEdge(u, v) => {
                g.delete_edge(u, v);
                Outcome::Mutated
            }
            Operation::Clear => {
                g.clear();
                Outcome::Mutated
            }
            Operation::IsEmpty => Outcome::Flag(g.is_empty()),
            Operation::HasEdge(u, v) => Outcome::Flag(g.has_edge(u, v)),
            Operation::Neighbors(u) => nodes(g.neighbors_of(u)),
            _ => return Ok(None),
        };
        Ok(Some(outcome))
    })
}

fn apply_undirected(
    graph: &UndirectedGraph,
    operation: &Operation,
) -> Result<Option<Outcome>, GraphError> {
    Ok(Some(match operation {
        Operation::HasCycle => Outcome::Flag(graph.has_cycle()),
        Operation::Bfs(u) => nodes(graph.bfs(u)),
        Operation::Dfs(u) => nodes(graph.dfs(u)),
        Operation::ConnectedComponents => Outcome::Components(
            graph
                .connected_components()
                .map(|cc| cc.into_iter().cloned().collect())
                .collect(),
        ),
        _ => return Ok(None),
    }))
}

fn apply_dag(graph: &Dag, operation: &Operation) -> Result<Option<Outcome>, GraphError> {
    Ok(Some(match operation {
        Operation::Parents(u) => nodes(graph.parents_of(u)),
        Operation::Children(u) => nodes(graph.children_of(u)),
        Operation::IsReachable(u, v) => Outcome::Flag(graph.is_reachable(u, v)),
        Operation::TopologicalSort => Outcome::Nodes(graph.topological_sort()?),
        Operation::LongestPath => Outcome::Nodes(graph.longest_path()?),
        Operation::ShortestPath(u, v) => Outcome::Nodes(graph.shortest_path(u, v)),
        _ => return Ok(None),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(graph: &Graph, ops: &[Operation]) -> Graph {
        ops.iter().fold(graph.clone(), |g, op| apply(&g, op).unwrap().0)
    }

    fn add_nodes(ids: &[&str]) -> Vec<Operation> {
        ids.iter().map(|u| Operation::AddNode((*u).into())).collect()
    }

    fn edge(u: &str, v: &str) -> Operation {
        Operation::AddEdge(u.into(), v.into())
    }

    #[test]
    fn failed_operation_leaves_input_untouched() {
        let mut ops = add_nodes(&["A", "B", "C"]);
        ops.extend([edge("A", "B"), edge("B", "C")]);
        let graph = run(&Graph::new_dag(), &ops);
        let before = graph.clone();

        assert!(matches!(
            apply(&graph, &edge("C", "A")),
            Err(GraphError::CycleRejected { .. })
        ));
        assert_eq!(graph, before);
        assert_eq!(graph.number_of_edges(), 2);

        assert_eq!(
            apply(&graph, &edge("A", "missing")).unwrap_err(),
            GraphError::NodeNotFound {
                node: "missing".into()
            }
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn mutation_returns_new_graph_only() {
        let graph = run(&Graph::new_undirected(), &add_nodes(&["1", "2"]));
        let (next, outcome) = apply(&graph, &edge("1", "2")).unwrap();

        assert_eq!(outcome, Outcome::Mutated);
        assert!(next.has_edge("2", "1"));
        assert!(!graph.has_edge("1", "2"));
    }

    #[test]
    fn undirected_scenario() {
        let mut ops = add_nodes(&["1", "2", "3"]);
        ops.extend([edge("1", "2"), edge("2", "3")]);
        let graph = run(&Graph::new_undirected(), &ops);

        assert_eq!(
            apply(&graph, &Operation::HasCycle).unwrap().1,
            Outcome::Flag(false)
        );
        let graph = run(&graph, &[edge("1", "3")]);
        assert_eq!(
            apply(&graph, &Operation::HasCycle).unwrap().1,
            Outcome::Flag(true)
        );

        assert_eq!(
            apply(&graph, &Operation::Bfs("2".into())).unwrap().1,
            Outcome::Nodes(vec!["2".into(), "1".into(), "3".into()])
        );
        assert_eq!(
            apply(&graph, &Operation::Neighbors("1".into())).unwrap().1,
            Outcome::Nodes(vec!["2".into(), "3".into()])
        );
        assert_eq!(
            apply(&graph, &Operation::ConnectedComponents).unwrap().1,
            Outcome::Components(vec![vec!["1".into(), "2".into(), "3".into()]])
        );
    }

    #[test]
    fn dag_queries() {
        let mut ops = add_nodes(&["A", "B", "C", "D"]);
        ops.extend([edge("A", "B"), edge("A", "C"), edge("B", "D"), edge("C", "D")]);
        let graph = run(&Graph::new_dag(), &ops);

        let (_, topo) = apply(&graph, &Operation::TopologicalSort).unwrap();
        assert_eq!(
            topo,
            Outcome::Nodes(vec!["A".into(), "B".into(), "C".into(), "D".into()])
        );

        let Outcome::Nodes(path) = apply(&graph, &Operation::LongestPath).unwrap().1 else {
            panic!("longest path must yield nodes");
        };
        assert_eq!(path.len(), 3);

        assert_eq!(
            apply(&graph, &Operation::Parents("D".into())).unwrap().1,
            Outcome::Nodes(vec!["B".into(), "C".into()])
        );
        assert_eq!(
            apply(&graph, &Operation::IsReachable("D".into(), "A".into())).unwrap().1,
            Outcome::Flag(false)
        );
        assert_eq!(
            apply(&graph, &Operation::ShortestPath("A".into(), "D".into())).unwrap().1,
            Outcome::Nodes(vec!["A".into(), "B".into(), "D".into()])
        );
    }

    #[test]
    fn variant_specific_operations_are_refused() {
        let undirected = Graph::new_undirected();
        assert_eq!(
            apply(&undirected, &Operation::TopologicalSort).unwrap_err(),
            GraphError::UnsupportedOperation {
                operation: "topologicalSort",
                kind: GraphKind::Undirected
            }
        );

        let dag = Graph::new_dag();
        assert!(matches!(
            apply(&dag, &Operation::HasCycle),
            Err(GraphError::UnsupportedOperation { kind: GraphKind::Dag, .. })
        ));
        assert!(apply(&dag, &Operation::HasEdge("a".into(), "b".into())).is_ok());
    }

    #[test]
    fn empty_graph_queries() {
        let dag = Graph::new_dag();
        assert_eq!(apply(&dag, &Operation::IsEmpty).unwrap().1, Outcome::Flag(true));
        assert_eq!(
            apply(&dag, &Operation::TopologicalSort).unwrap().1,
            Outcome::Nodes(vec![])
        );
        assert_eq!(
            apply(&dag, &Operation::LongestPath).unwrap().1,
            Outcome::Nodes(vec![])
        );

        let undirected = Graph::new_undirected();
        assert_eq!(
            apply(&undirected, &Operation::Bfs("anything".into())).unwrap().1,
            Outcome::Nodes(vec![])
        );
        assert_eq!(
            apply(&undirected, &Operation::ConnectedComponents).unwrap().1,
            Outcome::Components(vec![])
        );
    }

    #[test]
    fn delete_and_clear() {
        let mut ops = add_nodes(&["a", "b"]);
        ops.push(edge("a", "b"));
        let graph = run(&Graph::new_undirected(), &ops);

        let deleted = run(&graph, &[Operation::DeleteNode("a".into())]);
        assert_eq!(deleted.number_of_nodes(), 1);
        assert_eq!(deleted.number_of_edges(), 0);
        deleted.check_consistency().unwrap();

        let no_op = run(&graph, &[Operation::DeleteEdge("a".into(), "zz".into())]);
        assert_eq!(no_op, graph);

        let cleared = run(&graph, &[Operation::Clear]);
        assert!(cleared.is_empty());
        assert_eq!(cleared.kind(), GraphKind::Undirected);
    }

    #[test]
    fn display() {
        assert_eq!(edge("a", "b").to_string(), "addEdge(a, b)");
        assert_eq!(Operation::Clear.to_string(), "clearGraph");
        assert!(Operation::Clear.is_mutation());
        assert!(Operation::Dfs("a".into()).is_highlighting());
    }
}
