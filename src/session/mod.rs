/*!
# Sessions

A [`Session`] owns the live graph of one interactive user. Every request is routed through
[`apply`], which works on a copy: the live graph is replaced only if the operation succeeded,
so it is never observed half-mutated and a failed request has no visible effect.

Because copies never share mutable state with the graph they were taken from, the graphs
replaced by successful mutations are kept as an undo history.

```
use algographs::session::*;

let mut session = Session::new(GraphKind::Undirected);
session.apply(Operation::AddNode("1".into())).unwrap();
session.apply(Operation::AddNode("2".into())).unwrap();
session.apply(Operation::AddEdge("1".into(), "2".into())).unwrap();

assert!(session.apply(Operation::AddEdge("2".into(), "1".into())).is_err());
assert_eq!(session.graph().number_of_edges(), 1);

session.undo().unwrap();
assert_eq!(session.graph().number_of_edges(), 0);
```
*/

mod config;
mod graph;
mod operation;

use std::{collections::VecDeque, io::Write, mem};

use tracing::{debug, error, trace};

use crate::{NodeId, error::GraphError, io::DotWriter};

pub use config::*;
pub use graph::*;
pub use operation::*;

/// The live graph of a user together with its undo history and the current highlight
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    graph: Graph,
    history: VecDeque<Graph>,
    highlight: Vec<NodeId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl Session {
    /// Starts a session on an empty graph of the given kind with default settings
    pub fn new(kind: GraphKind) -> Self {
        Self::with_config(kind, SessionConfig::default())
    }

    pub fn with_config(kind: GraphKind, config: SessionConfig) -> Self {
        Self {
            config,
            graph: Graph::new(kind),
            history: VecDeque::new(),
            highlight: Vec::new(),
        }
    }

    /// The live graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn kind(&self) -> GraphKind {
        self.graph.kind()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Nodes produced by the latest traversal or path query. Cleared by every mutation.
    pub fn highlight(&self) -> &[NodeId] {
        &self.highlight
    }

    /// Number of graphs that [`Session::undo`] can restore
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Applies `operation` and commits the resulting graph if it succeeds.
    ///
    /// Mutations push the replaced graph onto the undo history (unless the structure did not
    /// change and no-op recording is disabled) and clear the highlight. Traversal and path
    /// queries store their result as the new highlight. On error nothing changes.
    pub fn apply(&mut self, operation: Operation) -> Result<Outcome, GraphError> {
        let (mut next, outcome) = match apply(&self.graph, &operation) {
            Ok(result) => result,
            Err(err) => {
                if err.is_internal() {
                    error!(%operation, %err, "operation hit an internal defect");
                } else {
                    debug!(%operation, %err, "operation failed");
                }
                return Err(err);
            }
        };

        if !operation.is_mutation() {
            if operation.is_highlighting() {
                if let Outcome::Nodes(nodes) = &outcome {
                    self.highlight = nodes.clone();
                }
            }
            debug!(%operation, "query answered");
            return Ok(outcome);
        }

        if let Operation::AddNode(u) = &operation {
            if !self.graph.has_node(u) {
                if let Some(attributes) = next.attributes_mut(u) {
                    attributes.color = self.config.get_default_color().to_string();
                }
            }
        }

        let changed = next.digest_sha256() != self.graph.digest_sha256();
        let previous = mem::replace(&mut self.graph, next);
        if changed || self.config.get_record_noop_mutations() {
            self.push_history(previous);
        }
        self.highlight.clear();

        debug!(
            %operation,
            changed,
            nodes = self.graph.number_of_nodes(),
            edges = self.graph.number_of_edges(),
            "operation committed"
        );
        Ok(outcome)
    }

    /// Restores the graph that was live before the latest recorded mutation
    pub fn undo(&mut self) -> Result<(), GraphError> {
        let previous = self.history.pop_back().ok_or(GraphError::NothingToUndo)?;
        self.graph = previous;
        self.highlight.clear();

        debug!(
            kind = %self.graph.kind(),
            remaining = self.history.len(),
            "undo"
        );
        Ok(())
    }

    /// Replaces the live graph with an empty graph of `kind`.
    /// The replaced graph can be restored with [`Session::undo`].
    pub fn select_kind(&mut self, kind: GraphKind) {
        let previous = mem::replace(&mut self.graph, Graph::new(kind));
        self.push_history(previous);
        self.highlight.clear();
        debug!(%kind, "graph kind selected");
    }

    /// Writes the live graph in the DOT language with the current highlight filled
    pub fn write_dot<W: Write>(&self, writer: &DotWriter, out: W) -> std::io::Result<()> {
        self.graph.write_dot(writer, &self.highlight, out)
    }

    fn push_history(&mut self, graph: Graph) {
        let limit = self.config.get_history_limit();
        if limit == 0 {
            return;
        }

        self.history.push_back(graph);
        while self.history.len() > limit {
            self.history.pop_front();
            trace!(limit, "dropped oldest undo entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(session: &mut Session, ids: &[&str]) {
        for u in ids {
            session.apply(Operation::AddNode((*u).into())).unwrap();
        }
    }

    fn edge(u: &str, v: &str) -> Operation {
        Operation::AddEdge(u.into(), v.into())
    }

    #[test]
    fn rejected_mutation_has_no_effect() {
        let mut session = Session::new(GraphKind::Dag);
        add(&mut session, &["A", "B", "C"]);
        session.apply(edge("A", "B")).unwrap();
        session.apply(edge("B", "C")).unwrap();
        session.apply(Operation::TopologicalSort).unwrap();

        let graph = session.graph().clone();
        let history = session.history_len();
        let highlight = session.highlight().to_vec();

        assert!(matches!(
            session.apply(edge("C", "A")),
            Err(GraphError::CycleRejected { .. })
        ));
        assert_eq!(session.graph(), &graph);
        assert_eq!(session.graph().number_of_edges(), 2);
        assert_eq!(session.history_len(), history);
        assert_eq!(session.highlight(), highlight.as_slice());
    }

    #[test]
    fn undo_restores_previous_graph() {
        let mut session = Session::new(GraphKind::Undirected);
        add(&mut session, &["1", "2", "3"]);
        session.apply(edge("1", "2")).unwrap();
        let before = session.graph().clone();

        session.apply(Operation::DeleteNode("2".into())).unwrap();
        assert_eq!(session.graph().number_of_edges(), 0);

        session.undo().unwrap();
        assert_eq!(session.graph(), &before);
        assert!(session.graph().has_edge("2", "1"));

        while session.can_undo() {
            session.undo().unwrap();
        }
        assert!(session.graph().is_empty());
        assert_eq!(session.undo(), Err(GraphError::NothingToUndo));
    }

    #[test]
    fn highlight_follows_traversals() {
        let mut session = Session::new(GraphKind::Undirected);
        add(&mut session, &["a", "b", "c"]);
        session.apply(edge("a", "b")).unwrap();

        session.apply(Operation::Bfs("a".into())).unwrap();
        assert_eq!(session.highlight(), ["a", "b"]);

        // non-traversal queries keep the highlight
        session.apply(Operation::HasCycle).unwrap();
        assert_eq!(session.highlight().len(), 2);

        session.apply(edge("b", "c")).unwrap();
        assert!(session.highlight().is_empty());

        session.apply(Operation::Dfs("missing".into())).unwrap();
        assert!(session.highlight().is_empty());
    }

    #[test]
    fn queries_do_not_touch_history() {
        let mut session = Session::new(GraphKind::Dag);
        add(&mut session, &["x", "y"]);
        let history = session.history_len();

        session.apply(Operation::IsEmpty).unwrap();
        session.apply(Operation::LongestPath).unwrap();
        assert_eq!(session.history_len(), history);
    }

    #[test]
    fn noop_mutations() {
        let mut session = Session::new(GraphKind::Undirected);
        add(&mut session, &["a"]);
        assert_eq!(session.history_len(), 1);

        session.apply(Operation::AddNode("a".into())).unwrap();
        session.apply(Operation::DeleteEdge("a".into(), "b".into())).unwrap();
        assert_eq!(session.history_len(), 1);

        let mut recording = Session::with_config(
            GraphKind::Undirected,
            SessionConfig::default().record_noop_mutations(true),
        );
        add(&mut recording, &["a", "a"]);
        assert_eq!(recording.history_len(), 2);
    }

    #[test]
    fn history_is_bounded() {
        let mut session =
            Session::with_config(GraphKind::Dag, SessionConfig::default().history_limit(2));
        add(&mut session, &["1", "2", "3", "4"]);
        assert_eq!(session.history_len(), 2);

        session.undo().unwrap();
        session.undo().unwrap();
        assert_eq!(session.graph().number_of_nodes(), 2);
        assert!(!session.can_undo());

        let mut disabled =
            Session::with_config(GraphKind::Dag, SessionConfig::default().history_limit(0));
        add(&mut disabled, &["1"]);
        assert_eq!(disabled.undo(), Err(GraphError::NothingToUndo));
    }

    #[test]
    fn new_nodes_get_configured_color() {
        let mut session = Session::with_config(
            GraphKind::Undirected,
            SessionConfig::default().default_color("#FF0000"),
        );
        add(&mut session, &["a"]);
        assert_eq!(session.graph().node("a").unwrap().attributes().color, "#FF0000");
    }

    #[test]
    fn select_kind_replaces_graph() {
        let mut session = Session::default();
        add(&mut session, &["a"]);

        session.select_kind(GraphKind::Dag);
        assert_eq!(session.kind(), GraphKind::Dag);
        assert!(session.graph().is_empty());
        assert!(session.apply(Operation::TopologicalSort).is_ok());

        session.undo().unwrap();
        assert_eq!(session.kind(), GraphKind::Undirected);
        assert!(session.graph().has_node("a"));
    }

    #[test]
    fn dot_export_marks_highlight() {
        let mut session = Session::new(GraphKind::Dag);
        add(&mut session, &["a", "b"]);
        session.apply(edge("a", "b")).unwrap();
        session.apply(Operation::ShortestPath("a".into(), "b".into())).unwrap();

        let mut out = Vec::new();
        session.write_dot(&DotWriter::default(), &mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("\"a\"->\"b\";"));
        assert!(dot.contains("\"b\"[style=filled, fillcolor=orange]"));
    }
}
