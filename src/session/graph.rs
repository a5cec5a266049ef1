use std::{fmt, io::Write};

use crate::{io::*, prelude::*, repr::digest::GraphDigest};

/// Selects which graph variant a session works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphKind {
    #[default]
    Undirected,
    Dag,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Dag => write!(f, "dag"),
        }
    }
}

/// A graph of either variant, as handed around by the dispatcher.
///
/// Only the operations common to both variants are exposed directly; variant-specific
/// queries go through [`crate::session::apply`] or the typed accessors
/// [`Graph::as_undirected`] and [`Graph::as_dag`].
#[derive(Debug, Clone, PartialEq)]
pub enum Graph {
    Undirected(UndirectedGraph),
    Dag(Dag),
}

/// Evaluates `$body` with `$g` bound to the inner graph of either variant
macro_rules! with_graph {
    ($graph:expr, $g:ident => $body:expr) => {
        match $graph {
            Graph::Undirected($g) => $body,
            Graph::Dag($g) => $body,
        }
    };
}

pub(crate) use with_graph;

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl Graph {
    /// Creates an empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        match kind {
            GraphKind::Undirected => Self::new_undirected(),
            GraphKind::Dag => Self::new_dag(),
        }
    }

    /// Creates an empty undirected graph
    pub fn new_undirected() -> Self {
        Graph::Undirected(UndirectedGraph::new())
    }

    /// Creates an empty directed acyclic graph
    pub fn new_dag() -> Self {
        Graph::Dag(Dag::new())
    }

    pub fn kind(&self) -> GraphKind {
        match self {
            Graph::Undirected(_) => GraphKind::Undirected,
            Graph::Dag(_) => GraphKind::Dag,
        }
    }

    pub fn as_undirected(&self) -> Option<&UndirectedGraph> {
        match self {
            Graph::Undirected(g) => Some(g),
            Graph::Dag(_) => None,
        }
    }

    pub fn as_dag(&self) -> Option<&Dag> {
        match self {
            Graph::Dag(g) => Some(g),
            Graph::Undirected(_) => None,
        }
    }

    pub fn number_of_nodes(&self) -> usize {
        with_graph!(self, g => g.number_of_nodes())
    }

    /// Number of logical edges
    pub fn number_of_edges(&self) -> usize {
        with_graph!(self, g => g.number_of_edges())
    }

    pub fn is_empty(&self) -> bool {
        with_graph!(self, g => g.is_empty())
    }

    pub fn has_node(&self, u: &str) -> bool {
        with_graph!(self, g => g.has_node(u))
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        with_graph!(self, g => g.has_edge(u, v))
    }

    /// Record of node `u` if present, including its presentation attributes
    pub fn node(&self, u: &str) -> Option<&NodeRecord> {
        with_graph!(self, g => g.node(u))
    }

    /// Node identifiers in insertion order
    pub fn vertices(&self) -> Vec<NodeId> {
        with_graph!(self, g => g.vertices().cloned().collect())
    }

    /// Logical edges in sorted order; undirected edges appear once, normalized
    pub fn edges(&self) -> Vec<Edge> {
        with_graph!(self, g => g.ordered_edges(!self.kind().is_directed()).collect())
    }

    /// Grants write access to the presentation payload of node `u`
    pub fn attributes_mut(&mut self, u: &str) -> Option<&mut Attributes> {
        with_graph!(self, g => g.attributes_mut(u))
    }

    /// Order-independent SHA-256 digest of the structure
    pub fn digest_sha256(&self) -> String {
        with_graph!(self, g => g.digest_sha256())
    }

    /// Writes the graph in the DOT language, filling the `highlighted` nodes
    pub fn write_dot<W: Write>(
        &self,
        writer: &DotWriter,
        highlighted: &[NodeId],
        out: W,
    ) -> std::io::Result<()> {
        with_graph!(self, g => writer.try_write_highlighted(g, highlighted, out))
    }

    /// Checks the storage invariants of the inner graph
    pub fn check_consistency(&self) -> Result<(), GraphError> {
        match self {
            Graph::Undirected(g) => g.base().check_consistency(true),
            Graph::Dag(g) => g.base().check_consistency(false),
        }
    }
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Dag)
    }
}

impl From<UndirectedGraph> for Graph {
    fn from(graph: UndirectedGraph) -> Self {
        Graph::Undirected(graph)
    }
}

impl From<Dag> for Graph {
    fn from(graph: Dag) -> Self {
        Graph::Dag(graph)
    }
}
