//! Basic graph operation traits implemented by every graph representation.
//!
//! Lookups take `&str` and degrade gracefully: asking for the neighbors of a node that does not
//! exist yields an empty slice, never an error. Editing operations validate first and return a
//! [`GraphError`] without touching the graph if the request is invalid.

use itertools::Itertools;

use crate::*;

/// Marker for the orientation of a graph type
pub trait GraphDir {
    const DIRECTED: bool;
}

/// Marker for graphs whose edges have an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Marker for graphs whose edges are symmetric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Associates a graph type with its orientation
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if edges of this graph type are directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over all node identifiers in insertion order
    fn vertices(&self) -> impl Iterator<Item = &NodeId> + '_;

    /// Returns the record of a node if present
    fn node(&self, u: &str) -> Option<&NodeRecord>;

    /// Returns the stored identifier of `u` if the node exists
    fn node_id(&self, u: &str) -> Option<&NodeId> {
        self.node(u).map(NodeRecord::id)
    }

    /// Returns *true* if a node with identifier `u` exists
    fn has_node(&self, u: &str) -> bool {
        self.node(u).is_some()
    }

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (logical) edges of the graph
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the (open) neighborhood of a given vertex in insertion order.
    /// Empty if `u` does not exist.
    ///
    /// Note that for directed graphs, this is equivalent to `children_of`
    fn neighbors_of(&self, u: &str) -> &[NodeId];

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: &str) -> usize {
        self.neighbors_of(u).len()
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of<'a>(&'a self, u: &'a NodeId, only_normalized: bool) -> impl Iterator<Item = Edge> + 'a {
        self.neighbors_of(u)
            .iter()
            .map(move |v| Edge(u.clone(), v.clone()))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges(only_normalized).sorted()
    }
}

/// Accessors that only make sense if edges have an orientation
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns the targets of all edges leaving `u`. Empty if `u` does not exist.
    #[inline]
    fn children_of(&self, u: &str) -> &[NodeId] {
        self.neighbors_of(u)
    }

    /// Returns the sources of all edges entering `u`. Empty if `u` does not exist.
    fn parents_of(&self, u: &str) -> &[NodeId];

    /// Returns the number of outgoing edges of `u`
    #[inline]
    fn out_degree_of(&self, u: &str) -> usize {
        self.degree_of(u)
    }

    /// Returns the number of incoming edges of `u`
    fn in_degree_of(&self, u: &str) -> usize {
        self.parents_of(u).len()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Absent endpoints simply yield *false*.
    fn has_edge(&self, u: &str, v: &str) -> bool;

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    fn has_bidirected_edge(&self, u: &str, v: &str) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes
    fn new() -> Self;
}

/// Provides functions to insert/delete nodes
pub trait GraphNodeEditing {
    /// Adds a node with default attributes.
    /// Returns *true* if the node was not present before; re-adding is a no-op.
    fn add_node(&mut self, u: impl Into<NodeId>) -> Result<bool, GraphError> {
        self.add_node_with(u, Attributes::default())
    }

    /// Adds a node with the given attributes. Does not overwrite attributes of an existing node.
    fn add_node_with(&mut self, u: impl Into<NodeId>, attributes: Attributes)
    -> Result<bool, GraphError>;

    /// Adds all nodes in the collection
    fn add_nodes<I>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        for u in nodes {
            self.add_node(u)?;
        }
        Ok(())
    }

    /// Removes `u` together with every edge touching it.
    /// Returns *true* if the node existed.
    fn delete_node(&mut self, u: &str) -> bool;

    /// Grants write access to the presentation payload of a node
    fn attributes_mut(&mut self, u: &str) -> Option<&mut Attributes>;

    /// Removes all nodes and edges
    fn clear(&mut self);
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge *(u,v)* to the graph. Both endpoints must already exist.
    fn add_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError>;

    /// Adds all edges in the collection, stopping at the first failure
    fn add_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            self.add_edge(&u, &v)?;
        }
        Ok(())
    }

    /// Removes the edge *(u,v)* from the graph.
    /// Returns *true* if the edge existed; absent edges are a no-op.
    fn delete_edge(&mut self, u: &str, v: &str) -> bool;
}

/// A super trait for creating a graph from scratch from a set of nodes and edges
pub trait GraphFromScratch: Sized {
    /// Create a graph from node identifiers and an iterator over edges between them
    fn from_edges<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: Into<NodeId>,
        E: IntoIterator,
        E::Item: Into<Edge>;
}

impl<G: GraphNew + GraphNodeEditing + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: Into<NodeId>,
        E: IntoIterator,
        E::Item: Into<Edge>,
    {
        let mut graph = Self::new();
        graph.add_nodes(nodes)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
