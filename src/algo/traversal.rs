/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- Topological ordering for directed acyclic graphs (Kahn's algorithm).
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

All iterators borrow node identifiers from the graph and never allocate per visited node
beyond the visited-set entry. A traversal started at a node that does not exist is simply
empty.
*/

use std::{collections::VecDeque, marker::PhantomData};

use fxhash::{FxHashMap, FxHashSet};
use tracing::error;

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem<'a>: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: &'a NodeId, item: &'a NodeId) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: &'a NodeId) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> &'a NodeId;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<&'a NodeId>;
}

impl<'a> SequencedItem<'a> for &'a NodeId {
    fn new_with_predecessor(_: &'a NodeId, item: &'a NodeId) -> Self {
        item
    }
    fn new_without_predecessor(item: &'a NodeId) -> Self {
        item
    }
    fn item(&self) -> &'a NodeId {
        self
    }
    fn predecessor(&self) -> Option<&'a NodeId> {
        None
    }
}

/// `(predecessor, node)` pairs used for traversals with parent tracking.
/// The start node has no predecessor.
pub type PredecessorOfNode<'a> = (Option<&'a NodeId>, &'a NodeId);

impl<'a> SequencedItem<'a> for PredecessorOfNode<'a> {
    fn new_with_predecessor(predecessor: &'a NodeId, item: &'a NodeId) -> Self {
        (Some(predecessor), item)
    }
    fn new_without_predecessor(item: &'a NodeId) -> Self {
        (None, item)
    }
    fn item(&self) -> &'a NodeId {
        self.1
    }
    fn predecessor(&self) -> Option<&'a NodeId> {
        self.0
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**, nodes are marked when discovered
/// - [`Vec`] -> stack semantics -> **DFS**, nodes are marked when popped, so the visiting
///   order equals that of a recursive DFS exploring neighbors in adjacency order
pub trait NodeSequencer<T> {
    /// Whether nodes are marked visited when pushed (or only when popped)
    const MARK_ON_PUSH: bool;

    /// Creates a new empty sequencer
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Pushes the items of one neighborhood such that the first one is popped first
    fn push_neighborhood<I>(&mut self, items: I)
    where
        I: DoubleEndedIterator<Item = T>;

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const MARK_ON_PUSH: bool = true;

    fn empty() -> Self {
        VecDeque::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn push_neighborhood<I>(&mut self, items: I)
    where
        I: DoubleEndedIterator<Item = T>,
    {
        self.extend(items)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const MARK_ON_PUSH: bool = false;

    fn empty() -> Self {
        Vec::new()
    }
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn push_neighborhood<I>(&mut self, items: I)
    where
        I: DoubleEndedIterator<Item = T>,
    {
        self.extend(items.rev())
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit,
/// a set of visited nodes, and optionally records predecessor information.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a>,
{
    graph: &'a G,
    visited: FxHashSet<&'a NodeId>,
    sequencer: S,
    restart_cursor: usize,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<&'a NodeId>, &'a NodeId>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first (pre-)order from a given starting node.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<&'a NodeId>, &'a NodeId>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode<'a>>, PredecessorOfNode<'a>>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode<'a>>, PredecessorOfNode<'a>>;

impl<'a, G, S, I> Iterator for TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let popped = self.sequencer.pop()?;
            let u = popped.item();

            if !S::MARK_ON_PUSH && !self.visited.insert(u) {
                continue;
            }

            let graph: &'a G = self.graph;
            let neighbors = graph.neighbors_of(u);
            if S::MARK_ON_PUSH {
                for v in neighbors {
                    if self.visited.insert(v) {
                        self.sequencer.push(I::new_with_predecessor(u, v));
                    }
                }
            } else {
                let visited = &self.visited;
                self.sequencer.push_neighborhood(
                    neighbors
                        .iter()
                        .filter(|v| !visited.contains(v))
                        .map(|v| I::new_with_predecessor(u, v)),
                );
            }

            return Some(popped);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.len().saturating_sub(self.visited.len()) + self.sequencer.cardinality()))
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a>,
{
    /// Creates a new traversal iterator starting from `start`.
    /// If `start` is not a node of `graph`, the iterator is empty.
    pub fn new(graph: &'a G, start: &str) -> Self {
        let mut search = Self {
            graph,
            visited: FxHashSet::default(),
            sequencer: S::empty(),
            restart_cursor: 0,
            _item: PhantomData,
        };
        if let Some(start) = graph.node_id(start) {
            search.seed(start);
        }
        search
    }

    /// Creates a traversal without start node; use [`TraversalSearch::try_restart_at_unvisited`]
    pub fn unseeded(graph: &'a G) -> Self {
        Self::new(graph, "")
    }

    fn seed(&mut self, start: &'a NodeId) {
        if S::MARK_ON_PUSH {
            self.visited.insert(start);
        }
        self.sequencer.push(I::new_without_predecessor(start));
    }

    /// Tries to restart the search at the first yet unvisited node (in node insertion order)
    /// and returns true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        let graph: &'a G = self.graph;
        for (i, u) in graph.vertices().enumerate().skip(self.restart_cursor) {
            if !self.visited.contains(u) {
                self.restart_cursor = i + 1;
                self.seed(u);
                return true;
            }
        }
        self.restart_cursor = graph.len();
        false
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S, PredecessorOfNode<'a>>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode<'a>>,
{
    /// Consumes the search and returns the parent of every visited node except the start
    pub fn parent_map(self) -> FxHashMap<&'a NodeId, &'a NodeId> {
        self.filter_map(|(p, u)| p.map(|p| (u, p))).collect()
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses Kahn's algorithm:
/// - Initializes a FIFO queue with all nodes of in-degree 0 (in node insertion order).
/// - Repeatedly removes a node, decreasing in-degrees of its children,
///   and enqueues nodes whose in-degree drops to 0.
/// - Stops once all nodes are output, or early if the graph contains a cycle.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: FxHashMap<&'a NodeId, usize>,
    queue: VecDeque<&'a NodeId>,
}

impl<'a, G> Iterator for TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    type Item = &'a NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        let graph: &'a G = self.graph;
        for v in graph.children_of(u) {
            if let Some(deg) = self.in_degs.get_mut(v) {
                *deg -= 1;
                if *deg == 0 {
                    self.queue.push_back(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs: FxHashMap<&'a NodeId, usize> = graph
            .vertices()
            .map(|u| (u, graph.in_degree_of(u)))
            .collect();

        let queue = graph
            .vertices()
            .filter(|u| in_degs.get(*u) == Some(&0))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(["a", "b", "c"], [("a", "b"), ("a", "c")]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs("a").collect();
    /// assert_eq!(order, ["a", "b", "c"]);
    /// assert_eq!(g.bfs("nope").count(), 0);
    /// ```
    fn bfs<'a>(&'a self, start: &str) -> Bfs<'a, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(["a", "b", "c", "d"], [("a", "b"), ("b", "c"), ("a", "d")]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs("a").collect();
    /// assert_eq!(order, ["a", "b", "c", "d"]);
    /// ```
    fn dfs<'a>(&'a self, start: &str) -> Dfs<'a, Self> {
        Dfs::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor<'a>(&'a self, start: &str) -> BfsWithPredecessor<'a, Self> {
        BfsWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor<'a>(&'a self, start: &str) -> DfsWithPredecessor<'a, Self> {
        DfsWithPredecessor::new(self, start)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    ///
    /// - Only available for directed graphs.
    /// - Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        TopoSearch::new(self)
    }

    /// Returns all nodes in **topological order** (sources first, FIFO among ready nodes).
    ///
    /// An empty graph yields an empty order. If the order does not cover every node, the
    /// graph contains a cycle, which a [`Dag`] never does: this is reported as
    /// [`GraphError::InvariantViolation`] rather than as a partial answer.
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let g = Dag::from_edges(["c", "b", "a"], [("a", "b"), ("b", "c")]).unwrap();
    /// assert_eq!(g.topological_sort().unwrap(), ["a", "b", "c"]);
    /// ```
    fn topological_sort(&self) -> Result<Vec<NodeId>, GraphError>
    where
        Self: DirectedAdjacencyList,
    {
        let order: Vec<NodeId> = self.topo_search().cloned().collect();
        if order.len() != self.len() {
            let details = format!(
                "topological order covers {} of {} nodes",
                order.len(),
                self.len()
            );
            error!(%details, "directed graph is not acyclic");
            return Err(GraphError::InvariantViolation { details });
        }
        Ok(order)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// Implementation: runs a topological search and checks whether
    /// all nodes were output.
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.topo_search().count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
