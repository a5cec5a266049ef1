/*!
`algographs` implements the graph core of an interactive algorithm explorer: two graph variants
that keep their structural invariants under live, user-driven editing, plus the traversal,
ordering, reachability and path algorithms that run on them.

# Representation

**Nodes** are identified by caller-supplied, non-empty string tokens ([`NodeId`], a cheaply
clonable shared string). Each node carries presentation [`Attributes`] (coordinates and a color)
that no algorithm ever reads.
For **edges**, we use a simple tuple-struct `Edge(NodeId, NodeId)` denoting the directed pair `(from, to)`.

### Available Representations

See the [`repr`] module:

- [`UndirectedGraph`](crate::repr::UndirectedGraph): symmetric adjacency, no self-loops, no parallel edges.
- [`Dag`](crate::repr::Dag): directed edges with incoming neighborhoods; any edge that would
  close a cycle is refused, so the graph is acyclic at every observable state.

Adjacency lists keep insertion order, hence every traversal is deterministic.

# Design

Editing follows a copy-on-write discipline: a request is applied to a clone of the live graph,
which replaces the live graph only on success. Clones are deep copies, so the replaced graph
stays valid and can be kept for undo. See [`session`].

Algorithms are implemented via traits on the graphs themselves, restricted to the variant where
they make sense (e.g. `graph.bfs(start)` on undirected graphs, `dag.topological_sort()` on DAGs).
Configurable pieces such as [`io::DotWriter`] or [`session::SessionConfig`] use the *Setter* pattern.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and both graph representations,
- [`algo`] includes algorithm traits such as BFS/DFS, connected components, cycle checks, topological sorting and path queries,
- [`session`] includes the operation dispatcher and an undo-capable session around a live graph,
- [`io`] includes a DOT writer to hand a graph (and a highlighted traversal) to a renderer.

[`repr::digest`] additionally enables computing an order-independent `Sha256`-hash of a graph.

In most use-cases, `use algographs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod session;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `algographs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::*,
        node::*,
        ops::*,
        repr::*,
        session::{Graph, GraphKind},
    };
}
