/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of insertion order.

The digest encodes:
- whether the graph is directed,
- the sorted list of node identifiers, and
- a sorted edge list (undirected edges only once, normalized),

before feeding them into a cryptographic hash function. Attributes are ignored: two graphs
with the same digest have the same structure, not necessarily the same layout.

## Example
```
use algographs::{prelude::*, repr::digest::GraphDigest};

let mut a = UndirectedGraph::new();
a.add_nodes(["x", "y"]).unwrap();
a.add_edge("x", "y").unwrap();

let mut b = UndirectedGraph::new();
b.add_nodes(["y", "x"]).unwrap();
b.add_edge("y", "x").unwrap();

assert_eq!(a.digest_sha256(), b.digest_sha256());
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};
use itertools::Itertools;

use super::*;

/// Trait for computing a **canonical hash digest** of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList + GraphType,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // Every token is length-prefixed so that ids containing separators cannot collide
        let mut feed = |token: &str| {
            hasher.update((token.len() as u64).to_le_bytes());
            hasher.update(token.as_bytes());
        };

        feed(if G::is_directed() { "digraph" } else { "graph" });

        let nodes = self.vertices().sorted().collect_vec();
        feed(&nodes.len().to_string());
        for u in nodes {
            feed(u.as_str());
        }

        for Edge(u, v) in self.ordered_edges(!G::is_directed()) {
            feed(u.as_str());
            feed(v.as_str());
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_independent() {
        let a = Dag::from_edges(["a", "b", "c"], [("a", "b"), ("a", "c")]).unwrap();
        let b = Dag::from_edges(["c", "b", "a"], [("a", "c"), ("a", "b")]).unwrap();
        assert_eq!(a.digest_sha256(), b.digest_sha256());
        assert_eq!(a.digest_sha256().len(), 64);
    }

    #[test]
    fn distinguishes_structure_and_kind() {
        let dag = Dag::from_edges(["a", "b"], [("a", "b")]).unwrap();
        let reversed = Dag::from_edges(["a", "b"], [("b", "a")]).unwrap();
        let undirected = UndirectedGraph::from_edges(["a", "b"], [("a", "b")]).unwrap();

        assert_ne!(dag.digest_sha256(), reversed.digest_sha256());
        assert_ne!(dag.digest_sha256(), undirected.digest_sha256());
    }

    #[test]
    fn ignores_attributes() {
        let mut a = UndirectedGraph::from_edges(["a"], [] as [(&str, &str); 0]).unwrap();
        let before = a.digest_sha256();
        a.attributes_mut("a").unwrap().x = 10.0;
        assert_eq!(before, a.digest_sha256());
    }
}
