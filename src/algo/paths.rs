/*!
Reachability and path queries on directed acyclic graphs.

All queries follow edges forward (parent to child). Paths are returned as node sequences
including both endpoints, so a path of length `k` has `k + 1` nodes.
*/

use fxhash::{FxHashMap, FxHashSet};

use super::*;

pub trait Paths: DirectedAdjacencyList + Traversal + Sized {
    /// Returns *true* if `target` can be reached from `start` by following edges forward.
    ///
    /// Every present node reaches itself. If either node does not exist, the answer is *false*.
    fn is_reachable(&self, start: &str, target: &str) -> bool {
        let (Some(start), Some(target)) = (self.node_id(start), self.node_id(target)) else {
            return false;
        };
        if start == target {
            return true;
        }

        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        visited.insert(start);
        let mut stack = vec![start];

        while let Some(u) = stack.pop() {
            for v in self.children_of(u) {
                if v == target {
                    return true;
                }
                if visited.insert(v) {
                    stack.push(v);
                }
            }
        }

        false
    }

    /// Returns a path with the fewest edges from `source` to `target`.
    ///
    /// The BFS explores children in adjacency order, so among several shortest paths the one
    /// discovered first is returned. The result is `[source]` if both are the same present node,
    /// and empty if `target` is unreachable or either node is missing.
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let g = Dag::from_edges(["a", "b", "c", "d"], [("a", "b"), ("b", "c"), ("c", "d"), ("a", "c")]).unwrap();
    ///
    /// assert_eq!(g.shortest_path("a", "d"), ["a", "c", "d"]);
    /// assert!(g.shortest_path("d", "a").is_empty());
    /// ```
    fn shortest_path(&self, source: &str, target: &str) -> Vec<NodeId> {
        let Some(target) = self.node_id(target) else {
            return Vec::new();
        };

        let mut parents: FxHashMap<&NodeId, &NodeId> = FxHashMap::default();
        let mut found = false;
        for (parent, u) in self.bfs_with_predecessor(source) {
            if let Some(p) = parent {
                parents.insert(u, p);
            }
            if u == target {
                found = true;
                break;
            }
        }

        if !found {
            return Vec::new();
        }

        let mut path = vec![target.clone()];
        let mut u = target;
        while let Some(&p) = parents.get(u) {
            path.push(p.clone());
            u = p;
        }
        path.reverse();
        path
    }

    /// Returns a longest path (by number of edges) of the graph.
    ///
    /// Processes nodes in topological order and relaxes the distance of each child as
    /// `max(dist[child], dist[node] + 1)`, remembering the predecessor that achieved it.
    /// Ties keep the first end node reaching the maximum. The result is empty if the graph
    /// has no edges.
    ///
    /// Fails only with [`GraphError::InvariantViolation`], see [`Traversal::topological_sort`].
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let g = Dag::from_edges(["a", "b", "c", "x"], [("a", "b"), ("b", "c"), ("x", "c")]).unwrap();
    /// assert_eq!(g.longest_path().unwrap(), ["a", "b", "c"]);
    /// ```
    fn longest_path(&self) -> Result<Vec<NodeId>, GraphError>
    where
        Self: GraphEdgeOrder,
    {
        if self.is_singleton_graph() {
            return Ok(Vec::new());
        }

        let order = self.topological_sort()?;

        let mut dist: FxHashMap<&str, usize> = FxHashMap::default();
        let mut pred: FxHashMap<&str, &str> = FxHashMap::default();
        let mut best: Option<(&str, usize)> = None;

        for u in &order {
            let du = dist.get(u.as_str()).copied().unwrap_or(0);
            for v in self.children_of(u) {
                let dv = dist.entry(v.as_str()).or_insert(0);
                if du + 1 > *dv {
                    *dv = du + 1;
                    pred.insert(v.as_str(), u.as_str());
                    if best.is_none_or(|(_, d)| *dv > d) {
                        best = Some((v.as_str(), *dv));
                    }
                }
            }
        }

        let Some((end, _)) = best else {
            return Ok(Vec::new());
        };

        let mut path = vec![NodeId::from(end)];
        let mut u = end;
        while let Some(&p) = pred.get(u) {
            path.push(NodeId::from(p));
            u = p;
        }
        path.reverse();
        Ok(path)
    }
}

impl<G> Paths for G where G: DirectedAdjacencyList + Traversal + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Dag {
        Dag::from_edges(
            ["A", "B", "C", "D"],
            [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        )
        .unwrap()
    }

    #[test]
    fn reachability() {
        let dag = diamond();
        assert!(dag.is_reachable("A", "D"));
        assert!(dag.is_reachable("B", "D"));
        assert!(dag.is_reachable("C", "C"));
        assert!(!dag.is_reachable("D", "A"));
        assert!(!dag.is_reachable("B", "C"));
        assert!(!dag.is_reachable("A", "missing"));
        assert!(!dag.is_reachable("missing", "missing"));
    }

    #[test]
    fn diamond_order_and_longest_path() {
        let dag = diamond();

        let order = dag.topological_sort().unwrap();
        let rank = |u: &str| order.iter().position(|v| v == u).unwrap();
        for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
            assert!(rank(u) < rank(v));
        }

        let path = dag.longest_path().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path, ["A", "B", "D"]);
    }

    #[test]
    fn longest_path_without_edges_is_empty() {
        assert!(Dag::new().longest_path().unwrap().is_empty());

        let mut dag = Dag::new();
        dag.add_nodes(["x", "y"]).unwrap();
        assert!(dag.longest_path().unwrap().is_empty());
    }

    #[test]
    fn longest_path_prefers_longer_branch() {
        let dag = Dag::from_edges(
            ["s", "a", "b", "c", "t", "u"],
            [("s", "t"), ("s", "a"), ("a", "b"), ("b", "c"), ("c", "t"), ("u", "t")],
        )
        .unwrap();
        assert_eq!(dag.longest_path().unwrap(), ["s", "a", "b", "c", "t"]);
    }

    #[test]
    fn shortest_paths() {
        let dag = Dag::from_edges(
            ["a", "b", "c", "d", "e"],
            [("a", "b"), ("b", "c"), ("c", "d"), ("a", "d"), ("d", "e")],
        )
        .unwrap();

        assert_eq!(dag.shortest_path("a", "e"), ["a", "d", "e"]);
        assert_eq!(dag.shortest_path("b", "d"), ["b", "c", "d"]);
        assert_eq!(dag.shortest_path("c", "c"), ["c"]);
        assert!(dag.shortest_path("e", "a").is_empty());
        assert!(dag.shortest_path("a", "zz").is_empty());
        assert!(dag.shortest_path("zz", "a").is_empty());
        assert!(dag.shortest_path("zz", "zz").is_empty());
    }

    #[test]
    fn empty_graph_queries() {
        let dag = Dag::new();
        assert!(dag.is_empty());
        assert!(dag.topological_sort().unwrap().is_empty());
        assert_eq!(dag.bfs("anything").count(), 0);
        assert!(dag.shortest_path("a", "b").is_empty());
        assert!(!dag.is_reachable("a", "a"));
    }
}
