/*!
Cycle queries.

- [`Cycles::has_cycle`] detects cycles in undirected graphs.
- [`Cycles::will_create_cycle`] decides whether a directed edge would close a cycle. It is
  consulted by [`Dag`] before every edge insertion and only ever walks edges **backward**.
*/

use fxhash::FxHashSet;

use super::*;

pub trait Cycles: AdjacencyList + Sized {
    /// Returns *true* if the undirected graph contains a cycle.
    ///
    /// Runs an iterative DFS from every unvisited node, remembering the tree parent of each
    /// node. Reaching an already visited node via an edge other than the one to the parent
    /// closes a cycle. All components are inspected.
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let mut g = UndirectedGraph::from_edges(["1", "2", "3"], [("1", "2"), ("2", "3")]).unwrap();
    /// assert!(!g.has_cycle());
    ///
    /// g.add_edge("1", "3").unwrap();
    /// assert!(g.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        let mut stack: Vec<(&NodeId, Option<&NodeId>)> = Vec::new();

        for root in self.vertices() {
            if visited.contains(root) {
                continue;
            }

            stack.push((root, None));
            while let Some((u, parent)) = stack.pop() {
                if !visited.insert(u) {
                    // reached twice via distinct tree edges
                    return true;
                }

                for v in self.neighbors_of(u) {
                    if Some(v) == parent {
                        continue;
                    }
                    if visited.contains(v) {
                        return true;
                    }
                    stack.push((v, Some(u)));
                }
            }
        }

        false
    }

    /// Returns *true* if inserting the edge `source -> target` would close a directed cycle,
    /// i.e. if `target` already reaches `source`.
    ///
    /// The search starts at `source` and follows incoming edges (child to parent) looking for
    /// `target`. A self-pair counts as a cycle. Unknown nodes have no ancestors, hence yield *false*
    /// unless `source == target`.
    fn will_create_cycle(&self, source: &str, target: &str) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        if source == target {
            return true;
        }
        let Some(source) = self.node_id(source) else {
            return false;
        };

        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        visited.insert(source);
        let mut stack = vec![source];

        while let Some(u) = stack.pop() {
            for p in self.parents_of(u) {
                if p.as_str() == target {
                    return true;
                }
                if visited.insert(p) {
                    stack.push(p);
                }
            }
        }

        false
    }
}

impl<G> Cycles for G where G: AdjacencyList + Sized {}
