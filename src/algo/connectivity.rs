use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::trace;

use super::*;

/// Connected components of undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components of the graph.
    ///
    /// Components are emitted in the order their first node was inserted; the nodes of a
    /// component are listed in BFS order starting from that node. Every node appears in
    /// exactly one component, isolated nodes form components of size one.
    ///
    /// # Examples
    /// ```
    /// use algographs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(["a", "b", "c", "d"], [("a", "c"), ("b", "d")]).unwrap();
    /// let ccs: Vec<_> = g.connected_components().collect();
    ///
    /// assert_eq!(ccs, vec![vec!["a", "c"], vec!["b", "d"]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents {
            bfs: Bfs::unseeded(self),
        }
    }

    /// Returns *true* if all nodes lie in a single component.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        self.connected_components().nth(1).is_none()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Traversal + Sized {}

/// Iterator over the connected components of an undirected graph, see
/// [`Connectivity::connected_components`]
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Bfs<'a, G>,
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<&'a NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
            trace!("connected components: restarting search");
        }
    }
}

impl<'a, G> FusedIterator for ConnectedComponents<'a, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_in_seed_order() {
        let graph = UndirectedGraph::from_edges(
            ["0", "1", "2", "3", "4", "5", "6", "7"],
            [("0", "1"), ("1", "2"), ("3", "4"), ("5", "6"), ("6", "7"), ("7", "5")],
        )
        .unwrap();

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(
            ccs,
            vec![vec!["0", "1", "2"], vec!["3", "4"], vec!["5", "6", "7"]]
        );
        assert!(!graph.is_connected());
    }

    #[test]
    fn every_node_in_exactly_one_component() {
        let mut graph = UndirectedGraph::from_edges(
            ["a", "b", "c", "d", "e"],
            [("e", "a"), ("c", "b")],
        )
        .unwrap();
        graph.add_node("lonely").unwrap();

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs.len(), 4);
        assert_eq!(ccs[0], ["a", "e"]);
        assert_eq!(ccs[1], ["b", "c"]);
        assert_eq!(ccs[2], ["d"]);
        assert_eq!(ccs[3], ["lonely"]);

        let all = ccs.into_iter().flatten().collect_vec();
        assert_eq!(all.len(), graph.number_of_nodes());
        assert!(all.iter().all_unique());
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = UndirectedGraph::new();
        assert_eq!(graph.connected_components().count(), 0);
        assert!(graph.is_connected());
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let graph = UndirectedGraph::from_edges(["a", "b"], [("a", "b")]).unwrap();
        let mut ccs = graph.connected_components();
        assert!(ccs.next().is_some());
        assert!(ccs.next().is_none());
        assert!(ccs.next().is_none());
        assert!(graph.is_connected());
    }
}
