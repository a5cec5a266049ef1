use smallvec::SmallVec;

use crate::NodeId;

/// Insertion-ordered set of neighbors of a single node.
///
/// Most nodes in interactively built graphs have only a handful of neighbors, so the
/// identifiers are stored inline for up to 4 entries. Membership tests are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood(SmallVec<[NodeId; 4]>);

impl Neighborhood {
    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if there are no neighbors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all neighbors in the Neighborhood
    pub fn neighbors(&self) -> std::slice::Iter<'_, NodeId> {
        self.0.iter()
    }

    /// Returns a slice-reference of the neighborhood
    pub fn as_slice(&self) -> &[NodeId] {
        self.0.as_slice()
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: &str) -> bool {
        self.0.iter().any(|u| u.as_str() == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_add_neighbor(&mut self, u: NodeId) -> bool {
        if self.has_neighbor(&u) {
            true
        } else {
            self.0.push(u);
            false
        }
    }

    /// Tries to remove a neighbor from the Neighborhood, keeping the order of the others.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_remove_neighbor(&mut self, u: &str) -> bool {
        match self.0.iter().position(|v| v.as_str() == u) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes all neighbors in the Neighborhood
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut nbs = Neighborhood::default();
        for u in ["c", "a", "e", "b", "d", "f"] {
            assert!(!nbs.try_add_neighbor(NodeId::from(u)));
        }
        assert!(nbs.try_add_neighbor(NodeId::from("a")));
        assert_eq!(nbs.num_of_neighbors(), 6);

        assert!(nbs.try_remove_neighbor("e"));
        assert!(!nbs.try_remove_neighbor("e"));
        assert_eq!(nbs.as_slice(), ["c", "a", "b", "d", "f"]);

        nbs.clear();
        assert!(nbs.is_empty());
    }
}
