use std::fmt::{Debug, Display};

use crate::NodeId;

/// An edge is defined by two nodes/endpoints, stored as the directed pair `(from, to)`.
/// Undirected graphs keep both orientations, see [`crate::repr::UndirectedGraph`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub NodeId, pub NodeId);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates a new edge from anything convertible into node identifiers
    pub fn new(u: impl Into<NodeId>, v: impl Into<NodeId>) -> Self {
        Edge(u.into(), v.into())
    }

    /// Normalizes the edge such that the lexicographically smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the endpoint with smaller id comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl From<(&str, &str)> for Edge {
    fn from(value: (&str, &str)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from(value: (NodeId, NodeId)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let e = Edge::new("b", "a");
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge::new("a", "b"));
        assert_eq!(e.reverse(), Edge::new("a", "b"));
        assert!(Edge::new("a", "a").is_loop());
        assert_eq!(format!("{e}"), "(b,a)");
    }
}
