/*!
# Node Representation

Nodes are identified by caller-supplied string tokens. We wrap them in [`NodeId`], which shares
the underlying `str` via an `Arc`: ids are immutable, so handing the same allocation to a cloned
graph never lets one graph observe an edit of the other.

Each node additionally carries a [`NodeRecord`] with its adjacency (outgoing and incoming) and
opaque presentation [`Attributes`] that no algorithm ever reads.
*/

use std::{borrow::Borrow, fmt, ops::Deref, sync::Arc};

use crate::repr::Neighborhood;

/// Identifier of a node: a non-empty, caller-supplied token
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates a new identifier. Does not check for emptiness, see [`NodeId::is_valid`].
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the identifier as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns *true* if the identifier may name a node (i.e. it is non-empty)
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Deref for NodeId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&String> for NodeId {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<&NodeId> for NodeId {
    fn from(value: &NodeId) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Default fill color of freshly added nodes
pub const DEFAULT_NODE_COLOR: &str = "#4CAF50";

/// Presentation payload of a node. Written by the presentation layer, never read by algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            color: DEFAULT_NODE_COLOR.to_string(),
        }
    }
}

impl Attributes {
    /// Sets the coordinates
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the fill color
    pub fn colored<S: Into<String>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }
}

/// Everything stored for a single node.
///
/// For undirected graphs `in_edges` stays empty and `connections` holds all neighbors.
/// A node never appears in its own `connections` or `in_edges`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub(crate) id: NodeId,
    pub(crate) connections: Neighborhood,
    pub(crate) in_edges: Neighborhood,
    pub(crate) attributes: Attributes,
}

impl NodeRecord {
    pub(crate) fn new(id: NodeId, attributes: Attributes) -> Self {
        Self {
            id,
            connections: Neighborhood::default(),
            in_edges: Neighborhood::default(),
            attributes,
        }
    }

    /// Identifier of the node
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Outgoing neighbors (all neighbors in undirected graphs)
    pub fn connections(&self) -> &[NodeId] {
        self.connections.as_slice()
    }

    /// Incoming neighbors (always empty in undirected graphs)
    pub fn in_edges(&self) -> &[NodeId] {
        self.in_edges.as_slice()
    }

    /// Presentation payload
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn lookup_by_str() {
        let mut set = FxHashSet::default();
        set.insert(NodeId::from("a"));
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
    }

    #[test]
    fn validity() {
        assert!(NodeId::from("x").is_valid());
        assert!(!NodeId::from("").is_valid());
        assert_eq!(NodeId::from(String::from("abc")), "abc");
    }

    #[test]
    fn attributes_builder() {
        let attrs = Attributes::default().at(3.0, 4.0).colored("red");
        assert_eq!(attrs.x, 3.0);
        assert_eq!(attrs.y, 4.0);
        assert_eq!(attrs.color, "red");
        assert_eq!(Attributes::default().color, DEFAULT_NODE_COLOR);
    }
}
