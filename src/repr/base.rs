use fxhash::{FxHashMap, FxHashSet};

use crate::*;

/// Storage shared by all graph variants.
///
/// Holds the node records (keyed by identifier, iterated in insertion order) and the set of
/// directed edge entries. Every edit goes through the `*_arc` helpers below which update the
/// edge set and the endpoint's adjacency together, so both views never disagree.
///
/// Cloning is a deep copy: node records, their neighborhoods and attributes are all owned values.
#[derive(Debug, Clone, Default)]
pub struct BaseGraph {
    nodes: FxHashMap<NodeId, NodeRecord>,
    order: Vec<NodeId>,
    edges: FxHashSet<Edge>,
}

impl PartialEq for BaseGraph {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.nodes == other.nodes && self.edges == other.edges
    }
}

impl BaseGraph {
    /// Number of stored nodes
    pub fn number_of_nodes(&self) -> usize {
        self.order.len()
    }

    /// Number of stored directed edge entries
    pub fn number_of_arcs(&self) -> usize {
        self.edges.len()
    }

    /// Node identifiers in insertion order
    pub fn vertices(&self) -> std::slice::Iter<'_, NodeId> {
        self.order.iter()
    }

    pub fn record(&self, u: &str) -> Option<&NodeRecord> {
        self.nodes.get(u)
    }

    pub(crate) fn record_mut(&mut self, u: &str) -> Option<&mut NodeRecord> {
        self.nodes.get_mut(u)
    }

    /// Returns the stored identifier for `u` or [`GraphError::NodeNotFound`]
    pub(crate) fn resolve(&self, u: &str) -> Result<NodeId, GraphError> {
        self.nodes
            .get_key_value(u)
            .map(|(id, _)| id.clone())
            .ok_or_else(|| GraphError::node_not_found(u))
    }

    /// Returns *true* if the directed entry `(u, v)` is stored
    pub fn contains_arc(&self, u: &str, v: &str) -> bool {
        match (self.nodes.get_key_value(u), self.nodes.get_key_value(v)) {
            (Some((u, _)), Some((v, _))) => self.edges.contains(&Edge(u.clone(), v.clone())),
            _ => false,
        }
    }

    /// Inserts a node record unless present. Returns *true* if it was inserted.
    pub(crate) fn insert_node(&mut self, id: NodeId, attributes: Attributes) -> Result<bool, GraphError> {
        if !id.is_valid() {
            return Err(GraphError::InvalidNodeId);
        }
        if self.nodes.contains_key(&id) {
            return Ok(false);
        }

        self.order.push(id.clone());
        self.nodes.insert(id.clone(), NodeRecord::new(id, attributes));
        Ok(true)
    }

    /// Removes the node record. The caller must have detached all edges beforehand.
    pub(crate) fn remove_node(&mut self, u: &str) -> Option<NodeRecord> {
        let record = self.nodes.remove(u)?;
        debug_assert!(record.connections.is_empty() && record.in_edges.is_empty());
        if let Some(pos) = self.order.iter().position(|v| v.as_str() == u) {
            self.order.remove(pos);
        }
        Some(record)
    }

    /// Stores the entry `(from, to)` and records `to` as outgoing neighbor of `from`.
    /// Returns *false* if the entry was already present.
    pub(crate) fn insert_arc(&mut self, from: &NodeId, to: &NodeId) -> bool {
        if !self.edges.insert(Edge(from.clone(), to.clone())) {
            return false;
        }
        if let Some(record) = self.nodes.get_mut(from) {
            record.connections.try_add_neighbor(to.clone());
        }
        true
    }

    /// Records `from` as incoming neighbor of `to`
    pub(crate) fn insert_in_arc(&mut self, from: &NodeId, to: &NodeId) {
        if let Some(record) = self.nodes.get_mut(to) {
            record.in_edges.try_add_neighbor(from.clone());
        }
    }

    /// Removes the entry `(from, to)` and `to` from the outgoing neighbors of `from`.
    /// Returns *true* if the entry was present.
    pub(crate) fn remove_arc(&mut self, from: &str, to: &str) -> bool {
        let (Ok(from_id), Ok(to_id)) = (self.resolve(from), self.resolve(to)) else {
            return false;
        };
        if !self.edges.remove(&Edge(from_id, to_id)) {
            return false;
        }
        if let Some(record) = self.nodes.get_mut(from) {
            record.connections.try_remove_neighbor(to);
        }
        true
    }

    /// Removes `from` from the incoming neighbors of `to`
    pub(crate) fn remove_in_arc(&mut self, from: &str, to: &str) {
        if let Some(record) = self.nodes.get_mut(to) {
            record.in_edges.try_remove_neighbor(from);
        }
    }

    /// Empties nodes and edges, keeping allocated capacity around
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
        self.edges.clear();
    }

    /// Checks that the edge set and all adjacency lists describe the same relation.
    /// `symmetric` additionally requires every entry to be stored in both orientations.
    pub fn check_consistency(&self, symmetric: bool) -> Result<(), GraphError> {
        let violation = |details: String| Err(GraphError::InvariantViolation { details });

        if self.order.len() != self.nodes.len() {
            return violation(format!(
                "{} nodes in order but {} records",
                self.order.len(),
                self.nodes.len()
            ));
        }

        let mut adjacency_entries = 0;
        for record in self.nodes.values() {
            for v in record.connections.neighbors() {
                if v == record.id() {
                    return violation(format!("self-loop at '{v}'"));
                }
                if !self.edges.contains(&Edge(record.id.clone(), v.clone())) {
                    return violation(format!("adjacency ({},{v}) missing in edge set", record.id));
                }
                if !symmetric && !self.record(v).is_some_and(|r| r.in_edges.has_neighbor(&record.id)) {
                    return violation(format!("incoming entry ({},{v}) missing", record.id));
                }
                adjacency_entries += 1;
            }
            if symmetric && !record.in_edges.is_empty() {
                return violation(format!("undirected node '{}' has incoming entries", record.id));
            }
        }

        if adjacency_entries != self.edges.len() {
            return violation(format!(
                "{} adjacency entries but {} edge entries",
                adjacency_entries,
                self.edges.len()
            ));
        }

        if !symmetric {
            let incoming_entries: usize = self.nodes.values().map(|r| r.in_edges.num_of_neighbors()).sum();
            if incoming_entries != self.edges.len() {
                return violation(format!(
                    "{} incoming entries but {} edge entries",
                    incoming_entries,
                    self.edges.len()
                ));
            }
        }

        if symmetric {
            if let Some(Edge(u, v)) = self.edges.iter().find(|e| !self.edges.contains(&e.reverse())) {
                return violation(format!("edge ({u},{v}) stored without its reverse"));
            }
        }

        Ok(())
    }
}
