/*!
# Graph Representations

Two variants share the same [`BaseGraph`] storage:

- [`UndirectedGraph`]: symmetric adjacency, every logical edge stored as `(u,v)` and `(v,u)`.
- [`Dag`]: directed edges with incoming neighborhoods; refuses any edge that would close a cycle.

Both are `Clone`, and a clone is a fully independent deep copy. This is what the copy-on-write
editing in [`crate::session`] relies on.
*/

use crate::{ops::*, *};

mod base;
mod directed;
mod neighborhood;
mod undirected;

pub mod digest;

pub use base::*;
pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

pub(crate) mod macros {
    /// Implements the operations that only forward to the shared [`BaseGraph`].
    /// Requires a field `base` and an inherent `fn detach_node(&mut self, u: &NodeId)`
    /// that removes every edge touching `u`.
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $directed:ident) => {
            impl GraphType for $struct {
                type Dir = $directed;
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> usize {
                    self.base.number_of_nodes()
                }

                fn vertices(&self) -> impl Iterator<Item = &NodeId> + '_ {
                    self.base.vertices()
                }

                fn node(&self, u: &str) -> Option<&NodeRecord> {
                    self.base.record(u)
                }
            }

            impl AdjacencyList for $struct {
                fn neighbors_of(&self, u: &str) -> &[NodeId] {
                    self.base
                        .record(u)
                        .map_or(&[], |record| record.connections.as_slice())
                }
            }

            impl GraphNew for $struct {
                fn new() -> Self {
                    Self::default()
                }
            }

            impl GraphNodeEditing for $struct {
                fn add_node_with(
                    &mut self,
                    u: impl Into<NodeId>,
                    attributes: Attributes,
                ) -> Result<bool, GraphError> {
                    self.base.insert_node(u.into(), attributes)
                }

                fn delete_node(&mut self, u: &str) -> bool {
                    let Ok(id) = self.base.resolve(u) else {
                        return false;
                    };
                    self.detach_node(&id);
                    self.base.remove_node(&id).is_some()
                }

                fn attributes_mut(&mut self, u: &str) -> Option<&mut Attributes> {
                    self.base.record_mut(u).map(|record| &mut record.attributes)
                }

                fn clear(&mut self) {
                    self.base.clear();
                }
            }

            impl $struct {
                /// Read access to the underlying storage
                pub fn base(&self) -> &BaseGraph {
                    &self.base
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
