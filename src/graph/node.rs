//! Read-only view of one node of a [`BayesianNetwork`](super::BayesianNetwork).

use crate::model::VarRef;
use crate::store::{ArraySet, NodeId, NodeRegistry};
use std::fmt;

/// A vertex of the network: one variable with its parents, children and CPT.
///
/// The view borrows the network, so it always reflects the current graph.
pub struct Node<'a, V, C> {
    id: NodeId,
    store: &'a NodeRegistry<V, C>,
}

impl<V, C> Clone for Node<'_, V, C> {
    fn clone(&self) -> Self { *self }
}

impl<V, C> Copy for Node<'_, V, C> {}

impl<V: fmt::Display, C> fmt::Debug for Node<'_, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("variable", self.variable())
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl<'a, V, C> Node<'a, V, C> {
    pub(crate) fn new(id: NodeId, store: &'a NodeRegistry<V, C>) -> Self {
        Self { id, store }
    }

    pub fn id(&self) -> NodeId { self.id }

    pub fn variable(&self) -> &'a VarRef<V> { self.store.variable(self.id) }

    /// `None` until the node has been connected.
    pub fn parents(&self) -> Option<&'a ArraySet<NodeId>> { self.store.get_parents(self.id) }

    pub fn children(&self) -> &'a ArraySet<NodeId> { self.store.get_children(self.id) }

    pub fn cpt(&self) -> Option<&'a C> { self.store.cpt(self.id) }

    pub fn is_connected(&self) -> bool { self.parents().is_some() }

    pub fn parent_variables(&self) -> impl Iterator<Item = &'a VarRef<V>> {
        let store = self.store;
        self.parents()
            .into_iter()
            .flat_map(|set| set.iter())
            .map(move |&id| store.variable(id))
    }

    pub fn child_variables(&self) -> impl Iterator<Item = &'a VarRef<V>> {
        let store = self.store;
        self.children().iter().map(move |&id| store.variable(id))
    }
}
