//! registry.rs
//! Columnar node arena. Slot `i` of every column belongs to `NodeId(i)`.

use super::array_set::ArraySet;
use super::types::NodeId;
use crate::model::VarRef;
use std::collections::HashMap;

pub struct NodeRegistry<V, C> {
    // Columnar Arrays
    pub(crate) variables: Vec<VarRef<V>>,
    pub(crate) cpts: Vec<Option<C>>,

    // Topology. `None` parents means the node was never connected.
    pub(crate) parents: Vec<Option<ArraySet<NodeId>>>,
    pub(crate) children: Vec<ArraySet<NodeId>>,

    // Identity index. Holds the first node registered for a variable.
    index: HashMap<VarRef<V>, NodeId>,
}

impl<V, C> NodeRegistry<V, C> {
    pub fn new() -> Self { Self::with_capacity(0) }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            variables: Vec::with_capacity(capacity),
            cpts: Vec::with_capacity(capacity),
            parents: Vec::with_capacity(capacity),
            children: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn count(&self) -> usize { self.variables.len() }

    /// Appends an unconnected node for `variable`.
    ///
    /// Returns the new id and whether the variable was already registered.
    /// A duplicate still gets its own slot, but the index keeps pointing at
    /// the first one.
    pub fn add_node(&mut self, variable: VarRef<V>) -> (NodeId, bool) {
        let id = NodeId::new(self.count());
        let duplicate = self.index.contains_key(&variable);
        if !duplicate {
            self.index.insert(variable.clone(), id);
        }

        self.variables.push(variable);
        self.cpts.push(None);
        self.parents.push(None);
        self.children.push(ArraySet::new());

        (id, duplicate)
    }

    pub fn lookup(&self, variable: &VarRef<V>) -> Option<NodeId> {
        self.index.get(variable).copied()
    }

    /// Installs `parents` and `cpt` on `id` and registers `id` as a child of
    /// every parent. Child links left over from a previous parent set are
    /// removed first. Returns how many stale links were removed.
    pub fn link(&mut self, id: NodeId, parents: ArraySet<NodeId>, cpt: C) -> usize {
        let mut detached = 0;
        if let Some(previous) = self.parents[id.index()].take() {
            for old in previous.iter().filter(|p| !parents.contains(*p)) {
                if self.children[old.index()].remove(&id) {
                    detached += 1;
                }
            }
        }

        for parent in parents.iter() {
            self.children[parent.index()].insert(id);
        }
        self.parents[id.index()] = Some(parents);
        self.cpts[id.index()] = Some(cpt);

        detached
    }

    #[inline(always)]
    pub fn variable(&self, id: NodeId) -> &VarRef<V> { &self.variables[id.index()] }

    #[inline(always)]
    pub fn get_parents(&self, id: NodeId) -> Option<&ArraySet<NodeId>> {
        self.parents[id.index()].as_ref()
    }

    #[inline(always)]
    pub fn get_children(&self, id: NodeId) -> &ArraySet<NodeId> { &self.children[id.index()] }

    pub fn cpt(&self, id: NodeId) -> Option<&C> { self.cpts[id.index()].as_ref() }

    pub fn cpt_mut(&mut self, id: NodeId) -> Option<&mut C> { self.cpts[id.index()].as_mut() }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> { (0..self.count()).map(NodeId::new) }
}

impl<V, C> Default for NodeRegistry<V, C> {
    fn default() -> Self { Self::new() }
}
