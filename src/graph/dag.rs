//! dag.rs
//! The Bayesian network: a DAG of random variables over the node arena.
//! Construction happens through `add` + `connect`; everything else reads.

use super::node::Node;
use crate::analysis::topology;
use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::model::{Assignment, Cpt, TableCpt, VarRef, Variable};
use crate::store::{ArraySet, NodeId, NodeRegistry};
use log::{debug, warn};

pub struct BayesianNetwork<V, C = TableCpt<V>> {
    pub(crate) store: NodeRegistry<V, C>,
    pub(crate) config: NetworkConfig,
}

impl<V: Variable, C: Cpt<V>> BayesianNetwork<V, C> {
    pub fn new() -> Self { Self::with_config(NetworkConfig::default()) }

    /// An empty network with room for `capacity` variables.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(NetworkConfig { capacity, ..NetworkConfig::default() })
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self { store: NodeRegistry::with_capacity(config.capacity), config }
    }

    /// An unconnected network holding `variables`, added in iteration order.
    pub fn from_variables(variables: impl IntoIterator<Item = VarRef<V>>) -> Self {
        let variables = variables.into_iter();
        let mut network = Self::with_capacity(variables.size_hint().0);
        for var in variables {
            network.add(var);
        }
        network
    }

    pub fn config(&self) -> &NetworkConfig { &self.config }

    /// Number of nodes (duplicate adds included).
    pub fn size(&self) -> usize { self.store.count() }

    pub fn is_empty(&self) -> bool { self.store.count() == 0 }

    // --- Graph nodes ---

    /// Adds an unconnected node for `variable`: no parents, no children, no CPT.
    ///
    /// Adding the same variable twice creates a second node that lookups
    /// never reach.
    pub fn add(&mut self, variable: VarRef<V>) -> NodeId {
        let (id, duplicate) = self.store.add_node(variable);
        if duplicate {
            warn!("add: variable {} already has a node; {:?} is unreachable by lookup", self.store.variable(id), id);
        } else {
            debug!("add(variable = {}) -> {:?}", self.store.variable(id), id);
        }
        id
    }

    pub(crate) fn resolve(&self, variable: &VarRef<V>) -> Result<NodeId> {
        self.store
            .lookup(variable)
            .ok_or_else(|| NetworkError::VariableNotFound(variable.to_string()))
    }

    pub fn get_node_for_variable(&self, variable: &VarRef<V>) -> Result<Node<'_, V, C>> {
        let id = self.resolve(variable)?;
        Ok(Node::new(id, &self.store))
    }

    /// Finds a variable by exact name. Variables without a name are skipped.
    pub fn get_variable_by_name(&self, name: &str) -> Result<VarRef<V>> {
        self.store
            .variables
            .iter()
            .find(|var| var.name() == Some(name))
            .cloned()
            .ok_or_else(|| NetworkError::NameNotFound(name.to_string()))
    }

    /// All variables, in the order they were added.
    pub fn get_variables(&self) -> ArraySet<VarRef<V>> {
        let mut vars = ArraySet::with_capacity(self.store.count());
        for var in &self.store.variables {
            vars.insert(var.clone());
        }
        vars
    }

    // --- Graph edges ---

    /// Makes `parents` the parent set of `variable`'s node, installs `cpt`
    /// (bound to those parents), and registers the node as a child of each
    /// parent.
    ///
    /// Every variable is resolved before anything changes, so a
    /// `VariableNotFound` leaves the network untouched. Connecting a variable
    /// again replaces its parents and drops it from the old parents' children.
    pub fn connect(&mut self, variable: &VarRef<V>, parents: &[VarRef<V>], mut cpt: C) -> Result<()> {
        let id = self.resolve(variable)?;
        let mut parent_ids = ArraySet::with_capacity(parents.len());
        for pvar in parents {
            parent_ids.insert(self.resolve(pvar)?);
        }

        debug!("connect(variable = {}, parents = {:?})", variable, parents);
        cpt.bind_parents(parents);
        let detached = self.store.link(id, parent_ids, cpt);
        if detached > 0 {
            warn!("connect: {} was re-connected; removed {} stale child link(s)", variable, detached);
        }
        Ok(())
    }

    pub fn get_children(&self, variable: &VarRef<V>) -> Result<ArraySet<VarRef<V>>> {
        let id = self.resolve(variable)?;
        Ok(self.to_variables(self.store.get_children(id)))
    }

    /// Parents of `variable`. Empty if it was never connected.
    pub fn get_parents(&self, variable: &VarRef<V>) -> Result<ArraySet<VarRef<V>>> {
        let id = self.resolve(variable)?;
        Ok(self.store.get_parents(id).map(|p| self.to_variables(p)).unwrap_or_default())
    }

    fn to_variables(&self, ids: &ArraySet<NodeId>) -> ArraySet<VarRef<V>> {
        ids.iter().map(|&id| self.store.variable(id).clone()).collect()
    }

    // --- CPT lookup ---

    /// P(variable = e[variable] | parents as bound in `e`), read from the node's CPT.
    pub fn get_probability(&self, variable: &VarRef<V>, e: &Assignment<V>) -> Result<f64> {
        let id = self.resolve(variable)?;
        let value = e.get(variable).ok_or_else(|| NetworkError::Unassigned(variable.to_string()))?;
        let cpt = self
            .store
            .cpt(id)
            .ok_or_else(|| NetworkError::NotConnected(variable.to_string()))?;
        cpt.get(value, e)
    }

    pub fn set_probability(&mut self, variable: &VarRef<V>, e: &Assignment<V>, p: f64) -> Result<()> {
        let id = self.resolve(variable)?;
        let value = e.get(variable).ok_or_else(|| NetworkError::Unassigned(variable.to_string()))?;
        let cpt = self
            .store
            .cpt_mut(id)
            .ok_or_else(|| NetworkError::NotConnected(variable.to_string()))?;
        cpt.set(value.clone(), e, p)
    }

    /// Direct access to a node's CPT, e.g. for re-estimating a copy's parameters.
    pub fn cpt_mut(&mut self, variable: &VarRef<V>) -> Result<&mut C> {
        let id = self.resolve(variable)?;
        self.store
            .cpt_mut(id)
            .ok_or_else(|| NetworkError::NotConnected(variable.to_string()))
    }

    // --- Ordering ---

    /// Every variable after all of its parents. Ties follow insertion order.
    ///
    /// The graph is assumed acyclic; see [`validate_acyclic`](Self::validate_acyclic).
    pub fn get_variables_sorted_topologically(&self) -> Vec<VarRef<V>> {
        topology::sort(&self.store)
            .into_iter()
            .map(|id| self.store.variable(id).clone())
            .collect()
    }

    /// Opt-in structural check. Never run implicitly.
    pub fn validate_acyclic(&self) -> Result<()> {
        topology::check_acyclic(&self.store)
            .map_err(|id| NetworkError::CycleDetected(self.store.variable(id).to_string()))
    }

    // --- Copy ---

    /// A network over the same variables (shared identities) with the same
    /// edges and independent copies of every CPT.
    ///
    /// The copy is rebuilt through `add` and `connect`, one node per variable:
    /// duplicate nodes collapse, and nodes that were never connected are
    /// carried over without edges.
    pub fn copy(&self) -> Result<Self> {
        let variables = self.get_variables();
        let mut network = Self::with_config(NetworkConfig { capacity: variables.len(), ..self.config.clone() });
        for var in &variables {
            network.add(var.clone());
        }

        for var in &variables {
            let node = self.get_node_for_variable(var)?;
            let (Some(cpt), true) = (node.cpt(), node.is_connected()) else {
                continue;
            };
            let parents: Vec<VarRef<V>> = node.parent_variables().cloned().collect();
            network.connect(var, &parents, cpt.clone())?;
        }

        debug!("copy: {} nodes -> {} nodes", self.size(), network.size());
        Ok(network)
    }
}

impl<V: Variable, C: Cpt<V>> Default for BayesianNetwork<V, C> {
    fn default() -> Self { Self::new() }
}
