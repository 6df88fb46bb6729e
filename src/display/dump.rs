//! Human-readable dump of a network, for debugging. Not meant to be parsed back.
//!
//! ```text
//! A <-
//! {} -> true: 0.6, false: 0.4
//! B <- A
//! {A=true} -> true: 0.8, false: 0.2
//! ```

use crate::analysis::topology;
use crate::graph::BayesianNetwork;
use crate::model::{Cpt, Variable};
use std::fmt::{self, Write};

/// Writes one block per variable, in topological order: the variable, ` <- `,
/// each parent followed by a space, a newline, then the CPT and a newline if
/// the node has one and `render_cpts` is set.
pub fn write_dump<V, C, W>(network: &BayesianNetwork<V, C>, out: &mut W, render_cpts: bool) -> fmt::Result
where
    V: Variable,
    C: Cpt<V>,
    W: Write,
{
    let store = &network.store;
    for id in topology::sort(store) {
        // Duplicate nodes render as the node their variable resolves to.
        let var = store.variable(id);
        let node = network.get_node_for_variable(var).map_err(|_| fmt::Error)?;

        write!(out, "{} <- ", var)?;
        for parent in node.parent_variables() {
            write!(out, "{} ", parent)?;
        }
        writeln!(out)?;

        if let (true, Some(cpt)) = (render_cpts, node.cpt()) {
            writeln!(out, "{}", cpt)?;
        }
    }
    Ok(())
}

impl<V: Variable, C: Cpt<V>> fmt::Display for BayesianNetwork<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dump(self, f, self.config.render_cpts)
    }
}
