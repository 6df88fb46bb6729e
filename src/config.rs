//! Construction options for a [`BayesianNetwork`](crate::BayesianNetwork).

use crate::error::{NetworkError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Number of nodes to pre-allocate room for.
    pub capacity: usize,
    /// Include each node's CPT block in the display dump.
    pub render_cpts: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { capacity: 0, render_cpts: true }
    }
}

impl NetworkConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| NetworkError::Config(e.to_string()))
    }
}
