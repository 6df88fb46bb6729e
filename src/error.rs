//! Error types shared by the network, its collaborators and the analysis passes.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Variable not found in network: {0}")]
    VariableNotFound(String),
    #[error("No variable named '{0}'")]
    NameNotFound(String),
    #[error("Assignment has no value for variable {0}")]
    Unassigned(String),
    #[error("Variable {0} has no CPT (never connected)")]
    NotConnected(String),
    #[error("CPT has no entry for {0}")]
    MissingEntry(String),
    #[error("Cycle detected involving variable {0}")]
    CycleDetected(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl NetworkError {
    /// True for the lookup failures (`VariableNotFound`, `NameNotFound`).
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::VariableNotFound(_) | NetworkError::NameNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
