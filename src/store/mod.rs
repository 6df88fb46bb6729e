//! Arena storage for network nodes and the small set type used for edges.
pub mod array_set;
pub mod registry;
pub mod types;

pub use array_set::ArraySet;
pub use registry::NodeRegistry;
pub use types::NodeId;
