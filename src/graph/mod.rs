//! The network graph: construction, lookup, probability access and copying.
pub mod dag;
pub mod node;

pub use dag::BayesianNetwork;
pub use node::Node;
