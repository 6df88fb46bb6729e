//! Whole-graph algorithms over the node arena.
pub mod topology;
