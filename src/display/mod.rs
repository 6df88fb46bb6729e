//! Textual rendering of networks.
pub mod dump;

pub use dump::write_dump;
