//! Collaborator types the network is built over: variables, values,
//! assignments and CPTs. The network only relies on their traits; the
//! concrete types here are the base implementations.
pub mod assignment;
pub mod cpt;
pub mod value;
pub mod variable;

pub use assignment::Assignment;
pub use cpt::{Cpt, TableCpt};
pub use value::Value;
pub use variable::{Domain, NamedVariable, VarRef, Variable};
