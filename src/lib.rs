//! # bayes_net_core
//!
//! A Bayesian network as a directed acyclic graph of random variables, each
//! carrying a conditional probability table over itself and its parents.
//!
//! The crate supplies the substrate that inference and sampling algorithms
//! work on: graph construction, parent/child queries, CPT lookup and
//! mutation, a deterministic topological order, and copies that share
//! variables but own their CPTs.
//!
//! ```rust
//! use bayes_net_core::{Assignment, BayesianNetwork, Cpt, NamedVariable, TableCpt, Value, VarRef};
//!
//! let rain = VarRef::new(NamedVariable::boolean("Rain"));
//! let wet = VarRef::new(NamedVariable::boolean("Wet"));
//!
//! let mut net: BayesianNetwork<NamedVariable> = BayesianNetwork::new();
//! net.add(rain.clone());
//! net.add(wet.clone());
//!
//! let mut prior = TableCpt::new(rain.clone());
//! prior.set(Value::Bool(true), &Assignment::new(), 0.2).unwrap();
//! net.connect(&rain, &[], prior).unwrap();
//! net.connect(&wet, &[rain.clone()], TableCpt::new(wet.clone())).unwrap();
//!
//! let mut e = Assignment::new();
//! e.put(rain.clone(), Value::Bool(true));
//! e.put(wet.clone(), Value::Bool(true));
//! net.set_probability(&wet, &e, 0.9).unwrap();
//!
//! assert_eq!(net.get_probability(&wet, &e).unwrap(), 0.9);
//! assert_eq!(net.get_variables_sorted_topologically(), vec![rain, wet]);
//! ```
//!
//! The graph must be acyclic; this is a precondition on callers and is only
//! checked on request through [`BayesianNetwork::validate_acyclic`].

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod graph;
pub mod model;
pub mod store;

pub use config::NetworkConfig;
pub use error::{NetworkError, Result};
pub use graph::{BayesianNetwork, Node};
pub use model::{Assignment, Cpt, Domain, NamedVariable, TableCpt, Value, VarRef, Variable};
pub use store::{ArraySet, NodeId};
