//! Random variables and the identity handle the network keys its nodes by.

use super::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A random variable as seen by the network.
///
/// The network never inspects a variable beyond its display form and the
/// optional name used by [`BayesianNetwork::get_variable_by_name`](crate::BayesianNetwork::get_variable_by_name).
pub trait Variable: fmt::Display {
    /// The variable's name, if it has one. Unnamed variables are invisible to
    /// name-based lookup.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// Shared handle to a variable, compared and hashed by identity.
///
/// Cloning a `VarRef` yields the *same* variable; two variables built
/// separately are different even when they carry equal names.
pub struct VarRef<V>(Arc<V>);

impl<V> VarRef<V> {
    pub fn new(variable: V) -> Self {
        Self(Arc::new(variable))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<V> Clone for VarRef<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V> PartialEq for VarRef<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<V> Eq for VarRef<V> {}

impl<V> Hash for VarRef<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state)
    }
}

impl<V> Deref for VarRef<V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.0
    }
}

impl<V> From<V> for VarRef<V> {
    fn from(variable: V) -> Self {
        Self::new(variable)
    }
}

impl<V: fmt::Display> fmt::Display for VarRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<V: fmt::Display> fmt::Debug for VarRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarRef({}@{:p})", self.0, Arc::as_ptr(&self.0))
    }
}

/// The ordered set of values a variable may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(Vec<Value>);

impl Domain {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self(unique)
    }

    pub fn boolean() -> Self {
        Self(vec![Value::Bool(true), Value::Bool(false)])
    }

    pub fn labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(labels.into_iter().map(Value::label))
    }

    pub fn contains(&self, value: &Value) -> bool { self.0.contains(value) }
    pub fn values(&self) -> &[Value] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// A variable with a name and a domain of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedVariable {
    pub name: String,
    pub domain: Domain,
}

impl NamedVariable {
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        Self { name: name.into(), domain }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, Domain::boolean())
    }
}

impl Variable for NamedVariable {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl fmt::Display for NamedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
