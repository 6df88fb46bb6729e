//! Partial or complete mappings from variables to values.

use super::value::Value;
use super::variable::VarRef;
use smallvec::SmallVec;
use std::fmt;

/// An insertion-ordered map from variable (by identity) to value.
///
/// Assignments are small (one entry per variable in a network), so lookups
/// are linear scans over an inline buffer.
pub struct Assignment<V> {
    entries: SmallVec<[(VarRef<V>, Value); 8]>,
}

impl<V> Assignment<V> {
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    pub fn get(&self, var: &VarRef<V>) -> Option<&Value> {
        self.entries.iter().find(|(v, _)| v == var).map(|(_, value)| value)
    }

    /// Binds `var` to `value`, returning the previous binding if there was one.
    pub fn put(&mut self, var: VarRef<V>, value: Value) -> Option<Value> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(v, _)| *v == var) {
            return Some(std::mem::replace(slot, value));
        }
        self.entries.push((var, value));
        None
    }

    pub fn remove(&mut self, var: &VarRef<V>) -> Option<Value> {
        let pos = self.entries.iter().position(|(v, _)| v == var)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains(&self, var: &VarRef<V>) -> bool {
        self.get(var).is_some()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&VarRef<V>, &Value)> {
        self.entries.iter().map(|(v, value)| (v, value))
    }

    /// Every binding in `self` agrees with `other`. Variables that `other`
    /// leaves unbound count as disagreement.
    pub fn is_consistent_with(&self, other: &Assignment<V>) -> bool {
        self.iter().all(|(var, value)| other.get(var) == Some(value))
    }

    /// A copy of this assignment with `var` unbound.
    pub fn without(&self, var: &VarRef<V>) -> Self {
        self.iter()
            .filter(|(v, _)| *v != var)
            .map(|(v, value)| (v.clone(), value.clone()))
            .collect()
    }

    /// The bindings of `vars` only, in the order of `vars`. Variables this
    /// assignment leaves unbound are skipped.
    pub fn restricted_to(&self, vars: &[VarRef<V>]) -> Self {
        vars.iter()
            .filter_map(|var| self.get(var).map(|value| (var.clone(), value.clone())))
            .collect()
    }
}

impl<V> Default for Assignment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Assignment<V> {
    fn clone(&self) -> Self {
        Self { entries: self.entries.clone() }
    }
}

/// Equal when both bind the same variables to the same values, in any order.
impl<V> PartialEq for Assignment<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_consistent_with(other)
    }
}

impl<V> Eq for Assignment<V> {}

impl<V> FromIterator<(VarRef<V>, Value)> for Assignment<V> {
    fn from_iter<I: IntoIterator<Item = (VarRef<V>, Value)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.put(var, value);
        }
        assignment
    }
}

impl<V: fmt::Display> fmt::Display for Assignment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (var, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", var, value)?;
        }
        f.write_str("}")
    }
}

impl<V: fmt::Display> fmt::Debug for Assignment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedVariable;

    fn vars() -> (VarRef<NamedVariable>, VarRef<NamedVariable>) {
        (VarRef::new(NamedVariable::boolean("A")), VarRef::new(NamedVariable::boolean("B")))
    }

    #[test]
    fn test_put_replaces_binding() {
        let (a, b) = vars();
        let mut e = Assignment::new();
        assert_eq!(e.put(a.clone(), Value::Bool(true)), None);
        e.put(b.clone(), Value::Bool(false));
        assert_eq!(e.put(a.clone(), Value::Bool(false)), Some(Value::Bool(true)));
        assert_eq!(e.len(), 2);
        assert_eq!(e.get(&a), Some(&Value::Bool(false)));
        assert_eq!(e.to_string(), "{A=false, B=false}");
    }

    #[test]
    fn test_consistency_and_without() {
        let (a, b) = vars();
        let full: Assignment<_> = [(a.clone(), Value::Bool(true)), (b.clone(), Value::Bool(true))]
            .into_iter()
            .collect();
        let partial = full.without(&b);

        assert_eq!(partial.len(), 1);
        assert!(partial.is_consistent_with(&full));
        assert!(!full.is_consistent_with(&partial));
        assert!(Assignment::new().is_consistent_with(&full));
    }

    #[test]
    fn test_restricted_to_keeps_listed_variables() {
        let (a, b) = vars();
        let c = VarRef::new(NamedVariable::boolean("C"));
        let full: Assignment<_> = [(b.clone(), Value::Bool(true)), (a.clone(), Value::Bool(false))]
            .into_iter()
            .collect();

        let only_a = full.restricted_to(&[a.clone(), c.clone()]);
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a.get(&a), Some(&Value::Bool(false)));
        assert_eq!(full.restricted_to(&[a, b]).to_string(), "{A=false, B=true}");
        assert!(full.restricted_to(&[c]).is_empty());
        assert!(full.restricted_to(&[]).is_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        let (a, b) = vars();
        let mut x = Assignment::new();
        x.put(a.clone(), Value::Bool(true));
        x.put(b.clone(), Value::Bool(false));
        let mut y = Assignment::new();
        y.put(b, Value::Bool(false));
        y.put(a, Value::Bool(true));
        assert_eq!(x, y);
    }
}
