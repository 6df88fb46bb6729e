//! Conditional probability tables.

use super::assignment::Assignment;
use super::value::Value;
use super::variable::{VarRef, Variable};
use crate::error::{NetworkError, Result};
use smallvec::SmallVec;
use std::fmt;

/// The probability table attached to one node.
///
/// Entries are addressed by the node's own value plus an assignment that
/// covers (at least) the node's parents. Copying a table is `Clone::clone`;
/// a copy must not share mutable state with the original.
pub trait Cpt<V>: Clone + fmt::Display {
    fn get(&self, value: &Value, assignment: &Assignment<V>) -> Result<f64>;
    fn set(&mut self, value: Value, assignment: &Assignment<V>, p: f64) -> Result<()>;

    /// Called by `connect` with the node's parents before the table is installed.
    fn bind_parents(&mut self, _parents: &[VarRef<V>]) {}
}

struct Row<V> {
    condition: Assignment<V>,
    entries: SmallVec<[(Value, f64); 4]>,
}

impl<V> Clone for Row<V> {
    fn clone(&self) -> Self {
        Self { condition: self.condition.clone(), entries: self.entries.clone() }
    }
}

/// Row-per-condition table for a single variable.
///
/// Once the parents are known (from [`with_parents`](Self::with_parents) or
/// from `connect`), every assignment is reduced to the parents' bindings
/// before it selects a row, so bindings of any other variable are ignored.
/// Until then a row's condition is the assignment it was written with, minus
/// the table's own variable.
pub struct TableCpt<V> {
    variable: VarRef<V>,
    parents: Option<Vec<VarRef<V>>>,
    rows: Vec<Row<V>>,
}

impl<V> TableCpt<V> {
    pub fn new(variable: VarRef<V>) -> Self {
        Self { variable, parents: None, rows: Vec::new() }
    }

    pub fn with_parents(variable: VarRef<V>, parents: impl IntoIterator<Item = VarRef<V>>) -> Self {
        Self { variable, parents: Some(parents.into_iter().collect()), rows: Vec::new() }
    }

    pub fn variable(&self) -> &VarRef<V> { &self.variable }

    pub fn parents(&self) -> Option<&[VarRef<V>]> { self.parents.as_deref() }

    /// Number of distinct parent conditions with at least one entry.
    pub fn row_count(&self) -> usize { self.rows.len() }

    fn condition_of(&self, assignment: &Assignment<V>) -> Assignment<V> {
        match &self.parents {
            Some(parents) => assignment.restricted_to(parents),
            None => assignment.without(&self.variable),
        }
    }

    fn find_row(&self, assignment: &Assignment<V>) -> Option<&Row<V>> {
        let condition = self.condition_of(assignment);
        let exact = self.rows.iter().find(|row| row.condition == condition);
        if self.parents.is_some() {
            return exact;
        }
        exact.or_else(|| self.rows.iter().find(|row| row.condition.is_consistent_with(assignment)))
    }

    fn write(&mut self, condition: Assignment<V>, value: Value, p: f64) {
        let idx = match self.rows.iter().position(|row| row.condition == condition) {
            Some(idx) => idx,
            None => {
                self.rows.push(Row { condition, entries: SmallVec::new() });
                self.rows.len() - 1
            }
        };

        let entries = &mut self.rows[idx].entries;
        match entries.iter_mut().find(|(v, _)| *v == value) {
            Some(slot) => slot.1 = p,
            None => entries.push((value, p)),
        }
    }
}

impl<V> Clone for TableCpt<V> {
    fn clone(&self) -> Self {
        Self { variable: self.variable.clone(), parents: self.parents.clone(), rows: self.rows.clone() }
    }
}

impl<V: Variable> Cpt<V> for TableCpt<V> {
    fn get(&self, value: &Value, assignment: &Assignment<V>) -> Result<f64> {
        self.find_row(assignment)
            .and_then(|row| row.entries.iter().find(|(v, _)| v == value))
            .map(|&(_, p)| p)
            .ok_or_else(|| {
                NetworkError::MissingEntry(format!(
                    "{}={} given {}",
                    self.variable,
                    value,
                    self.condition_of(assignment)
                ))
            })
    }

    fn set(&mut self, value: Value, assignment: &Assignment<V>, p: f64) -> Result<()> {
        let condition = self.condition_of(assignment);
        self.write(condition, value, p);
        Ok(())
    }

    /// Re-keys existing rows by `parents`. Rows that collapse onto the same
    /// condition are merged, later rows winning.
    fn bind_parents(&mut self, parents: &[VarRef<V>]) {
        let rows = std::mem::take(&mut self.rows);
        self.parents = Some(parents.to_vec());
        for row in rows {
            let condition = row.condition.restricted_to(parents);
            for (value, p) in row.entries {
                self.write(condition.clone(), value, p);
            }
        }
    }
}

impl<V: Variable> fmt::Display for TableCpt<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{} ->", row.condition)?;
            for (j, (value, p)) in row.entries.iter().enumerate() {
                let sep = if j == 0 { " " } else { ", " };
                write!(f, "{}{}: {}", sep, value, p)?;
            }
        }
        Ok(())
    }
}

impl<V: Variable> fmt::Debug for TableCpt<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableCpt({}, {} rows)", self.variable, self.rows.len())
    }
}
