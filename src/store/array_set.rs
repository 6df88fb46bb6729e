//! array_set.rs
//! Insertion-ordered set with linear-scan membership.
//! Good for small, more or less immutable sets (parent/child lists, variable lists).

use smallvec::SmallVec;
use std::fmt;

#[derive(Clone)]
pub struct ArraySet<T> {
    elements: SmallVec<[T; 8]>,
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        Self { elements: SmallVec::new() }
    }
}

impl<T: PartialEq> ArraySet<T> {
    pub fn new() -> Self {
        Self { elements: SmallVec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { elements: SmallVec::with_capacity(capacity) }
    }

    /// Appends `value` unless an equal element is already present.
    /// Returns whether the set changed.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.elements.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.iter().any(|e| e == value)
    }

    /// Removes `value`, preserving the order of the remaining elements.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.elements.iter().position(|e| e == value) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize { self.elements.len() }

    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.elements.iter() }

    pub fn as_slice(&self) -> &[T] { &self.elements }
}

impl<T: PartialEq + Clone> ArraySet<T> {
    /// Shallow copy: elements are cloned, not deep-copied beyond their own `Clone`.
    pub fn copy(&self) -> Self { self.clone() }
}

/// Set equality: same elements, order ignored.
impl<T: PartialEq> PartialEq for ArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ArraySet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: PartialEq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 8]>;

    fn into_iter(self) -> Self::IntoIter { self.elements.into_iter() }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.elements.iter() }
}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = ArraySet::new();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[3, 1]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut set: ArraySet<i32> = [5, 4, 3, 2].into_iter().collect();
        assert!(set.remove(&4));
        assert!(!set.remove(&4));
        assert_eq!(set.as_slice(), &[5, 3, 2]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: ArraySet<i32> = [1, 2, 3].into_iter().collect();
        let b: ArraySet<i32> = [3, 1, 2].into_iter().collect();
        let c: ArraySet<i32> = [1, 2].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let set: ArraySet<usize> = (0..20).chain(0..20).collect();
        assert_eq!(set.len(), 20);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_copy_is_independent() {
        let original: ArraySet<i32> = [7, 8].into_iter().collect();
        let mut copy = original.copy();
        assert_eq!(copy, original);
        copy.insert(9);
        copy.remove(&7);
        assert_eq!(copy.as_slice(), &[8, 9]);
        assert_eq!(original.as_slice(), &[7, 8]);
    }

    #[test]
    fn test_extend_skips_present_elements() {
        let mut set: ArraySet<i32> = [1, 2].into_iter().collect();
        set.extend([2, 3, 1, 4, 3]);
        assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
    }
}
