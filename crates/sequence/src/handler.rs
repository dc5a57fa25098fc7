//! The sequence wrapper: construction, in-place mutation and conversions.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// An ordered, duplicate-permitting sequence with fluent query operations.
///
/// Query operations (see the `query`, `aggregate` and `projection` modules)
/// never modify the receiver and return new handlers. The methods in this
/// module are the only ones that mutate in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceHandler<T> {
    items: Vec<T>,
}

impl<T> SequenceHandler<T> {
    /// Creates a handler over a new empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Takes ownership of `items` without copying.
    pub fn wrap(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Creates a handler over a copy of `items`.
    pub fn copy_from(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            items: items.to_vec(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends an element.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every element of `items`, in order.
    pub fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Appends another collection (a `Vec<T>`, another handler, ...).
    pub fn join<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        self.items.extend(other);
        tracing::debug!(
            added = self.items.len() - before,
            len = self.items.len(),
            "joined sequence"
        );
    }

    /// Appends a copy of every element of `other`, leaving it untouched.
    ///
    /// Accepts arrays, vectors, slices and other handlers by reference.
    pub fn join_from<S>(&mut self, other: S)
    where
        S: AsRef<[T]>,
        T: Clone,
    {
        self.join(other.as_ref().iter().cloned());
    }

    /// Removes every element equal to `item`.
    pub fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        self.retain_logged("remove", |existing| existing != item);
    }

    /// Removes the first element equal to `item`, returning whether one was found.
    pub fn remove_first(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element equal to any element of `others`.
    ///
    /// Accepts arrays, vectors, slices and other handlers by reference.
    pub fn remove_all<S>(&mut self, others: S)
    where
        S: AsRef<[T]>,
        T: PartialEq,
    {
        let others = others.as_ref();
        self.retain_logged("remove_all", |existing| !others.contains(existing));
    }

    /// Removes every element satisfying `predicate`.
    pub fn remove_where<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain_logged("remove_where", |existing| !predicate(existing));
    }

    /// Collapses the sequence to the first occurrence of each distinct value.
    pub fn remove_duplicates(&mut self)
    where
        T: Eq + Hash,
    {
        let keep: Vec<bool> = {
            let mut seen = HashSet::with_capacity(self.items.len());
            self.items.iter().map(|item| seen.insert(item)).collect()
        };
        let mut keep = keep.into_iter();
        self.retain_logged("remove_duplicates", |_| keep.next().unwrap_or(false));
    }

    /// Keeps the first element for each distinct key produced by `key`.
    ///
    /// Use this for element types without `Eq + Hash` (floats, records with
    /// float fields) by projecting to a hashable key.
    pub fn remove_duplicates_by_key<K, F>(&mut self, mut key: F)
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.retain_logged("remove_duplicates_by_key", |item| seen.insert(key(item)));
    }

    /// Keeps only elements that also appear in `other`.
    ///
    /// The receiver's order and duplicate counts are preserved; the result is
    /// not deduplicated.
    pub fn intersect<S>(&mut self, other: S)
    where
        S: AsRef<[T]>,
        T: PartialEq,
    {
        let other = other.as_ref();
        self.retain_logged("intersect", |existing| other.contains(existing));
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns a copy of the underlying sequence.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Consumes the handler, returning the underlying sequence.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    fn retain_logged<F>(&mut self, operation: &'static str, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(keep);
        tracing::debug!(
            operation,
            removed = before - self.items.len(),
            remaining = self.items.len(),
            "removed elements"
        );
    }
}

impl<T> Default for SequenceHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SequenceHandler<T> {
    fn from(items: Vec<T>) -> Self {
        Self::wrap(items)
    }
}

impl<T> From<SequenceHandler<T>> for Vec<T> {
    fn from(handler: SequenceHandler<T>) -> Self {
        handler.items
    }
}

impl<T> FromIterator<T> for SequenceHandler<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::wrap(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for SequenceHandler<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for SequenceHandler<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceHandler<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for SequenceHandler<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Display> fmt::Display for SequenceHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> SequenceHandler<i32> {
        SequenceHandler::wrap(vec![1, 2, 3, 2, 4, 2])
    }

    #[test]
    fn new_is_empty() {
        let handler: SequenceHandler<String> = SequenceHandler::new();
        assert!(handler.is_empty());
        assert_eq!(handler.to_string(), "[]");
    }

    #[test]
    fn copy_from_leaves_source_untouched() {
        let source = vec![3, 1, 2];
        let mut handler = SequenceHandler::copy_from(&source);
        handler.add(9);

        assert_eq!(source, vec![3, 1, 2]);
        assert_eq!(handler.to_sequence(), vec![3, 1, 2, 9]);
    }

    #[test]
    fn add_all_and_join_append_in_order() {
        let mut handler = SequenceHandler::wrap(vec![1]);
        handler.add_all([2, 3]);
        handler.join(vec![4]);
        handler.join(SequenceHandler::wrap(vec![5, 6]));

        assert_eq!(handler.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn remove_drops_every_equal_occurrence() {
        let mut handler = numbers();
        handler.remove(&2);
        assert_eq!(handler.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn remove_first_drops_one_occurrence() {
        let mut handler = numbers();
        assert!(handler.remove_first(&2));
        assert_eq!(handler.as_slice(), &[1, 3, 2, 4, 2]);
        assert!(!handler.remove_first(&42));
    }

    #[test]
    fn remove_all_accepts_arrays_vectors_and_handlers() {
        let mut handler = numbers();
        handler.remove_all([1, 4]);
        assert_eq!(handler.as_slice(), &[2, 3, 2, 2]);

        handler.remove_all(&vec![3]);
        assert_eq!(handler.as_slice(), &[2, 2, 2]);

        let other = SequenceHandler::wrap(vec![2]);
        handler.remove_all(&other);
        assert!(handler.is_empty());
    }

    #[test]
    fn remove_where_drops_matches() {
        let mut handler = numbers();
        handler.remove_where(|n| n % 2 == 0);
        assert_eq!(handler.as_slice(), &[1, 3]);
    }

    #[test]
    fn remove_duplicates_keeps_first_seen_order() {
        let mut handler = SequenceHandler::wrap(vec!["b", "a", "b", "c", "a"]);
        handler.remove_duplicates();
        assert_eq!(handler.as_slice(), &["b", "a", "c"]);

        let once = handler.clone();
        handler.remove_duplicates();
        assert_eq!(handler, once);
    }

    #[test]
    fn remove_duplicates_by_key_handles_floats() {
        let mut handler = SequenceHandler::wrap(vec![1.5, 2.0, 1.5, -0.0, 2.0, 3.25]);
        handler.remove_duplicates_by_key(|n: &f64| n.to_bits());
        assert_eq!(handler.as_slice(), &[1.5, 2.0, -0.0, 3.25]);
    }

    #[test]
    fn remove_duplicates_by_key_keeps_first_of_each_key() {
        let mut handler = SequenceHandler::wrap(vec![("a", 1), ("b", 2), ("c", 1), ("d", 3)]);
        handler.remove_duplicates_by_key(|pair| pair.1);
        assert_eq!(handler.as_slice(), &[("a", 1), ("b", 2), ("d", 3)]);
    }

    #[test]
    fn join_from_copies_without_consuming() {
        let other = SequenceHandler::wrap(vec![4, 5]);
        let mut handler = SequenceHandler::wrap(vec![1]);
        handler.join_from(&other);
        handler.join_from([6]);
        handler.join_from(&vec![7]);

        assert_eq!(handler.as_slice(), &[1, 4, 5, 6, 7]);
        assert_eq!(other.as_slice(), &[4, 5]);
    }

    #[test]
    fn intersect_keeps_receiver_duplicates() {
        let mut handler = numbers();
        handler.intersect([2, 4, 7]);
        assert_eq!(handler.as_slice(), &[2, 2, 4, 2]);
    }

    #[test]
    fn intersect_with_empty_clears() {
        let mut handler = numbers();
        handler.intersect(Vec::<i32>::new());
        assert!(handler.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut handler = numbers();
        handler.clear();
        assert_eq!(handler.len(), 0);
    }

    #[test]
    fn to_sequence_preserves_order() {
        let handler = SequenceHandler::copy_from(&[3, 1, 2]);
        assert_eq!(handler.to_sequence(), vec![3, 1, 2]);
    }

    #[test]
    fn display_is_bracketed_and_comma_separated() {
        let handler = SequenceHandler::wrap(vec![1.5, 2.0]);
        assert_eq!(handler.to_string(), "[1.5, 2]");
    }

    #[test]
    fn collects_from_iterators() {
        let handler: SequenceHandler<u8> = (1..=3).collect();
        let back: Vec<u8> = handler.into();
        assert_eq!(back, vec![1, 2, 3]);
    }
}
