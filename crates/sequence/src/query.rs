//! Eager transformations returning new handlers.
//!
//! The four prefix/suffix operations are single linear passes over the
//! sequence, evaluating the predicate at most once per element in order:
//!
//! | Operation                | Keeps                                   | No match |
//! |--------------------------|-----------------------------------------|----------|
//! | `skip_until_after`       | elements strictly after the first match | empty    |
//! | `skip_from_match_onward` | the first match and everything after it | empty    |
//! | `take_until_inclusive`   | everything up to and including the match| all      |
//! | `take_until_exclusive`   | everything strictly before the match    | all      |

use std::cmp::Ordering;

use crate::SequenceHandler;
use crate::num::SortKey;

impl<T> SequenceHandler<T> {
    /// Projects each element through `selector`.
    pub fn map<R, F>(&self, selector: F) -> SequenceHandler<R>
    where
        F: FnMut(&T) -> R,
    {
        self.iter().map(selector).collect()
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> SequenceHandler<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Drops everything up to and including the first match.
    pub fn skip_until_after<P>(&self, mut predicate: P) -> SequenceHandler<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut found = false;
        let mut kept = Vec::new();
        for item in self.iter() {
            if found {
                kept.push(item.clone());
            }
            if predicate(item) {
                found = true;
            }
        }
        SequenceHandler::wrap(kept)
    }

    /// Drops everything before the first match; the match itself is kept.
    pub fn skip_from_match_onward<P>(&self, mut predicate: P) -> SequenceHandler<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut found = false;
        let mut kept = Vec::new();
        for item in self.iter() {
            if predicate(item) {
                found = true;
            }
            if found {
                kept.push(item.clone());
            }
        }
        SequenceHandler::wrap(kept)
    }

    /// Keeps the prefix ending at (and including) the first match.
    pub fn take_until_inclusive<P>(&self, mut predicate: P) -> SequenceHandler<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut kept = Vec::new();
        for item in self.iter() {
            kept.push(item.clone());
            if predicate(item) {
                break;
            }
        }
        SequenceHandler::wrap(kept)
    }

    /// Keeps the prefix strictly before the first match.
    pub fn take_until_exclusive<P>(&self, mut predicate: P) -> SequenceHandler<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.iter()
            .take_while(|item| !predicate(item))
            .cloned()
            .collect()
    }

    /// Returns a copy sorted by the key produced by `key_selector`.
    ///
    /// The sort is stable. A descending sort inverts each comparison, so
    /// elements with equal keys keep their original relative order in both
    /// directions. Keys are computed once per element.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.len(), ascending = ascending))]
    pub fn order_by<K, F>(&self, key_selector: F, ascending: bool) -> SequenceHandler<T>
    where
        K: SortKey,
        F: FnMut(&T) -> K,
        T: Clone,
    {
        let keys: Vec<K> = self.iter().map(key_selector).collect();
        let mut indices: Vec<usize> = (0..keys.len()).collect();
        indices.sort_by(|&left, &right| {
            let ordering: Ordering = keys[left].sort_cmp(&keys[right]);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        let items = self.as_slice();
        indices.into_iter().map(|i| items[i].clone()).collect()
    }

    /// Shorthand for `order_by(key_selector, true)`.
    pub fn order_ascending_by<K, F>(&self, key_selector: F) -> SequenceHandler<T>
    where
        K: SortKey,
        F: FnMut(&T) -> K,
        T: Clone,
    {
        self.order_by(key_selector, true)
    }

    /// Shorthand for `order_by(key_selector, false)`.
    pub fn order_descending_by<K, F>(&self, key_selector: F) -> SequenceHandler<T>
    where
        K: SortKey,
        F: FnMut(&T) -> K,
        T: Clone,
    {
        self.order_by(key_selector, false)
    }

    /// Runs `action` on each element in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }
}
