//! Folds, extrema and positional access.
//!
//! All extremum operations use a seeded linear scan: the candidate starts as
//! the first element and is replaced only on a strictly greater (or smaller)
//! value, so the earliest extremum wins ties.

use crate::num::Numeric;
use crate::{Result, SequenceError, SequenceHandler};

impl<T> SequenceHandler<T> {
    /// Sums the elements, starting from 0.
    pub fn sum(&self) -> Result<f64>
    where
        T: Numeric,
    {
        self.iter()
            .try_fold(0.0, |acc, item| Ok(acc + item.numeric_value()?))
    }

    /// Sums the values selected from each element, starting from 0.
    pub fn sum_by<N, F>(&self, mut selector: F) -> Result<f64>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        self.iter()
            .try_fold(0.0, |acc, item| Ok(acc + selector(item).numeric_value()?))
    }

    /// Arithmetic mean of the elements.
    pub fn average(&self) -> Result<f64>
    where
        T: Numeric,
    {
        if self.is_empty() {
            return Err(SequenceError::empty("average"));
        }
        Ok(self.sum()? / self.len() as f64)
    }

    /// Arithmetic mean of the values selected from each element.
    pub fn average_by<N, F>(&self, selector: F) -> Result<f64>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        if self.is_empty() {
            return Err(SequenceError::empty("average_by"));
        }
        Ok(self.sum_by(selector)? / self.len() as f64)
    }

    /// Multiplies the elements, starting from 1.
    pub fn multiply(&self) -> Result<f64>
    where
        T: Numeric,
    {
        self.iter()
            .try_fold(1.0, |acc, item| Ok(acc * item.numeric_value()?))
    }

    /// Multiplies the values selected from each element, starting from 1.
    pub fn multiply_by<N, F>(&self, mut selector: F) -> Result<f64>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        self.iter()
            .try_fold(1.0, |acc, item| Ok(acc * selector(item).numeric_value()?))
    }

    /// Largest element value.
    pub fn max(&self) -> Result<f64>
    where
        T: Numeric,
    {
        self.numeric_extremum("max", |candidate, best| candidate > best)
    }

    /// Smallest element value.
    pub fn min(&self) -> Result<f64>
    where
        T: Numeric,
    {
        self.numeric_extremum("min", |candidate, best| candidate < best)
    }

    /// Element whose selected value is largest; the first one wins ties.
    pub fn max_by<N, F>(&self, selector: F) -> Result<&T>
    where
        N: PartialOrd,
        F: FnMut(&T) -> N,
    {
        self.seeded_scan("max_by", selector, |candidate, best| candidate > best)
    }

    /// Element whose selected value is smallest; the first one wins ties.
    pub fn min_by<N, F>(&self, selector: F) -> Result<&T>
    where
        N: PartialOrd,
        F: FnMut(&T) -> N,
    {
        self.seeded_scan("min_by", selector, |candidate, best| candidate < best)
    }

    /// Longest text element, measured in characters.
    pub fn max_by_length(&self) -> Result<&T>
    where
        T: AsRef<str>,
    {
        self.seeded_scan("max_by_length", char_count, |candidate, best| {
            candidate > best
        })
    }

    /// Shortest text element, measured in characters.
    pub fn min_by_length(&self) -> Result<&T>
    where
        T: AsRef<str>,
    {
        self.seeded_scan("min_by_length", char_count, |candidate, best| {
            candidate < best
        })
    }

    /// Element whose selected text is longest.
    pub fn max_by_length_of<S, F>(&self, mut selector: F) -> Result<&T>
    where
        S: AsRef<str>,
        F: FnMut(&T) -> S,
    {
        self.seeded_scan(
            "max_by_length_of",
            |item| char_count(&selector(item)),
            |candidate, best| candidate > best,
        )
    }

    /// Element whose selected text is shortest.
    pub fn min_by_length_of<S, F>(&self, mut selector: F) -> Result<&T>
    where
        S: AsRef<str>,
        F: FnMut(&T) -> S,
    {
        self.seeded_scan(
            "min_by_length_of",
            |item| char_count(&selector(item)),
            |candidate, best| candidate < best,
        )
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn contains_any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Element at `index`.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Alias for [`element_at`](Self::element_at).
    pub fn get(&self, index: usize) -> Result<&T> {
        self.element_at(index)
    }

    pub fn first(&self) -> Result<&T> {
        self.as_slice()
            .first()
            .ok_or(SequenceError::empty("first"))
    }

    pub fn last(&self) -> Result<&T> {
        self.as_slice()
            .last()
            .ok_or(SequenceError::empty("last"))
    }

    fn numeric_extremum<C>(&self, operation: &'static str, replaces: C) -> Result<f64>
    where
        T: Numeric,
        C: Fn(f64, f64) -> bool,
    {
        let mut items = self.iter();
        let mut best = items
            .next()
            .ok_or(SequenceError::empty(operation))?
            .numeric_value()?;
        for item in items {
            let value = item.numeric_value()?;
            if replaces(value, best) {
                best = value;
            }
        }
        Ok(best)
    }

    fn seeded_scan<K, F, C>(&self, operation: &'static str, mut key: F, replaces: C) -> Result<&T>
    where
        F: FnMut(&T) -> K,
        C: Fn(&K, &K) -> bool,
    {
        let mut items = self.iter();
        let mut best = items.next().ok_or(SequenceError::empty(operation))?;
        let mut best_key = key(best);
        for item in items {
            let candidate = key(item);
            if replaces(&candidate, &best_key) {
                best = item;
                best_key = candidate;
            }
        }
        Ok(best)
    }
}

fn char_count<S: AsRef<str> + ?Sized>(text: &S) -> usize {
    text.as_ref().chars().count()
}
