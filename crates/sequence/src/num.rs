//! Numeric and ordering contracts used by folds, extrema and sorting.
//!
//! [`Numeric`] is the bound for the bare folds (`sum`, `average`, `multiply`,
//! `max`, `min`): any [`ToPrimitive`] type qualifies at compile time, and a
//! value that has no `f64` representation surfaces as
//! [`SequenceError::TypeMismatch`] at runtime.
//!
//! [`SortKey`] is the bound for `order_by` keys. It is a total order, which
//! lets floating-point keys participate through `total_cmp` instead of
//! `PartialOrd`.

use std::cmp::Ordering;

use num_traits::ToPrimitive;

use crate::{Result, SequenceError};

/// A value that can take part in a floating-point fold.
pub trait Numeric {
    /// Returns the value as `f64`, or `TypeMismatch` when it has none.
    fn numeric_value(&self) -> Result<f64>;
}

impl<T: ToPrimitive> Numeric for T {
    fn numeric_value(&self) -> Result<f64> {
        self.to_f64().ok_or(SequenceError::TypeMismatch {
            expected: "a value representable as f64",
            found: std::any::type_name::<T>(),
        })
    }
}

/// A key with a total order, usable for stable sorting.
///
/// Implemented for the primitive and string types, `Option` and 2- or
/// 3-tuples of keys. Callers implement it for their own ordered key types
/// (typically by delegating to `Ord::cmp`), including wrappers such as
/// `std::cmp::Reverse`.
pub trait SortKey {
    fn sort_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sort_key_for_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortKey for $t {
                #[inline]
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_sort_key_for_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

impl SortKey for f32 {
    #[inline]
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SortKey for f64 {
    #[inline]
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<K: SortKey + ?Sized> SortKey for &K {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        (**self).sort_cmp(*other)
    }
}

// `None` sorts before every `Some`, as with `Option`'s `Ord`.
impl<K: SortKey> SortKey for Option<K> {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.sort_cmp(b),
        }
    }
}

impl<A: SortKey, B: SortKey> SortKey for (A, B) {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.0
            .sort_cmp(&other.0)
            .then_with(|| self.1.sort_cmp(&other.1))
    }
}

impl<A: SortKey, B: SortKey, C: SortKey> SortKey for (A, B, C) {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.0
            .sort_cmp(&other.0)
            .then_with(|| self.1.sort_cmp(&other.1))
            .then_with(|| self.2.sort_cmp(&other.2))
    }
}
