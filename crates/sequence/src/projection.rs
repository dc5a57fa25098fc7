//! Fixed-arity projection records and the `select_new*` operations.
//!
//! Each arity is an independent record with public, positionally named
//! fields (`a`, `b`, `c`, `d`). They carry no identity beyond their values
//! and exist only as elements of a projected sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SequenceHandler;

/// Projection with one field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Anon1<A> {
    pub a: A,
}

/// Projection with two fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Anon2<A, B> {
    pub a: A,
    pub b: B,
}

/// Projection with three fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Anon3<A, B, C> {
    pub a: A,
    pub b: B,
    pub c: C,
}

/// Projection with four fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Anon4<A, B, C, D> {
    pub a: A,
    pub b: B,
    pub c: C,
    pub d: D,
}

impl<A> Anon1<A> {
    pub fn new(a: A) -> Self {
        Self { a }
    }
}

impl<A, B> Anon2<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B, C> Anon3<A, B, C> {
    pub fn new(a: A, b: B, c: C) -> Self {
        Self { a, b, c }
    }
}

impl<A, B, C, D> Anon4<A, B, C, D> {
    pub fn new(a: A, b: B, c: C, d: D) -> Self {
        Self { a, b, c, d }
    }
}

impl<A: fmt::Display> fmt::Display for Anon1<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ a = {} }}", self.a)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Anon2<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ a = {}, b = {} }}", self.a, self.b)
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Anon3<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ a = {}, b = {}, c = {} }}", self.a, self.b, self.c)
    }
}

impl<A, B, C, D> fmt::Display for Anon4<A, B, C, D>
where
    A: fmt::Display,
    B: fmt::Display,
    C: fmt::Display,
    D: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ a = {}, b = {}, c = {}, d = {} }}",
            self.a, self.b, self.c, self.d
        )
    }
}

impl<T> SequenceHandler<T> {
    /// Projects each element into a one-field record.
    pub fn select_new1<A, FA>(&self, mut fa: FA) -> SequenceHandler<Anon1<A>>
    where
        FA: FnMut(&T) -> A,
    {
        self.map(|item| Anon1::new(fa(item)))
    }

    /// Projects each element into a two-field record.
    pub fn select_new2<A, B, FA, FB>(&self, mut fa: FA, mut fb: FB) -> SequenceHandler<Anon2<A, B>>
    where
        FA: FnMut(&T) -> A,
        FB: FnMut(&T) -> B,
    {
        self.map(|item| Anon2::new(fa(item), fb(item)))
    }

    /// Projects each element into a three-field record.
    pub fn select_new3<A, B, C, FA, FB, FC>(
        &self,
        mut fa: FA,
        mut fb: FB,
        mut fc: FC,
    ) -> SequenceHandler<Anon3<A, B, C>>
    where
        FA: FnMut(&T) -> A,
        FB: FnMut(&T) -> B,
        FC: FnMut(&T) -> C,
    {
        self.map(|item| Anon3::new(fa(item), fb(item), fc(item)))
    }

    /// Projects each element into a four-field record.
    pub fn select_new4<A, B, C, D, FA, FB, FC, FD>(
        &self,
        mut fa: FA,
        mut fb: FB,
        mut fc: FC,
        mut fd: FD,
    ) -> SequenceHandler<Anon4<A, B, C, D>>
    where
        FA: FnMut(&T) -> A,
        FB: FnMut(&T) -> B,
        FC: FnMut(&T) -> C,
        FD: FnMut(&T) -> D,
    {
        self.map(|item| Anon4::new(fa(item), fb(item), fc(item), fd(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> SequenceHandler<&'static str> {
        SequenceHandler::wrap(vec!["tv", "radio", "mouse"])
    }

    #[test]
    fn select_new1_wraps_each_value() {
        let lengths = words().select_new1(|w| w.len());
        let values: Vec<usize> = lengths.iter().map(|anon| anon.a).collect();
        assert_eq!(values, vec![2, 5, 5]);
    }

    #[test]
    fn select_new2_keeps_order() {
        let projected = words().select_new2(|w| w.to_uppercase(), |w| w.len());
        assert_eq!(projected.len(), 3);

        let first = projected.first().unwrap();
        assert_eq!(first.a, "TV");
        assert_eq!(first.b, 2);
        assert_eq!(projected.last().unwrap().a, "MOUSE");
    }

    #[test]
    fn select_new3_and_4_apply_every_selector() {
        let three = words().select_new3(|w| w.len(), |w| w.starts_with('r'), |w| w.chars().next());
        let radio = three.element_at(1).unwrap();
        assert_eq!((radio.a, radio.b, radio.c), (5, true, Some('r')));

        let four = words().select_new4(|w| *w, |w| w.len(), |_| 0u8, |w| w.ends_with('e'));
        let mouse = four.last().unwrap();
        assert_eq!(mouse.a, "mouse");
        assert!(mouse.d);
    }

    #[test]
    fn fields_are_writable() {
        let mut anon = Anon2::new("x", 1);
        anon.b += 41;
        assert_eq!(anon.b, 42);
    }

    #[test]
    fn display_lists_fields() {
        assert_eq!(Anon1::new(7).to_string(), "{ a = 7 }");
        assert_eq!(Anon2::new("Tv", 1.5).to_string(), "{ a = Tv, b = 1.5 }");
        assert_eq!(
            Anon4::new(1, 2, 3, 4).to_string(),
            "{ a = 1, b = 2, c = 3, d = 4 }"
        );
    }

    #[test]
    fn serializes_with_positional_names() {
        let json = serde_json::to_value(Anon3::new("Tv", 2, true)).unwrap();
        assert_eq!(json, serde_json::json!({ "a": "Tv", "b": 2, "c": true }));
    }
}
