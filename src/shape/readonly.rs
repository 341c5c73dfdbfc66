//! Read-only wrapper for record values.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A value that can be read but never mutated after construction.
///
/// `Readonly<T>` hands out shared references only: it implements `Deref`
/// but not `DerefMut`, and exposes no setters. The only way to change the
/// value is to take it back out with [`Readonly::into_inner`].
///
/// # Example
///
/// ```rust
/// use shapekit::shape::Readonly;
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let center = Readonly::new(Point { x: 0, y: 0 });
/// assert_eq!(center.x, 0);
/// // center.x = 1; // does not compile: no mutable access
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Readonly<T>(T);

impl<T> Readonly<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    /// Give up the read-only guarantee and return the owned value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Readonly<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Readonly<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Readonly<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Dot {
        x: i32,
        y: i32,
    }

    #[test]
    fn fields_are_readable_through_deref() {
        let dot = Readonly::new(Dot { x: 1, y: 2 });
        assert_eq!(dot.x, 1);
        assert_eq!(dot.get().y, 2);
    }

    #[test]
    fn into_inner_returns_owned_value() {
        let dot = Readonly::new(Dot { x: 1, y: 2 });
        let mut owned = dot.into_inner();
        owned.x = 5;
        assert_eq!(owned, Dot { x: 5, y: 2 });
    }

    #[test]
    fn serializes_transparently() {
        let dot = Readonly::new(Dot { x: 3, y: 4 });
        let json = serde_json::to_string(&dot).unwrap();
        assert_eq!(json, r#"{"x":3,"y":4}"#);

        let back: Readonly<Dot> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dot);
    }

    #[test]
    fn works_with_readonly_sequences() {
        let values = Readonly::new(vec![3, 1, 2]);
        let mut sorted = values.to_vec();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(*values, vec![3, 1, 2]);
    }
}
