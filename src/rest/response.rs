//! One-or-many results for resource operations.
//!
//! The API answers a list or fetch with either a single JSON object or a
//! JSON array. [`Parsed<T>`] keeps that distinction instead of forcing every
//! caller to unwrap a one-element vector.
//!
//! # Example
//!
//! ```rust
//! use kapi::rest::{ApiObject, Parsed};
//! use serde_json::json;
//!
//! let many: Parsed<ApiObject> = Parsed::from_value(json!([{"a": 1}, {"a": 2}]));
//! assert!(many.is_many());
//! assert_eq!(many.len(), 2);
//!
//! let one: Parsed<ApiObject> = Parsed::from_value(json!({"a": 1}));
//! assert_eq!(one.one().unwrap().json(), r#"{"a":1}"#);
//! ```

use serde_json::Value;

use crate::rest::ApiObject;

/// A parsed response payload: one instance, or one per array element.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed<T> {
    /// The payload was a single (non-array) value.
    One(T),
    /// The payload was an array.
    Many(Vec<T>),
}

impl<T: From<ApiObject>> Parsed<T> {
    /// Maps a JSON payload into instances of `T`.
    ///
    /// An array yields [`Parsed::Many`] with one instance per element, in
    /// order. Anything else yields [`Parsed::One`].
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(
                items
                    .into_iter()
                    .map(|item| T::from(ApiObject::from(item)))
                    .collect(),
            ),
            other => Self::One(T::from(ApiObject::from(other))),
        }
    }
}

impl<T> Parsed<T> {
    /// Returns `true` if the payload was an array.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Returns the number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Returns `true` for an empty array payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the single instance, or `None` for an array payload.
    #[must_use]
    pub fn one(self) -> Option<T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    /// Flattens into a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Iterates over the instances.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }
}

impl<T> IntoIterator for Parsed<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Parsed<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
