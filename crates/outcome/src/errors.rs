//! Ordered error messages carried by a failure.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::slice;
use std::vec;

/// An ordered, immutable sequence of error messages.
///
/// Insertion order is preserved and duplicates are kept. Messages are
/// opaque caller-defined text; nothing here inspects them. An empty
/// sequence is representable but a failure normally carries at least one
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[error("{}", .0.join("; "))]
pub struct Errors(Vec<String>);

impl Errors {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a new sequence with `error` appended after the existing
    /// messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Errors;
    ///
    /// let errors = Errors::from(["error"]).with("new error");
    /// assert_eq!(errors.as_slice(), ["error", "new error"]);
    /// ```
    #[must_use]
    pub fn with<S: Into<String>>(self, error: S) -> Self {
        let mut messages = self.0;
        messages.push(error.into());
        Self(messages)
    }

    /// Returns a new sequence with every message of `other` appended.
    #[must_use]
    pub fn with_all(self, other: Errors) -> Self {
        let mut messages = self.0;
        messages.extend(other.0);
        Self(messages)
    }

    /// Returns the messages as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns an iterator over the messages in order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first message, if any.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Converts to the inner vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Errors {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Errors {
    fn from(messages: [S; N]) -> Self {
        messages.into_iter().collect()
    }
}

impl From<Errors> for Vec<String> {
    fn from(errors: Errors) -> Self {
        errors.0
    }
}

impl<S: Into<String>> FromIterator<S> for Errors {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Errors {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[String]> for Errors {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
