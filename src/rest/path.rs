//! URL building for REST resources.
//!
//! A [`PathSpec`] is an ordered list of `(segment, value)` pairs. Order is
//! significant: it encodes the resource hierarchy, so the first pair added
//! is always rendered first.
//!
//! # Example
//!
//! ```rust
//! use kapi::rest::{build_url, PathSpec};
//!
//! let spec = PathSpec::new().with("alice", Some("resume1"));
//! let url = build_url("https://example.com/api", "resume", &spec, &[]);
//! assert_eq!(url, "https://example.com/api/resume/alice/resume1");
//!
//! let spec = PathSpec::new().segment("weekdays");
//! let url = build_url("https://example.com/api", "avail", &spec, &["edit"]);
//! assert_eq!(url, "https://example.com/api/avail/weekdays/edit");
//! ```

/// An ordered path specification.
///
/// Each entry renders as `segment` when it has no value and
/// `segment/value` otherwise. Empty values are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSpec {
    entries: Vec<(String, Option<String>)>,
}

impl PathSpec {
    /// Creates an empty path specification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a segment followed by an optional value.
    #[must_use]
    pub fn with(mut self, segment: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.push(segment, value);
        self
    }

    /// Appends a bare segment.
    #[must_use]
    pub fn segment(self, segment: impl Into<String>) -> Self {
        self.with(segment, None::<String>)
    }

    /// Appends a segment followed by an optional value, in place.
    pub fn push(&mut self, segment: impl Into<String>, value: Option<impl Into<String>>) {
        self.entries.push((segment.into(), value.map(Into::into)));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(segment, value)| (segment.as_str(), value.as_deref()))
    }

    /// Renders the entries joined with `/`.
    #[must_use]
    pub fn render(&self) -> String {
        self.iter()
            .map(|(segment, value)| match value {
                Some(value) if !value.is_empty() => format!("{segment}/{value}"),
                _ => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for PathSpec
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (segment, value) in iter {
            spec.push(segment, value);
        }
        spec
    }
}

/// Builds a full URL for a resource.
///
/// Joins `base`, `object_name`, the rendered `spec` and the `trailing`
/// segments with `/`, skipping any part that is empty.
#[must_use]
pub fn build_url(base: &str, object_name: &str, spec: &PathSpec, trailing: &[&str]) -> String {
    let start = spec.render();
    let end = trailing.join("/");

    [base, object_name, start.as_str(), end.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
