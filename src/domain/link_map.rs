//! The link mapping entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete mapping of short codes to target URLs.
///
/// This is the sole persistent entity of the service. It serializes as a
/// flat JSON object (`{"code": "url", ...}`), both in the backing store and
/// in the `GET /links` response. Keys are unique by construction; insertion
/// order is irrelevant. Target URLs are treated as opaque strings and are
/// never validated for well-formedness.
///
/// A `BTreeMap` keeps the serialized file deterministic, which makes store
/// contents easy to diff and assert on in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkMap(BTreeMap<String, String>);

impl LinkMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target URL for `code`, if present.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Returns `true` if `code` is already mapped.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Inserts a mapping, returning the previous target for `code` if any.
    ///
    /// Callers are expected to check [`Self::contains`] first; the creation
    /// flow never overwrites an existing code.
    pub fn insert(&mut self, code: String, url: String) -> Option<String> {
        self.0.insert(code, url)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no mappings exist.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(code, url)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for LinkMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
