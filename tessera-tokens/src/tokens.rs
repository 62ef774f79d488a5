//! Ordered token maps.

use indexmap::IndexMap;
use serde::Serialize;

use crate::serialize::to_snake_case;

/// A flat, insertion-ordered map from token name to color string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SemanticTokens(IndexMap<String, String>);

impl SemanticTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Inserts a token. An existing name keeps its position and takes the new
    /// value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns a copy with every key renamed by [`to_snake_case`], keeping the
    /// original order.
    pub fn to_snake_case(&self) -> Self {
        self.0
            .iter()
            .map(|(name, value)| (to_snake_case(name), value.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for SemanticTokens {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
