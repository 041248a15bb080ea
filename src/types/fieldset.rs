//! Sparse fieldsets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Requested field names. Fields of included resources are written as
/// `relationship.attribute`. An empty fieldset means "all fields".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SparseFieldset(BTreeSet<String>);

impl SparseFieldset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma separated `fields` parameter, e.g. `title,author.name`.
    pub fn parse(s: &str) -> Self {
        s.split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into());
        self
    }

    pub fn is_requested(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SparseFieldset {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
