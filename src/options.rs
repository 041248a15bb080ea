//! Builder configuration and per-call query context.

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::links::LinkFlags;
use crate::types::{InclusionPath, SparseFieldset};

/// Document-wide settings, typically loaded once with the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuilderOptions {
    /// Prefix for generated links, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    pub omit_null_attributes: bool,
    /// Master switch and default for relationship links. Empty disables them.
    pub default_relationship_links: LinkFlags,
    /// Emit a top-level `links.self` on single-resource documents.
    pub top_level_links: bool,
    /// Give included resources their own `relationships` block.
    pub included_linkage: bool,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_omit_null_attributes(mut self, omit: bool) -> Self {
        self.omit_null_attributes = omit;
        self
    }

    pub fn with_default_relationship_links(mut self, links: LinkFlags) -> Self {
        self.default_relationship_links = links;
        self
    }

    pub fn with_top_level_links(mut self, enabled: bool) -> Self {
        self.top_level_links = enabled;
        self
    }

    pub fn with_included_linkage(mut self, enabled: bool) -> Self {
        self.included_linkage = enabled;
        self
    }
}

/// What the caller asked for in one build call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueryContext {
    pub fields: SparseFieldset,
    pub include: Vec<InclusionPath>,
    /// Relationship name for relationship-endpoint responses; primary data is
    /// then reduced to `{type, id}`.
    pub relationship: Option<String>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `include` and `fields` query parameter values.
    pub fn from_query(include: Option<&str>, fields: Option<&str>) -> Result<Self, DocumentError> {
        Ok(Self {
            fields: fields.map(SparseFieldset::parse).unwrap_or_default(),
            include: include
                .map(InclusionPath::parse_list)
                .transpose()?
                .unwrap_or_default(),
            relationship: None,
        })
    }

    pub fn for_relationship(name: impl Into<String>) -> Self {
        Self {
            relationship: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_include(mut self, path: &str) -> Result<Self, DocumentError> {
        self.include.push(path.parse()?);
        Ok(self)
    }

    pub fn with_fields(mut self, fields: SparseFieldset) -> Self {
        self.fields = fields;
        self
    }

    pub fn is_relationship_only(&self) -> bool {
        self.relationship.is_some()
    }
}
