//! Relationship linkage and navigation links.

use serde::{Deserialize, Serialize};

use super::resource_identifier::ResourceIdentifier;

/// Resource linkage for one relationship: exactly one of null, a single
/// identifier or a sequence of identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(untagged)]
pub enum Linkage {
    #[default]
    Null,
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

impl Linkage {
    pub fn is_null(&self) -> bool {
        matches!(self, Linkage::Null)
    }

    /// All identifiers carried by this linkage.
    pub fn identifiers(&self) -> Vec<&ResourceIdentifier> {
        match self {
            Linkage::Null => Vec::new(),
            Linkage::One(id) => vec![id],
            Linkage::Many(ids) => ids.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RelationshipLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

impl RelationshipLinks {
    pub fn is_empty(&self) -> bool {
        self.self_link.is_none() && self.related.is_none()
    }
}

/// A relationship object: `{links?, data}`. `data` is always emitted, as
/// `null` when there is no linkage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RelationshipData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelationshipLinks>,
    #[serde(default)]
    pub data: Linkage,
}

impl RelationshipData {
    pub fn new(data: Linkage) -> Self {
        Self { links: None, data }
    }

    pub fn with_links(mut self, links: Option<RelationshipLinks>) -> Self {
        self.links = links;
        self
    }
}
