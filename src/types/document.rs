//! Top-level documents.

use serde::{Deserialize, Serialize};

use super::resource_object::ResourceObject;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A single-resource document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub data: ResourceObject,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<DocumentLinks>,
}

impl Document {
    /// Drop top-level and relationship links, keeping all linkage.
    pub fn remove_links(mut self) -> Self {
        self.links = None;
        self.data.strip_relationship_links();
        for resource in &mut self.included {
            resource.strip_relationship_links();
        }
        self
    }
}

/// A collection document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentCollection {
    pub data: Vec<ResourceObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
}

impl DocumentCollection {
    pub fn remove_links(mut self) -> Self {
        for resource in self.data.iter_mut().chain(self.included.iter_mut()) {
            resource.strip_relationship_links();
        }
        self
    }
}
