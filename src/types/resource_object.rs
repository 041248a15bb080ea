//! Resource objects: the JSON:API representation of one entity.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::linkage::RelationshipData;
use super::resource_identifier::ResourceIdentifier;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    /// Absent for relationship-only views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    /// Present only when the schema declares relationships. Attributes and
    /// relationships keep the schema's declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IndexMap<String, RelationshipData>>,
}

impl ResourceObject {
    /// A bare `{type, id}` object.
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            attributes: None,
            relationships: None,
        }
    }

    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.resource_type.clone(), self.id.clone())
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.as_ref()?.get(name)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipData> {
        self.relationships.as_ref()?.get(name)
    }

    /// Drop `links` from every relationship, keeping linkage.
    pub fn strip_relationship_links(&mut self) {
        if let Some(relationships) = self.relationships.as_mut() {
            for relationship in relationships.values_mut() {
                relationship.links = None;
            }
        }
    }
}
