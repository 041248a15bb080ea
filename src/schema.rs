//! Resource schemas and the registry that maps type names to them.
//!
//! A schema is declared once per entity type and registered under the
//! entity's [`type_name`](crate::Entity::type_name). Public names become JSON
//! member names, so they are validated against the JSON:API member name
//! rules when the registry is built.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};
use tracing::debug;

use crate::error::DocumentError;
use crate::links::LinkFlags;
use crate::traits::Entity;

/// Internal name of the identifier attribute, never emitted in `attributes`.
pub const ID_ATTRIBUTE: &str = "id";

static MEMBER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9_\- ]*[A-Za-z0-9])?$").expect("valid member name regex")
});

static GLOBAL_REGISTRY: OnceCell<SchemaRegistry> = OnceCell::new();

pub type Accessor = Arc<dyn Fn(&dyn Entity) -> Value + Send + Sync>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    HasOne,
    HasMany,
}

#[derive(Clone)]
pub struct AttrDescriptor {
    public_name: String,
    internal_name: String,
    accessor: Option<Accessor>,
}

impl AttrDescriptor {
    /// An attribute whose public and internal names are the same.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            public_name: name.clone(),
            internal_name: name,
            accessor: None,
        }
    }

    pub fn with_internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = internal_name.into();
        self
    }

    /// Read the value with `accessor` instead of [`Entity::attribute`].
    pub fn with_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&dyn Entity) -> Value + Send + Sync + 'static,
    {
        self.accessor = Some(Arc::new(accessor));
        self
    }

    pub fn public_name(&self) -> &str {
        &self.public_name
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn is_identifier(&self) -> bool {
        self.internal_name == ID_ATTRIBUTE
    }

    pub fn value(&self, entity: &dyn Entity) -> Value {
        match &self.accessor {
            Some(accessor) => accessor(entity),
            None => entity.attribute(&self.internal_name),
        }
    }
}

impl Debug for AttrDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AttrDescriptor")
            .field("public_name", &self.public_name)
            .field("internal_name", &self.internal_name)
            .field("custom_accessor", &self.accessor.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDescriptor {
    public_name: String,
    internal_name: String,
    cardinality: Cardinality,
    target_type: String,
    links: Option<LinkFlags>,
    independent_id: Option<String>,
}

impl RelationshipDescriptor {
    pub fn has_one(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self::new(name.into(), Cardinality::HasOne, target_type.into())
    }

    pub fn has_many(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self::new(name.into(), Cardinality::HasMany, target_type.into())
    }

    fn new(name: String, cardinality: Cardinality, target_type: String) -> Self {
        Self {
            internal_name: name.clone(),
            public_name: name,
            cardinality,
            target_type,
            links: None,
            independent_id: None,
        }
    }

    pub fn with_internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = internal_name.into();
        self
    }

    /// Override the document-wide default link visibility for this relationship.
    pub fn with_links(mut self, links: LinkFlags) -> Self {
        self.links = Some(links);
        self
    }

    /// Name the scalar property holding the related id, so linkage can be
    /// produced without loading the related entity. Only used for has-one.
    pub fn with_independent_id(mut self, property: impl Into<String>) -> Self {
        self.independent_id = Some(property.into());
        self
    }

    pub fn public_name(&self) -> &str {
        &self.public_name
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn is_has_one(&self) -> bool {
        self.cardinality == Cardinality::HasOne
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn links(&self) -> Option<LinkFlags> {
        self.links
    }

    pub fn independent_id(&self) -> Option<&str> {
        self.independent_id.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct ResourceSchema {
    entity_name: String,
    attributes: Vec<AttrDescriptor>,
    relationships: Vec<RelationshipDescriptor>,
}

impl ResourceSchema {
    /// `entity_name` is the JSON:API `type`, e.g. "books".
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            attributes: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attr: AttrDescriptor) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_relationship(mut self, relationship: RelationshipDescriptor) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn attributes(&self) -> &[AttrDescriptor] {
        &self.attributes
    }

    pub fn relationships(&self) -> &[RelationshipDescriptor] {
        &self.relationships
    }

    pub fn relationship(&self, public_name: &str) -> Option<&RelationshipDescriptor> {
        self.relationships
            .iter()
            .find(|r| r.public_name == public_name)
    }

    fn validate(&self) -> Result<(), DocumentError> {
        let names = std::iter::once(self.entity_name.as_str())
            .chain(self.attributes.iter().map(|a| a.public_name()))
            .chain(self.relationships.iter().map(|r| r.public_name()));
        for name in names {
            if !is_valid_member_name(name) {
                return Err(DocumentError::InvalidMemberName(format!(
                    "'{name}' in schema '{}'",
                    self.entity_name
                )));
            }
        }
        Ok(())
    }
}

/// JSON:API member names: alphanumerics, with `-`, `_` and space allowed
/// anywhere but the first and last character.
pub fn is_valid_member_name(name: &str) -> bool {
    MEMBER_NAME.is_match(name)
}

/// Read-only mapping from entity type name to schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ResourceSchema>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new()
    }

    pub fn schema(&self, type_name: &str) -> Option<&ResourceSchema> {
        self.schemas.get(type_name)
    }

    /// Schema lookup that treats a miss as an error.
    pub fn require(&self, type_name: &str) -> Result<&ResourceSchema, DocumentError> {
        self.schema(type_name)
            .ok_or_else(|| DocumentError::SchemaNotFound(type_name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    schemas: Vec<(String, ResourceSchema)>,
}

impl SchemaRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_schema(mut self, type_name: impl Into<String>, schema: ResourceSchema) -> Self {
        self.schemas.push((type_name.into(), schema));
        self
    }

    pub fn build(self) -> Result<SchemaRegistry, DocumentError> {
        let mut schemas = HashMap::with_capacity(self.schemas.len());
        for (type_name, schema) in self.schemas {
            schema.validate()?;
            if schemas.contains_key(&type_name) {
                return Err(DocumentError::DuplicateSchema(type_name));
            }
            debug!(
                event = "Registry",
                phase = "Register",
                type_name = type_name.as_str(),
                entity_name = schema.entity_name(),
                attributes = schema.attributes().len(),
                relationships = schema.relationships().len()
            );
            schemas.insert(type_name, schema);
        }
        Ok(SchemaRegistry { schemas })
    }
}

/// Install the process-wide registry. Can only succeed once.
pub fn install_global_registry(registry: SchemaRegistry) -> Result<(), DocumentError> {
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| DocumentError::RegistryAlreadyInstalled)
}

pub fn global_registry() -> Option<&'static SchemaRegistry> {
    GLOBAL_REGISTRY.get()
}
