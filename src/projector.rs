//! Resource and attribute projection.

use serde_json::{Map, Value};

use crate::builder::BuildContext;
use crate::options::BuilderOptions;
use crate::resolver;
use crate::schema::{AttrDescriptor, RelationshipDescriptor, ResourceSchema};
use crate::traits::Entity;
use crate::types::{ResourceObject, SparseFieldset};

/// How a resource object is being projected.
#[derive(Debug, Clone, Copy)]
pub(crate) enum View<'a> {
    /// Primary data of a document.
    Primary,
    /// Primary data of a relationship endpoint response: `{type, id}` only.
    RelationshipOnly,
    /// Side-loaded through `via`.
    Included { via: &'a RelationshipDescriptor },
}

/// Decides which attributes make it into `attributes`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AttributeProjector<'a> {
    omit_nulls: bool,
    fields: &'a SparseFieldset,
}

impl<'a> AttributeProjector<'a> {
    pub(crate) fn new(options: &BuilderOptions, fields: &'a SparseFieldset) -> Self {
        Self {
            omit_nulls: options.omit_null_attributes,
            fields,
        }
    }

    pub(crate) fn include(
        &self,
        attr: &AttrDescriptor,
        value: &Value,
        owner: Option<&RelationshipDescriptor>,
    ) -> bool {
        if self.omit_nulls && value.is_null() {
            return false;
        }
        if attr.is_identifier() {
            return false;
        }
        if !self.fields.is_requested() {
            return true;
        }
        match owner {
            Some(relationship) => self.fields.contains(&format!(
                "{}.{}",
                relationship.public_name(),
                attr.public_name()
            )),
            None => self.fields.contains(attr.public_name()),
        }
    }
}

pub(crate) fn project(
    ctx: &BuildContext<'_>,
    schema: &ResourceSchema,
    entity: &dyn Entity,
    view: View<'_>,
) -> ResourceObject {
    let mut data = ResourceObject::new(schema.entity_name(), entity.string_id());

    let (owner, with_relationships) = match view {
        View::RelationshipOnly => return data,
        View::Primary => (None, true),
        View::Included { via } => (Some(via), ctx.options.included_linkage),
    };

    let filter = AttributeProjector::new(ctx.options, &ctx.query.fields);
    let mut attributes = Map::new();
    for attr in schema.attributes() {
        let value = attr.value(entity);
        if filter.include(attr, &value, owner) {
            attributes.insert(attr.public_name().to_string(), value);
        }
    }
    data.attributes = Some(attributes);

    if with_relationships && !schema.relationships().is_empty() {
        data.relationships = Some(
            schema
                .relationships()
                .iter()
                .map(|relationship| {
                    (
                        relationship.public_name().to_string(),
                        resolver::resolve(ctx, schema, relationship, entity),
                    )
                })
                .collect(),
        );
    }

    data
}
