//! Inclusion path traversal.
//!
//! Each requested path is walked from every root, one segment per level.
//! Recursion is driven by the index into the path, never by what the graph
//! happens to connect, so a cyclic graph is only revisited as far as a path
//! explicitly asks for.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::builder::BuildContext;
use crate::error::DocumentError;
use crate::projector::{self, View};
use crate::schema::ResourceSchema;
use crate::traits::Entity;
use crate::types::{InclusionPath, ResourceIdentifier, ResourceObject};

/// Included resources in first-seen order, unique by `(type, id)`.
#[derive(Debug, Clone, Default)]
pub(crate) struct IncludedSet {
    resources: Vec<ResourceObject>,
    seen: HashSet<ResourceIdentifier>,
}

impl IncludedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add `resource` unless one with the same `(type, id)` is already present.
    pub(crate) fn insert(&mut self, resource: ResourceObject) -> bool {
        if !self.seen.insert(resource.identifier()) {
            return false;
        }
        self.resources.push(resource);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.resources.len()
    }

    pub(crate) fn into_vec(self) -> Vec<ResourceObject> {
        self.resources
    }
}

pub(crate) fn include(
    ctx: &BuildContext<'_>,
    roots: &[(&ResourceSchema, &dyn Entity)],
    paths: &[InclusionPath],
    included: &mut IncludedSet,
) -> Result<(), DocumentError> {
    for (schema, root) in roots {
        for path in paths {
            debug!(
                event = "Include",
                phase = "Path",
                resource_type = schema.entity_name(),
                id = root.string_id(),
                path = path.to_string()
            );
            walk(ctx, schema, *root, path.segments(), 0, included)?;
        }
    }
    Ok(())
}

fn walk(
    ctx: &BuildContext<'_>,
    schema: &ResourceSchema,
    entity: &dyn Entity,
    chain: &[String],
    index: usize,
    included: &mut IncludedSet,
) -> Result<(), DocumentError> {
    let requested = &chain[index];
    let relationship =
        schema
            .relationship(requested)
            .ok_or_else(|| DocumentError::UnknownRelationship {
                resource: schema.entity_name().to_string(),
                relationship: requested.clone(),
            })?;

    for element in ctx.navigator.navigate(entity, relationship).into_entities() {
        let Some(element_schema) = ctx.registry.schema(element.type_name()) else {
            warn!(
                event = "Include",
                phase = "Schema",
                type_name = element.type_name(),
                relationship = relationship.public_name()
            );
            continue;
        };

        let resource = projector::project(
            ctx,
            element_schema,
            element,
            View::Included { via: relationship },
        );
        if included.insert(resource) {
            debug!(
                event = "Include",
                phase = "Added",
                resource_type = element_schema.entity_name(),
                id = element.string_id(),
                depth = index + 1
            );
        }

        if index + 1 < chain.len() {
            walk(ctx, element_schema, element, chain, index + 1, included)?;
        }
    }

    Ok(())
}
