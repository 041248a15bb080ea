//! Relationship linkage resolution.

use tracing::warn;

use crate::builder::BuildContext;
use crate::links::{LinkFlags, effective_links};
use crate::navigation::Navigation;
use crate::schema::{Cardinality, RelationshipDescriptor, ResourceSchema};
use crate::traits::Entity;
use crate::types::{Linkage, RelationshipData, RelationshipLinks, ResourceIdentifier};

pub(crate) fn resolve(
    ctx: &BuildContext<'_>,
    schema: &ResourceSchema,
    relationship: &RelationshipDescriptor,
    entity: &dyn Entity,
) -> RelationshipData {
    let links = relationship_links(ctx, schema, relationship, &entity.string_id());

    let linkage = match (ctx.navigator.navigate(entity, relationship), relationship.cardinality()) {
        (Navigation::Absent, _) => absent_linkage(ctx, relationship, entity),
        (Navigation::One(related), Cardinality::HasOne) => {
            identifier(ctx, related).map_or(Linkage::Null, Linkage::One)
        }
        (Navigation::One(related), Cardinality::HasMany) => identifier(ctx, related)
            .map_or(Linkage::Null, |id| Linkage::Many(vec![id])),
        (Navigation::Many(related), Cardinality::HasMany) => related
            .iter()
            .map(|e| identifier(ctx, *e))
            .collect::<Option<Vec<_>>>()
            .map_or(Linkage::Null, Linkage::Many),
        (Navigation::Many(related), Cardinality::HasOne) => match related.as_slice() {
            [single] => identifier(ctx, *single).map_or(Linkage::Null, Linkage::One),
            _ => {
                warn!(
                    event = "Resolve",
                    phase = "Cardinality",
                    resource_type = schema.entity_name(),
                    relationship = relationship.public_name(),
                    count = related.len()
                );
                Linkage::Null
            }
        },
    };

    RelationshipData::new(linkage).with_links(links)
}

/// Identifier for a loaded related entity, typed by its own schema.
fn identifier(ctx: &BuildContext<'_>, entity: &dyn Entity) -> Option<ResourceIdentifier> {
    match ctx.registry.schema(entity.type_name()) {
        Some(schema) => Some(ResourceIdentifier::new(
            schema.entity_name(),
            entity.string_id(),
        )),
        None => {
            warn!(
                event = "Resolve",
                phase = "Schema",
                type_name = entity.type_name(),
                id = entity.string_id()
            );
            None
        }
    }
}

/// Nothing loaded: a has-one may still be linked through its foreign key.
fn absent_linkage(
    ctx: &BuildContext<'_>,
    relationship: &RelationshipDescriptor,
    entity: &dyn Entity,
) -> Linkage {
    if !relationship.is_has_one() {
        return Linkage::Null;
    }
    let Some(property) = relationship.independent_id() else {
        return Linkage::Null;
    };
    let Some(foreign_key) = ctx.navigator.foreign_key(entity, property) else {
        return Linkage::Null;
    };

    match ctx.registry.schema(relationship.target_type()) {
        Some(target) => Linkage::One(ResourceIdentifier::new(target.entity_name(), foreign_key)),
        None => {
            warn!(
                event = "Resolve",
                phase = "Schema",
                type_name = relationship.target_type(),
                relationship = relationship.public_name()
            );
            Linkage::Null
        }
    }
}

fn relationship_links(
    ctx: &BuildContext<'_>,
    schema: &ResourceSchema,
    relationship: &RelationshipDescriptor,
    id: &str,
) -> Option<RelationshipLinks> {
    let flags = effective_links(ctx.options.default_relationship_links, relationship.links());
    let links = RelationshipLinks {
        self_link: flags.contains(LinkFlags::SELF).then(|| {
            ctx.links
                .self_relation_link(schema.entity_name(), id, relationship.public_name())
        }),
        related: flags.contains(LinkFlags::RELATED).then(|| {
            ctx.links
                .related_relation_link(schema.entity_name(), id, relationship.public_name())
        }),
    };
    (!links.is_empty()).then_some(links)
}
