use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::error::DocumentError;
use crate::links::LinkBuilder;
use crate::navigation::{EntityNavigator, Navigator};
use crate::options::{BuilderOptions, QueryContext};
use crate::projector::{self, View};
use crate::schema::{ResourceSchema, SchemaRegistry, global_registry};
use crate::traits::{Entity, ResourceType};
use crate::types::{Document, DocumentCollection, DocumentLinks, ResourceObject};
use crate::walker::{self, IncludedSet};

/// Everything one build call reads. Borrowed, never stored past the call.
pub(crate) struct BuildContext<'a> {
    pub(crate) registry: &'a SchemaRegistry,
    pub(crate) navigator: &'a dyn Navigator,
    pub(crate) options: &'a BuilderOptions,
    pub(crate) links: &'a LinkBuilder,
    pub(crate) query: &'a QueryContext,
}

/// Builds JSON:API documents from entities. Cloneable and thread-safe; the
/// registry is shared read-only between concurrent builds.
#[derive(Clone)]
pub struct DocumentBuilder<'r> {
    registry: &'r SchemaRegistry,
    navigator: Arc<dyn Navigator>,
    options: BuilderOptions,
    links: LinkBuilder,
}

impl Debug for DocumentBuilder<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DocumentBuilder")
            .field("schemas", &self.registry.len())
            .field("options", &self.options)
            .finish()
    }
}

impl DocumentBuilder<'static> {
    /// A builder over the process-wide registry.
    pub fn from_global() -> Result<Self, DocumentError> {
        global_registry()
            .map(DocumentBuilder::new)
            .ok_or(DocumentError::RegistryNotInstalled)
    }
}

impl<'r> DocumentBuilder<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            navigator: Arc::new(EntityNavigator),
            options: BuilderOptions::default(),
            links: LinkBuilder::default(),
        }
    }

    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.links = LinkBuilder::new(options.base_url.clone());
        self.options = options;
        self
    }

    pub fn with_navigator<N: Navigator + 'static>(mut self, navigator: N) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    pub fn registry(&self) -> &SchemaRegistry {
        self.registry
    }

    /// Build a single-resource document.
    pub fn build(&self, entity: &dyn Entity, query: &QueryContext) -> Result<Document, DocumentError> {
        let schema = self.registry.require(entity.type_name())?;
        let ctx = self.context(query);

        debug!(
            event = "Build",
            phase = "Primary",
            resource_type = schema.entity_name(),
            id = entity.string_id(),
            include = query.include.len(),
            relationship_only = query.is_relationship_only()
        );

        let data = self.primary(&ctx, schema, entity)?;

        let mut included = IncludedSet::new();
        walker::include(&ctx, &[(schema, entity)], &query.include, &mut included)?;

        let links = self.options.top_level_links.then(|| DocumentLinks {
            self_link: Some(self.links.resource_link(schema.entity_name(), &data.id)),
        });

        debug!(
            event = "Build",
            phase = "Done",
            resource_type = schema.entity_name(),
            included = included.len()
        );

        Ok(Document {
            data,
            included: included.into_vec(),
            links,
        })
    }

    /// Build a collection document; the schema comes from `E::TYPE_NAME`.
    pub fn build_collection<E>(
        &self,
        entities: &[E],
        query: &QueryContext,
    ) -> Result<DocumentCollection, DocumentError>
    where
        E: Entity + ResourceType,
    {
        let schema = self.registry.require(E::TYPE_NAME)?;
        let roots: Vec<&dyn Entity> = entities.iter().map(|e| e as &dyn Entity).collect();
        self.assemble_collection(schema, &roots, query)
    }

    /// Build a collection document from type-erased entities. The element
    /// type is derived from the entities themselves and must be unique.
    pub fn build_dyn_collection(
        &self,
        entities: &[&dyn Entity],
        query: &QueryContext,
    ) -> Result<DocumentCollection, DocumentError> {
        let type_names: Vec<&str> = entities.iter().map(|e| e.type_name()).unique().collect();
        let type_name = match type_names.as_slice() {
            [single] => *single,
            [] => {
                return Err(DocumentError::AmbiguousElementType(
                    "collection is empty".to_string(),
                ));
            }
            many => {
                return Err(DocumentError::AmbiguousElementType(format!(
                    "collection mixes element types {}",
                    many.iter().sorted().join(", ")
                )));
            }
        };
        let schema = self.registry.require(type_name)?;
        self.assemble_collection(schema, entities, query)
    }

    fn assemble_collection(
        &self,
        schema: &ResourceSchema,
        entities: &[&dyn Entity],
        query: &QueryContext,
    ) -> Result<DocumentCollection, DocumentError> {
        let ctx = self.context(query);

        debug!(
            event = "Build",
            phase = "Collection",
            resource_type = schema.entity_name(),
            count = entities.len(),
            include = query.include.len()
        );

        let mut data = Vec::with_capacity(entities.len());
        let mut included = IncludedSet::new();
        for entity in entities {
            data.push(self.primary(&ctx, schema, *entity)?);
            walker::include(&ctx, &[(schema, *entity)], &query.include, &mut included)?;
        }

        Ok(DocumentCollection {
            data,
            included: included.into_vec(),
        })
    }

    fn primary(
        &self,
        ctx: &BuildContext<'_>,
        schema: &ResourceSchema,
        entity: &dyn Entity,
    ) -> Result<ResourceObject, DocumentError> {
        let Some(name) = &ctx.query.relationship else {
            return Ok(projector::project(ctx, schema, entity, View::Primary));
        };
        if schema.relationship(name).is_none() {
            return Err(DocumentError::UnknownRelationship {
                resource: schema.entity_name().to_string(),
                relationship: name.clone(),
            });
        }
        Ok(projector::project(ctx, schema, entity, View::RelationshipOnly))
    }

    fn context<'a>(&'a self, query: &'a QueryContext) -> BuildContext<'a> {
        BuildContext {
            registry: self.registry,
            navigator: self.navigator.as_ref(),
            options: &self.options,
            links: &self.links,
            query,
        }
    }
}

#[cfg(test)]
mod tests;
