//! Schema-driven JSON:API document builder.
//!
//! Entities expose their values through [`Entity`]; their shape is declared
//! once in a [`SchemaRegistry`]. A [`DocumentBuilder`] projects an entity (or
//! a collection) into a [`Document`], side-loading related resources along
//! the requested inclusion paths.
//!
//! ```rust,ignore
//! let builder = DocumentBuilder::new(&registry);
//! let query = QueryContext::from_query(Some("author"), None)?;
//! let document = builder.build(&book, &query)?;
//! ```

pub use builder::DocumentBuilder;
pub use error::DocumentError;
pub use links::{LinkBuilder, LinkFlags};
pub use navigation::{EntityNavigator, Navigation, Navigator};
pub use options::{BuilderOptions, QueryContext};
pub use schema::{
    Accessor, AttrDescriptor, Cardinality, ID_ATTRIBUTE, RelationshipDescriptor, ResourceSchema,
    SchemaRegistry, SchemaRegistryBuilder, global_registry, install_global_registry,
    is_valid_member_name,
};
pub use serializer::{DocumentSerializer, null_data_response};
pub use traits::{Entity, ResourceType};
pub use types::{
    Document, DocumentCollection, DocumentLinks, InclusionPath, Linkage, RelationshipData,
    RelationshipLinks, ResourceIdentifier, ResourceObject, SparseFieldset,
};

mod builder;
mod error;
mod links;
mod navigation;
mod options;
mod projector;
mod resolver;
mod schema;
mod serializer;
mod traits;
mod types;
mod walker;

#[cfg(test)]
mod test_fixtures;
