//! JSON text encoding of built documents.
//!
//! Documents handed to a remote JSON:API server carry linkage only, so the
//! serializer strips top-level and relationship links before encoding.

use serde_json::json;
use tracing::debug;

use crate::builder::DocumentBuilder;
use crate::error::DocumentError;
use crate::options::QueryContext;
use crate::traits::{Entity, ResourceType};

#[derive(Debug, Clone, Copy)]
pub struct DocumentSerializer<'b, 'r> {
    builder: &'b DocumentBuilder<'r>,
}

impl<'b, 'r> DocumentSerializer<'b, 'r> {
    pub fn new(builder: &'b DocumentBuilder<'r>) -> Self {
        Self { builder }
    }

    pub fn serialize(&self, entity: &dyn Entity, query: &QueryContext) -> Result<String, DocumentError> {
        let document = self.builder.build(entity, query)?.remove_links();
        Ok(serde_json::to_string(&document)?)
    }

    pub fn serialize_collection<E>(
        &self,
        entities: &[E],
        query: &QueryContext,
    ) -> Result<String, DocumentError>
    where
        E: Entity + ResourceType,
    {
        let documents = self.builder.build_collection(entities, query)?.remove_links();
        Ok(serde_json::to_string(&documents)?)
    }

    /// Like [`serialize`](Self::serialize), but a missing entity encodes as
    /// `{"data":null}`.
    pub fn serialize_optional(
        &self,
        entity: Option<&dyn Entity>,
        query: &QueryContext,
    ) -> Result<String, DocumentError> {
        match entity {
            Some(entity) => self.serialize(entity, query),
            None => {
                debug!(event = "Serialize", phase = "NullData");
                Ok(null_data_response())
            }
        }
    }
}

pub fn null_data_response() -> String {
    json!({ "data": null }).to_string()
}
