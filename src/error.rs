use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentError {
    #[error("{resource} does not contain relationship {relationship}")]
    UnknownRelationship {
        resource: String,
        relationship: String,
    },

    #[error("cannot determine a single element type: {0}")]
    AmbiguousElementType(String),

    #[error("no resource schema registered for type {0}")]
    SchemaNotFound(String),

    #[error("invalid inclusion path: {0}")]
    InvalidInclusionPath(String),

    #[error("invalid member name: {0}")]
    InvalidMemberName(String),

    #[error("schema already registered for type {0}")]
    DuplicateSchema(String),

    #[error("a global schema registry is already installed")]
    RegistryAlreadyInstalled,

    #[error("no global schema registry installed")]
    RegistryNotInstalled,

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::SerializationError(err.to_string())
    }
}
