//! Document model types.
//!
//! Everything here is created fresh for one build call and serializes in the
//! JSON:API media-type shape:
//! - `ResourceIdentifier`: `{"type": "people", "id": "7"}`
//! - `ResourceObject`: identifier plus `attributes` and `relationships`
//! - `Document` / `DocumentCollection`: `data`, `included`, `links`

mod document;
mod fieldset;
mod inclusion_path;
mod linkage;
mod resource_identifier;
mod resource_object;

pub use document::{Document, DocumentCollection, DocumentLinks};
pub use fieldset::SparseFieldset;
pub use inclusion_path::InclusionPath;
pub use linkage::{Linkage, RelationshipData, RelationshipLinks};
pub use resource_identifier::ResourceIdentifier;
pub use resource_object::ResourceObject;
