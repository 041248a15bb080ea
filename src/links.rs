use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which navigation links to emit for a relationship.
    ///
    /// An empty set means no links at all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LinkFlags: u8 {
        /// `{base}/{type}/{id}/relationships/{name}`
        const SELF = 1 << 0;

        /// `{base}/{type}/{id}/{name}`
        const RELATED = 1 << 1;

        const ALL = Self::SELF.bits() | Self::RELATED.bits();
    }
}

impl Default for LinkFlags {
    fn default() -> Self {
        LinkFlags::empty()
    }
}

/// Link visibility for one relationship: the document-wide default acts as a
/// master switch, the descriptor's own flags (when set) pick which links.
pub fn effective_links(default: LinkFlags, descriptor: Option<LinkFlags>) -> LinkFlags {
    if default.is_empty() {
        return LinkFlags::empty();
    }
    descriptor.unwrap_or(default)
}

#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resource_link(&self, entity_name: &str, id: &str) -> String {
        format!("{}/{entity_name}/{id}", self.base_url)
    }

    pub fn self_relation_link(&self, entity_name: &str, id: &str, relationship: &str) -> String {
        format!("{}/{entity_name}/{id}/relationships/{relationship}", self.base_url)
    }

    pub fn related_relation_link(&self, entity_name: &str, id: &str, relationship: &str) -> String {
        format!("{}/{entity_name}/{id}/{relationship}", self.base_url)
    }
}
