//! Navigation values and the collaborator that resolves them.

use serde_json::Value;

use crate::schema::RelationshipDescriptor;
use crate::traits::Entity;

/// The value behind one relationship of one entity.
pub enum Navigation<'a> {
    Absent,
    One(&'a dyn Entity),
    Many(Vec<&'a dyn Entity>),
}

impl<'a> Navigation<'a> {
    /// Wrap an optional loaded has-one value.
    pub fn one<E: Entity>(entity: Option<&'a E>) -> Self {
        match entity {
            Some(e) => Navigation::One(e),
            None => Navigation::Absent,
        }
    }

    /// Wrap an optional loaded has-many value. `Some(&[])` stays present.
    pub fn many<E: Entity>(entities: Option<&'a [E]>) -> Self {
        match entities {
            Some(es) => Navigation::Many(es.iter().map(|e| e as &dyn Entity).collect()),
            None => Navigation::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Navigation::Absent)
    }

    /// Flatten into the entities reached, one for has-one, all for has-many.
    pub fn into_entities(self) -> Vec<&'a dyn Entity> {
        match self {
            Navigation::Absent => Vec::new(),
            Navigation::One(e) => vec![e],
            Navigation::Many(es) => es,
        }
    }
}

impl std::fmt::Debug for Navigation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Navigation::Absent => write!(f, "Absent"),
            Navigation::One(e) => write!(f, "One({}:{})", e.type_name(), e.string_id()),
            Navigation::Many(es) => write!(f, "Many(len={})", es.len()),
        }
    }
}

/// Resolves relationship edges of the entity graph.
///
/// This is the only place the builder touches the graph's edges. It must
/// work whether a related value was eagerly loaded or only its foreign key
/// is known.
pub trait Navigator: Send + Sync {
    fn navigate<'a>(
        &self,
        entity: &'a dyn Entity,
        relationship: &RelationshipDescriptor,
    ) -> Navigation<'a>;

    /// Raw foreign key for an independent has-one identifier.
    fn foreign_key(&self, entity: &dyn Entity, property: &str) -> Option<String>;
}

/// Default navigator, delegating to the [`Entity`] capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNavigator;

impl Navigator for EntityNavigator {
    fn navigate<'a>(
        &self,
        entity: &'a dyn Entity,
        relationship: &RelationshipDescriptor,
    ) -> Navigation<'a> {
        entity.related(relationship.internal_name())
    }

    fn foreign_key(&self, entity: &dyn Entity, property: &str) -> Option<String> {
        match entity.property(property)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
