use serde_json::Value;

use crate::navigation::Navigation;

/// Anything that can be projected into a JSON:API resource object.
///
/// The schema for an entity lives in a [`SchemaRegistry`](crate::SchemaRegistry)
/// keyed by [`Entity::type_name`]; the entity itself only exposes its values.
pub trait Entity {
    /// The registry key for this entity's schema, e.g. "Book".
    fn type_name(&self) -> &str;

    /// The stable identifier, rendered as the resource object's `id`.
    fn string_id(&self) -> String;

    /// Attribute value by internal name, `Value::Null` when unset or unknown.
    fn attribute(&self, _name: &str) -> Value {
        Value::Null
    }

    /// Navigation value by relationship internal name, absent by default.
    fn related(&self, _name: &str) -> Navigation<'_> {
        Navigation::Absent
    }

    /// Raw scalar property, used for foreign keys that stand in for an
    /// unloaded has-one relationship.
    fn property(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Statically known type name, used to pick a collection's schema without
/// looking at its elements.
pub trait ResourceType {
    const TYPE_NAME: &'static str;
}
