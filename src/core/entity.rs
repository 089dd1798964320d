//! Entity traits shared by every stored bakery record

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use uuid::Uuid;

/// Base trait for all entities kept in a repository.
///
/// All entities have:
/// - id: Unique identifier
/// - type: Entity type name (e.g., "order", "recipe")
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural collection name (e.g., "orders", "ingredients")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order", "ingredient")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the entity type name
    fn entity_type(&self) -> &str {
        Self::resource_name_singular()
    }
}

/// Trait for data entities that represent concrete domain objects.
///
/// Data entities extend the base Entity with:
/// - name: A human-readable name
/// - indexed_fields: Fields that can be searched
/// - field_value: Dynamic field access
/// - validate: Invariants checked before a write
pub trait Data: Entity {
    /// Get the name of this data entity
    fn name(&self) -> &str;

    /// List of fields that should be indexed for searching
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Check the entity's invariants. Entities without rules accept everything.
    fn validate_entity(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
