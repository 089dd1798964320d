//! In-memory implementation of DataService for testing and development

use crate::core::{Data, DataService};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory data service implementation
///
/// Keeps entities in insertion order so `list` is stable between calls.
/// Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryDataService<T: Data> {
    entities: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: Data> InMemoryDataService<T> {
    /// Create a new, empty in-memory data service
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Seed a service with existing records, as they were exported.
    ///
    /// Records are taken as-is: no validation runs, so data that predates a
    /// rule can still be loaded and planned.
    pub fn from_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }
}

impl<T: Data> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Data> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        entity.validate_entity()?;

        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        entities.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, entity: T) -> Result<T> {
        entity.validate_entity()?;

        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = entities
            .get_mut(id)
            .ok_or_else(|| anyhow!("{} '{}' not found", T::resource_name_singular(), id))?;
        *slot = entity.clone();

        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // shift_remove keeps the remaining records in insertion order
        entities.shift_remove(id);

        Ok(())
    }

    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities
            .values()
            .filter(|entity| {
                entity
                    .field_value(field)
                    .is_some_and(|found| found.matches(value))
            })
            .cloned()
            .collect())
    }
}
