//! Repository traits for the bakery collections

use crate::core::Data;
use crate::core::error::{PlannerResult, StorageError};
use crate::entities::Order;
use crate::planning::ProductionWindow;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing data entities
///
/// Implementations provide CRUD operations for a specific entity type.
/// The planner is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait DataService<T: Data>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all entities, in the order they were stored
    async fn list(&self) -> Result<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, id: &Uuid, entity: T) -> Result<T>;

    /// Delete an entity
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Search entities by field values
    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>>;
}

/// Date-range queries over an order repository
#[async_trait]
pub trait OrderQueries: Send + Sync {
    /// Orders whose delivery date falls inside `window`, in stored order.
    ///
    /// An order with an unparsable delivery date fails the whole query.
    async fn list_between(&self, window: &ProductionWindow) -> PlannerResult<Vec<Order>>;

    /// Like [`list_between`](Self::list_between), but cancelled orders are
    /// dropped before their delivery dates are read.
    async fn list_active_between(&self, window: &ProductionWindow) -> PlannerResult<Vec<Order>>;
}

#[async_trait]
impl<S> OrderQueries for S
where
    S: DataService<Order> + ?Sized,
{
    async fn list_between(&self, window: &ProductionWindow) -> PlannerResult<Vec<Order>> {
        let orders = self
            .list()
            .await
            .map_err(|e| StorageError::query("orders", e))?;
        Ok(window.select(orders)?)
    }

    async fn list_active_between(&self, window: &ProductionWindow) -> PlannerResult<Vec<Order>> {
        let orders = self
            .list()
            .await
            .map_err(|e| StorageError::query("orders", e))?;
        let stored = orders.len();
        let active: Vec<Order> = orders.into_iter().filter(|o| !o.is_cancelled()).collect();
        if active.len() < stored {
            tracing::debug!(skipped = stored - active.len(), "cancelled orders left out");
        }
        Ok(window.select(active)?)
    }
}
