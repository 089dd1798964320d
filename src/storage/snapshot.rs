//! Exported bakery data loaded into in-memory repositories

use super::in_memory::InMemoryDataService;
use crate::core::error::{PlannerError, PlannerResult, StorageError, ValidationError};
use crate::entities::{Ingredient, Order, Recipe};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// All the collections the planner reads, as one JSON document
///
/// ```json
/// { "orders": [...], "recipes": [...], "ingredients": [...] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BakerySnapshot {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// In-memory repositories built from a snapshot
#[derive(Clone)]
pub struct SnapshotStores {
    pub orders: Arc<InMemoryDataService<Order>>,
    pub recipes: Arc<InMemoryDataService<Recipe>>,
    pub ingredients: Arc<InMemoryDataService<Ingredient>>,
}

impl BakerySnapshot {
    pub fn from_json_str(json: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Storage(StorageError::SnapshotUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        serde_json::from_str(&content).map_err(|e| {
            PlannerError::Validation(ValidationError::InvalidJson {
                message: format!("{}: {}", path.display(), e),
            })
        })
    }

    /// Move the collections into fresh in-memory repositories
    pub fn into_stores(self) -> SnapshotStores {
        tracing::debug!(
            orders = self.orders.len(),
            recipes = self.recipes.len(),
            ingredients = self.ingredients.len(),
            "loading snapshot into memory"
        );
        SnapshotStores {
            orders: Arc::new(InMemoryDataService::from_entities(self.orders)),
            recipes: Arc::new(InMemoryDataService::from_entities(self.recipes)),
            ingredients: Arc::new(InMemoryDataService::from_entities(self.ingredients)),
        }
    }
}
