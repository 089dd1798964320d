//! Production plan output types

use crate::entities::{MeasureUnit, RecipeKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Dough needed for one dough recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughRequirement {
    pub recipe_id: Uuid,
    pub recipe_name: String,
    /// Products ordered with this dough, whatever their size
    pub units: u64,
    /// Batch-equivalent units derived from the recipe yield
    pub batches: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oven_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oven_temperature_c: Option<u32>,
}

/// Filling needed for one cake diameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterBreakdown {
    pub diameter_cm: u32,
    pub pan_count: u64,
    /// Layers per cake at this diameter
    pub layers: u32,
    /// Total layers to fill (`pan_count * layers`)
    pub layer_count: u64,
    pub grams: f64,
}

/// Filling needed for one filling recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingRequirement {
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub total_grams: f64,
    /// Batch-equivalent units, when the recipe yield is a weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batches: Option<f64>,
    /// Ascending by diameter
    pub by_diameter: Vec<DiameterBreakdown>,
}

/// One ingredient to buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub ingredient_id: Uuid,
    pub name: String,
    pub unit: MeasureUnit,
    /// Quantity consumed by the plan
    pub required: f64,
    pub in_stock: f64,
    /// `required - in_stock`, never below zero
    pub to_purchase: f64,
    pub estimated_cost: f64,
    /// Stock left after production falls under the ingredient's minimum
    pub below_minimum: bool,
}

/// Data the aggregator skipped instead of failing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// A dough or filling reference matched no recipe of that kind
    UnresolvedRecipe {
        order_id: Uuid,
        item_index: usize,
        product: String,
        recipe_kind: RecipeKind,
        reference: String,
    },
    /// A filled item has no size, so its filling weight is unknown
    MissingSize {
        order_id: Uuid,
        item_index: usize,
        product: String,
    },
    /// A size code is not in the layer configuration
    UnknownSizeCode {
        order_id: Uuid,
        item_index: usize,
        product: String,
        size: String,
    },
    /// No grams-per-layer entry for a diameter
    MissingLayerConfig {
        order_id: Uuid,
        item_index: usize,
        product: String,
        diameter_cm: u32,
    },
    /// A filling whose yield is not a weight cannot be turned into batches
    UnconvertibleYield { recipe_id: Uuid, recipe_name: String },
    /// A recipe lists an ingredient missing from the catalog
    UnknownIngredient {
        recipe_id: Uuid,
        recipe_name: String,
        ingredient_id: Uuid,
    },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::UnresolvedRecipe {
                order_id,
                item_index,
                product,
                recipe_kind,
                reference,
            } => write!(
                f,
                "Order '{}' item #{} ({}): no {} recipe matches '{}'",
                order_id, item_index, product, recipe_kind, reference
            ),
            PlanWarning::MissingSize {
                order_id,
                item_index,
                product,
            } => write!(
                f,
                "Order '{}' item #{} ({}): filling requested without a cake size",
                order_id, item_index, product
            ),
            PlanWarning::UnknownSizeCode {
                order_id,
                item_index,
                product,
                size,
            } => write!(
                f,
                "Order '{}' item #{} ({}): unknown size '{}'",
                order_id, item_index, product, size
            ),
            PlanWarning::MissingLayerConfig {
                order_id,
                item_index,
                product,
                diameter_cm,
            } => write!(
                f,
                "Order '{}' item #{} ({}): no filling weight configured for {}cm",
                order_id, item_index, product, diameter_cm
            ),
            PlanWarning::UnconvertibleYield {
                recipe_id,
                recipe_name,
            } => write!(
                f,
                "Recipe '{}' ({}) has no weight yield; its ingredients were not added",
                recipe_name, recipe_id
            ),
            PlanWarning::UnknownIngredient {
                recipe_id,
                recipe_name,
                ingredient_id,
            } => write!(
                f,
                "Recipe '{}' ({}) uses unknown ingredient '{}'",
                recipe_name, recipe_id, ingredient_id
            ),
        }
    }
}

/// Everything the kitchen needs for a set of orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub dough_requirements: Vec<DoughRequirement>,
    pub filling_requirements: Vec<FillingRequirement>,
    pub shopping_list: Vec<ShoppingListItem>,
    #[serde(default)]
    pub warnings: Vec<PlanWarning>,
}

impl ProductionPlan {
    pub fn is_empty(&self) -> bool {
        self.dough_requirements.is_empty()
            && self.filling_requirements.is_empty()
            && self.shopping_list.is_empty()
    }

    pub fn dough(&self, recipe_id: Uuid) -> Option<&DoughRequirement> {
        self.dough_requirements
            .iter()
            .find(|req| req.recipe_id == recipe_id)
    }

    pub fn filling(&self, recipe_id: Uuid) -> Option<&FillingRequirement> {
        self.filling_requirements
            .iter()
            .find(|req| req.recipe_id == recipe_id)
    }

    pub fn shopping_item(&self, ingredient_id: Uuid) -> Option<&ShoppingListItem> {
        self.shopping_list
            .iter()
            .find(|item| item.ingredient_id == ingredient_id)
    }

    /// Sum of `estimated_cost` over the shopping list
    pub fn estimated_cost(&self) -> f64 {
        self.shopping_list
            .iter()
            .map(|item| item.estimated_cost)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = ProductionPlan::default();
        assert!(plan.is_empty());
        assert_eq!(plan.estimated_cost(), 0.0);
    }

    #[test]
    fn test_warning_serializes_with_kind_tag() {
        let warning = PlanWarning::MissingLayerConfig {
            order_id: Uuid::nil(),
            item_index: 0,
            product: "Bolo Red Velvet".to_string(),
            diameter_cm: 35,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "missing_layer_config");
        assert_eq!(json["diameter_cm"], 35);
        assert!(warning.to_string().contains("35cm"));
    }

    #[test]
    fn test_unresolved_warning_display() {
        let warning = PlanWarning::UnresolvedRecipe {
            order_id: Uuid::nil(),
            item_index: 2,
            product: "Bolo Prestígio".to_string(),
            recipe_kind: RecipeKind::Filling,
            reference: "Coco Queimado".to_string(),
        };
        let display = warning.to_string();
        assert!(display.contains("#2"));
        assert!(display.contains("filling"));
        assert!(display.contains("Coco Queimado"));
    }
}
