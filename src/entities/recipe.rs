//! Dough and filling recipes

use crate::core::entity::{Data, Entity};
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Recipe category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    #[serde(alias = "massa")]
    Dough,
    #[serde(alias = "recheio")]
    Filling,
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeKind::Dough => write!(f, "dough"),
            RecipeKind::Filling => write!(f, "filling"),
        }
    }
}

/// How much one batch of a recipe produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BatchYield {
    /// Finished products per batch (e.g. 2 cakes)
    Units { count: f64 },
    /// Grams produced per batch
    Weight { grams: f64 },
    /// Free-text yield; one product per batch
    Described { text: String },
}

impl BatchYield {
    /// Batches needed to make `units` products
    pub fn batches_for_units(&self, units: u64) -> f64 {
        match self {
            BatchYield::Units { count } if *count > 0.0 => units as f64 / count,
            _ => units as f64,
        }
    }

    /// Batches needed to produce `grams`, when the yield is a weight
    pub fn batches_for_grams(&self, grams: f64) -> Option<f64> {
        match self {
            BatchYield::Weight { grams: per_batch } if *per_batch > 0.0 => Some(grams / per_batch),
            _ => None,
        }
    }
}

fn validate_batch_yield(batch_yield: &BatchYield) -> Result<(), validator::ValidationError> {
    let amount = match batch_yield {
        BatchYield::Units { count } => *count,
        BatchYield::Weight { grams } => *grams,
        BatchYield::Described { .. } => return Ok(()),
    };
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(validator::ValidationError::new("batch_yield")
            .with_message(Cow::Borrowed("batch yield must be a positive amount")))
    }
}

/// Quantity of one ingredient consumed by a single batch, in the
/// ingredient's own unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecipeIngredient {
    pub ingredient_id: Uuid,

    #[validate(range(min = 0.0, message = "ingredient quantity must not be negative"))]
    pub quantity: f64,
}

/// A dough or filling preparation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Recipe {
    pub id: Uuid,

    #[validate(length(min = 1, message = "recipe name must not be empty"))]
    pub name: String,

    pub kind: RecipeKind,

    #[validate(custom(function = "validate_batch_yield"))]
    pub batch_yield: BatchYield,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oven_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oven_temperature_c: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, kind: RecipeKind, batch_yield: BatchYield) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            batch_yield,
            oven_minutes: None,
            oven_temperature_c: None,
            instructions: None,
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient_id: Uuid, quantity: f64) -> Self {
        self.ingredients.push(RecipeIngredient {
            ingredient_id,
            quantity,
        });
        self
    }

    pub fn with_oven(mut self, minutes: u32, temperature_c: u32) -> Self {
        self.oven_minutes = Some(minutes);
        self.oven_temperature_c = Some(temperature_c);
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

impl Entity for Recipe {
    fn resource_name() -> &'static str {
        "recipes"
    }

    fn resource_name_singular() -> &'static str {
        "recipe"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Data for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["name", "kind"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "kind" => Some(FieldValue::String(self.kind.to_string())),
            "oven_minutes" => Some(
                self.oven_minutes
                    .map(|m| FieldValue::Integer(m.into()))
                    .unwrap_or(FieldValue::Null),
            ),
            _ => None,
        }
    }

    fn validate_entity(&self) -> Result<(), ValidationError> {
        Ok(self.validate()?)
    }
}
