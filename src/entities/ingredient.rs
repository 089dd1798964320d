//! Purchasable raw materials

use crate::core::entity::{Data, Entity};
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Unit an ingredient is stocked and bought in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "l")]
    Liters,
    #[serde(rename = "un")]
    Units,
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            MeasureUnit::Grams => "g",
            MeasureUnit::Kilograms => "kg",
            MeasureUnit::Milliliters => "ml",
            MeasureUnit::Liters => "l",
            MeasureUnit::Units => "un",
        };
        write!(f, "{}", symbol)
    }
}

/// A raw material with its stock position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    pub id: Uuid,

    #[validate(length(min = 1, message = "ingredient name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "stock must not be negative"))]
    pub stock: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "minimum stock must not be negative"))]
    pub min_stock: f64,

    pub unit: MeasureUnit,

    /// Cost of one `unit`
    #[serde(default)]
    #[validate(range(min = 0.0, message = "unit cost must not be negative"))]
    pub unit_cost: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, unit: MeasureUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stock: 0.0,
            min_stock: 0.0,
            unit,
            unit_cost: 0.0,
        }
    }

    pub fn with_stock(mut self, stock: f64, min_stock: f64) -> Self {
        self.stock = stock;
        self.min_stock = min_stock;
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    pub fn is_below_minimum(&self) -> bool {
        self.stock < self.min_stock
    }
}

impl Entity for Ingredient {
    fn resource_name() -> &'static str {
        "ingredients"
    }

    fn resource_name_singular() -> &'static str {
        "ingredient"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Data for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["name", "unit"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "unit" => Some(FieldValue::String(self.unit.to_string())),
            "stock" => Some(FieldValue::Float(self.stock)),
            "min_stock" => Some(FieldValue::Float(self.min_stock)),
            "below_minimum" => Some(FieldValue::Boolean(self.is_below_minimum())),
            _ => None,
        }
    }

    fn validate_entity(&self) -> Result<(), ValidationError> {
        Ok(self.validate()?)
    }
}
