//! Customer orders and the cake items they contain

use crate::core::entity::{Data, Entity};
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Where an order is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    #[serde(alias = "pendente")]
    Pending,
    #[serde(alias = "confirmado")]
    Confirmed,
    #[serde(alias = "em_producao")]
    InProduction,
    #[serde(alias = "entregue")]
    Delivered,
    #[serde(alias = "cancelado")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Cake size as entered on the order: a diameter in centimetres or a size
/// code ("P", "M", "G", ...) that the layer configuration maps to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CakeSize {
    Diameter(u32),
    Code(String),
}

impl CakeSize {
    /// The diameter written on the size itself: `20`, `"20"`, `"20cm"`, `"20 cm"`.
    ///
    /// Returns `None` for descriptive codes.
    pub fn explicit_diameter(&self) -> Option<u32> {
        static DIAMETER_REGEX: OnceLock<Regex> = OnceLock::new();
        match self {
            CakeSize::Diameter(d) => Some(*d),
            CakeSize::Code(code) => {
                let regex = DIAMETER_REGEX.get_or_init(|| {
                    Regex::new(r"(?i)^\s*(\d{1,3})\s*(cm)?\s*$").expect("diameter pattern")
                });
                regex
                    .captures(code)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse().ok())
            }
        }
    }
}

impl fmt::Display for CakeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CakeSize::Diameter(d) => write!(f, "{}cm", d),
            CakeSize::Code(code) => write!(f, "{}", code),
        }
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_name: String,

    /// Signed so that bad input reaches validation instead of failing to parse
    pub quantity: i64,

    /// Dough flavor: a recipe id or recipe name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dough: Option<String>,

    /// Filling flavor: a recipe id or recipe name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filling: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CakeSize>,
}

impl OrderItem {
    pub fn new(product_name: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            dough: None,
            filling: None,
            size: None,
        }
    }

    pub fn with_dough(mut self, dough: impl Into<String>) -> Self {
        self.dough = Some(dough.into());
        self
    }

    pub fn with_filling(mut self, filling: impl Into<String>) -> Self {
        self.filling = Some(filling.into());
        self
    }

    pub fn with_size(mut self, size: CakeSize) -> Self {
        self.size = Some(size);
        self
    }
}

/// A customer order scheduled for a delivery date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,

    #[serde(default)]
    pub customer_name: String,

    /// Delivery date as stored: `YYYY-MM-DD` or an RFC 3339 timestamp
    pub delivery_date: String,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Create a pending order with no items
    pub fn new(customer_name: impl Into<String>, delivery_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            delivery_date: delivery_date.format("%Y-%m-%d").to_string(),
            status: OrderStatus::Pending,
            items: Vec::new(),
            notes: None,
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Parse the stored delivery date
    pub fn delivery_date(&self) -> Result<NaiveDate, ValidationError> {
        let raw = self.delivery_date.trim();
        raw.parse::<NaiveDate>()
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .map_err(|e| ValidationError::InvalidDeliveryDate {
                order_id: self.id,
                value: self.delivery_date.clone(),
                message: e.to_string(),
            })
    }

    /// Check the order can be planned: a parsable delivery date and no
    /// negative quantities. Returns the delivery date.
    pub fn validate_for_production(&self) -> Result<NaiveDate, ValidationError> {
        let date = self.delivery_date()?;
        if let Some((index, item)) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| item.quantity < 0)
        {
            return Err(ValidationError::NegativeQuantity {
                order_id: self.id,
                item_index: index,
                product: item.product_name.clone(),
                quantity: item.quantity,
            });
        }
        Ok(date)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Data for Order {
    fn name(&self) -> &str {
        &self.customer_name
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["customer_name", "delivery_date", "status"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Uuid(self.id)),
            "customer_name" => Some(FieldValue::String(self.customer_name.clone())),
            "delivery_date" => Some(match self.delivery_date() {
                Ok(date) => FieldValue::Date(date),
                Err(_) => FieldValue::String(self.delivery_date.clone()),
            }),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            "items" => Some(FieldValue::Integer(self.items.len() as i64)),
            "notes" => Some(
                self.notes
                    .clone()
                    .map(FieldValue::String)
                    .unwrap_or(FieldValue::Null),
            ),
            _ => None,
        }
    }
}
