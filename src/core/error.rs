//! Typed error handling for the bakery planner
//!
//! Callers get a specific error type they can match on instead of a generic
//! `anyhow::Error`, and the UI layer gets a serializable [`ErrorResponse`] it
//! can display directly.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed orders, windows or entities (fatal)
//! - [`ConfigError`]: configuration parsing and loading
//! - [`StorageError`]: repository failures
//!
//! # Example
//!
//! ```rust,ignore
//! use bakery::prelude::*;
//!
//! match planner.plan_for_week(today).await {
//!     Ok(plan) => render(plan),
//!     Err(PlannerError::Validation(ValidationError::NegativeQuantity { order_id, .. })) => {
//!         eprintln!("Order {} has a negative quantity", order_id);
//!     }
//!     Err(e) => show_error(e.to_response()),
//! }
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the planner
#[derive(Debug)]
pub enum PlannerError {
    /// Invalid input (orders, windows, entities)
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),

    /// Repository errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Validation(e) => write!(f, "{}", e),
            PlannerError::Config(e) => write!(f, "{}", e),
            PlannerError::Storage(e) => write!(f, "{}", e),
            PlannerError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::Validation(e) => Some(e),
            PlannerError::Config(e) => Some(e),
            PlannerError::Storage(e) => Some(e),
            PlannerError::Internal(_) => None,
        }
    }
}

/// Error payload handed to the presentation layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PlannerError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Validation(e) => e.error_code(),
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Storage(_) => "STORAGE_ERROR",
            PlannerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PlannerError::Validation(ValidationError::NegativeQuantity {
                order_id,
                item_index,
                product,
                quantity,
            }) => Some(serde_json::json!({
                "order_id": order_id.to_string(),
                "item_index": item_index,
                "product": product,
                "quantity": quantity
            })),
            PlannerError::Validation(ValidationError::QuantityOverflow {
                order_id,
                item_index,
                product,
            }) => Some(serde_json::json!({
                "order_id": order_id.to_string(),
                "item_index": item_index,
                "product": product
            })),
            PlannerError::Validation(ValidationError::InvalidDeliveryDate {
                order_id,
                value,
                ..
            }) => Some(serde_json::json!({
                "order_id": order_id.to_string(),
                "delivery_date": value
            })),
            PlannerError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Fatal input errors. Raised before any plan is assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// An order item asks for a negative quantity
    NegativeQuantity {
        order_id: Uuid,
        item_index: usize,
        product: String,
        quantity: i64,
    },

    /// Quantities add up past what the plan can count
    QuantityOverflow {
        order_id: Uuid,
        item_index: usize,
        product: String,
    },

    /// An order's delivery date cannot be parsed
    InvalidDeliveryDate {
        order_id: Uuid,
        value: String,
        message: String,
    },

    /// A production window ends before it starts
    InvalidWindow { from: NaiveDate, to: NaiveDate },

    /// Entity field rule violations
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON input
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NegativeQuantity {
                order_id,
                item_index,
                product,
                quantity,
            } => {
                write!(
                    f,
                    "Order '{}' item #{} ({}) has negative quantity {}",
                    order_id, item_index, product, quantity
                )
            }
            ValidationError::QuantityOverflow {
                order_id,
                item_index,
                product,
            } => {
                write!(
                    f,
                    "Order '{}' item #{} ({}) pushes the production totals out of range",
                    order_id, item_index, product
                )
            }
            ValidationError::InvalidDeliveryDate {
                order_id,
                value,
                message,
            } => {
                write!(
                    f,
                    "Order '{}' has an invalid delivery date '{}': {}",
                    order_id, value, message
                )
            }
            ValidationError::InvalidWindow { from, to } => {
                write!(f, "Production window ends ({}) before it starts ({})", to, from)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::NegativeQuantity { .. } => "NEGATIVE_QUANTITY",
            ValidationError::QuantityOverflow { .. } => "QUANTITY_OVERFLOW",
            ValidationError::InvalidDeliveryDate { .. } => "INVALID_DELIVERY_DATE",
            ValidationError::InvalidWindow { .. } => "INVALID_WINDOW",
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl From<ValidationError> for PlannerError {
    fn from(err: ValidationError) -> Self {
        PlannerError::Validation(err)
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldValidationError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        // field_errors() is backed by a HashMap
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PlannerError {
    fn from(err: ConfigError) -> Self {
        PlannerError::Config(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by repositories
#[derive(Debug)]
pub enum StorageError {
    /// A read or write against a collection failed
    QueryError { collection: String, message: String },

    /// An exported data file could not be read
    SnapshotUnreadable { path: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QueryError {
                collection,
                message,
            } => {
                write!(f, "Failed to read '{}': {}", collection, message)
            }
            StorageError::SnapshotUnreadable { path, message } => {
                write!(f, "Failed to read snapshot file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    /// Wrap a repository failure for the given collection
    pub fn query(collection: &str, err: anyhow::Error) -> Self {
        StorageError::QueryError {
            collection: collection.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for PlannerError {
    fn from(err: StorageError) -> Self {
        PlannerError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for PlannerError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ValidationError>() {
            Ok(validation) => PlannerError::Validation(validation),
            Err(other) => PlannerError::Internal(other.to_string()),
        }
    }
}

/// A specialized Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
