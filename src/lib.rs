//! # Bakery Planner
//!
//! Weekly production planning for an artisanal bakery. Customer orders go in;
//! dough totals, filling totals per cake diameter and a shopping list come out.
//!
//! ## Features
//!
//! - **Pure aggregation**: [`planning::calculate_production`] borrows its inputs
//!   and never touches storage, so identical inputs give identical plans
//! - **Warnings instead of silent gaps**: unknown recipes, sizes or diameters
//!   contribute nothing and are reported on the plan
//! - **Typed failures**: negative quantities and unparsable delivery dates are
//!   returned as [`core::ValidationError`]
//! - **Injected repositories**: [`planning::ProductionPlanner`] reads orders,
//!   recipes and ingredients through the async [`core::DataService`] trait
//! - **YAML configuration**: grams of filling per layer, layer counts and size
//!   codes per cake diameter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bakery::prelude::*;
//!
//! let chocolate = Recipe::new("Chocolate", RecipeKind::Dough, BatchYield::Units { count: 1.0 });
//! let brigadeiro = Recipe::new("Brigadeiro", RecipeKind::Filling, BatchYield::Weight { grams: 1500.0 });
//!
//! let order = Order::new("Dona Marta", NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
//!     .with_item(
//!         OrderItem::new("Bolo de Chocolate", 2)
//!             .with_dough("Chocolate")
//!             .with_filling("Brigadeiro")
//!             .with_size(CakeSize::Diameter(20)),
//!     );
//!
//! let config = PlannerConfig::default_config();
//! let plan = calculate_production(&[order], &[chocolate, brigadeiro], &[], &config.layer_filling)?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod planning;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Data, Entity},
        field::FieldValue,
        service::{DataService, OrderQueries},
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ErrorResponse, FieldValidationError, PlannerError, PlannerResult,
        StorageError, ValidationError,
    };

    // === Domain ===
    pub use crate::entities::{
        BatchYield, CakeSize, Ingredient, MeasureUnit, Order, OrderItem, OrderStatus, Recipe,
        RecipeIngredient, RecipeKind,
    };

    // === Planning ===
    pub use crate::planning::{
        DiameterBreakdown, DoughRequirement, FillingRequirement, PlanWarning, ProductionPlan,
        ProductionPlanner, ProductionWindow, ShoppingListItem, calculate_production,
    };

    // === Storage ===
    pub use crate::storage::{BakerySnapshot, InMemoryDataService, SnapshotStores};

    // === Config ===
    pub use crate::config::{LayerFillingConfig, PlannerConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{NaiveDate, Weekday};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
