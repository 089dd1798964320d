//! Shared test harness for repository backends
//!
//! Provides ingredient fixtures and the `data_service_tests!` macro, which
//! checks any `DataService<Ingredient>` implementation against the repository
//! contract.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_service_tests;

use bakery::entities::{Ingredient, MeasureUnit};

/// An ingredient with a stock position
pub fn create_test_ingredient(name: &str, stock: f64, min_stock: f64, unit: MeasureUnit) -> Ingredient {
    Ingredient::new(name, unit)
        .with_stock(stock, min_stock)
        .with_unit_cost(0.5)
}

/// `n` distinct ingredients, every other one below its minimum stock
pub fn sample_batch(n: usize) -> Vec<Ingredient> {
    (0..n)
        .map(|i| {
            let min_stock = if i % 2 == 0 { 100.0 } else { 0.0 };
            create_test_ingredient(&format!("Ingrediente {}", i), 50.0, min_stock, MeasureUnit::Grams)
        })
        .collect()
}
