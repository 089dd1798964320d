//! Bakery fixtures shared by the planning tests
//!
//! The catalog mirrors a small real kitchen: one dough (`R1`, one cake per
//! batch) and two fillings (`F1`, `F2`) sold by weight.
//!
//! ```rust,ignore
//! mod planning_harness;
//! use planning_harness::*;
//! ```

#![allow(dead_code)]

use bakery::prelude::*;

pub struct Catalog {
    pub r1: Recipe,
    pub f1: Recipe,
    pub f2: Recipe,
    pub flour: Ingredient,
    pub eggs: Ingredient,
    pub condensed_milk: Ingredient,
}

impl Catalog {
    pub fn recipes(&self) -> Vec<Recipe> {
        vec![self.r1.clone(), self.f1.clone(), self.f2.clone()]
    }

    pub fn ingredients(&self) -> Vec<Ingredient> {
        vec![
            self.flour.clone(),
            self.eggs.clone(),
            self.condensed_milk.clone(),
        ]
    }
}

pub fn catalog() -> Catalog {
    let flour = Ingredient::new("Farinha de trigo", MeasureUnit::Grams)
        .with_stock(500.0, 1000.0)
        .with_unit_cost(0.006);
    let eggs = Ingredient::new("Ovos", MeasureUnit::Units)
        .with_stock(30.0, 12.0)
        .with_unit_cost(0.9);
    let condensed_milk = Ingredient::new("Leite condensado", MeasureUnit::Units)
        .with_stock(1.0, 2.0)
        .with_unit_cost(7.5);

    let r1 = Recipe::new("R1", RecipeKind::Dough, BatchYield::Units { count: 1.0 })
        .with_ingredient(flour.id, 250.0)
        .with_ingredient(eggs.id, 4.0)
        .with_oven(40, 180);
    let f1 = Recipe::new("F1", RecipeKind::Filling, BatchYield::Weight { grams: 1200.0 })
        .with_ingredient(condensed_milk.id, 2.0);
    let f2 = Recipe::new("F2", RecipeKind::Filling, BatchYield::Weight { grams: 1000.0 })
        .with_ingredient(condensed_milk.id, 1.0);

    Catalog {
        r1,
        f1,
        f2,
        flour,
        eggs,
        condensed_milk,
    }
}

/// Filling weights for the two pan sizes, three layers each
pub fn scenario_layers() -> LayerFillingConfig {
    LayerFillingConfig::default()
        .with_layer(20, 300.0)
        .with_layer(25, 400.0)
}

pub fn scenario_config() -> PlannerConfig {
    PlannerConfig {
        layer_filling: scenario_layers(),
        ..PlannerConfig::default()
    }
}

/// A day in June 2024. The 10th is a Monday.
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

pub fn chocolate_cakes(quantity: i64) -> OrderItem {
    OrderItem::new("Chocolate Cake", quantity)
        .with_dough("R1")
        .with_filling("F1")
        .with_size(CakeSize::Diameter(20))
}

pub fn vanilla_cakes(quantity: i64) -> OrderItem {
    OrderItem::new("Vanilla Cake", quantity)
        .with_dough("R1")
        .with_filling("F2")
        .with_size(CakeSize::Code("25cm".to_string()))
}

/// One order: 2 chocolate cakes at 20cm and 1 vanilla cake at 25cm
pub fn scenario_order() -> Order {
    Order::new("Dona Marta", june(14))
        .with_item(chocolate_cakes(2))
        .with_item(vanilla_cakes(1))
}

pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
