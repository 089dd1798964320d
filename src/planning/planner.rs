//! Production planner service
//!
//! Fetches orders, recipes and ingredients from injected repositories and
//! hands them to [`calculate_production`]. This is the only place where the
//! planning path touches storage.

use super::aggregator::calculate_production;
use super::plan::ProductionPlan;
use super::window::ProductionWindow;
use crate::config::PlannerConfig;
use crate::core::error::{PlannerError, PlannerResult, StorageError};
use crate::core::service::{DataService, OrderQueries};
use crate::entities::{Ingredient, Order, Recipe};
use chrono::NaiveDate;
use std::sync::Arc;

/// Builds production plans from the bakery's repositories
#[derive(Clone)]
pub struct ProductionPlanner {
    orders: Arc<dyn DataService<Order>>,
    recipes: Arc<dyn DataService<Recipe>>,
    ingredients: Arc<dyn DataService<Ingredient>>,
    config: Arc<PlannerConfig>,
}

impl ProductionPlanner {
    pub fn new(
        orders: Arc<dyn DataService<Order>>,
        recipes: Arc<dyn DataService<Recipe>>,
        ingredients: Arc<dyn DataService<Ingredient>>,
        config: Arc<PlannerConfig>,
    ) -> Self {
        Self {
            orders,
            recipes,
            ingredients,
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan for deliveries between `from` and `to`, both inclusive
    pub async fn plan_between(&self, from: NaiveDate, to: NaiveDate) -> PlannerResult<ProductionPlan> {
        let window = ProductionWindow::new(from, to)?;
        self.plan_window(window).await
    }

    /// Plan for the production week containing `day`
    pub async fn plan_for_week(&self, day: NaiveDate) -> PlannerResult<ProductionPlan> {
        let window = ProductionWindow::week_containing(day, self.config.week_starts_on);
        self.plan_window(window).await
    }

    /// Plan for every order delivered inside `window`
    #[tracing::instrument(skip_all, fields(window = %window))]
    pub async fn plan_window(&self, window: ProductionWindow) -> PlannerResult<ProductionPlan> {
        let orders = async {
            if self.config.skip_cancelled {
                self.orders.list_active_between(&window).await
            } else {
                self.orders.list_between(&window).await
            }
        };
        let (orders, recipes, ingredients) = futures::try_join!(
            orders,
            async {
                self.recipes
                    .list()
                    .await
                    .map_err(|e| PlannerError::from(StorageError::query("recipes", e)))
            },
            async {
                self.ingredients
                    .list()
                    .await
                    .map_err(|e| PlannerError::from(StorageError::query("ingredients", e)))
            }
        )?;

        let plan = calculate_production(
            &orders,
            &recipes,
            &ingredients,
            &self.config.layer_filling,
        )?;

        if !plan.warnings.is_empty() {
            tracing::warn!(
                warnings = plan.warnings.len(),
                "production plan computed with skipped order data"
            );
        }
        tracing::info!(
            orders = orders.len(),
            doughs = plan.dough_requirements.len(),
            fillings = plan.filling_requirements.len(),
            shopping_items = plan.shopping_list.len(),
            "production plan ready"
        );

        Ok(plan)
    }
}
