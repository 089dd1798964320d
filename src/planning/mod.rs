//! Weekly production planning

pub mod aggregator;
pub mod plan;
pub mod planner;
pub mod window;

pub use aggregator::calculate_production;
pub use plan::{
    DiameterBreakdown, DoughRequirement, FillingRequirement, PlanWarning, ProductionPlan,
    ShoppingListItem,
};
pub use planner::ProductionPlanner;
pub use window::ProductionWindow;
