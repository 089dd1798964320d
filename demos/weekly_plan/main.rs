//! Weekly production plan from an exported data file
//!
//! ```text
//! cargo run --example weekly_plan -- [snapshot.json] [planner.yaml] [YYYY-MM-DD]
//! ```
//!
//! Without arguments it plans the week of 2024-06-14 from the bundled files.

use bakery::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_SNAPSHOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/weekly_plan/snapshot.json");
const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/weekly_plan/planner.yaml");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bakery=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args.next().unwrap_or_else(|| DEFAULT_SNAPSHOT.to_string());
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let day = match args.next() {
        Some(raw) => raw.parse::<NaiveDate>()?,
        None => NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date"),
    };

    let config = Arc::new(PlannerConfig::from_yaml_file(&config_path)?);
    let stores = BakerySnapshot::from_json_file(&snapshot_path)?.into_stores();

    let planner = ProductionPlanner::new(stores.orders, stores.recipes, stores.ingredients, config);

    match planner.plan_for_week(day).await {
        Ok(plan) => {
            for warning in &plan.warnings {
                eprintln!("⚠️  {}", warning);
            }
            println!("{}", serde_json::to_string_pretty(&plan)?);
            eprintln!("Estimated purchase cost: {:.2}", plan.estimated_cost());
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err.to_response())?);
            std::process::exit(1);
        }
    }

    Ok(())
}
