//! Bakery domain records: orders, recipes and ingredients

pub mod ingredient;
pub mod order;
pub mod recipe;

pub use ingredient::{Ingredient, MeasureUnit};
pub use order::{CakeSize, Order, OrderItem, OrderStatus};
pub use recipe::{BatchYield, Recipe, RecipeIngredient, RecipeKind};
