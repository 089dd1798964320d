//! Production requirements aggregation
//!
//! Turns the orders of a production window into dough totals, filling totals
//! per cake diameter and a shopping list. The computation is pure: inputs are
//! borrowed, nothing is fetched or stored, and sums always run in the order
//! the orders and their items were given so the output is reproducible.
//!
//! Missing reference data never fails the computation. Items pointing at an
//! unknown recipe, size or diameter contribute nothing and leave a
//! [`PlanWarning`] on the plan. Only malformed orders (negative quantities,
//! unparsable delivery dates) are rejected.

use super::plan::{
    DiameterBreakdown, DoughRequirement, FillingRequirement, PlanWarning, ProductionPlan,
    ShoppingListItem,
};
use crate::config::LayerFillingConfig;
use crate::core::error::ValidationError;
use crate::entities::{Ingredient, Order, OrderItem, Recipe, RecipeKind};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Recipes of one kind, looked up by id first and then by name
struct RecipeIndex<'a> {
    by_id: HashMap<Uuid, &'a Recipe>,
    by_name: HashMap<String, &'a Recipe>,
}

impl<'a> RecipeIndex<'a> {
    fn build(recipes: &'a [Recipe], kind: RecipeKind) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        // first recipe wins on duplicate ids or names
        for recipe in recipes.iter().filter(|r| r.kind == kind) {
            by_id.entry(recipe.id).or_insert(recipe);
            by_name.entry(normalize(&recipe.name)).or_insert(recipe);
        }
        Self { by_id, by_name }
    }

    fn resolve(&self, reference: &str) -> Option<&'a Recipe> {
        Uuid::parse_str(reference)
            .ok()
            .and_then(|id| self.by_id.get(&id).copied())
            .or_else(|| self.by_name.get(&normalize(reference)).copied())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A selected flavor; blank strings mean nothing was chosen
fn flavor(reference: &Option<String>) -> Option<&str> {
    reference
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

struct DoughBucket<'a> {
    recipe: &'a Recipe,
    units: u64,
}

struct DiameterBucket {
    pans: u64,
    layers: u32,
    layer_count: u64,
    grams: f64,
}

struct FillingBucket<'a> {
    recipe: &'a Recipe,
    grams: f64,
    by_diameter: BTreeMap<u32, DiameterBucket>,
}

/// Where an order item sits, for warnings
struct ItemRef<'a> {
    order: &'a Order,
    index: usize,
    item: &'a OrderItem,
}

impl ItemRef<'_> {
    fn unresolved(&self, recipe_kind: RecipeKind, reference: &str) -> PlanWarning {
        PlanWarning::UnresolvedRecipe {
            order_id: self.order.id,
            item_index: self.index,
            product: self.item.product_name.clone(),
            recipe_kind,
            reference: reference.to_string(),
        }
    }

    fn overflow(&self) -> ValidationError {
        ValidationError::QuantityOverflow {
            order_id: self.order.id,
            item_index: self.index,
            product: self.item.product_name.clone(),
        }
    }

    /// Diameter of the item's cake, or the warning explaining why there is none
    fn diameter(&self, config: &LayerFillingConfig) -> Result<u32, PlanWarning> {
        let Some(size) = &self.item.size else {
            return Err(PlanWarning::MissingSize {
                order_id: self.order.id,
                item_index: self.index,
                product: self.item.product_name.clone(),
            });
        };
        config
            .resolve_diameter(size)
            .ok_or_else(|| PlanWarning::UnknownSizeCode {
                order_id: self.order.id,
                item_index: self.index,
                product: self.item.product_name.clone(),
                size: size.to_string(),
            })
    }
}

/// Compute the production plan for a set of orders.
///
/// `orders` must already be restricted to the production window; no date
/// filtering happens here.
///
/// # Errors
///
/// Returns [`ValidationError`] when an order has an unparsable delivery date
/// or an item with a negative quantity, or when quantities add up past
/// `u64::MAX`. No partial plan is produced.
#[tracing::instrument(level = "debug", skip_all, fields(orders = orders.len()))]
pub fn calculate_production(
    orders: &[Order],
    recipes: &[Recipe],
    ingredients: &[Ingredient],
    config: &LayerFillingConfig,
) -> Result<ProductionPlan, ValidationError> {
    for order in orders {
        order.validate_for_production()?;
    }

    let doughs = RecipeIndex::build(recipes, RecipeKind::Dough);
    let fillings = RecipeIndex::build(recipes, RecipeKind::Filling);

    let mut warnings = Vec::new();
    let mut dough_buckets: IndexMap<Uuid, DoughBucket> = IndexMap::new();
    let mut filling_buckets: IndexMap<Uuid, FillingBucket> = IndexMap::new();

    for order in orders {
        for (index, item) in order.items.iter().enumerate() {
            if item.quantity == 0 {
                continue;
            }
            // validated above
            let quantity = item.quantity as u64;
            let at = ItemRef { order, index, item };

            if let Some(reference) = flavor(&item.dough) {
                match doughs.resolve(reference) {
                    Some(recipe) => {
                        let bucket = dough_buckets
                            .entry(recipe.id)
                            .or_insert_with(|| DoughBucket { recipe, units: 0 });
                        bucket.units = bucket
                            .units
                            .checked_add(quantity)
                            .ok_or_else(|| at.overflow())?;
                    }
                    None => warnings.push(at.unresolved(RecipeKind::Dough, reference)),
                }
            }

            let Some(reference) = flavor(&item.filling) else {
                continue;
            };
            let Some(recipe) = fillings.resolve(reference) else {
                warnings.push(at.unresolved(RecipeKind::Filling, reference));
                continue;
            };
            let diameter = match at.diameter(config) {
                Ok(diameter) => diameter,
                Err(warning) => {
                    warnings.push(warning);
                    continue;
                }
            };
            let Some(per_layer) = config.grams_per_layer(diameter) else {
                warnings.push(PlanWarning::MissingLayerConfig {
                    order_id: order.id,
                    item_index: index,
                    product: item.product_name.clone(),
                    diameter_cm: diameter,
                });
                continue;
            };

            let layers = config.layers_for(diameter);
            let layer_count = quantity
                .checked_mul(u64::from(layers))
                .ok_or_else(|| at.overflow())?;
            let grams = per_layer * f64::from(layers) * quantity as f64;

            let bucket = filling_buckets
                .entry(recipe.id)
                .or_insert_with(|| FillingBucket {
                    recipe,
                    grams: 0.0,
                    by_diameter: BTreeMap::new(),
                });
            bucket.grams += grams;
            let slot = bucket
                .by_diameter
                .entry(diameter)
                .or_insert(DiameterBucket {
                    pans: 0,
                    layers,
                    layer_count: 0,
                    grams: 0.0,
                });
            slot.pans = slot.pans.checked_add(quantity).ok_or_else(|| at.overflow())?;
            slot.layer_count = slot
                .layer_count
                .checked_add(layer_count)
                .ok_or_else(|| at.overflow())?;
            slot.grams += grams;
        }
    }

    let dough_requirements: Vec<DoughRequirement> = dough_buckets
        .values()
        .map(|bucket| DoughRequirement {
            recipe_id: bucket.recipe.id,
            recipe_name: bucket.recipe.name.clone(),
            units: bucket.units,
            batches: bucket.recipe.batch_yield.batches_for_units(bucket.units),
            oven_minutes: bucket.recipe.oven_minutes,
            oven_temperature_c: bucket.recipe.oven_temperature_c,
        })
        .collect();

    let filling_requirements: Vec<FillingRequirement> = filling_buckets
        .values()
        .map(|bucket| FillingRequirement {
            recipe_id: bucket.recipe.id,
            recipe_name: bucket.recipe.name.clone(),
            total_grams: bucket.grams,
            batches: bucket.recipe.batch_yield.batches_for_grams(bucket.grams),
            by_diameter: bucket
                .by_diameter
                .iter()
                .map(|(diameter, slot)| DiameterBreakdown {
                    diameter_cm: *diameter,
                    pan_count: slot.pans,
                    layers: slot.layers,
                    layer_count: slot.layer_count,
                    grams: slot.grams,
                })
                .collect(),
        })
        .collect();

    let shopping_list = shopping_list(
        &dough_requirements,
        &filling_requirements,
        recipes,
        ingredients,
        &mut warnings,
    );

    for warning in &warnings {
        tracing::debug!(%warning, "order data skipped");
    }
    tracing::debug!(
        doughs = dough_requirements.len(),
        fillings = filling_requirements.len(),
        ingredients = shopping_list.len(),
        warnings = warnings.len(),
        "production plan computed"
    );

    Ok(ProductionPlan {
        dough_requirements,
        filling_requirements,
        shopping_list,
        warnings,
    })
}

/// Ingredient totals implied by the requirements, one line per ingredient
/// with a nonzero need, sorted by name
fn shopping_list(
    doughs: &[DoughRequirement],
    fillings: &[FillingRequirement],
    recipes: &[Recipe],
    ingredients: &[Ingredient],
    warnings: &mut Vec<PlanWarning>,
) -> Vec<ShoppingListItem> {
    let mut recipes_by_id: HashMap<Uuid, &Recipe> = HashMap::new();
    for recipe in recipes {
        recipes_by_id.entry(recipe.id).or_insert(recipe);
    }
    let mut catalog: HashMap<Uuid, &Ingredient> = HashMap::new();
    for ingredient in ingredients {
        catalog.entry(ingredient.id).or_insert(ingredient);
    }

    let batches_per_recipe = doughs
        .iter()
        .map(|req| (req.recipe_id, Some(req.batches)))
        .chain(fillings.iter().map(|req| (req.recipe_id, req.batches)));

    let mut needs: IndexMap<Uuid, f64> = IndexMap::new();
    for (recipe_id, batches) in batches_per_recipe {
        let Some(recipe) = recipes_by_id.get(&recipe_id) else {
            continue;
        };
        let Some(batches) = batches else {
            if !recipe.ingredients.is_empty() {
                warnings.push(PlanWarning::UnconvertibleYield {
                    recipe_id: recipe.id,
                    recipe_name: recipe.name.clone(),
                });
            }
            continue;
        };
        for line in &recipe.ingredients {
            if !catalog.contains_key(&line.ingredient_id) {
                warnings.push(PlanWarning::UnknownIngredient {
                    recipe_id: recipe.id,
                    recipe_name: recipe.name.clone(),
                    ingredient_id: line.ingredient_id,
                });
                continue;
            }
            *needs.entry(line.ingredient_id).or_insert(0.0) += batches * line.quantity;
        }
    }

    let mut list: Vec<ShoppingListItem> = needs
        .into_iter()
        .filter(|(_, required)| *required > 0.0)
        .filter_map(|(id, required)| {
            let ingredient = catalog.get(&id)?;
            let to_purchase = (required - ingredient.stock).max(0.0);
            Some(ShoppingListItem {
                ingredient_id: id,
                name: ingredient.name.clone(),
                unit: ingredient.unit,
                required,
                in_stock: ingredient.stock,
                to_purchase,
                estimated_cost: to_purchase * ingredient.unit_cost,
                below_minimum: ingredient.stock - required < ingredient.min_stock,
            })
        })
        .collect();
    list.sort_by_cached_key(|item| (collation_key(&item.name), item.ingredient_id));
    list
}

/// Sort key for display names: case-insensitive, accented Latin letters
/// ordered with their base letter ("Açúcar" next to "Amido")
fn collation_key(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}
