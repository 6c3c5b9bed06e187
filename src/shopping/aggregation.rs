use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::models::{
    Ingredient, MealPlanDay, MealType, Recipe, ShoppingList, ShoppingListItem, ShoppingListStore,
    Store, Weekday,
};
use crate::state::RecipeCatalog;

/// A meal slot whose `recipe_id` matched nothing in the recipe catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedRecipe {
    pub day: Weekday,
    pub meal_type: MealType,
    pub recipe_id: String,
}

/// Shopping list plus what was skipped while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationReport {
    pub list: ShoppingList,

    /// Stale references, in plan order.
    pub unresolved: Vec<UnresolvedRecipe>,

    /// Meals with no recipe behind them.
    pub custom_meals: usize,
}

impl AggregationReport {
    /// Distinct unresolved recipe ids, in first-seen order.
    pub fn unresolved_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for entry in &self.unresolved {
            if !ids.contains(&entry.recipe_id) {
                ids.push(entry.recipe_id.clone());
            }
        }
        ids
    }
}

/// Working bucket for one store: items in first-occurrence order, indexed by
/// (name, unit).
#[derive(Default)]
struct StoreBucket {
    items: Vec<ShoppingListItem>,
    index: HashMap<(String, String), usize>,
}

impl StoreBucket {
    fn add(&mut self, ingredient: &Ingredient, recipe_id: &str) {
        let key = (ingredient.name.clone(), ingredient.unit.clone());

        match self.index.get(&key) {
            Some(&pos) => {
                let item = &mut self.items[pos];
                item.quantity += ingredient.quantity;
                item.price += ingredient.price;
                item.recipe_ids.push(recipe_id.to_string());
            }
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(ShoppingListItem {
                    name: ingredient.name.clone(),
                    quantity: ingredient.quantity,
                    unit: ingredient.unit.clone(),
                    price: ingredient.price,
                    recipe_ids: vec![recipe_id.to_string()],
                });
            }
        }
    }

    fn into_store(self, store: Store) -> ShoppingListStore {
        let subtotal: f64 = self.items.iter().map(|i| i.price).sum();
        ShoppingListStore {
            store_name: store.display_name().to_string(),
            items: self.items,
            subtotal,
        }
    }
}

/// Core pass shared by every entry point. `resolve` maps a recipe id to the
/// recipe it names, if any.
fn aggregate<'a, F>(days: &[MealPlanDay], resolve: F) -> AggregationReport
where
    F: Fn(&str) -> Option<&'a Recipe>,
{
    let mut buckets: HashMap<Store, StoreBucket> = HashMap::new();
    let mut unresolved = Vec::new();
    let mut custom_meals = 0;

    for day in days {
        for meal in &day.meals {
            let Some(recipe_id) = meal.recipe_id.as_deref() else {
                trace!(day = %day.day, meal = %meal.meal_type, "custom meal, nothing to buy");
                custom_meals += 1;
                continue;
            };

            let Some(recipe) = resolve(recipe_id) else {
                debug!(day = %day.day, meal = %meal.meal_type, recipe_id, "skipping unknown recipe");
                unresolved.push(UnresolvedRecipe {
                    day: day.day,
                    meal_type: meal.meal_type,
                    recipe_id: recipe_id.to_string(),
                });
                continue;
            };

            for ingredient in &recipe.ingredients {
                buckets
                    .entry(ingredient.source)
                    .or_default()
                    .add(ingredient, recipe_id);
            }
        }
    }

    let mut stores: Vec<ShoppingListStore> = buckets
        .into_iter()
        .map(|(store, bucket)| bucket.into_store(store))
        .collect();
    stores.sort_by(|a, b| a.store_name.cmp(&b.store_name));

    let total_cost: f64 = stores.iter().map(|s| s.subtotal).sum();

    debug!(
        stores = stores.len(),
        unresolved = unresolved.len(),
        custom_meals,
        "shopping list generated"
    );

    AggregationReport {
        list: ShoppingList { stores, total_cost },
        unresolved,
        custom_meals,
    }
}

/// Build a store-grouped shopping list for a meal plan.
///
/// Custom meals and meals whose recipe id is not among `recipes` are skipped.
/// Ingredients merge only when both name and unit match exactly.
pub fn generate_shopping_list(days: &[MealPlanDay], recipes: &[Recipe]) -> ShoppingList {
    generate_shopping_list_with_report(days, recipes).list
}

/// Same as [`generate_shopping_list`], also reporting skipped meals.
pub fn generate_shopping_list_with_report(
    days: &[MealPlanDay],
    recipes: &[Recipe],
) -> AggregationReport {
    let lookup: HashMap<&str, &Recipe> = recipes
        .iter()
        .map(|r| (r.recipe_id.as_str(), r))
        .collect();

    aggregate(days, |id| lookup.get(id).copied())
}

/// Aggregate against an already-built catalog.
pub fn generate_from_catalog(days: &[MealPlanDay], catalog: &RecipeCatalog) -> AggregationReport {
    aggregate(days, |id| catalog.get(id))
}
