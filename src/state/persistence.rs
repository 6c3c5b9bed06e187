use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SaveSmartError};
use crate::models::{MealPlanDay, PricedRecipe, Recipe, ShoppingList};
use crate::plan::MealPlan;
use crate::pricing::{PriceRow, PriceTable};

/// Load a recipe catalog from a JSON array.
///
/// Rejects the whole file if any recipe has zero servings or a negative
/// ingredient quantity or price.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    for recipe in &recipes {
        if !recipe.is_valid() {
            return Err(SaveSmartError::InvalidInput(format!(
                "invalid recipe '{}'",
                recipe.recipe_id
            )));
        }
        debug!("loaded {}", recipe.debug_string());
    }

    Ok(recipes)
}

/// Load a meal plan from a JSON array of days.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    let days: Vec<MealPlanDay> = serde_json::from_str(&content)?;
    Ok(MealPlan::new(days))
}

/// Save a meal plan as a JSON array of days.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    write_json(path, &plan.days)
}

pub fn save_shopping_list<P: AsRef<Path>>(path: P, list: &ShoppingList) -> Result<()> {
    write_json(path, list)
}

pub fn save_priced_recipes<P: AsRef<Path>>(path: P, recipes: &[PricedRecipe]) -> Result<()> {
    write_json(path, recipes)
}

/// Load a price table from CSV with an `ingredient,coles,woolworths` header.
pub fn load_price_table<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in rdr.deserialize::<PriceRow>() {
        rows.push(row?);
    }
    Ok(PriceTable::from_rows(rows))
}

/// Write a shopping list as CSV, one row per item.
pub fn write_shopping_list_csv<P: AsRef<Path>>(path: P, list: &ShoppingList) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["store", "name", "quantity", "unit", "price", "recipe_ids"])?;

    for store in &list.stores {
        for item in &store.items {
            wtr.write_record([
                store.store_name.clone(),
                item.name.clone(),
                item.quantity.to_string(),
                item.unit.clone(),
                format!("{:.2}", item.price),
                item.recipe_ids.join(";"),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
