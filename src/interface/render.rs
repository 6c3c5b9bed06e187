use crate::models::{PricedRecipe, ShoppingList};
use crate::plan::PlanSummary;
use crate::shopping::AggregationReport;
use crate::state::RecipeCatalog;

/// Display a shopping list grouped by store.
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list is empty (no recipe meals in the plan).");
        return;
    }

    println!();
    println!("=== Shopping List ===");

    // Find max item name length for alignment
    let max_name_len = list
        .stores
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for store in &list.stores {
        println!();
        println!("--- {} ({} items) ---", store.store_name, store.items.len());

        for item in &store.items {
            let uses = if item.recipe_ids.len() > 1 {
                format!("  x{}", item.recipe_ids.len())
            } else {
                String::new()
            };

            println!(
                "  {:<width$}  {:>8} {:<6} ${:>7.2}{}",
                item.name,
                format_quantity(item.quantity),
                item.unit,
                item.price,
                uses,
                width = max_name_len
            );
        }

        println!("  Subtotal: ${:.2}", store.subtotal);
    }

    println!();
    println!("Total items: {}", list.item_count());
    println!("Total cost: ${:.2}", list.total_cost);
    println!();
}

/// Warn about meals that were left out of the shopping list.
pub fn display_skipped(report: &AggregationReport, catalog: &RecipeCatalog) {
    if report.unresolved.is_empty() {
        return;
    }

    println!("Skipped {} meal(s) with unknown recipes:", report.unresolved.len());
    for entry in &report.unresolved {
        let hint = catalog
            .suggest(&entry.recipe_id)
            .map(|id| format!(" (did you mean '{}'?)", id))
            .unwrap_or_default();
        println!(
            "  {} {}: '{}'{}",
            entry.day, entry.meal_type, entry.recipe_id, hint
        );
    }
    println!();
}

/// Display per-recipe Coles vs Woolworths comparison.
pub fn display_store_pricing(recipes: &[PricedRecipe]) {
    if recipes.is_empty() {
        println!("No recipes to price.");
        return;
    }

    println!();
    println!("=== Store Pricing ===");
    println!();

    let max_name_len = recipes
        .iter()
        .map(|r| r.recipe.name.len())
        .max()
        .unwrap_or(10);

    for priced in recipes {
        let pricing = &priced.store_pricing;
        println!(
            "  {:<width$}  Coles ${:>7.2} | Woolworths ${:>7.2} | cheapest: {} (save ${:.2})",
            priced.recipe.name,
            pricing.coles,
            pricing.woolworths,
            pricing.cheapest,
            pricing.savings,
            width = max_name_len
        );
    }

    println!();
}

/// Display the per-day estimates of a plan.
pub fn display_plan_summary(summary: &PlanSummary) {
    if summary.days.is_empty() {
        println!("Meal plan is empty.");
        return;
    }

    println!();
    println!("=== Meal Plan Summary ===");
    println!();

    for day in &summary.days {
        println!(
            "  {:<9}  {} meals  {:>6.0} cal  ${:>7.2}",
            day.day.as_str(),
            day.meal_count,
            day.estimated_calories,
            day.estimated_cost
        );
    }

    println!();
    println!(
        "Meals: {} from recipes, {} custom",
        summary.recipe_meals, summary.custom_meals
    );
    println!("Total calories: {:.0}", summary.total_estimated_calories);
    println!("Average per day: {:.0}", summary.average_daily_calories());
    println!("Estimated cost: ${:.2}", summary.total_estimated_cost);
    println!();
}

/// Whole numbers without decimals, otherwise up to two places.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        let s = format!("{:.2}", quantity);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
