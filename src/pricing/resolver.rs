use tracing::trace;

use crate::models::{PricedRecipe, Recipe, Retailer, StorePricing};
use crate::pricing::table::PriceLookup;

/// Round a currency amount to cents, half away from zero.
#[inline]
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Compare what a recipe costs at Coles versus Woolworths.
///
/// Uses the price table only; each ingredient's own `price` and `source` play
/// no part. Ties go to Coles.
pub fn calculate_store_pricing<P: PriceLookup + ?Sized>(recipe: &Recipe, table: &P) -> StorePricing {
    let mut coles_total = 0.0;
    let mut woolworths_total = 0.0;

    for ingredient in &recipe.ingredients {
        let prices = table.prices(&ingredient.name);
        trace!(
            recipe = %recipe.recipe_id,
            ingredient = %ingredient.name,
            coles = prices.coles,
            woolworths = prices.woolworths,
            "price lookup"
        );
        coles_total += prices.coles;
        woolworths_total += prices.woolworths;
    }

    let coles = round_currency(coles_total);
    let woolworths = round_currency(woolworths_total);

    let cheapest = if coles <= woolworths {
        Retailer::Coles
    } else {
        Retailer::Woolworths
    };

    StorePricing {
        coles,
        woolworths,
        cheapest,
        savings: round_currency((coles - woolworths).abs()),
    }
}

/// Copy of `recipe` with its store comparison attached and `total_cost` set
/// to the cheaper of the two totals.
pub fn enrich_recipe_with_pricing<P: PriceLookup + ?Sized>(recipe: &Recipe, table: &P) -> PricedRecipe {
    let store_pricing = calculate_store_pricing(recipe, table);
    PricedRecipe {
        recipe: recipe.clone(),
        store_pricing,
        total_cost: store_pricing.coles.min(store_pricing.woolworths),
    }
}

/// [`enrich_recipe_with_pricing`] over a list, preserving order.
pub fn enrich_recipes_with_pricing<P: PriceLookup + ?Sized>(
    recipes: &[Recipe],
    table: &P,
) -> Vec<PricedRecipe> {
    recipes
        .iter()
        .map(|r| enrich_recipe_with_pricing(r, table))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(3.14159), 3.14);
        assert_eq!(round_currency(2.0), 2.0);
        assert_eq!(round_currency(0.004), 0.0);
        assert_eq!(round_currency(10.999), 11.0);
    }
}
