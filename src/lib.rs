pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod plan;
pub mod pricing;
pub mod shopping;
pub mod state;

pub use error::{Result, SaveSmartError};
pub use models::{
    normalize_store_name, Ingredient, Meal, MealPlanDay, MealType, Recipe, ShoppingList,
    ShoppingListItem, ShoppingListStore, Store, StorePricing, Weekday,
};
pub use plan::MealPlan;
pub use pricing::{calculate_store_pricing, enrich_recipe_with_pricing, PriceLookup, PriceTable};
pub use shopping::generate_shopping_list;
