mod plan;
mod pricing;
mod recipe;
mod shopping;
mod store;

pub use plan::{Meal, MealPlanDay, MealType, Weekday};
pub use pricing::{PricedRecipe, Retailer, StorePrices, StorePricing};
pub use recipe::{Ingredient, Recipe};
pub use shopping::{ShoppingList, ShoppingListItem, ShoppingListStore};
pub use store::{normalize_store_name, Store};
