pub mod resolver;
pub mod table;

pub use resolver::{
    calculate_store_pricing, enrich_recipe_with_pricing, enrich_recipes_with_pricing,
    round_currency,
};
pub use table::{PriceLookup, PriceRow, PriceTable};
