mod catalog;
mod persistence;

pub use catalog::RecipeCatalog;
pub use persistence::{
    load_plan, load_price_table, load_recipes, save_plan, save_priced_recipes,
    save_shopping_list, write_shopping_list_csv,
};
