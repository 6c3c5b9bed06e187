pub mod prompts;
pub mod render;

pub use prompts::{prompt_recipe_choice, prompt_yes_no};
pub use render::{
    display_plan_summary, display_shopping_list, display_skipped, display_store_pricing,
};
