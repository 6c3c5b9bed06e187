use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{MealType, Weekday};

/// SaveSmart — weekly shopping lists and store price comparison for meal plans.
#[derive(Parser, Debug)]
#[command(name = "savesmart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log engine decisions (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the shopping list for a meal plan.
    List {
        /// Path to the meal plan JSON file.
        #[arg(short, long, default_value = "meal_plan.json")]
        plan: PathBuf,

        /// Path to the recipes JSON file.
        #[arg(short, long, default_value = "recipes.json")]
        recipes: PathBuf,

        /// Also write the list as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the list as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Fail instead of skipping meals whose recipe is unknown.
        #[arg(long)]
        strict: bool,
    },

    /// Compare each recipe's cost at Coles and Woolworths.
    Pricing {
        /// Path to the recipes JSON file.
        #[arg(short, long, default_value = "recipes.json")]
        recipes: PathBuf,

        /// Path to the price table CSV (ingredient,coles,woolworths).
        #[arg(long, default_value = "prices.csv")]
        prices: PathBuf,

        /// Also write the priced recipes as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show estimated calories and cost per day.
    Summary {
        /// Path to the meal plan JSON file.
        #[arg(short, long, default_value = "meal_plan.json")]
        plan: PathBuf,
    },

    /// Put a meal into a plan slot, replacing what was there.
    AddMeal {
        #[arg(short, long, default_value = "meal_plan.json")]
        plan: PathBuf,

        #[arg(short, long, default_value = "recipes.json")]
        recipes: PathBuf,

        /// Day of the week (e.g. monday).
        #[arg(long)]
        day: Weekday,

        /// breakfast, lunch, dinner or snack.
        #[arg(long)]
        meal_type: MealType,

        /// Recipe to cook. Omit for a custom meal.
        #[arg(long)]
        recipe: Option<String>,

        /// Display name; defaults to the recipe name.
        #[arg(long)]
        name: Option<String>,

        #[arg(long, default_value = "0")]
        calories: f64,

        #[arg(long, default_value = "0")]
        cost: f64,

        /// Save without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// Clear a plan slot.
    RemoveMeal {
        #[arg(short, long, default_value = "meal_plan.json")]
        plan: PathBuf,

        #[arg(short, long, default_value = "recipes.json")]
        recipes: PathBuf,

        #[arg(long)]
        day: Weekday,

        #[arg(long)]
        meal_type: MealType,

        /// Save without asking.
        #[arg(short, long)]
        yes: bool,
    },
}
