use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use savesmart_rs::cli::{Cli, Command};
use savesmart_rs::error::{Result, SaveSmartError};
use savesmart_rs::interface::{
    display_plan_summary, display_shopping_list, display_skipped, display_store_pricing,
    prompt_recipe_choice, prompt_yes_no,
};
use savesmart_rs::models::{Meal, MealType, Weekday};
use savesmart_rs::plan::{summarize_plan, MealPlan};
use savesmart_rs::pricing::enrich_recipes_with_pricing;
use savesmart_rs::shopping::generate_from_catalog;
use savesmart_rs::state::{
    load_plan, load_price_table, load_recipes, save_plan, save_priced_recipes,
    save_shopping_list, write_shopping_list_csv, RecipeCatalog,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default `warn`, `debug` with -v).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::List {
            plan,
            recipes,
            csv,
            json,
            strict,
        } => cmd_list(&plan, &recipes, csv.as_deref(), json.as_deref(), strict),
        Command::Pricing {
            recipes,
            prices,
            json,
        } => cmd_pricing(&recipes, &prices, json.as_deref()),
        Command::Summary { plan } => cmd_summary(&plan),
        Command::AddMeal {
            plan,
            recipes,
            day,
            meal_type,
            recipe,
            name,
            calories,
            cost,
            yes,
        } => cmd_add_meal(
            &plan,
            &recipes,
            day,
            NewMeal {
                meal_type,
                recipe,
                name,
                calories,
                cost,
            },
            yes,
        ),
        Command::RemoveMeal {
            plan,
            recipes,
            day,
            meal_type,
            yes,
        } => cmd_remove_meal(&plan, &recipes, day, meal_type, yes),
    }
}

/// Generate and print the shopping list for a plan.
fn cmd_list(
    plan_path: &Path,
    recipes_path: &Path,
    csv_path: Option<&Path>,
    json_path: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let plan = load_plan(plan_path)?;
    let catalog = RecipeCatalog::new(load_recipes(recipes_path)?);

    info!(
        meals = plan.meal_count(),
        recipes = catalog.len(),
        "building shopping list"
    );

    let report = generate_from_catalog(&plan.days, &catalog);

    if !report.unresolved.is_empty() {
        for entry in &report.unresolved {
            warn!(day = %entry.day, meal = %entry.meal_type, recipe_id = %entry.recipe_id, "recipe not found");
        }
        if strict {
            return Err(SaveSmartError::UnresolvedRecipes(report.unresolved_ids()));
        }
        display_skipped(&report, &catalog);
    }

    display_shopping_list(&report.list);

    if let Some(path) = csv_path {
        write_shopping_list_csv(path, &report.list)?;
        println!("Wrote shopping list to {}", path.display());
    }

    if let Some(path) = json_path {
        save_shopping_list(path, &report.list)?;
        println!("Wrote shopping list to {}", path.display());
    }

    Ok(())
}

/// Price every recipe at both retailers.
fn cmd_pricing(recipes_path: &Path, prices_path: &Path, json_path: Option<&Path>) -> Result<()> {
    let recipes = load_recipes(recipes_path)?;
    let table = load_price_table(prices_path)?;

    info!(recipes = recipes.len(), prices = table.len(), "pricing recipes");

    for recipe in &recipes {
        for ingredient in &recipe.ingredients {
            if !table.contains(&ingredient.name) {
                warn!(recipe = %recipe.recipe_id, ingredient = %ingredient.name, "no price listed");
            }
        }
    }

    let priced = enrich_recipes_with_pricing(&recipes, &table);
    display_store_pricing(&priced);

    if let Some(path) = json_path {
        save_priced_recipes(path, &priced)?;
        println!("Wrote priced recipes to {}", path.display());
    }

    Ok(())
}

fn cmd_summary(plan_path: &Path) -> Result<()> {
    let plan = load_plan(plan_path)?;
    display_plan_summary(&summarize_plan(&plan.days));
    Ok(())
}

/// Fields of a meal supplied on the command line.
struct NewMeal {
    meal_type: MealType,
    recipe: Option<String>,
    name: Option<String>,
    calories: f64,
    cost: f64,
}

fn cmd_add_meal(
    plan_path: &Path,
    recipes_path: &Path,
    day: Weekday,
    new_meal: NewMeal,
    yes: bool,
) -> Result<()> {
    let mut plan = load_plan_or_empty(plan_path)?;
    let catalog = RecipeCatalog::new(load_recipes(recipes_path)?);

    let recipe_id = match new_meal.recipe.as_deref() {
        Some(input) => match prompt_recipe_choice(&catalog, input)? {
            Some(id) => Some(id),
            None => {
                println!("No recipe chosen, plan unchanged.");
                return Ok(());
            }
        },
        None => None,
    };

    let name = match (new_meal.name, recipe_id.as_deref().and_then(|id| catalog.get(id))) {
        (Some(name), _) => name,
        (None, Some(recipe)) => recipe.name.clone(),
        (None, None) => {
            return Err(SaveSmartError::InvalidInput(
                "a custom meal needs --name".to_string(),
            ));
        }
    };

    let description = recipe_id
        .as_deref()
        .and_then(|id| catalog.get(id))
        .map(|r| r.description.clone())
        .unwrap_or_default();

    let meal = Meal {
        meal_type: new_meal.meal_type,
        name,
        description,
        recipe_id,
        estimated_calories: new_meal.calories,
        estimated_cost: new_meal.cost,
    };

    if let Some(previous) = plan.add_meal(day, meal) {
        println!("Replaced {} {}: {}", day, previous.meal_type, previous.name);
    }

    finish_edit(plan_path, &plan, &catalog, yes)
}

fn cmd_remove_meal(
    plan_path: &Path,
    recipes_path: &Path,
    day: Weekday,
    meal_type: MealType,
    yes: bool,
) -> Result<()> {
    let mut plan = load_plan(plan_path)?;
    let catalog = RecipeCatalog::new(load_recipes(recipes_path)?);

    let removed = plan.remove_meal(day, meal_type)?;
    println!("Removed {} {}: {}", day, meal_type, removed.name);

    finish_edit(plan_path, &plan, &catalog, yes)
}

/// Show the regenerated list, then save the plan if confirmed.
fn finish_edit(plan_path: &Path, plan: &MealPlan, catalog: &RecipeCatalog, yes: bool) -> Result<()> {
    let report = generate_from_catalog(&plan.days, catalog);
    display_skipped(&report, catalog);
    display_shopping_list(&report.list);

    let save = yes || prompt_yes_no("Save updated meal plan?", true)?;
    if save {
        save_plan(plan_path, plan)?;
        println!("Meal plan saved.");
    }

    Ok(())
}

fn load_plan_or_empty(path: &Path) -> Result<MealPlan> {
    if path.exists() {
        load_plan(path)
    } else {
        info!(path = %path.display(), "starting a new meal plan");
        Ok(MealPlan::default())
    }
}
