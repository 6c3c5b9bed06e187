use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::state::RecipeCatalog;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a recipe id typed by the user against the catalog.
///
/// Exact ids pass straight through. Otherwise recipes whose id or name is
/// close to the input are offered; `None` means the user picked none of them.
pub fn prompt_recipe_choice(catalog: &RecipeCatalog, input: &str) -> Result<Option<String>> {
    if catalog.contains(input) {
        return Ok(Some(input.to_string()));
    }

    let wanted = input.trim().to_lowercase();

    let mut candidates: Vec<(&str, &str, f64)> = catalog
        .recipes()
        .into_iter()
        .map(|r| {
            let score = jaro_winkler(&r.recipe_id.to_lowercase(), &wanted)
                .max(jaro_winkler(&r.name.to_lowercase(), &wanted));
            (r.recipe_id.as_str(), r.name.as_str(), score)
        })
        .filter(|(_, _, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No recipe matching '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let (id, name, _) = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}' ({})?", name, id))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| id.to_string()));
    }

    // Multiple matches - let user select
    let options: Vec<(&str, String)> = candidates
        .iter()
        .take(5)
        .map(|(id, name, _)| (*id, format!("{} ({})", name, id)))
        .collect();

    let mut selection_options: Vec<String> = options.iter().map(|(_, label)| label.clone()).collect();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which recipe did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).map(|(id, _)| id.to_string()))
}
