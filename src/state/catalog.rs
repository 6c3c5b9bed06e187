use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::Recipe;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Recipes keyed by `recipe_id`.
///
/// When the same id appears more than once, the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: HashMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from an owned list of recipes.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut map = HashMap::new();
        for recipe in recipes {
            map.insert(recipe.recipe_id.clone(), recipe);
        }
        Self { recipes: map }
    }

    /// Build a catalog by cloning a borrowed list of recipes.
    pub fn from_slice(recipes: &[Recipe]) -> Self {
        Self::new(recipes.to_vec())
    }

    /// Get a recipe by id (exact match).
    pub fn get(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.get(recipe_id)
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.recipes.contains_key(recipe_id)
    }

    /// All recipes, sorted by id.
    pub fn recipes(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.values().collect();
        recipes.sort_by(|a, b| a.recipe_id.cmp(&b.recipe_id));
        recipes
    }

    /// Closest known id to an unknown one, for diagnostics.
    pub fn suggest(&self, recipe_id: &str) -> Option<&str> {
        let wanted = recipe_id.to_lowercase();

        let mut candidates: Vec<(&str, f64)> = self
            .recipes
            .keys()
            .map(|id| (id.as_str(), jaro_winkler(&id.to_lowercase(), &wanted)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        // Highest score first, then id for a stable pick between equals.
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        candidates.first().map(|(id, _)| *id)
    }

    /// Count of recipes in the catalog.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if catalog has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            recipe_id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            servings: 2,
            ingredients: vec![],
            prep_time: None,
            dietary_tags: vec![],
            instructions: vec![],
        }
    }

    #[test]
    fn test_get_exact_id() {
        let catalog = RecipeCatalog::new(vec![recipe("pasta-bake", "Pasta Bake")]);
        assert!(catalog.get("pasta-bake").is_some());
        assert!(catalog.get("PASTA-BAKE").is_none());
        assert!(catalog.contains("pasta-bake"));
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let catalog = RecipeCatalog::new(vec![recipe("r1", "First"), recipe("r1", "Second")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("r1").unwrap().name, "Second");
    }

    #[test]
    fn test_recipes_sorted_by_id() {
        let catalog = RecipeCatalog::new(vec![recipe("b", "B"), recipe("a", "A"), recipe("c", "C")]);
        let ids: Vec<&str> = catalog.recipes().iter().map(|r| r.recipe_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_suggest_close_id() {
        let catalog = RecipeCatalog::new(vec![
            recipe("chicken-curry", "Chicken Curry"),
            recipe("beef-stew", "Beef Stew"),
        ]);
        assert_eq!(catalog.suggest("chiken-curry"), Some("chicken-curry"));
        assert_eq!(catalog.suggest("zzzzzz"), None);
    }
}
