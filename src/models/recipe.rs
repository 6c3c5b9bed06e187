use serde::{Deserialize, Serialize};

use super::Store;

/// A named quantity of a grocery item required by a recipe.
///
/// Identity is the exact `name` (case-sensitive) plus `unit`; units are never
/// converted into one another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    /// Price for the stated quantity.
    pub price: f64,

    pub source: Store,
}

impl Ingredient {
    /// Non-negative quantity and price.
    pub fn is_valid(&self) -> bool {
        self.quantity >= 0.0 && self.price >= 0.0
    }
}

/// A dish that can be placed into a meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub servings: u32,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    #[serde(default)]
    pub dietary_tags: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Sum of the declared ingredient prices.
    pub fn ingredient_cost(&self) -> f64 {
        self.ingredients.iter().map(|i| i.price).sum()
    }

    /// Positive servings and every ingredient valid.
    pub fn is_valid(&self) -> bool {
        self.servings > 0 && self.ingredients.iter().all(Ingredient::is_valid)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} servings, {} ingredients, ${:.2}",
            self.name,
            self.recipe_id,
            self.servings,
            self.ingredients.len(),
            self.ingredient_cost()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            recipe_id: "r1".to_string(),
            name: "Omelette".to_string(),
            description: "Quick eggs".to_string(),
            servings: 2,
            ingredients: vec![
                Ingredient {
                    name: "Eggs".to_string(),
                    quantity: 12.0,
                    unit: "count".to_string(),
                    price: 5.0,
                    source: Store::Coles,
                },
                Ingredient {
                    name: "Milk".to_string(),
                    quantity: 1.0,
                    unit: "L".to_string(),
                    price: 3.5,
                    source: Store::Woolworths,
                },
            ],
            prep_time: None,
            dietary_tags: vec![],
            instructions: vec![],
        }
    }

    #[test]
    fn test_ingredient_cost() {
        let recipe = sample_recipe();
        assert!((recipe.ingredient_cost() - 8.5).abs() < 0.001);
    }

    #[test]
    fn test_is_valid() {
        let recipe = sample_recipe();
        assert!(recipe.is_valid());

        let mut invalid = sample_recipe();
        invalid.servings = 0;
        assert!(!invalid.is_valid());

        let mut invalid = sample_recipe();
        invalid.ingredients[0].price = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "recipeId": "r9",
            "name": "Toast",
            "servings": 1,
            "ingredients": [
                {"name": "Bread", "quantity": 2, "unit": "slice", "price": 0.8, "source": "ALDI"}
            ]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.recipe_id, "r9");
        assert!(recipe.description.is_empty());
        assert!(recipe.dietary_tags.is_empty());
        assert_eq!(recipe.ingredients[0].source, Store::Aldi);
    }
}
