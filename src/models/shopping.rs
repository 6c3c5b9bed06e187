use serde::{Deserialize, Serialize};

/// One aggregated line of a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub name: String,

    /// Summed over every contributing occurrence.
    pub quantity: f64,

    pub unit: String,

    /// Summed over every contributing occurrence.
    pub price: f64,

    /// One entry per contributing occurrence, duplicates kept.
    pub recipe_ids: Vec<String>,
}

/// Items bought at a single store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListStore {
    pub store_name: String,
    pub items: Vec<ShoppingListItem>,
    pub subtotal: f64,
}

/// Store-grouped shopping list for a whole plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Sorted by `store_name`.
    pub stores: Vec<ShoppingListStore>,
    pub total_cost: f64,
}

impl ShoppingList {
    pub fn empty() -> Self {
        Self {
            stores: Vec::new(),
            total_cost: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Total number of items across all stores.
    pub fn item_count(&self) -> usize {
        self.stores.iter().map(|s| s.items.len()).sum()
    }

    /// Look up a store by display name.
    pub fn store(&self, store_name: &str) -> Option<&ShoppingListStore> {
        self.stores.iter().find(|s| s.store_name == store_name)
    }
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::empty()
    }
}
