use std::fmt;

use serde::{Deserialize, Serialize};

use super::Recipe;

/// The two retailers covered by the per-recipe price comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Coles,
    Woolworths,
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Retailer::Coles => f.write_str("coles"),
            Retailer::Woolworths => f.write_str("woolworths"),
        }
    }
}

/// Shelf price of one ingredient at each retailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StorePrices {
    pub coles: f64,
    pub woolworths: f64,
}

/// Per-recipe comparison of the two retailers' totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorePricing {
    pub coles: f64,
    pub woolworths: f64,
    pub cheapest: Retailer,
    pub savings: f64,
}

/// A recipe together with its price comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,

    pub store_pricing: StorePricing,

    /// Lower of the two retailer totals.
    pub total_cost: f64,
}
