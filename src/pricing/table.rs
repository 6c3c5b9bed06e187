use std::collections::HashMap;

use serde::Deserialize;

use crate::models::StorePrices;

/// Read-only source of per-retailer shelf prices.
pub trait PriceLookup {
    /// Prices for one ingredient. Unknown ingredients yield the lookup's default.
    fn prices(&self, ingredient: &str) -> StorePrices;
}

/// One CSV row: `ingredient,coles,woolworths`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRow {
    pub ingredient: String,
    pub coles: f64,
    pub woolworths: f64,
}

/// Static price table keyed by lowercase ingredient name.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, StorePrices>,
    fallback: StorePrices,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parsed rows. Later rows override earlier ones.
    pub fn from_rows(rows: impl IntoIterator<Item = PriceRow>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(
                &row.ingredient,
                StorePrices {
                    coles: row.coles,
                    woolworths: row.woolworths,
                },
            );
        }
        table
    }

    /// Prices returned for ingredients not in the table (zero by default).
    pub fn with_fallback(mut self, fallback: StorePrices) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn insert(&mut self, ingredient: &str, prices: StorePrices) {
        self.prices.insert(Self::key(ingredient), prices);
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.prices.contains_key(&Self::key(ingredient))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn key(ingredient: &str) -> String {
        ingredient.trim().to_lowercase()
    }
}

impl PriceLookup for PriceTable {
    fn prices(&self, ingredient: &str) -> StorePrices {
        self.prices
            .get(&Self::key(ingredient))
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl<F> PriceLookup for F
where
    F: Fn(&str) -> StorePrices,
{
    fn prices(&self, ingredient: &str) -> StorePrices {
        self(ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        let mut table = PriceTable::new();
        table.insert(
            "Milk",
            StorePrices {
                coles: 3.1,
                woolworths: 3.3,
            },
        );

        assert_eq!(table.prices("milk").coles, 3.1);
        assert_eq!(table.prices(" MILK ").woolworths, 3.3);
        assert!(table.contains("mIlK"));
    }

    #[test]
    fn test_unknown_uses_fallback() {
        let table = PriceTable::new();
        assert_eq!(table.prices("saffron"), StorePrices::default());

        let table = PriceTable::new().with_fallback(StorePrices {
            coles: 1.0,
            woolworths: 2.0,
        });
        assert_eq!(table.prices("saffron").woolworths, 2.0);
    }

    #[test]
    fn test_from_rows_later_wins() {
        let table = PriceTable::from_rows(vec![
            PriceRow {
                ingredient: "Eggs".to_string(),
                coles: 5.0,
                woolworths: 5.5,
            },
            PriceRow {
                ingredient: "eggs".to_string(),
                coles: 4.8,
                woolworths: 5.2,
            },
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.prices("Eggs").coles, 4.8);
    }
}
