use std::fmt;

use serde::{Deserialize, Serialize};

/// Grocery retailer an ingredient is sourced from.
///
/// Raw source labels are normalized once, when an ingredient is read. Any
/// label that is not a known retailer (including the `"mock"` label used by
/// fallback data) collapses into `Other`.
///
/// Serialization writes the lowercase label, so the round trip is lossy for
/// unknown sources: `"mock"` or `"iga"` read in come back out as `"other"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Store {
    Coles,
    Woolworths,
    Aldi,
    Other,
}

impl Store {
    /// Case-insensitive mapping from a source label. Total: never fails.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "coles" => Store::Coles,
            "woolworths" => Store::Woolworths,
            "aldi" => Store::Aldi,
            _ => Store::Other,
        }
    }

    /// Name shown to users and used to order stores in a shopping list.
    pub fn display_name(self) -> &'static str {
        match self {
            Store::Coles => "Coles",
            Store::Woolworths => "Woolworths",
            Store::Aldi => "Aldi",
            Store::Other => "Other",
        }
    }

    /// Lowercase label written back out when serializing.
    pub fn label(self) -> &'static str {
        match self {
            Store::Coles => "coles",
            Store::Woolworths => "woolworths",
            Store::Aldi => "aldi",
            Store::Other => "other",
        }
    }
}

impl From<String> for Store {
    fn from(label: String) -> Self {
        Store::from_label(&label)
    }
}

impl From<Store> for String {
    fn from(store: Store) -> Self {
        store.label().to_string()
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display name for a raw source label.
pub fn normalize_store_name(source_label: &str) -> &'static str {
    Store::from_label(source_label).display_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_case_insensitive() {
        assert_eq!(normalize_store_name("coles"), "Coles");
        assert_eq!(normalize_store_name("COLES"), "Coles");
        assert_eq!(normalize_store_name("Woolworths"), "Woolworths");
        assert_eq!(normalize_store_name("aLdI"), "Aldi");
    }

    #[test]
    fn test_unknown_labels_are_other() {
        assert_eq!(normalize_store_name("mock"), "Other");
        assert_eq!(normalize_store_name(""), "Other");
        assert_eq!(normalize_store_name("iga"), "Other");
        assert_eq!(normalize_store_name(" coles "), "Other");
    }

    #[test]
    fn test_serde_normalizes_on_read() {
        let store: Store = serde_json::from_str("\"WOOLWORTHS\"").unwrap();
        assert_eq!(store, Store::Woolworths);

        let store: Store = serde_json::from_str("\"mock\"").unwrap();
        assert_eq!(store, Store::Other);
        assert_eq!(serde_json::to_string(&store).unwrap(), "\"other\"");
    }

    #[test]
    fn test_unknown_label_does_not_round_trip() {
        let store: Store = serde_json::from_str("\"IGA\"").unwrap();
        let written = serde_json::to_string(&store).unwrap();
        assert_eq!(written, "\"other\"");

        let reread: Store = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, Store::Other);
        assert_eq!(String::from(Store::Coles), "coles");
    }
}
