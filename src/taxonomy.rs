//! Asset class taxonomy
//!
//! The Alternatives / Non-Alternatives split is an explicit enumerated
//! table rather than string literals scattered through the aggregation
//! code, so a new asset class shows up as a classification decision
//! instead of silently landing in the wrong bucket.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset classes counted as Alternatives
pub const ALTERNATIVE_CLASSES: [&str; 5] = [
    "Private Equity",
    "Real Assets",
    "Hedge Funds",
    "Credit Funds",
    "Real Estate",
];

/// Asset classes tracked as traditional (Non-Alternatives) holdings
pub const NON_ALTERNATIVE_CLASSES: [&str; 12] = [
    "Equities",
    "Derivatives",
    "Cash",
    "Sovereigns/Treasuries",
    "CMBS",
    "Agencies",
    "Corporate Bonds",
    "Preferreds",
    "ABS",
    "Munis",
    "CLOs",
    "RMBS",
];

/// Category a record belongs to after classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Alternative,
    NonAlternative,
}

impl AssetCategory {
    /// Display label matching the dashboard payload ("Category" field)
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Alternative => "Alternatives",
            AssetCategory::NonAlternative => "Non-Alternatives",
        }
    }
}

static CLASSIFICATION_TABLE: Lazy<HashMap<&'static str, AssetCategory>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for class in ALTERNATIVE_CLASSES {
        table.insert(class, AssetCategory::Alternative);
    }
    for class in NON_ALTERNATIVE_CLASSES {
        table.insert(class, AssetCategory::NonAlternative);
    }
    table
});

/// Look up an asset class in the taxonomy.
///
/// Returns `None` for class names in neither set; callers decide how to
/// handle the gap (the portfolio layer folds them into Non-Alternatives
/// and warns).
pub fn lookup(asset_class: &str) -> Option<AssetCategory> {
    CLASSIFICATION_TABLE.get(asset_class.trim()).copied()
}

/// Classify an asset class, applying the Non-Alternatives fallback for
/// names absent from both sets.
pub fn classify(asset_class: &str) -> AssetCategory {
    lookup(asset_class).unwrap_or(AssetCategory::NonAlternative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternatives_are_classified() {
        for class in ALTERNATIVE_CLASSES {
            assert_eq!(classify(class), AssetCategory::Alternative);
        }
    }

    #[test]
    fn test_non_alternatives_are_classified() {
        for class in NON_ALTERNATIVE_CLASSES {
            assert_eq!(classify(class), AssetCategory::NonAlternative);
        }
    }

    #[test]
    fn test_unknown_class_falls_back_to_non_alternative() {
        assert_eq!(lookup("Collectibles"), None);
        assert_eq!(classify("Collectibles"), AssetCategory::NonAlternative);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for class in ["Private Equity", "Cash", "Collectibles"] {
            assert_eq!(classify(class), classify(class));
        }
    }

    #[test]
    fn test_taxonomy_sets_are_disjoint() {
        for class in ALTERNATIVE_CLASSES {
            assert!(!NON_ALTERNATIVE_CLASSES.contains(&class));
        }
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(lookup(" Hedge Funds "), Some(AssetCategory::Alternative));
    }
}
