//! Category and brand choices offered by the filter panel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown for "no category filter".
pub const ALL_CATEGORIES: &str = "All Categories";

/// Sentinel shown for "no brand filter".
pub const ALL_BRANDS: &str = "All Brands";

/// Categories listed in the filter panel, sentinel first.
pub const CATEGORY_OPTIONS: &[&str] = &[
    ALL_CATEGORIES,
    "Brakes",
    "Engine",
    "Lighting",
    "Suspension",
    "Electrical",
    "Exhaust",
    "Transmission",
];

/// Brands listed in the filter panel, sentinel first.
pub const BRAND_OPTIONS: &[&str] = &[
    ALL_BRANDS,
    "Brembo",
    "Mann-Filter",
    "Philips",
    "K&N",
    "NGK",
    "Monroe",
    "Bosch",
    "Denso",
];

/// A dropdown choice: everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Exact, case-sensitive selection.
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    /// Interpret a dropdown value, where `sentinel` means "everything".
    pub fn from_choice(value: &str, sentinel: &str) -> Self {
        if value == sentinel {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// Whether a field value passes this selection.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Render as a dropdown label, using `sentinel` for [`Selection::All`].
    pub fn label<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Selection::All => sentinel,
            Selection::Only(value) => value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_all() {
        assert_eq!(Selection::from_choice(ALL_CATEGORIES, ALL_CATEGORIES), Selection::All);
        assert_eq!(
            Selection::from_choice("Brakes", ALL_CATEGORIES),
            Selection::only("Brakes")
        );
    }

    #[test]
    fn test_admits_is_case_sensitive() {
        let brakes = Selection::only("Brakes");
        assert!(brakes.admits("Brakes"));
        assert!(!brakes.admits("brakes"));
        assert!(Selection::All.admits("anything"));
    }

    #[test]
    fn test_label() {
        assert_eq!(Selection::All.label(ALL_BRANDS), "All Brands");
        assert_eq!(Selection::only("NGK").label(ALL_BRANDS), "NGK");
    }

    #[test]
    fn test_option_lists_start_with_sentinel() {
        assert_eq!(CATEGORY_OPTIONS[0], ALL_CATEGORIES);
        assert_eq!(BRAND_OPTIONS[0], ALL_BRANDS);
        assert_eq!(CATEGORY_OPTIONS.len(), 8);
        assert_eq!(BRAND_OPTIONS.len(), 9);
    }
}
