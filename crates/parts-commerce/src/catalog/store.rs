//! In-memory catalog store.

use crate::catalog::Part;
use crate::error::CommerceError;
use crate::ids::PartId;
use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../fixtures/catalog.json");

/// The static list of parts for a session.
///
/// Parts keep their fixture order; the filter engine relies on it to return
/// results in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    currency: Currency,
    parts: Vec<Part>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate part ids.
    pub fn new(currency: Currency, parts: Vec<Part>) -> Result<Self, CommerceError> {
        let catalog = Self { currency, parts };
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check_unique_ids()?;
        tracing::info!(parts = catalog.len(), currency = %catalog.currency, "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CommerceError::CatalogRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the crate.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All parts in catalog order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Get a part by id.
    pub fn get(&self, id: &PartId) -> Option<&Part> {
        self.parts.iter().find(|p| &p.id == id)
    }

    /// Get a part by id, or fail with [`CommerceError::PartNotFound`].
    pub fn require(&self, id: &PartId) -> Result<&Part, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::PartNotFound(id.to_string()))
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.parts.iter().map(|p| p.brand.as_str()))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.parts.iter().map(|p| p.category.as_str()))
    }

    fn check_unique_ids(&self) -> Result<(), CommerceError> {
        let mut seen = HashSet::with_capacity(self.parts.len());
        for part in &self.parts {
            if !seen.insert(&part.id) {
                return Err(CommerceError::DuplicatePart(part.id.to_string()));
            }
        }
        Ok(())
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.currency(), Currency::USD);
        assert_eq!(catalog.parts()[0].name, "Brake Pads - Front Set");
        assert_eq!(
            catalog.get(&PartId::new("2")).map(|p| p.price.amount_cents),
            Some(1299)
        );
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["Brakes", "Engine", "Lighting", "Suspension"]
        );
        assert_eq!(catalog.brands()[0], "Brembo");
        assert_eq!(catalog.brands().len(), 6);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::bundled().unwrap();
        let mut parts = catalog.parts().to_vec();
        parts.push(parts[0].clone());
        let err = Catalog::new(Currency::USD, parts).unwrap_err();
        assert!(matches!(err, CommerceError::DuplicatePart(id) if id == "1"));
    }

    #[test]
    fn test_require_unknown_part() {
        let catalog = Catalog::bundled().unwrap();
        assert!(matches!(
            catalog.require(&PartId::new("404")),
            Err(CommerceError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{\"parts\": 3}"),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CommerceError::CatalogRead { .. }));
    }
}
