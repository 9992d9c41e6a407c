//! Filtered catalog view.

use crate::catalog::{Catalog, Part};
use crate::search::{visible_parts, FilterCriteria};
use crate::vehicle::Vehicle;
use serde::Serialize;

/// Heading shown when nothing matches.
pub const EMPTY_STATE_TITLE: &str = "No parts found";

/// Hint shown under the empty-state heading.
pub const EMPTY_STATE_HINT: &str =
    "Try adjusting your search criteria or filters to find more products.";

/// The visible slice of the catalog for one set of criteria.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Visible parts in catalog order.
    pub parts: Vec<&'a Part>,
    /// Size of the whole catalog.
    pub total: usize,
    /// Vehicle the view was narrowed to.
    pub vehicle: Option<Vehicle>,
}

impl<'a> CatalogView<'a> {
    /// Run the filter engine over a catalog.
    pub fn build(
        catalog: &'a Catalog,
        criteria: &FilterCriteria,
        vehicle: Option<&Vehicle>,
    ) -> Self {
        let parts = visible_parts(catalog.parts(), criteria, vehicle);
        tracing::debug!(
            visible = parts.len(),
            total = catalog.len(),
            vehicle = vehicle.map(|v| v.to_string()),
            "catalog view rebuilt"
        );
        Self {
            parts,
            total: catalog.len(),
            vehicle: vehicle.cloned(),
        }
    }

    /// Check if nothing matched. Rendered as a neutral empty state, not an error.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of visible parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Results header, e.g. "Showing 1 of 6 products • Compatible with 2019 Honda Civic".
    pub fn summary(&self) -> String {
        let mut s = format!("Showing {} of {} products", self.parts.len(), self.total);
        if let Some(vehicle) = &self.vehicle {
            s.push_str(&format!(
                " \u{2022} Compatible with {} {} {}",
                vehicle.year, vehicle.make, vehicle.model
            ));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Selection;

    #[test]
    fn test_summary_without_vehicle() {
        let catalog = Catalog::bundled().unwrap();
        let view = CatalogView::build(&catalog, &FilterCriteria::default(), None);
        assert_eq!(view.summary(), "Showing 6 of 6 products");
        assert!(!view.is_empty());
    }

    #[test]
    fn test_summary_with_vehicle_omits_engine() {
        let catalog = Catalog::bundled().unwrap();
        let vehicle = Vehicle::new("Honda", "Civic", 2019).with_engine("2.0L");
        let view = CatalogView::build(&catalog, &FilterCriteria::default(), Some(&vehicle));
        assert_eq!(
            view.summary(),
            "Showing 1 of 6 products \u{2022} Compatible with 2019 Honda Civic"
        );
    }

    #[test]
    fn test_empty_view() {
        let catalog = Catalog::bundled().unwrap();
        let criteria = FilterCriteria::default().with_brand(Selection::only("Bosch"));
        let view = CatalogView::build(&catalog, &criteria, None);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.total, 6);
    }
}
