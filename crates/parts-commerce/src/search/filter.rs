//! Per-part filter predicates.

use crate::catalog::Part;
use crate::money::Money;
use crate::vehicle::Vehicle;

/// A single predicate over a part.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<'a> {
    /// Lowercased needle matched against name, part number, brand and description.
    Text(String),
    /// Exact, case-sensitive category.
    Category(&'a str),
    /// Exact, case-sensitive brand.
    Brand(&'a str),
    /// Inclusive price range.
    PriceRange { min: Money, max: Money },
    /// Only parts flagged in stock.
    InStock,
    /// At least one compatibility record matching make, model and year.
    FitsVehicle(&'a Vehicle),
}

impl<'a> Filter<'a> {
    /// Create a case-insensitive text filter.
    pub fn text(query: &str) -> Self {
        Filter::Text(query.to_lowercase())
    }

    /// Check whether a part passes this predicate.
    pub fn matches(&self, part: &Part) -> bool {
        match self {
            Filter::Text(needle) => part.search_text().contains(needle.as_str()),
            Filter::Category(category) => part.category == *category,
            Filter::Brand(brand) => part.brand == *brand,
            Filter::PriceRange { min, max } => part.price.is_within(min, max),
            Filter::InStock => part.in_stock,
            Filter::FitsVehicle(vehicle) => part.fits(vehicle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::PartId;
    use crate::money::Currency;

    fn part(id: &str) -> Part {
        Catalog::bundled()
            .unwrap()
            .get(&PartId::new(id))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let pads = part("1");
        assert!(Filter::text("BREMBO").matches(&pads));
        assert!(Filter::text("bp-001").matches(&pads));
        assert!(Filter::text("brake dust").matches(&pads));
        assert!(!Filter::text("oil").matches(&pads));
    }

    #[test]
    fn test_text_spans_field_boundaries() {
        // Fields are joined with single spaces before matching.
        let pads = part("1");
        assert!(Filter::text("front set bp-001").matches(&pads));
    }

    #[test]
    fn test_category_and_brand_are_exact() {
        let filter = part("2");
        assert!(Filter::Category("Engine").matches(&filter));
        assert!(!Filter::Category("engine").matches(&filter));
        assert!(Filter::Brand("Mann-Filter").matches(&filter));
        assert!(!Filter::Brand("Mann").matches(&filter));
    }

    #[test]
    fn test_price_range_boundaries() {
        let filter = part("2"); // $12.99
        let at = Money::new(1299, Currency::USD);
        assert!(Filter::PriceRange { min: at, max: at }.matches(&filter));
        assert!(!Filter::PriceRange {
            min: Money::new(1300, Currency::USD),
            max: Money::new(2000, Currency::USD),
        }
        .matches(&filter));
    }

    #[test]
    fn test_in_stock() {
        assert!(Filter::InStock.matches(&part("1")));
        assert!(!Filter::InStock.matches(&part("4")));
    }

    #[test]
    fn test_fits_vehicle() {
        let vehicle = Vehicle::new("Toyota", "Corolla", 2019);
        assert!(Filter::FitsVehicle(&vehicle).matches(&part("2")));
        assert!(!Filter::FitsVehicle(&vehicle).matches(&part("1")));
    }
}
