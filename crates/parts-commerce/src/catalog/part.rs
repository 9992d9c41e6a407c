//! Part and fitment types.

use crate::ids::PartId;
use crate::money::Money;
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// Stock quantity below which an in-stock part is flagged as running low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// One vehicle configuration a part is declared to fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

impl CompatibilityRecord {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            engine: None,
        }
    }

    /// Exact make, model and year match. Engine is deliberately ignored.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.make == vehicle.make && self.model == vehicle.model && self.year == vehicle.year
    }
}

/// A named specification value (e.g., Material: Ceramic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A purchasable catalog item. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub part_number: String,
    pub brand: String,
    pub category: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub description: String,
    pub in_stock: bool,
    pub stock_quantity: u32,
    #[serde(default)]
    pub compatibility: Vec<CompatibilityRecord>,
    /// Specifications in display order.
    #[serde(default)]
    pub specifications: Vec<Specification>,
    pub rating: f64,
    pub reviews: u32,
}

impl Part {
    /// Whether any compatibility record fits the vehicle.
    pub fn fits(&self, vehicle: &Vehicle) -> bool {
        self.compatibility.iter().any(|c| c.matches(vehicle))
    }

    /// Lowercased text searched by the free-text filter.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.part_number, self.brand, self.description
        )
        .to_lowercase()
    }

    /// Look up a specification by name.
    pub fn specification(&self, name: &str) -> Option<&str> {
        self.specifications
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }

    /// Stock badge for listings.
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        if !self.in_stock {
            StockStatus::OutOfStock
        } else if self.stock_quantity < low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Star breakdown of the average rating.
    pub fn rating_stars(&self) -> RatingStars {
        RatingStars::from_rating(self.rating)
    }

    /// Multi-line summary for the part detail view.
    pub fn detail_summary(&self) -> String {
        format!(
            "Name: {}\nPart #: {}\nBrand: {}\nPrice: {}\n\nDescription: {}",
            self.name,
            self.part_number,
            self.brand,
            self.price.display(),
            self.description
        )
    }
}

/// Availability badge derived from stock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Whether the part can be put in the cart.
    pub fn is_purchasable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

/// Full, half and empty stars out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingStars {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl RatingStars {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, 5.0)
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        let empty = 5 - rating.ceil() as u8;
        Self { full, half, empty }
    }

    /// Render as text, e.g. `"★★★★½"`.
    pub fn render(&self) -> String {
        let mut s = "\u{2605}".repeat(self.full as usize);
        if self.half {
            s.push('\u{00bd}');
        }
        s.push_str(&"\u{2606}".repeat(self.empty as usize));
        s
    }
}
