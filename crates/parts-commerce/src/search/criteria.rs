//! Shopper-entered filter criteria.

use crate::catalog::Selection;
use crate::money::{Currency, Money};
use crate::search::Filter;
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// Default lower price bound, in cents.
pub const DEFAULT_PRICE_MIN_CENTS: i64 = 0;

/// Default upper price bound, in cents.
pub const DEFAULT_PRICE_MAX_CENTS: i64 = 100_000;

/// The filter panel's state. Replaced as a whole on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query. Empty means no text filter.
    pub query: String,
    pub category: Selection,
    pub brand: Selection,
    /// Inclusive lower bound. Not validated against `price_max`.
    pub price_min: Money,
    /// Inclusive upper bound.
    pub price_max: Money,
    pub in_stock_only: bool,
}

impl FilterCriteria {
    /// Default criteria for a catalog priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            query: String::new(),
            category: Selection::All,
            brand: Selection::All,
            price_min: Money::new(DEFAULT_PRICE_MIN_CENTS, currency),
            price_max: Money::new(DEFAULT_PRICE_MAX_CENTS, currency),
            in_stock_only: false,
        }
    }

    /// Currency the price bounds are expressed in.
    pub fn currency(&self) -> Currency {
        self.price_min.currency
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Selection) -> Self {
        self.category = category;
        self
    }

    pub fn with_brand(mut self, brand: Selection) -> Self {
        self.brand = brand;
        self
    }

    /// Set both price bounds. Inverted bounds are kept as given.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    /// Whether anything narrows the catalog, ignoring the vehicle.
    ///
    /// Price bounds count as active only when tighter than 0–1000.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || !self.category.is_all()
            || !self.brand.is_all()
            || self.price_min.amount_cents > DEFAULT_PRICE_MIN_CENTS
            || self.price_max.amount_cents < DEFAULT_PRICE_MAX_CENTS
            || self.in_stock_only
    }

    /// Compile into predicates: text, category, brand, price, stock, vehicle.
    pub fn filters<'a>(&'a self, vehicle: Option<&'a Vehicle>) -> Vec<Filter<'a>> {
        let mut filters = Vec::with_capacity(6);
        if !self.query.is_empty() {
            filters.push(Filter::text(&self.query));
        }
        if let Selection::Only(category) = &self.category {
            filters.push(Filter::Category(category));
        }
        if let Selection::Only(brand) = &self.brand {
            filters.push(Filter::Brand(brand));
        }
        filters.push(Filter::PriceRange {
            min: self.price_min,
            max: self.price_max,
        });
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        if let Some(vehicle) = vehicle {
            filters.push(Filter::FitsVehicle(vehicle));
        }
        filters
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
