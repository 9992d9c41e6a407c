//! Parts catalog module.
//!
//! Contains the part schema, the in-memory store, and the category/brand
//! choices offered for filtering.

mod part;
mod store;
mod taxonomy;

pub use part::{
    CompatibilityRecord, Part, RatingStars, Specification, StockStatus,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
pub use store::Catalog;
pub use taxonomy::{Selection, ALL_BRANDS, ALL_CATEGORIES, BRAND_OPTIONS, CATEGORY_OPTIONS};
