//! Search module.
//!
//! Contains filter criteria, the per-part predicates they compile to, and the
//! engine that derives the visible catalog.

mod criteria;
mod engine;
mod filter;
mod results;

pub use criteria::{FilterCriteria, DEFAULT_PRICE_MAX_CENTS, DEFAULT_PRICE_MIN_CENTS};
pub use engine::visible_parts;
pub use filter::Filter;
pub use results::{CatalogView, EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
