//! Auto-parts storefront core.
//!
//! This crate provides the in-memory logic behind a parts counter:
//!
//! - **Catalog**: Parts, vehicle fitment records, category/brand choices
//! - **Search**: Filter criteria and the engine deriving the visible catalog
//! - **Vehicle**: Draft/committed vehicle selection and the make/model table
//! - **Cart**: Quantities per part and derived totals
//! - **Session**: Whole-state replacement of all of the above with change detection
//!
//! # Example
//!
//! ```rust
//! use parts_commerce::prelude::*;
//!
//! let catalog = Catalog::bundled()?;
//! let mut session = Session::default();
//!
//! session.set_criteria(FilterCriteria::default().with_query("brake"));
//! session.edit_vehicle(|draft| {
//!     draft.set_make("Honda");
//!     draft.set_model("Civic");
//!     draft.set_year(Some(2019));
//! });
//! session.apply_vehicle()?;
//!
//! let view = session.view(&catalog);
//! assert_eq!(view.len(), 1);
//!
//! session.add_to_cart(view.parts[0])?;
//! assert_eq!(session.totals().total_price.display(), "$89.99");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod session;
pub mod vehicle;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Bound, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Bound, Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CompatibilityRecord, Part, RatingStars, Selection, Specification, StockStatus,
        ALL_BRANDS, ALL_CATEGORIES,
    };

    // Search
    pub use crate::search::{visible_parts, CatalogView, Filter, FilterCriteria};

    // Vehicle
    pub use crate::vehicle::{Vehicle, VehicleDraft, VehicleReference, VehicleSelector};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartTotals};

    // Session
    pub use crate::session::{Session, SessionSettings};
}
