//! Storefront session state.
//!
//! A [`Session`] plays the part of the storefront's event handlers: each
//! method computes the next criteria, vehicle selection or cart as a new
//! value and swaps it in only if it differs, reporting whether anything
//! changed so the caller knows when to re-render.

use crate::cart::{Cart, CartTotals};
use crate::catalog::{Catalog, Part, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::error::CommerceError;
use crate::ids::{PartId, SessionId};
use crate::search::{CatalogView, FilterCriteria};
use crate::vehicle::{current_year, Vehicle, VehicleDraft, VehicleSelector};
use serde::{Deserialize, Serialize};

/// Knobs for a session, usually read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Criteria the session starts with and resets to.
    pub default_criteria: FilterCriteria,
    /// Refuse to add parts that are not in stock.
    pub enforce_stock: bool,
    /// Stock quantity below which a part is shown as low stock.
    pub low_stock_threshold: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_criteria: FilterCriteria::default(),
            enforce_stock: true,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Criteria, vehicle selection and cart for one shopper.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    settings: SessionSettings,
    criteria: FilterCriteria,
    vehicles: VehicleSelector,
    cart: Cart,
}

impl Session {
    /// Start a session with default criteria, no vehicle and an empty cart.
    pub fn new(settings: SessionSettings) -> Self {
        let id = SessionId::generate();
        tracing::debug!(session = %id, "session started");
        Self {
            id,
            criteria: settings.default_criteria.clone(),
            vehicles: VehicleSelector::new(),
            cart: Cart::with_currency(settings.default_criteria.currency()),
            settings,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn vehicle_selector(&self) -> &VehicleSelector {
        &self.vehicles
    }

    /// The committed vehicle, if any.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.committed()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Visible parts for the current criteria and vehicle.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> CatalogView<'a> {
        CatalogView::build(catalog, &self.criteria, self.vehicles.committed())
    }

    /// Current cart totals.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // -- Filters --

    /// Replace the criteria wholesale.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        let changed = replace(&mut self.criteria, criteria);
        if changed {
            tracing::debug!(session = %self.id, criteria = ?self.criteria, "criteria replaced");
        }
        changed
    }

    /// Return to the configured default criteria.
    pub fn reset_filters(&mut self) -> bool {
        self.set_criteria(self.settings.default_criteria.clone())
    }

    // -- Vehicle --

    /// Edit the vehicle draft. The committed vehicle is untouched.
    pub fn edit_vehicle(&mut self, edit: impl FnOnce(&mut VehicleDraft)) -> bool {
        let next = self.vehicles.edit(edit);
        replace(&mut self.vehicles, next)
    }

    /// Commit the draft, defaulting the year to the current calendar year.
    pub fn apply_vehicle(&mut self) -> Result<bool, CommerceError> {
        self.apply_vehicle_with_default_year(current_year())
    }

    /// Commit the draft with an explicit fallback year.
    pub fn apply_vehicle_with_default_year(
        &mut self,
        default_year: i32,
    ) -> Result<bool, CommerceError> {
        match self.vehicles.apply_with_default_year(default_year) {
            Ok(next) => Ok(replace(&mut self.vehicles, next)),
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "vehicle rejected");
                Err(e)
            }
        }
    }

    /// Drop the committed vehicle and reset the draft.
    pub fn clear_vehicle(&mut self) -> bool {
        let next = self.vehicles.clear();
        replace(&mut self.vehicles, next)
    }

    /// Close the vehicle editor without applying.
    pub fn cancel_vehicle_edit(&mut self) -> bool {
        let next = self.vehicles.cancel();
        replace(&mut self.vehicles, next)
    }

    // -- Cart --

    /// Add one unit of a part, refusing out-of-stock parts when configured to.
    pub fn add_to_cart(&mut self, part: &Part) -> Result<bool, CommerceError> {
        if self.settings.enforce_stock && !part.in_stock {
            tracing::warn!(session = %self.id, part = %part.id, "out-of-stock part not added");
            return Err(CommerceError::OutOfStock(part.id.to_string()));
        }
        let next = self.cart.add_item(part);
        Ok(self.replace_cart(next))
    }

    pub fn set_quantity(&mut self, part_id: &PartId, quantity: u32) -> bool {
        let next = self.cart.set_quantity(part_id, quantity);
        self.replace_cart(next)
    }

    pub fn increment(&mut self, part_id: &PartId) -> bool {
        let next = self.cart.increment(part_id);
        self.replace_cart(next)
    }

    pub fn decrement(&mut self, part_id: &PartId) -> bool {
        let next = self.cart.decrement(part_id);
        self.replace_cart(next)
    }

    pub fn remove_from_cart(&mut self, part_id: &PartId) -> bool {
        let next = self.cart.remove_item(part_id);
        self.replace_cart(next)
    }

    pub fn clear_cart(&mut self) -> bool {
        let next = self.cart.clear();
        self.replace_cart(next)
    }

    fn replace_cart(&mut self, next: Cart) -> bool {
        let changed = replace(&mut self.cart, next);
        if changed {
            let totals = self.cart.totals();
            tracing::debug!(
                session = %self.id,
                items = totals.item_count,
                total = %totals.total_price,
                "cart updated"
            );
        }
        changed
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

fn replace<T: PartialEq>(slot: &mut T, next: T) -> bool {
    if *slot == next {
        return false;
    }
    *slot = next;
    true
}
