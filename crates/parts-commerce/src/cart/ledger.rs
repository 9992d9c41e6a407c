//! Cart and cart entry types.

use crate::cart::CartTotals;
use crate::catalog::Part;
use crate::ids::PartId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Every operation borrows the current cart and returns the next one, so the
/// caller can compare old and new values to detect changes. Entries are
/// unique by part id and keep the order in which parts were first added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
    /// Currency totals are reported in, even when the cart is empty.
    #[serde(default)]
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart for a catalog priced in `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            currency,
        }
    }

    fn with_entries(&self, entries: Vec<CartEntry>) -> Cart {
        Cart {
            entries,
            currency: self.currency,
        }
    }

    /// Add one unit of a part.
    ///
    /// Stock is not checked here; callers decide whether out-of-stock parts
    /// may be added.
    #[must_use]
    pub fn add_item(&self, part: &Part) -> Cart {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|e| e.part_id == part.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => entries.push(CartEntry::for_part(part)),
        }
        self.with_entries(entries)
    }

    /// Replace an entry's quantity. Zero removes the entry.
    ///
    /// No upper bound and no stock check. Unknown ids leave the cart as is.
    #[must_use]
    pub fn set_quantity(&self, part_id: &PartId, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.remove_item(part_id);
        }
        let entries = self
            .entries
            .iter()
            .map(|e| {
                if &e.part_id == part_id {
                    CartEntry {
                        quantity,
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect();
        self.with_entries(entries)
    }

    /// Remove an entry. Absent ids are a no-op.
    #[must_use]
    pub fn remove_item(&self, part_id: &PartId) -> Cart {
        self.with_entries(
            self.entries
                .iter()
                .filter(|e| &e.part_id != part_id)
                .cloned()
                .collect(),
        )
    }

    /// An empty cart in the same currency.
    #[must_use]
    pub fn clear(&self) -> Cart {
        Cart::with_currency(self.currency)
    }

    /// Raise an entry's quantity by one.
    #[must_use]
    pub fn increment(&self, part_id: &PartId) -> Cart {
        match self.quantity_of(part_id) {
            0 => self.clone(),
            q => self.set_quantity(part_id, q.saturating_add(1)),
        }
    }

    /// Lower an entry's quantity by one, removing it at zero.
    #[must_use]
    pub fn decrement(&self, part_id: &PartId) -> Cart {
        match self.quantity_of(part_id) {
            0 => self.clone(),
            q => self.set_quantity(part_id, q - 1),
        }
    }

    /// Item count and total price, recomputed from the entries.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_entries(&self.entries, self.currency)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Entries in the order parts were first added.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the entry for a part.
    pub fn entry(&self, part_id: &PartId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.part_id == part_id)
    }

    /// Quantity held for a part, zero if absent.
    pub fn quantity_of(&self, part_id: &PartId) -> u32 {
        self.entry(part_id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct parts.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }
}

/// One part in the cart.
///
/// Name and unit price are copied from the catalog on first add, so totals
/// never need to look the part up again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub part_id: PartId,
    pub part_name: String,
    pub unit_price: Money,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    fn for_part(part: &Part) -> Self {
        Self {
            part_id: part.id.clone(),
            part_name: part.name.clone(),
            unit_price: part.price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn part<'a>(catalog: &'a Catalog, id: &str) -> &'a Part {
        catalog.get(&PartId::new(id)).unwrap()
    }

    #[test]
    fn test_add_same_part_twice() {
        let catalog = catalog();
        let cart = Cart::new()
            .add_item(part(&catalog, "2"))
            .add_item(part(&catalog, "2"));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&PartId::new("2")), 2);
    }

    #[test]
    fn test_add_keeps_first_added_order() {
        let catalog = catalog();
        let cart = Cart::new()
            .add_item(part(&catalog, "3"))
            .add_item(part(&catalog, "1"))
            .add_item(part(&catalog, "3"));
        let order: Vec<&str> = cart.entries().iter().map(|e| e.part_id.as_str()).collect();
        assert_eq!(order, vec!["3", "1"]);
    }

    #[test]
    fn test_add_does_not_check_stock() {
        let catalog = catalog();
        let air_filter = part(&catalog, "4");
        assert!(!air_filter.in_stock);
        let cart = Cart::new().add_item(air_filter);
        assert_eq!(cart.quantity_of(&air_filter.id), 1);
    }

    #[test]
    fn test_operations_leave_original_untouched() {
        let catalog = catalog();
        let before = Cart::new().add_item(part(&catalog, "1"));
        let after = before.add_item(part(&catalog, "1"));
        assert_eq!(before.quantity_of(&PartId::new("1")), 1);
        assert_eq!(after.quantity_of(&PartId::new("1")), 2);
        assert_ne!(before, after);
    }

    #[test]
    fn test_set_quantity() {
        let catalog = catalog();
        let id = PartId::new("1");
        let cart = Cart::new().add_item(part(&catalog, "1"));

        let cart = cart.set_quantity(&id, 500);
        assert_eq!(cart.quantity_of(&id), 500);

        let cart = cart.set_quantity(&id, 0);
        assert!(cart.is_empty());
        assert!(cart.entry(&id).is_none());
    }

    #[test]
    fn test_set_quantity_unknown_part_is_noop() {
        let catalog = catalog();
        let cart = Cart::new().add_item(part(&catalog, "1"));
        assert_eq!(cart.set_quantity(&PartId::new("99"), 4), cart);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let catalog = catalog();
        let cart = Cart::new().add_item(part(&catalog, "1"));
        assert_eq!(cart.remove_item(&PartId::new("2")), cart);
        assert!(cart.remove_item(&PartId::new("1")).is_empty());
    }

    #[test]
    fn test_increment_and_decrement() {
        let catalog = catalog();
        let id = PartId::new("5");
        let cart = Cart::new().add_item(part(&catalog, "5"));

        let cart = cart.increment(&id);
        assert_eq!(cart.quantity_of(&id), 2);

        let cart = cart.decrement(&id).decrement(&id);
        assert!(cart.is_empty());

        // Neither inserts a part that is not in the cart.
        assert!(cart.increment(&id).is_empty());
        assert!(cart.decrement(&id).is_empty());
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let cart = Cart::new()
            .add_item(part(&catalog, "1"))
            .add_item(part(&catalog, "6"));
        let cleared = cart.clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.totals().item_count, 0);
        assert!(cleared.totals().total_price.is_zero());
    }

    #[test]
    fn test_empty_cart_totals_keep_currency() {
        let cart = Cart::with_currency(Currency::EUR);
        assert_eq!(cart.totals().total_price.display(), "\u{20ac}0.00");

        let catalog = catalog();
        let cleared = cart.add_item(part(&catalog, "1")).clear();
        assert_eq!(cleared.currency(), Currency::EUR);
        assert_eq!(cleared.totals().total_price.display(), "\u{20ac}0.00");
    }

    #[test]
    fn test_line_total() {
        let catalog = catalog();
        let id = PartId::new("2");
        let cart = Cart::new().add_item(part(&catalog, "2")).set_quantity(&id, 3);
        assert_eq!(cart.entry(&id).unwrap().line_total().amount_cents, 3897);
    }
}
