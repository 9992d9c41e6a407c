//! Derived cart totals.

use crate::cart::CartEntry;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Item count and price for a cart. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartTotals {
    /// Sum of all quantities.
    pub item_count: u64,
    /// Sum of `unit_price × quantity` over all entries.
    pub total_price: Money,
}

impl CartTotals {
    pub(crate) fn from_entries(entries: &[CartEntry], currency: Currency) -> Self {
        Self {
            item_count: entries.iter().map(|e| u64::from(e.quantity)).sum(),
            total_price: entries
                .iter()
                .map(CartEntry::line_total)
                .fold(Money::zero(currency), |acc, line| acc + line),
        }
    }

    /// Cart drawer heading, e.g. "Shopping Cart (3)".
    pub fn heading(&self) -> String {
        format!("Shopping Cart ({})", self.item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PartId;

    fn entry(id: &str, cents: i64, quantity: u32) -> CartEntry {
        CartEntry {
            part_id: PartId::new(id),
            part_name: id.to_string(),
            unit_price: Money::new(cents, Currency::USD),
            quantity,
        }
    }

    #[test]
    fn test_totals() {
        let totals = CartTotals::from_entries(
            &[entry("2", 1299, 2), entry("3", 4599, 1)],
            Currency::USD,
        );
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total_price.amount_cents, 7197);
        assert_eq!(totals.total_price.display(), "$71.97");
        assert_eq!(totals.heading(), "Shopping Cart (3)");
    }

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::from_entries(&[], Currency::USD);
        assert_eq!(totals, CartTotals::default());
        assert_eq!(totals.total_price.display(), "$0.00");

        let totals = CartTotals::from_entries(&[], Currency::GBP);
        assert_eq!(totals.total_price.display(), "\u{00a3}0.00");
    }
}
