//! Shopping cart module.
//!
//! Contains the cart ledger and its derived totals.

mod ledger;
mod totals;

pub use ledger::{Cart, CartEntry};
pub use totals::CartTotals;
