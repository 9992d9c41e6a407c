//! Cart command.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use parts_commerce::cart::Cart;
use parts_commerce::PartId;
use serde::Serialize;

use super::CartArgs;
use crate::context::Context;

/// One cart operation from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add(PartId),
    Set(PartId, u32),
    Increment(PartId),
    Decrement(PartId),
    Remove(PartId),
    Clear,
}

impl FromStr for CartOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "clear" {
            return Ok(Self::Clear);
        }

        let (verb, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <op>:<id>, got '{}'", s))?;
        if arg.is_empty() {
            return Err(format!("missing part id in '{}'", s));
        }

        match verb {
            "add" => Ok(Self::Add(PartId::new(arg))),
            "inc" => Ok(Self::Increment(PartId::new(arg))),
            "dec" => Ok(Self::Decrement(PartId::new(arg))),
            "remove" => Ok(Self::Remove(PartId::new(arg))),
            "set" => {
                let (id, qty) = arg
                    .split_once('=')
                    .ok_or_else(|| format!("expected set:<id>=<qty>, got '{}'", s))?;
                let qty = qty
                    .parse::<u32>()
                    .map_err(|_| format!("invalid quantity '{}'", qty))?;
                Ok(Self::Set(PartId::new(id), qty))
            }
            other => Err(format!(
                "unknown cart operation '{}' (expected add, set, inc, dec, remove or clear)",
                other
            )),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(id) => write!(f, "add:{}", id),
            Self::Set(id, qty) => write!(f, "set:{}={}", id, qty),
            Self::Increment(id) => write!(f, "inc:{}", id),
            Self::Decrement(id) => write!(f, "dec:{}", id),
            Self::Remove(id) => write!(f, "remove:{}", id),
            Self::Clear => write!(f, "clear"),
        }
    }
}

#[derive(Serialize)]
struct CartReport<'a> {
    lines: Vec<CartLine<'a>>,
    item_count: u64,
    total: String,
}

#[derive(Serialize)]
struct CartLine<'a> {
    id: &'a str,
    name: &'a str,
    quantity: u32,
    unit_price: String,
    line_total: String,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut session = ctx.new_session(&catalog);

    for op in &args.ops {
        let changed = match op {
            CartOp::Add(id) => {
                let part = catalog.require(id)?;
                session
                    .add_to_cart(part)
                    .with_context(|| format!("Cannot add {}", part.name))?
            }
            CartOp::Set(id, qty) => session.set_quantity(id, *qty),
            CartOp::Increment(id) => session.increment(id),
            CartOp::Decrement(id) => session.decrement(id),
            CartOp::Remove(id) => session.remove_from_cart(id),
            CartOp::Clear => session.clear_cart(),
        };
        if !changed {
            ctx.output.debug(&format!("{}: cart unchanged", op));
        }
    }

    print_cart(session.cart(), ctx);
    Ok(())
}

fn print_cart(cart: &Cart, ctx: &Context) {
    let totals = cart.totals();

    if ctx.output.is_json() {
        let report = CartReport {
            lines: cart
                .entries()
                .iter()
                .map(|e| CartLine {
                    id: e.part_id.as_str(),
                    name: &e.part_name,
                    quantity: e.quantity,
                    unit_price: e.unit_price.display(),
                    line_total: e.line_total().display(),
                })
                .collect(),
            item_count: totals.item_count,
            total: totals.total_price.display(),
        };
        ctx.output.json(&report);
        return;
    }

    ctx.output.header(&totals.heading());

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    let widths = [4, 32, 4, 10];
    ctx.output.table_row(&["ID", "PART", "QTY", "PRICE"], &widths);
    for entry in cart.entries() {
        let qty = entry.quantity.to_string();
        let line_total = entry.line_total().display();
        ctx.output.table_row(
            &[entry.part_id.as_str(), &entry.part_name, &qty, &line_total],
            &widths,
        );
    }
    ctx.output.blank();
    ctx.output.kv("Total", &totals.total_price.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ops() {
        assert_eq!("add:2".parse::<CartOp>().unwrap(), CartOp::Add(PartId::new("2")));
        assert_eq!(
            "set:5=3".parse::<CartOp>().unwrap(),
            CartOp::Set(PartId::new("5"), 3)
        );
        assert_eq!(
            "inc:5".parse::<CartOp>().unwrap(),
            CartOp::Increment(PartId::new("5"))
        );
        assert_eq!(
            "dec:5".parse::<CartOp>().unwrap(),
            CartOp::Decrement(PartId::new("5"))
        );
        assert_eq!(
            "remove:1".parse::<CartOp>().unwrap(),
            CartOp::Remove(PartId::new("1"))
        );
        assert_eq!("clear".parse::<CartOp>().unwrap(), CartOp::Clear);
    }

    #[test]
    fn test_parse_rejects_malformed_ops() {
        assert!("add".parse::<CartOp>().is_err());
        assert!("add:".parse::<CartOp>().is_err());
        assert!("set:5".parse::<CartOp>().is_err());
        assert!("set:5=-1".parse::<CartOp>().is_err());
        assert!("buy:5".parse::<CartOp>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for op in ["add:1", "set:2=4", "inc:3", "dec:3", "remove:6", "clear"] {
            assert_eq!(op.parse::<CartOp>().unwrap().to_string(), op);
        }
    }
}
