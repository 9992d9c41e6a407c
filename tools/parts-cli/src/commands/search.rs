//! Search command.

use anyhow::{Context as _, Result};
use parts_commerce::catalog::{Part, Selection, ALL_BRANDS, ALL_CATEGORIES};
use parts_commerce::search::{CatalogView, EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use parts_commerce::{Bound, Money};
use serde::Serialize;

use super::SearchArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct SearchReport<'a> {
    summary: String,
    #[serde(flatten)]
    view: &'a CatalogView<'a>,
}

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let currency = catalog.currency();
    let mut session = ctx.new_session(&catalog);

    let mut criteria = session.criteria().clone().with_query(args.query.as_str());
    if let Some(category) = &args.category {
        criteria = criteria.with_category(Selection::from_choice(category, ALL_CATEGORIES));
    }
    if let Some(brand) = &args.brand {
        criteria = criteria.with_brand(Selection::from_choice(brand, ALL_BRANDS));
    }
    let min = args
        .min_price
        .as_deref()
        .map(|s| Money::parse_bound_or_zero(s, Bound::Lower, currency))
        .unwrap_or(criteria.price_min);
    let max = args
        .max_price
        .as_deref()
        .map(|s| Money::parse_bound_or_zero(s, Bound::Upper, currency))
        .unwrap_or(criteria.price_max);
    if min.amount_cents > max.amount_cents {
        ctx.output.warn(&format!(
            "Minimum price {} is above maximum {}; nothing can match",
            min, max
        ));
    }
    criteria = criteria
        .with_price_range(min, max)
        .with_in_stock_only(args.in_stock);
    session.set_criteria(criteria);

    if args.has_vehicle() {
        session.edit_vehicle(|draft| {
            draft.set_make(args.make.clone().unwrap_or_default());
            draft.set_model(args.model.clone().unwrap_or_default());
            draft.set_year(args.year);
            draft.set_engine(args.engine.clone());
        });
        session
            .apply_vehicle()
            .context("Vehicle needs both --make and --model")?;
        if let Some(vehicle) = session.vehicle() {
            ctx.output.debug(&format!("Vehicle: {}", vehicle));
        }
    }

    let view = session.view(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&SearchReport {
            summary: view.summary(),
            view: &view,
        });
        return Ok(());
    }

    ctx.output.header(&view.summary());

    if view.is_empty() {
        ctx.output.info(EMPTY_STATE_TITLE);
        ctx.output.info(EMPTY_STATE_HINT);
        return Ok(());
    }

    let threshold = session.settings().low_stock_threshold;
    let widths = [4, 32, 12, 10, 12];
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "STOCK"], &widths);
    for part in &view.parts {
        print_row(part, threshold, &widths, ctx);
    }

    Ok(())
}

fn print_row(part: &Part, threshold: u32, widths: &[usize], ctx: &Context) {
    let price = part.price.display();
    let badge = stock_badge(part.stock_status(threshold));
    ctx.output.table_row(
        &[part.id.as_str(), &part.name, &part.brand, &price, &badge],
        widths,
    );
}
