//! Part detail command.

use anyhow::Result;
use parts_commerce::PartId;

use super::PartArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the part command.
pub fn run(args: PartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let part = catalog.require(&PartId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(part);
        return Ok(());
    }

    let status = part.stock_status(ctx.config.catalog.low_stock_threshold);

    ctx.output.header(&part.name);
    ctx.output.text(&part.detail_summary());
    ctx.output.blank();
    ctx.output.kv("Category", &part.category);
    ctx.output.kv("Availability", &stock_badge(status));
    if part.in_stock {
        ctx.output
            .kv("Quantity", &part.stock_quantity.to_string());
    }
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", part.rating_stars().render(), part.reviews),
    );

    if !part.specifications.is_empty() {
        ctx.output.header("Specifications");
        for spec in &part.specifications {
            ctx.output.kv(&spec.name, &spec.value);
        }
    }

    if !part.compatibility.is_empty() {
        ctx.output.header("Fits");
        for record in &part.compatibility {
            let mut line = format!("{} {} {}", record.year, record.make, record.model);
            if let Some(engine) = &record.engine {
                line.push_str(&format!(" ({})", engine));
            }
            ctx.output.list_item(&line);
        }
    }

    Ok(())
}
