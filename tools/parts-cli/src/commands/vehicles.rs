//! Vehicle reference command.

use anyhow::{bail, Result};
use parts_commerce::vehicle::{current_year, VehicleReference, EARLIEST_MODEL_YEAR};
use serde::Serialize;

use super::VehiclesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct MakeReport<'a> {
    make: &'a str,
    models: &'a [String],
    years: Vec<i32>,
}

/// Run the vehicles command.
pub fn run(args: VehiclesArgs, ctx: &Context) -> Result<()> {
    let reference = VehicleReference::default();

    let Some(make) = args.make else {
        if ctx.output.is_json() {
            ctx.output.json(&reference.makes().collect::<Vec<_>>());
            return Ok(());
        }
        ctx.output.header("Makes");
        for make in reference.makes() {
            ctx.output.list_item(make);
        }
        return Ok(());
    };

    if !reference.has_make(&make) {
        bail!(
            "Unknown make '{}'. Run `parts vehicles` to list makes.",
            make
        );
    }

    let this_year = current_year();
    let models = reference.models_for(&make);

    if ctx.output.is_json() {
        ctx.output.json(&MakeReport {
            make: &make,
            models,
            years: VehicleReference::years(this_year),
        });
        return Ok(());
    }

    ctx.output.header(&format!("{} models", make));
    for model in models {
        ctx.output.list_item(model);
    }
    ctx.output.blank();
    ctx.output.kv(
        "Years",
        &format!("{} down to {}", this_year, EARLIEST_MODEL_YEAR),
    );

    Ok(())
}
