//! Vehicle selection module.
//!
//! Contains the committed vehicle type, the draft/selector pair used while a
//! shopper edits their vehicle, and the static make/model reference table.

mod reference;
mod selector;

pub use reference::{MakeModels, VehicleReference, EARLIEST_MODEL_YEAR};
pub use selector::{current_year, VehicleDraft, VehicleSelector};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The shopper's vehicle, used to narrow the catalog to fitting parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Free-text engine description. Shown to the shopper, never matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

impl Vehicle {
    /// Create a vehicle without an engine description.
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            engine: None,
        }
    }

    /// Set the engine description.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)?;
        if let Some(engine) = &self.engine {
            write!(f, " - {}", engine)?;
        }
        Ok(())
    }
}
