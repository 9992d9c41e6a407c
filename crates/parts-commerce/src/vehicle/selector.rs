//! Draft and committed vehicle selection.
//!
//! Edits land on a [`VehicleDraft`] and only reach the filter once applied,
//! so picking a make in the dropdown does not re-filter the catalog until the
//! shopper confirms.

use crate::error::CommerceError;
use crate::vehicle::Vehicle;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A vehicle being edited. Fields may be empty until applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDraft {
    make: String,
    model: String,
    year: Option<i32>,
    engine: Option<String>,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self::with_year(current_year())
    }
}

impl VehicleDraft {
    /// An empty draft with the year preset to the current calendar year.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty draft with the year preset to `year`.
    pub fn with_year(year: i32) -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: Some(year),
            engine: None,
        }
    }

    /// Seed a draft from an already committed vehicle.
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: Some(vehicle.year),
            engine: vehicle.engine.clone(),
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    /// Set the make. Always clears the model, since models belong to a make.
    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
        self.model.clear();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    /// Set the engine. Blank text clears it.
    pub fn set_engine(&mut self, engine: Option<String>) {
        self.engine = engine.filter(|e| !e.trim().is_empty());
    }

    /// Check whether the draft can be applied.
    pub fn is_complete(&self) -> bool {
        !self.make.is_empty() && !self.model.is_empty()
    }

    /// Turn the draft into a vehicle, filling an unset year with `default_year`.
    pub fn to_vehicle(&self, default_year: i32) -> Result<Vehicle, CommerceError> {
        if self.make.is_empty() {
            return Err(CommerceError::IncompleteVehicle("make"));
        }
        if self.model.is_empty() {
            return Err(CommerceError::IncompleteVehicle("model"));
        }
        Ok(Vehicle {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.unwrap_or(default_year),
            engine: self.engine.clone(),
        })
    }
}

/// Committed vehicle plus the draft being edited.
///
/// Transitions return a new selector; the previous value stays intact so the
/// caller can compare and skip re-filtering when nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleSelector {
    committed: Option<Vehicle>,
    draft: VehicleDraft,
    editing: bool,
}

impl VehicleSelector {
    /// A selector with no vehicle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The vehicle used for filtering, if any.
    pub fn committed(&self) -> Option<&Vehicle> {
        self.committed.as_ref()
    }

    pub fn draft(&self) -> &VehicleDraft {
        &self.draft
    }

    /// Whether the editor is open.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Open the editor and apply `edit` to the draft.
    pub fn edit(&self, edit: impl FnOnce(&mut VehicleDraft)) -> Self {
        let mut next = self.clone();
        edit(&mut next.draft);
        next.editing = true;
        next
    }

    /// Commit the draft, defaulting the year to the current calendar year.
    pub fn apply(&self) -> Result<Self, CommerceError> {
        self.apply_with_default_year(current_year())
    }

    /// Commit the draft with an explicit fallback year.
    pub fn apply_with_default_year(&self, default_year: i32) -> Result<Self, CommerceError> {
        let vehicle = self.draft.to_vehicle(default_year)?;
        tracing::debug!(vehicle = %vehicle, "vehicle applied");
        Ok(Self {
            committed: Some(vehicle),
            draft: self.draft.clone(),
            editing: false,
        })
    }

    /// Drop the committed vehicle and reset the draft, year included.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Close the editor without touching the draft or the committed vehicle.
    pub fn cancel(&self) -> Self {
        Self {
            editing: false,
            ..self.clone()
        }
    }
}
