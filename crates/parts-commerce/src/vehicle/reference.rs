//! Make, model and year reference data for the vehicle picker.

use serde::{Deserialize, Serialize};

/// Oldest model year offered by the picker.
pub const EARLIEST_MODEL_YEAR: i32 = 1990;

const MAKE_MODELS: &[(&str, &[&str])] = &[
    ("Honda", &["Civic", "Accord", "CR-V", "Pilot", "Fit"]),
    ("Toyota", &["Camry", "Corolla", "RAV4", "Highlander", "Prius"]),
    ("Ford", &["F-150", "Mustang", "Explorer", "Escape", "Focus"]),
    ("Chevrolet", &["Silverado", "Camaro", "Equinox", "Malibu", "Cruze"]),
    ("BMW", &["3 Series", "5 Series", "X3", "X5", "i3"]),
    ("Mercedes", &["C-Class", "E-Class", "GLC", "GLE", "A-Class"]),
    ("Audi", &["A4", "A6", "Q5", "Q7", "A3"]),
    ("Volkswagen", &["Jetta", "Golf", "Passat", "Tiguan", "Atlas"]),
];

/// One make and the models offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeModels {
    pub make: String,
    pub models: Vec<String>,
}

/// The make → models table. Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleReference {
    makes: Vec<MakeModels>,
}

impl VehicleReference {
    /// Build a reference table from explicit entries.
    pub fn new(makes: Vec<MakeModels>) -> Self {
        Self { makes }
    }

    /// Makes in display order.
    pub fn makes(&self) -> impl Iterator<Item = &str> {
        self.makes.iter().map(|m| m.make.as_str())
    }

    /// Models for a make. Unknown makes have none.
    pub fn models_for(&self, make: &str) -> &[String] {
        self.makes
            .iter()
            .find(|m| m.make == make)
            .map(|m| m.models.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether a make is listed.
    pub fn has_make(&self, make: &str) -> bool {
        self.makes.iter().any(|m| m.make == make)
    }

    /// Model years from `current_year` down to [`EARLIEST_MODEL_YEAR`].
    pub fn years(current_year: i32) -> Vec<i32> {
        (EARLIEST_MODEL_YEAR..=current_year).rev().collect()
    }
}

impl Default for VehicleReference {
    fn default() -> Self {
        Self::new(
            MAKE_MODELS
                .iter()
                .map(|(make, models)| MakeModels {
                    make: make.to_string(),
                    models: models.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
        )
    }
}
