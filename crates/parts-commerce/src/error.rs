//! Storefront error types.

use thiserror::Error;

/// Errors raised at the edges of the storefront core.
///
/// Filtering and the cart ledger are total functions and never fail; these
/// cover catalog loading and the checks the session layer makes before
/// calling into the ledger.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Part not found in the catalog.
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Part cannot be added because it is out of stock.
    #[error("Part is out of stock: {0}")]
    OutOfStock(String),

    /// Vehicle draft is missing a required field.
    #[error("Vehicle selection incomplete: missing {0}")]
    IncompleteVehicle(&'static str),

    /// Two catalog records share an id.
    #[error("Duplicate part id in catalog: {0}")]
    DuplicatePart(String),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
