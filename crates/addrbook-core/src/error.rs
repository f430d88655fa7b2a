//! Core error types for addrbook-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the validation failures of the address model.

use thiserror::Error;

/// Core errors produced by the addrbook-core crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("invalid coordinates: latitude={latitude}, longitude={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A search range that is zero or negative.
    #[error("invalid range: {range} (must be positive)")]
    InvalidRange { range: i64 },
}
