//! The mutable part of an address record.
//!
//! [`AddressFields`] holds everything a client may write: the city label and
//! its coordinates. The identifier is assigned by storage and lives in
//! addrbook-storage.

use serde::Serialize;

use crate::error::CoreError;
use crate::geo::Coordinates;

/// City label plus validated coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressFields {
    /// Free-form city name.
    pub city: String,
    /// Validated position.
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

impl AddressFields {
    /// Builds the fields, rejecting out-of-range coordinates.
    pub fn new(city: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        Ok(AddressFields {
            city: city.into(),
            coordinates: Coordinates::new(latitude, longitude)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }
}
