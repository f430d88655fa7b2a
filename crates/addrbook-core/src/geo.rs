//! Geographic primitives: validated coordinate pairs and search ranges.
//!
//! [`Coordinates`] can only be constructed through [`Coordinates::new`], so a
//! value of this type always lies within the WGS84 bounds. [`SearchRange`]
//! is the positive kilometer radius used by the range query.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Latitude bounds, inclusive.
pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;

/// Longitude bounds, inclusive.
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// A latitude/longitude pair in degrees, checked against the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validates and wraps a coordinate pair.
    ///
    /// Both bounds are inclusive. NaN fails every comparison and is rejected.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if Self::is_valid(latitude, longitude) {
            Ok(Coordinates {
                latitude,
                longitude,
            })
        } else {
            Err(CoreError::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }

    /// Returns true when `latitude` is in [-90, 90] and `longitude` in [-180, 180].
    pub fn is_valid(latitude: f64, longitude: f64) -> bool {
        (LATITUDE_MIN..=LATITUDE_MAX).contains(&latitude)
            && (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Formats as `lat,lon`, the form distance matrix APIs take for
/// `origins`/`destinations`.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A strictly positive search radius in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchRange(i64);

impl SearchRange {
    pub fn new(km: i64) -> Result<Self, CoreError> {
        if km > 0 {
            Ok(SearchRange(km))
        } else {
            Err(CoreError::InvalidRange { range: km })
        }
    }

    pub fn km(&self) -> i64 {
        self.0
    }

    /// Returns true if `distance_km` is strictly inside the range.
    pub fn contains(&self, distance_km: f64) -> bool {
        distance_km < self.0 as f64
    }
}

/// Converts a distance in meters (as reported by the distance API) to kilometers.
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}
