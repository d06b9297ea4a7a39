//! Bounding box type definitions

use serde::Serialize;
use thiserror::Error;

use crate::provider::QueryParams;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A validated geographic rectangle in degrees.
///
/// Bounds are inclusive. Construction through [`BoundingBox::new`] guarantees
/// `lat_min <= lat_max`, `lon_min <= lon_max` and that every bound lies inside
/// the valid latitude/longitude ranges. Serializes with the provider-native
/// names (`lamin`, `lomin`, `lamax`, `lomax`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    #[serde(rename = "lamin")]
    lat_min: f64,
    #[serde(rename = "lomin")]
    lon_min: f64,
    #[serde(rename = "lamax")]
    lat_max: f64,
    #[serde(rename = "lomax")]
    lon_max: f64,
}

impl BoundingBox {
    /// Creates a bounding box, validating ranges and ordering.
    ///
    /// # Arguments
    ///
    /// * `lat_min` - Southern edge in degrees (-90.0 to 90.0)
    /// * `lon_min` - Western edge in degrees (-180.0 to 180.0)
    /// * `lat_max` - Northern edge in degrees, not below `lat_min`
    /// * `lon_max` - Eastern edge in degrees, not below `lon_min`
    pub fn new(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> Result<Self, CoordError> {
        for value in [lat_min, lon_min, lat_max, lon_max] {
            if !value.is_finite() {
                return Err(CoordError::NotFinite(value));
            }
        }
        for lat in [lat_min, lat_max] {
            if !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(CoordError::InvalidLatitude(lat));
            }
        }
        for lon in [lon_min, lon_max] {
            if !(MIN_LON..=MAX_LON).contains(&lon) {
                return Err(CoordError::InvalidLongitude(lon));
            }
        }
        if lat_min > lat_max {
            return Err(CoordError::InvertedLatitude { lat_min, lat_max });
        }
        if lon_min > lon_max {
            return Err(CoordError::InvertedLongitude { lon_min, lon_max });
        }

        Ok(Self {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        })
    }

    /// Builds a box from bounds already known to be valid (static presets).
    pub(crate) const fn from_trusted(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        }
    }

    #[inline]
    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    #[inline]
    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    #[inline]
    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    #[inline]
    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// Query parameters for the provider's state endpoint, in provider order.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("lamin", self.lat_min);
        params.push("lomin", self.lon_min);
        params.push("lamax", self.lat_max);
        params.push("lomax", self.lon_max);
        params
    }
}

/// Errors that can occur while building a bounding box.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Coordinate {0} is not a finite number")]
    NotFinite(f64),

    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    #[error("lat_min {lat_min} is greater than lat_max {lat_max}")]
    InvertedLatitude { lat_min: f64, lat_max: f64 },

    #[error("lon_min {lon_min} is greater than lon_max {lon_max}")]
    InvertedLongitude { lon_min: f64, lon_max: f64 },
}
