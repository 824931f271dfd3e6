//! Geographic points.

use crate::error::{TypesError, TypesResult};
use crate::wire::{self, expect_object};
use crate::{Decodable, Encodable};
use serde_json::Value;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geolocation {
    latitude: f64,
    longitude: f64,
}

impl Geolocation {
    /// Creates a geolocation.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidArgument`] if the latitude is outside
    /// `[-90, 90]` or the longitude outside `[-180, 180]` (NaN included).
    pub fn new(latitude: f64, longitude: f64) -> TypesResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(TypesError::invalid_argument(format!(
                "latitude must be within [-90, 90], got {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(TypesError::invalid_argument(format!(
                "longitude must be within [-180, 180], got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Encodable for Geolocation {
    fn to_json(&self) -> Value {
        let mut map = wire::envelope(wire::GEO);
        map.insert("$lat".to_string(), Value::from(self.latitude));
        map.insert("$lng".to_string(), Value::from(self.longitude));
        Value::Object(map)
    }
}

impl Decodable for Geolocation {
    fn from_json(json: &Value) -> TypesResult<Self> {
        let object = expect_object(json, wire::GEO)?;
        let coordinate = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_f64)
                .ok_or_else(|| TypesError::malformed(wire::GEO, format!("missing numeric {key}")))
        };
        let latitude = coordinate("$lat")?;
        let longitude = coordinate("$lng")?;
        Self::new(latitude, longitude)
            .map_err(|e| TypesError::malformed(wire::GEO, e.to_string()))
    }
}
