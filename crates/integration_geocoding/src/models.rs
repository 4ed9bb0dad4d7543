//! Geocoding API models

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as returned by the geocoding service
///
/// Values are reported verbatim; range validation happens in the caller's
/// domain layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Geocoding API wire structures
pub(crate) mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        pub status: String,
        #[serde(default)]
        pub results: Vec<GeocodeResult>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResult {
        pub geometry: Geometry,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub location: Location,
    }

    #[derive(Debug, Deserialize)]
    pub struct Location {
        pub lat: f64,
        pub lng: f64,
    }
}
