//! Geocoding API integration
//!
//! HTTP client for a Google-style geocoding service: converts free-text
//! addresses into latitude/longitude pairs.

pub mod client;
pub mod models;

pub use client::{GeocodingClient, GeocodingConfig, GeocodingError};
pub use models::Coordinates;
