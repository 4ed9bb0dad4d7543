//! Geocoding port adapter

use application::{ApplicationError, GeocodeOutcome, GeocodingPort};
use async_trait::async_trait;
use domain::GeoPoint;
use integration_geocoding::{GeocodingClient, GeocodingError};
use tracing::warn;

/// Implements [`GeocodingPort`] over the geocoding HTTP client
///
/// A service timeout and a no-result response are both `NotFound`: the
/// pipeline treats them identically and neither is retried. Coordinates
/// outside the valid range are also folded into `NotFound` rather than
/// failing the row.
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: GeocodingClient,
}

impl GeocodingAdapter {
    /// Wrap a geocoding client
    #[must_use]
    pub const fn new(client: GeocodingClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    async fn geocode(&self, address: &str) -> Result<GeocodeOutcome, ApplicationError> {
        match self.client.geocode(address).await {
            Ok(Some(coords)) => match GeoPoint::new(coords.latitude, coords.longitude) {
                Ok(point) => Ok(GeocodeOutcome::Located(point)),
                Err(error) => {
                    warn!(%error, "Geocoding service returned out-of-range coordinates");
                    Ok(GeocodeOutcome::NotFound)
                }
            },
            Ok(None) | Err(GeocodingError::Timeout { .. }) => Ok(GeocodeOutcome::NotFound),
            Err(GeocodingError::Configuration(message)) => {
                Err(ApplicationError::Configuration(message))
            }
            Err(error) => Err(ApplicationError::ExternalService(error.to_string())),
        }
    }
}
