//! Geocoding client
//!
//! HTTP client for a Google-style geocoding API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{Coordinates, api};

/// Geocoding client errors
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key is missing or was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Query quota exhausted
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Geocoding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Geocoding API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Geocoding HTTP client
#[derive(Debug)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl GeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            GeocodingError::Configuration("Geocoding API key is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Geocode a free-text address
    ///
    /// Returns `Ok(None)` when the service knows no position for the
    /// address (ZERO_RESULTS).
    #[instrument(skip(self, address))]
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodingError> {
        let url = format!("{}/maps/api/geocode/json", self.base_url);

        debug!(url = %url, "Sending geocode request");

        let response = self
            .client
            .get(&url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let parsed: api::GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Self::interpret_response(parsed)
    }

    fn interpret_response(
        response: api::GeocodeResponse,
    ) -> Result<Option<Coordinates>, GeocodingError> {
        match response.status.as_str() {
            "OK" => {
                let location = response
                    .results
                    .first()
                    .map(|result| &result.geometry.location)
                    .ok_or_else(|| {
                        GeocodingError::ParseError(
                            "Status OK but no results in response".to_string(),
                        )
                    })?;
                Ok(Some(Coordinates {
                    latitude: location.lat,
                    longitude: location.lng,
                }))
            }
            "ZERO_RESULTS" => Ok(None),
            "OVER_QUERY_LIMIT" => Err(GeocodingError::RateLimitExceeded),
            "REQUEST_DENIED" => Err(GeocodingError::AuthenticationFailed(
                "Geocoding request denied".to_string(),
            )),
            other => Err(GeocodingError::RequestFailed(format!(
                "Geocoding status: {other}"
            ))),
        }
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> GeocodingError {
        if error.is_timeout() {
            GeocodingError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else if error.is_connect() {
            GeocodingError::ConnectionFailed(error.to_string())
        } else {
            GeocodingError::RequestFailed(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::{GeocodeResponse, GeocodeResult, Geometry, Location};

    #[test]
    fn config_defaults() {
        let config = GeocodingConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let config = GeocodingConfig::default();
        assert!(matches!(
            GeocodingClient::new(&config),
            Err(GeocodingError::Configuration(_))
        ));
    }

    #[test]
    fn ok_status_takes_first_result() {
        let response = GeocodeResponse {
            status: "OK".to_string(),
            results: vec![
                GeocodeResult {
                    geometry: Geometry {
                        location: Location { lat: 1.0, lng: 2.0 },
                    },
                },
                GeocodeResult {
                    geometry: Geometry {
                        location: Location { lat: 9.0, lng: 9.0 },
                    },
                },
            ],
        };
        let coords = GeocodingClient::interpret_response(response)
            .expect("no error")
            .expect("coordinates");
        assert!((coords.latitude - 1.0).abs() < f64::EPSILON);
        assert!((coords.longitude - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_results_is_none() {
        let response = GeocodeResponse {
            status: "ZERO_RESULTS".to_string(),
            results: vec![],
        };
        assert!(
            GeocodingClient::interpret_response(response)
                .expect("no error")
                .is_none()
        );
    }

    #[test]
    fn ok_without_results_is_a_parse_error() {
        let response = GeocodeResponse {
            status: "OK".to_string(),
            results: vec![],
        };
        assert!(matches!(
            GeocodingClient::interpret_response(response),
            Err(GeocodingError::ParseError(_))
        ));
    }

    #[test]
    fn quota_and_denial_statuses_map_to_errors() {
        let over_limit = GeocodeResponse {
            status: "OVER_QUERY_LIMIT".to_string(),
            results: vec![],
        };
        assert!(matches!(
            GeocodingClient::interpret_response(over_limit),
            Err(GeocodingError::RateLimitExceeded)
        ));

        let denied = GeocodeResponse {
            status: "REQUEST_DENIED".to_string(),
            results: vec![],
        };
        assert!(matches!(
            GeocodingClient::interpret_response(denied),
            Err(GeocodingError::AuthenticationFailed(_))
        ));
    }
}
