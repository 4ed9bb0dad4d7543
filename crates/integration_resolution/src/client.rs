//! Entity-resolution API client
//!
//! OAuth2 client-credentials flow plus the two endpoints the pipeline
//! needs: candidate resolution and entity detail fetch.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::{
    config::ResolutionConfig,
    error::ResolutionError,
    models::{EntityMatch, ResolutionQuery},
};

/// Resolution API wire structures
mod api {
    use serde::{Deserialize, Serialize};

    use crate::models::EntityMatch;

    #[derive(Debug, Serialize)]
    pub struct TokenRequest<'a> {
        pub client_id: &'a str,
        pub client_secret: &'a str,
        pub grant_type: &'static str,
    }

    #[derive(Debug, Deserialize)]
    pub struct TokenResponse {
        pub access_token: String,
        #[serde(default = "default_expires_in")]
        pub expires_in: u64,
    }

    const fn default_expires_in() -> u64 {
        3600
    }

    #[derive(Debug, Deserialize)]
    pub struct ResolutionResponse {
        #[serde(default)]
        pub data: Vec<EntityMatch>,
    }
}

/// Slack subtracted from the token lifetime so a token is refreshed
/// before the service would reject it
const TOKEN_EXPIRY_SLACK_SECS: u64 = 60;

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Entity-resolution HTTP client
pub struct ResolutionClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    timeout_secs: u64,
    relationships_limit: u32,
    token: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for ResolutionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ResolutionClient {
    /// Create a new resolution client
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &ResolutionConfig) -> Result<Self, ResolutionError> {
        let client_id = config.client_id.clone().ok_or_else(|| {
            ResolutionError::Configuration("Resolution client id is required".to_string())
        })?;
        let client_secret = config.client_secret.clone().ok_or_else(|| {
            ResolutionError::Configuration("Resolution client secret is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResolutionError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            timeout_secs: config.timeout_secs,
            relationships_limit: config.relationships_limit,
            token: Mutex::new(None),
        })
    }

    /// Resolve identifying fields to candidate entities, in service order
    #[instrument(skip(self), fields(name = %query.name))]
    pub async fn resolve(
        &self,
        query: &ResolutionQuery,
    ) -> Result<Vec<EntityMatch>, ResolutionError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/v1/resolution", self.base_url);

        debug!(url = %url, "Sending resolution request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(&[
                ("name", query.name.as_str()),
                ("address", query.address.as_str()),
                ("country", query.country.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let response = Self::check_status(response)?;
        let parsed: api::ResolutionResponse = response
            .json()
            .await
            .map_err(|e| ResolutionError::ParseError(e.to_string()))?;

        Ok(parsed.data)
    }

    /// Fetch the full detail record for an entity, with relationship
    /// expansion limited per configuration
    #[instrument(skip(self))]
    pub async fn entity_details(&self, entity_id: &str) -> Result<Value, ResolutionError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/v1/entity/{entity_id}", self.base_url);

        debug!(url = %url, "Fetching entity details");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(&[("relationships.limit", self.relationships_limit)])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let response = Self::check_status(response)?;
        response
            .json()
            .await
            .map_err(|e| ResolutionError::ParseError(e.to_string()))
    }

    /// Get a bearer token, fetching a new one only when the cached token
    /// is missing or close to expiry
    async fn bearer_token(&self) -> Result<String, ResolutionError> {
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard.as_ref() {
            if Instant::now() < cached.expires_at {
                return Ok(cached.token.clone());
            }
        }

        let fetched = self.fetch_token().await?;
        let lifetime = fetched.expires_in.saturating_sub(TOKEN_EXPIRY_SLACK_SECS);
        let token = fetched.access_token;
        *guard = Some(CachedToken {
            token: token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });
        Ok(token)
    }

    async fn fetch_token(&self) -> Result<api::TokenResponse, ResolutionError> {
        let url = format!("{}/oauth/token", self.base_url);

        debug!(url = %url, "Requesting access token");

        let response = self
            .client
            .post(&url)
            .json(&api::TokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                grant_type: "client_credentials",
            })
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ResolutionError::AuthenticationFailed(format!(
                "Token request rejected: HTTP {status}"
            )));
        }
        let response = Self::check_status(response)?;
        response
            .json()
            .await
            .map_err(|e| ResolutionError::ParseError(e.to_string()))
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ResolutionError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ResolutionError::AuthenticationFailed(format!(
                "HTTP {status}"
            )));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ResolutionError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(ResolutionError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ResolutionError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> ResolutionError {
        if error.is_timeout() {
            ResolutionError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else if error.is_connect() {
            ResolutionError::ConnectionFailed(error.to_string())
        } else {
            ResolutionError::RequestFailed(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_credentials() -> ResolutionConfig {
        ResolutionConfig {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            ..ResolutionConfig::default()
        }
    }

    #[test]
    fn missing_client_id_is_rejected() {
        let config = ResolutionConfig {
            client_secret: Some("secret".to_string()),
            ..ResolutionConfig::default()
        };
        assert!(matches!(
            ResolutionClient::new(&config),
            Err(ResolutionError::Configuration(_))
        ));
    }

    #[test]
    fn missing_client_secret_is_rejected() {
        let config = ResolutionConfig {
            client_id: Some("id".to_string()),
            ..ResolutionConfig::default()
        };
        assert!(matches!(
            ResolutionClient::new(&config),
            Err(ResolutionError::Configuration(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ResolutionConfig {
            base_url: "https://api.example.com/".to_string(),
            ..config_with_credentials()
        };
        let client = ResolutionClient::new(&config).expect("client creation should succeed");
        assert_eq!(client.base_url, "https://api.example.com");
    }

    #[test]
    fn resolution_response_defaults_to_empty_data() {
        let parsed: super::api::ResolutionResponse =
            serde_json::from_str("{}").expect("valid response");
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn token_response_defaults_expiry() {
        let parsed: super::api::TokenResponse =
            serde_json::from_str(r#"{"access_token":"tok"}"#).expect("valid response");
        assert_eq!(parsed.expires_in, 3600);
    }
}
