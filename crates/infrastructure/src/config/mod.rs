//! Application configuration
//!
//! Loaded from an optional `config.toml` with `RISKATLAS_`-prefixed
//! environment overrides (double underscore as the nesting separator,
//! e.g. `RISKATLAS_RESOLUTION__CLIENT_ID`). Service credentials are
//! expected to arrive via the environment and are held as secrets.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use integration_geocoding::GeocodingConfig;
use integration_resolution::ResolutionConfig;

/// HTTP server configuration for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Pipeline artifact paths and pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input CSV (columns `name,address,country`)
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Full-detail JSON artifact
    #[serde(default = "default_results_path")]
    pub results_path: String,
    /// Flat CSV summary artifact
    #[serde(default = "default_summary_path")]
    pub summary_path: String,
    /// Rendered map document
    #[serde(default = "default_map_path")]
    pub map_path: String,
    /// Fixed delay between rows, in milliseconds (rate-limit courtesy)
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
}

fn default_input_path() -> String {
    "data/entities.csv".to_string()
}

fn default_results_path() -> String {
    "data/results.json".to_string()
}

fn default_summary_path() -> String {
    "data/summary.csv".to_string()
}

fn default_map_path() -> String {
    "static/risk_map.html".to_string()
}

const fn default_pacing_ms() -> u64 {
    500
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            results_path: default_results_path(),
            summary_path: default_summary_path(),
            map_path: default_map_path(),
            pacing_ms: default_pacing_ms(),
        }
    }
}

/// Resolution service configuration, credentials included
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionAppConfig {
    /// Resolution API base URL (service default when unset)
    #[serde(default)]
    pub base_url: Option<String>,
    /// OAuth2 client id (`RISKATLAS_RESOLUTION__CLIENT_ID`)
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth2 client secret (`RISKATLAS_RESOLUTION__CLIENT_SECRET`,
    /// sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub client_secret: Option<SecretString>,
    /// Connection timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ResolutionAppConfig {
    /// Build the integration-crate configuration
    #[must_use]
    pub fn to_client_config(&self) -> ResolutionConfig {
        let defaults = ResolutionConfig::default();
        ResolutionConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            client_id: self.client_id.clone(),
            client_secret: self
                .client_secret
                .as_ref()
                .map(|s| s.expose_secret().to_string()),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            relationships_limit: defaults.relationships_limit,
        }
    }
}

/// Geocoding service configuration, key included
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Geocoding API base URL (service default when unset)
    #[serde(default)]
    pub base_url: Option<String>,
    /// API key (`RISKATLAS_GEOCODING__API_KEY`, sensitive - uses
    /// `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    /// Connection timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl GeocodingAppConfig {
    /// Build the integration-crate configuration
    #[must_use]
    pub fn to_client_config(&self) -> GeocodingConfig {
        let defaults = GeocodingConfig::default();
        GeocodingConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            api_key: self
                .api_key
                .as_ref()
                .map(|s| s.expose_secret().to_string()),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dashboard server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Pipeline paths and pacing
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Resolution service settings
    #[serde(default)]
    pub resolution: ResolutionAppConfig,
    /// Geocoding service settings
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the
    /// environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            // (e.g., RISKATLAS_SERVER__PORT, RISKATLAS_GEOCODING__API_KEY)
            .add_source(
                config::Environment::with_prefix("RISKATLAS")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_full_local_run() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pipeline.input_path, "data/entities.csv");
        assert_eq!(config.pipeline.pacing_ms, 500);
        assert!(config.resolution.client_id.is_none());
    }

    #[test]
    fn resolution_client_config_carries_credentials() {
        let app = ResolutionAppConfig {
            client_id: Some("id".to_string()),
            client_secret: Some(SecretString::from("secret")),
            ..ResolutionAppConfig::default()
        };
        let client_config = app.to_client_config();
        assert_eq!(client_config.client_id.as_deref(), Some("id"));
        assert_eq!(client_config.client_secret.as_deref(), Some("secret"));
        assert_eq!(client_config.base_url, "https://api.sayari.com");
    }

    #[test]
    fn geocoding_client_config_uses_overrides() {
        let app = GeocodingAppConfig {
            base_url: Some("http://localhost:9000".to_string()),
            api_key: Some(SecretString::from("key")),
            timeout_secs: Some(2),
        };
        let client_config = app.to_client_config();
        assert_eq!(client_config.base_url, "http://localhost:9000");
        assert_eq!(client_config.api_key.as_deref(), Some("key"));
        assert_eq!(client_config.timeout_secs, 2);
    }

    #[test]
    fn config_toml_round_trip() {
        let toml = r#"
            [server]
            port = 8080

            [pipeline]
            input_path = "custom/entities.csv"
            pacing_ms = 100
        "#;
        let config: AppConfig = ::config::Config::builder()
            .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml))
            .build()
            .expect("valid config")
            .try_deserialize()
            .expect("valid config");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pipeline.input_path, "custom/entities.csv");
        assert_eq!(config.pipeline.pacing_ms, 100);
        // Untouched sections keep their defaults
        assert_eq!(config.pipeline.summary_path, "data/summary.csv");
    }
}
