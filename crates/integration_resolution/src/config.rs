//! Resolution client configuration

use serde::{Deserialize, Serialize};

/// Resolution service configuration
///
/// Credentials are supplied via the process environment by the caller;
/// this struct only carries them to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Resolution API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth2 client id
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth2 client secret
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Relationship expansion limit on entity detail fetches (default: 1)
    #[serde(default = "default_relationships_limit")]
    pub relationships_limit: u32,
}

fn default_base_url() -> String {
    "https://api.sayari.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_relationships_limit() -> u32 {
    1
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: None,
            client_secret: None,
            timeout_secs: default_timeout(),
            relationships_limit: default_relationships_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ResolutionConfig::default();
        assert_eq!(config.base_url, "https://api.sayari.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.relationships_limit, 1);
        assert!(config.client_id.is_none());
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: ResolutionConfig =
            serde_json::from_str(r#"{"client_id":"abc","client_secret":"xyz"}"#)
                .expect("valid config");
        assert_eq!(config.client_id.as_deref(), Some("abc"));
        assert_eq!(config.base_url, "https://api.sayari.com");
    }
}
