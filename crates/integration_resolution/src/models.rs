//! Resolution API models

use serde::{Deserialize, Serialize};

/// Identifying fields sent to the resolution endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionQuery {
    /// Entity name
    pub name: String,
    /// Free-text address
    pub address: String,
    /// Country name or code
    pub country: String,
}

/// One candidate match from the resolution endpoint
///
/// Candidates arrive in service order; the service's ordering is treated
/// as its priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMatch {
    /// Canonical entity identifier
    pub entity_id: String,
    /// Display label
    pub label: String,
    /// Entity type (e.g., "company", "person")
    #[serde(rename = "type")]
    pub entity_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_match_reads_type_field() {
        let json = r#"{"entity_id":"mGq3zP","label":"Acme Corp","type":"company"}"#;
        let candidate: EntityMatch = serde_json::from_str(json).expect("valid match");
        assert_eq!(candidate.entity_id, "mGq3zP");
        assert_eq!(candidate.entity_type, "company");
    }
}
