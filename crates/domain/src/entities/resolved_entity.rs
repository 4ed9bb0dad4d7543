//! Resolved entity and its attribute view

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DomainError;

/// Optional-field view over a resolved entity's detail payload
///
/// Resolution services return sparse profiles: any of the risk-relevant
/// fields may be absent. All accessors apply a single default-resolution
/// rule — absent resolves to false, zero, or empty — so callers never
/// branch on presence.
///
/// The full payload is retained verbatim in [`raw`](Self::raw) for the
/// audit artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    sanctioned: Option<bool>,
    pep: Option<bool>,
    risk: Option<Map<String, Value>>,
    psa_count: Option<u64>,
    related_entities_count: Option<u64>,
    addresses: Option<Vec<String>>,
    /// The unmodified detail payload from the resolution service
    pub raw: Value,
}

impl EntityAttributes {
    /// Extract the known attributes from a detail payload, keeping the
    /// payload itself for the audit artifact
    #[must_use]
    pub fn from_payload(payload: Value) -> Self {
        let get = |key: &str| payload.get(key);

        let sanctioned = get("sanctioned").and_then(Value::as_bool);
        let pep = get("pep").and_then(Value::as_bool);
        let risk = get("risk").and_then(Value::as_object).cloned();
        let psa_count = get("psa_count").and_then(Value::as_u64);
        let related_entities_count = get("related_entities_count").and_then(Value::as_u64);
        let addresses = get("addresses").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(ToString::to_string))
                .collect()
        });

        Self {
            sanctioned,
            pep,
            risk,
            psa_count,
            related_entities_count,
            addresses,
            raw: payload,
        }
    }

    /// Whether the entity carries a sanctions flag (absent → false)
    #[must_use]
    pub fn sanctioned(&self) -> bool {
        self.sanctioned.unwrap_or(false)
    }

    /// Whether the entity is flagged as a politically exposed person
    /// (absent → false)
    #[must_use]
    pub fn pep(&self) -> bool {
        self.pep.unwrap_or(false)
    }

    /// Number of entries in the entity's risk-factor mapping (absent → 0)
    #[must_use]
    pub fn risk_factor_count(&self) -> usize {
        self.risk.as_ref().map_or(0, Map::len)
    }

    /// Adverse-media / public-source-article hit count (absent → 0)
    #[must_use]
    pub fn psa_count(&self) -> u64 {
        self.psa_count.unwrap_or(0)
    }

    /// Number of related entities in the knowledge graph (absent → 0)
    #[must_use]
    pub fn related_entities_count(&self) -> u64 {
        self.related_entities_count.unwrap_or(0)
    }

    /// Known addresses, in service order (absent → empty)
    #[must_use]
    pub fn addresses(&self) -> &[String] {
        self.addresses.as_deref().unwrap_or(&[])
    }
}

/// A canonical entity returned by the resolution service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    /// Canonical identifier in the external knowledge base
    pub entity_id: String,
    /// Display label
    pub label: String,
    /// Entity type (e.g., "company", "person")
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Attribute view over the detail payload
    pub attributes: EntityAttributes,
}

impl ResolvedEntity {
    /// Create a resolved entity
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingEntityId` if `entity_id` is empty:
    /// every resolved entity must carry a non-empty canonical id.
    pub fn new(
        entity_id: String,
        label: String,
        entity_type: String,
        attributes: EntityAttributes,
    ) -> Result<Self, DomainError> {
        if entity_id.trim().is_empty() {
            return Err(DomainError::MissingEntityId(label));
        }
        Ok(Self {
            entity_id,
            label,
            entity_type,
            attributes,
        })
    }
}
