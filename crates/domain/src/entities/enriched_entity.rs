//! Enriched entity entity

use serde::{Deserialize, Serialize};

use crate::entities::{InputRecord, ResolvedEntity};
use crate::scoring::RiskAssessment;
use crate::value_objects::GeoPoint;

/// A successfully resolved input record together with everything the
/// pipeline derived from it: the canonical entity (raw payload included),
/// its risk assessment, and the geocoded location when one was found.
///
/// Unresolved records never become enriched entities; they are tracked
/// by name in the run report instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEntity {
    /// Entity name from the input artifact
    pub name: String,
    /// Free-text address from the input artifact
    pub address: String,
    /// Country from the input artifact
    pub country: String,
    /// Canonical entity from the resolution service
    pub entity: ResolvedEntity,
    /// Risk score and level derived from the entity's attributes
    pub assessment: RiskAssessment,
    /// Geocoded position of the entity's first known address, when
    /// geocoding succeeded
    pub location: Option<GeoPoint>,
}

impl EnrichedEntity {
    /// Assemble an enriched entity from the pipeline's intermediate results
    #[must_use]
    pub fn new(
        record: InputRecord,
        entity: ResolvedEntity,
        assessment: RiskAssessment,
        location: Option<GeoPoint>,
    ) -> Self {
        Self {
            name: record.name,
            address: record.address,
            country: record.country,
            entity,
            assessment,
            location,
        }
    }
}
