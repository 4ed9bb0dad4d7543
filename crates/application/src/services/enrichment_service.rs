//! Enrichment pipeline service
//!
//! Single-pass, sequential orchestration of resolution, risk assessment,
//! and geocoding over a batch of input records. A row-level failure never
//! aborts the run; the affected record is reported as unmatched (or left
//! without coordinates) and processing continues.

use std::sync::Arc;
use std::time::Duration;

use domain::{EnrichedEntity, GeoPoint, InputRecord, ResolvedEntity, RiskAssessment};
use tracing::{debug, info, instrument, warn};

use crate::ports::{GeocodeOutcome, GeocodingPort, ResolutionOutcome, ResolutionPort};

/// Result of one pipeline run
#[derive(Debug, Default)]
pub struct EnrichmentReport {
    /// Successfully resolved records, in input order
    pub enriched: Vec<EnrichedEntity>,
    /// Names of records that did not resolve, in input order
    pub unmatched: Vec<String>,
}

impl EnrichmentReport {
    /// Total number of records the run accounted for
    #[must_use]
    pub fn total(&self) -> usize {
        self.enriched.len() + self.unmatched.len()
    }
}

/// Orchestrates the enrichment pipeline over injected ports
pub struct EnrichmentService {
    resolver: Arc<dyn ResolutionPort>,
    geocoder: Arc<dyn GeocodingPort>,
    pacing: Duration,
}

impl std::fmt::Debug for EnrichmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentService")
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

impl EnrichmentService {
    /// Create a new enrichment service
    ///
    /// `pacing` is the fixed delay inserted between successive rows as
    /// rate-limit courtesy toward the external services; it applies
    /// independent of each row's outcome.
    #[must_use]
    pub fn new(
        resolver: Arc<dyn ResolutionPort>,
        geocoder: Arc<dyn GeocodingPort>,
        pacing: Duration,
    ) -> Self {
        Self {
            resolver,
            geocoder,
            pacing,
        }
    }

    /// Run the pipeline over all records, strictly one row at a time
    ///
    /// Post-condition: `enriched.len() + unmatched.len()` equals the
    /// number of input records.
    #[instrument(skip_all, fields(rows = records.len()))]
    pub async fn enrich_all(&self, records: Vec<InputRecord>) -> EnrichmentReport {
        let total = records.len();
        let mut report = EnrichmentReport::default();

        for (index, record) in records.into_iter().enumerate() {
            self.enrich_one(record, &mut report).await;
            if index + 1 < total {
                tokio::time::sleep(self.pacing).await;
            }
        }

        info!(
            enriched = report.enriched.len(),
            unmatched = report.unmatched.len(),
            "Enrichment run complete"
        );
        report
    }

    async fn enrich_one(&self, record: InputRecord, report: &mut EnrichmentReport) {
        match self.resolver.resolve(&record).await {
            Ok(ResolutionOutcome::Matched(entity)) => {
                info!(name = %record.name, entity_id = %entity.entity_id, "Resolved");
                let assessment = RiskAssessment::of(&entity.attributes);
                let location = self.geocode_first_address(&entity).await;
                report
                    .enriched
                    .push(EnrichedEntity::new(record, entity, assessment, location));
            }
            Ok(ResolutionOutcome::Unmatched) => {
                warn!(name = %record.name, "No match");
                report.unmatched.push(record.name);
            }
            Err(error) => {
                // Transient failures are indistinguishable from non-matches
                // here; no retry is performed.
                warn!(name = %record.name, %error, "Resolution failed, treating as unmatched");
                report.unmatched.push(record.name);
            }
        }
    }

    /// Geocode the entity's first known address
    ///
    /// Skips the service call entirely when the address list is empty.
    /// Geocoding failures of any kind leave the location absent.
    async fn geocode_first_address(&self, entity: &ResolvedEntity) -> Option<GeoPoint> {
        let address = entity.attributes.addresses().first()?;
        match self.geocoder.geocode(address).await {
            Ok(GeocodeOutcome::Located(point)) => Some(point),
            Ok(GeocodeOutcome::NotFound) => {
                debug!(entity_id = %entity.entity_id, "Address did not geocode");
                None
            }
            Err(error) => {
                warn!(entity_id = %entity.entity_id, %error, "Geocoding failed");
                None
            }
        }
    }
}
