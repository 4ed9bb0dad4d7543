//! Resolution port adapter

use application::{ApplicationError, ResolutionOutcome, ResolutionPort};
use async_trait::async_trait;
use domain::{EntityAttributes, InputRecord, ResolvedEntity};
use integration_resolution::{ResolutionClient, ResolutionError, ResolutionQuery};
use tracing::debug;

/// Implements [`ResolutionPort`] over the resolution HTTP client
///
/// Takes the first candidate the service returns and expands it with a
/// detail fetch; an empty candidate list is the `Unmatched` outcome.
#[derive(Debug)]
pub struct ResolutionAdapter {
    client: ResolutionClient,
}

impl ResolutionAdapter {
    /// Wrap a resolution client
    #[must_use]
    pub const fn new(client: ResolutionClient) -> Self {
        Self { client }
    }
}

fn map_error(error: ResolutionError) -> ApplicationError {
    match error {
        ResolutionError::RateLimitExceeded => ApplicationError::RateLimited,
        ResolutionError::Configuration(message) => ApplicationError::Configuration(message),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl ResolutionPort for ResolutionAdapter {
    async fn resolve(
        &self,
        record: &InputRecord,
    ) -> Result<ResolutionOutcome, ApplicationError> {
        let query = ResolutionQuery {
            name: record.name.clone(),
            address: record.address.clone(),
            country: record.country.clone(),
        };

        let candidates = self.client.resolve(&query).await.map_err(map_error)?;
        let Some(first) = candidates.into_iter().next() else {
            return Ok(ResolutionOutcome::Unmatched);
        };

        debug!(entity_id = %first.entity_id, "Expanding first candidate");
        let payload = self
            .client
            .entity_details(&first.entity_id)
            .await
            .map_err(map_error)?;

        let entity = ResolvedEntity::new(
            first.entity_id,
            first.label,
            first.entity_type,
            EntityAttributes::from_payload(payload),
        )?;
        Ok(ResolutionOutcome::Matched(entity))
    }
}
