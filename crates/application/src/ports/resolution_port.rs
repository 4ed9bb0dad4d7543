//! Entity resolution port
//!
//! Defines the interface for mapping identifying fields to a canonical
//! entity record in an external knowledge base.

use async_trait::async_trait;
use domain::{InputRecord, ResolvedEntity};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Outcome of resolving one input record
///
/// "No match" is a valid terminal outcome, not an error, so it is a
/// variant rather than an `Err`. Transport failures stay in the `Err`
/// channel of the port and are degraded to unmatched by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// The service returned at least one candidate; this is the first one,
    /// with its full detail record
    Matched(ResolvedEntity),
    /// The service returned no candidates
    Unmatched,
}

/// Port for entity resolution operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResolutionPort: Send + Sync {
    /// Resolve one input record to at most one canonical entity
    ///
    /// Returns the first candidate the service offers, in service order;
    /// no ranking or disambiguation is applied on top.
    async fn resolve(&self, record: &InputRecord)
    -> Result<ResolutionOutcome, ApplicationError>;
}
