//! Application services

mod enrichment_service;
pub mod summary_service;

pub use enrichment_service::{EnrichmentReport, EnrichmentService};
pub use summary_service::{LevelCount, PAGE_SIZE};
