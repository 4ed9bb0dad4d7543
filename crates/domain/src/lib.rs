//! Domain layer for RiskAtlas
//!
//! Contains the core enrichment model (input records, resolved entities,
//! risk assessments, summary rows) and the pure risk-scoring rules.
//! This layer has no I/O dependencies.

pub mod entities;
pub mod errors;
pub mod scoring;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use scoring::{RiskAssessment, score_entity_risk};
pub use value_objects::*;
