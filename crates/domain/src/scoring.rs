//! Heuristic risk scoring
//!
//! A weighted sum over the resolved entity's compliance attributes,
//! categorized by fixed thresholds. Pure and deterministic: the same
//! attribute set always yields the same assessment.

use serde::{Deserialize, Serialize};

use crate::entities::EntityAttributes;
use crate::value_objects::RiskLevel;

/// Score an entity's risk from its resolved attributes
///
/// Weights:
/// - sanctioned flag: +4
/// - politically exposed person flag: +2
/// - +0.5 per entry in the risk-factor mapping
/// - more than 5 adverse-media hits: +1
/// - more than 25 related entities: +1
///
/// Absent attributes contribute nothing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_entity_risk(attributes: &EntityAttributes) -> f64 {
    let mut score = 0.0;
    if attributes.sanctioned() {
        score += 4.0;
    }
    if attributes.pep() {
        score += 2.0;
    }
    score += 0.5 * attributes.risk_factor_count() as f64;
    if attributes.psa_count() > 5 {
        score += 1.0;
    }
    if attributes.related_entities_count() > 25 {
        score += 1.0;
    }
    score
}

/// A risk score together with its categorical level
///
/// Constructed only through [`RiskAssessment::of`], which keeps the level
/// consistent with the score by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Weighted-sum risk score, always >= 0
    pub score: f64,
    /// Categorical level derived from the score
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Assess an entity from its resolved attributes
    #[must_use]
    pub fn of(attributes: &EntityAttributes) -> Self {
        let score = score_entity_risk(attributes);
        Self {
            score,
            level: RiskLevel::from_score(score),
        }
    }
}
