//! Summary row projection

use serde::{Deserialize, Serialize};

use crate::entities::EnrichedEntity;
use crate::value_objects::{GeoPoint, RiskLevel};

/// Flat, presentation-oriented projection of an [`EnrichedEntity`]
///
/// The serde renames fix the column headers of the summary artifact;
/// both presentation surfaces consume rows in exactly this shape.
/// Latitude and Longitude serialize as empty fields when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Entity name from the input artifact
    #[serde(rename = "Name")]
    pub name: String,
    /// Adverse-media hit count
    #[serde(rename = "PSA Count")]
    pub psa_count: u64,
    /// Sanctions flag
    #[serde(rename = "Sanctioned")]
    pub sanctioned: bool,
    /// PEP flag
    #[serde(rename = "Politically Exposed Person")]
    pub pep: bool,
    /// Knowledge-graph relationship count
    #[serde(rename = "Related Entities Count")]
    pub related_entities_count: u64,
    /// Weighted-sum risk score
    #[serde(rename = "Risk Score")]
    pub risk_score: f64,
    /// Categorical risk level
    #[serde(rename = "Risk Level")]
    pub risk_level: RiskLevel,
    /// Country from the input artifact
    #[serde(rename = "Country")]
    pub country: String,
    /// Geocoded latitude, when available
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    /// Geocoded longitude, when available
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}

impl SummaryRow {
    /// Whether this row carries a usable map position
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// The row's position as a [`GeoPoint`], when both coordinates are
    /// present and valid
    #[must_use]
    pub fn geo_point(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).ok(),
            _ => None,
        }
    }
}

impl From<&EnrichedEntity> for SummaryRow {
    fn from(enriched: &EnrichedEntity) -> Self {
        let attributes = &enriched.entity.attributes;
        Self {
            name: enriched.name.clone(),
            psa_count: attributes.psa_count(),
            sanctioned: attributes.sanctioned(),
            pep: attributes.pep(),
            related_entities_count: attributes.related_entities_count(),
            risk_score: enriched.assessment.score,
            risk_level: enriched.assessment.level,
            country: enriched.country.clone(),
            latitude: enriched.location.map(|p| p.latitude()),
            longitude: enriched.location.map(|p| p.longitude()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityAttributes, InputRecord, ResolvedEntity};
    use crate::scoring::RiskAssessment;
    use serde_json::json;

    fn enriched(location: Option<GeoPoint>) -> EnrichedEntity {
        let attributes = EntityAttributes::from_payload(json!({
            "sanctioned": true,
            "pep": false,
            "psa_count": 7,
            "related_entities_count": 3
        }));
        let assessment = RiskAssessment::of(&attributes);
        let entity = ResolvedEntity::new(
            "mGq3zP".to_string(),
            "Acme Corp".to_string(),
            "company".to_string(),
            attributes,
        )
        .expect("valid entity");
        EnrichedEntity::new(
            InputRecord::new(
                "Acme Corp".to_string(),
                "1 Main St".to_string(),
                "US".to_string(),
            ),
            entity,
            assessment,
            location,
        )
    }

    #[test]
    fn projection_flattens_attributes() {
        let row = SummaryRow::from(&enriched(GeoPoint::new(40.7, -74.0).ok()));
        assert_eq!(row.name, "Acme Corp");
        assert_eq!(row.psa_count, 7);
        assert!(row.sanctioned);
        assert!(!row.pep);
        assert_eq!(row.related_entities_count, 3);
        assert!((row.risk_score - 5.0).abs() < f64::EPSILON);
        assert_eq!(row.risk_level, RiskLevel::Low);
        assert!(row.has_coordinates());
    }

    #[test]
    fn level_is_consistent_with_score() {
        let row = SummaryRow::from(&enriched(None));
        assert_eq!(row.risk_level, RiskLevel::from_score(row.risk_score));
    }

    #[test]
    fn missing_location_yields_no_coordinates() {
        let row = SummaryRow::from(&enriched(None));
        assert!(!row.has_coordinates());
        assert!(row.geo_point().is_none());
        assert_eq!(row.latitude, None);
        assert_eq!(row.longitude, None);
    }

    #[test]
    fn geo_point_round_trips_coordinates() {
        let row = SummaryRow::from(&enriched(GeoPoint::new(40.7, -74.0).ok()));
        let point = row.geo_point().expect("coordinates present");
        assert!((point.latitude() - 40.7).abs() < f64::EPSILON);
        assert!((point.longitude() + 74.0).abs() < f64::EPSILON);
    }
}
