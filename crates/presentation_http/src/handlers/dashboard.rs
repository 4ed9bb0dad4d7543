//! Dashboard page and data endpoints

use application::services::summary_service::{self, LevelCount, PAGE_SIZE};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use domain::SummaryRow;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

const DASHBOARD_PAGE: &str = include_str!("../../static/dashboard.html");

/// Query parameters for the row listing
#[derive(Debug, Deserialize)]
pub struct RowsQuery {
    /// Case-insensitive name filter (optional)
    pub search: Option<String>,
    /// Zero-based page index (default: 0)
    pub page: Option<usize>,
}

/// Row projection limited to the columns the table displays
#[derive(Debug, Clone, Serialize)]
pub struct VisibleRow {
    pub name: String,
    pub psa_count: u64,
    pub sanctioned: bool,
    pub pep: bool,
    pub related_entities_count: u64,
    pub risk_score: f64,
    pub risk_level: String,
}

impl From<&SummaryRow> for VisibleRow {
    fn from(row: &SummaryRow) -> Self {
        Self {
            name: row.name.clone(),
            psa_count: row.psa_count,
            sanctioned: row.sanctioned,
            pep: row.pep,
            related_entities_count: row.related_entities_count,
            risk_score: row.risk_score,
            risk_level: row.risk_level.as_str().to_string(),
        }
    }
}

/// Paged row listing response
#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub rows: Vec<VisibleRow>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Serve the dashboard page
pub async fn page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// List summary rows, filtered by name and paged
///
/// GET /api/rows
#[instrument(skip(state))]
pub async fn rows(
    State(state): State<AppState>,
    Query(query): Query<RowsQuery>,
) -> Json<RowsResponse> {
    let filtered = summary_service::filter_by_name(&state.rows, query.search.as_deref());
    let page = query.page.unwrap_or(0);
    let total = filtered.len();
    let visible = summary_service::paginate(&filtered, page)
        .iter()
        .map(|row| VisibleRow::from(*row))
        .collect();

    Json(RowsResponse {
        rows: visible,
        total,
        page,
        page_size: PAGE_SIZE,
    })
}

/// Risk level distribution across all rows
///
/// GET /api/distribution
#[instrument(skip(state))]
pub async fn distribution(State(state): State<AppState>) -> Json<[LevelCount; 3]> {
    Json(summary_service::distribution(&state.rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::RiskLevel;

    fn row(name: &str, score: f64) -> SummaryRow {
        SummaryRow {
            name: name.to_string(),
            psa_count: 2,
            sanctioned: false,
            pep: true,
            related_entities_count: 4,
            risk_score: score,
            risk_level: RiskLevel::from_score(score),
            country: "US".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn visible_row_drops_location_columns() {
        let visible = VisibleRow::from(&row("Acme Holdings", 13.5));
        let json = serde_json::to_value(&visible).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert!(!object.contains_key("country"));
        assert!(!object.contains_key("latitude"));
    }

    #[test]
    fn visible_row_carries_table_fields() {
        let visible = VisibleRow::from(&row("Acme Holdings", 13.5));
        assert_eq!(visible.name, "Acme Holdings");
        assert_eq!(visible.risk_level, "Medium");
        assert!((visible.risk_score - 13.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rows_response_serialization() {
        let resp = RowsResponse {
            rows: vec![VisibleRow::from(&row("Acme", 3.0))],
            total: 1,
            page: 0,
            page_size: PAGE_SIZE,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("\"page_size\":10"));
    }
}
