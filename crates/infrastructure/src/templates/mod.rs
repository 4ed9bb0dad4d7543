//! Map template rendering
//!
//! Renders the summary rows into a single self-contained interactive
//! HTML document using Tera. The template is embedded at compile time;
//! the document pulls Leaflet from a CDN and needs no server.

use domain::SummaryRow;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Embedded map template
const MAP_TEMPLATE: &str = include_str!("../../templates/map.html.tera");
const MAP_TEMPLATE_NAME: &str = "map.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Marker color for a risk level string
///
/// Unrecognized level strings fall back to a neutral blue.
#[must_use]
pub fn marker_color(level: &str) -> &'static str {
    match level {
        "High" => "darkred",
        "Medium" => "darkorange",
        "Low" => "gold",
        _ => "blue",
    }
}

/// One map marker, serialized into the document
#[derive(Debug, Serialize)]
struct Marker {
    latitude: f64,
    longitude: f64,
    color: &'static str,
    tooltip: String,
}

impl Marker {
    fn from_row(row: &SummaryRow, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            color: marker_color(row.risk_level.as_str()),
            tooltip: format!(
                "{}<br>Risk Level: {}<br>Risk Score: {:.1}",
                row.name, row.risk_level, row.risk_score
            ),
        }
    }
}

/// Renders the interactive risk map from summary rows
#[derive(Debug)]
pub struct MapRenderer {
    tera: Tera,
}

impl MapRenderer {
    /// Create a renderer with the embedded template
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(MAP_TEMPLATE_NAME, MAP_TEMPLATE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render the map document
    ///
    /// Rows without coordinates are dropped; every remaining row becomes
    /// one circle marker colored by its risk level.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, rows: &[SummaryRow]) -> Result<String, TemplateError> {
        let markers: Vec<Marker> = rows
            .iter()
            .filter_map(|row| {
                let latitude = row.latitude?;
                let longitude = row.longitude?;
                Some(Marker::from_row(row, latitude, longitude))
            })
            .collect();

        debug!(total = rows.len(), plotted = markers.len(), "Rendering map");

        let mut context = Context::new();
        context.insert("markers", &markers);
        self.tera
            .render(MAP_TEMPLATE_NAME, &context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::RiskLevel;

    fn row(name: &str, score: f64, coords: Option<(f64, f64)>) -> SummaryRow {
        SummaryRow {
            name: name.to_string(),
            psa_count: 0,
            sanctioned: false,
            pep: false,
            related_entities_count: 0,
            risk_score: score,
            risk_level: RiskLevel::from_score(score),
            country: "US".to_string(),
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
        }
    }

    #[test]
    fn palette_covers_all_levels_with_neutral_default() {
        assert_eq!(marker_color("High"), "darkred");
        assert_eq!(marker_color("Medium"), "darkorange");
        assert_eq!(marker_color("Low"), "gold");
        assert_eq!(marker_color("Severe"), "blue");
        assert_eq!(marker_color(""), "blue");
    }

    #[test]
    fn rows_without_coordinates_are_dropped() {
        let renderer = MapRenderer::new().expect("renderer");
        let html = renderer
            .render(&[
                row("Acme Corp", 20.0, Some((40.7, -74.0))),
                row("Globex", 5.0, None),
            ])
            .expect("render");

        assert!(html.contains("Acme Corp"));
        assert!(!html.contains("Globex"));
    }

    #[test]
    fn markers_carry_level_color_and_tooltip() {
        let renderer = MapRenderer::new().expect("renderer");
        let html = renderer
            .render(&[row("Acme Corp", 20.0, Some((40.7, -74.0)))])
            .expect("render");

        assert!(html.contains("darkred"));
        assert!(html.contains("Risk Level: High"));
        assert!(html.contains("Risk Score: 20.0"));
    }

    #[test]
    fn document_is_self_contained_and_full_viewport() {
        let renderer = MapRenderer::new().expect("renderer");
        let html = renderer.render(&[]).expect("render");

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("position: absolute"));
        assert!(html.contains("setView([20, 0], 2)"));
        assert!(html.contains("fitBounds([[80, -180], [-80, 180]])"));
    }

    #[test]
    fn empty_rows_render_an_empty_marker_list() {
        let renderer = MapRenderer::new().expect("renderer");
        let html = renderer.render(&[]).expect("render");
        assert!(html.contains("const markers = []"));
    }
}
