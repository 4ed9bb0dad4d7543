//! Infrastructure layer for RiskAtlas
//!
//! Configuration loading, artifact persistence, adapters binding the
//! application ports to the integration clients, and the map template
//! renderer.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod templates;

pub use adapters::{GeocodingAdapter, ResolutionAdapter};
pub use config::{
    AppConfig, GeocodingAppConfig, PipelineConfig, ResolutionAppConfig, ServerConfig,
};
pub use persistence::{InputStore, PersistenceError, ResultsStore, SummaryStore};
pub use templates::{MapRenderer, TemplateError, marker_color};
