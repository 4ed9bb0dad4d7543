//! Value Objects - Immutable, identity-less domain primitives

mod geo_point;
mod risk_level;

pub use geo_point::GeoPoint;
pub use risk_level::RiskLevel;
