//! Ports - interfaces the pipeline depends on

mod geocoding_port;
mod resolution_port;

pub use geocoding_port::{GeocodeOutcome, GeocodingPort};
pub use resolution_port::{ResolutionOutcome, ResolutionPort};

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use resolution_port::MockResolutionPort;
