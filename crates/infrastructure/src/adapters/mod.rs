//! Adapters binding application ports to the integration clients

mod geocoding_adapter;
mod resolution_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use resolution_adapter::ResolutionAdapter;
