//! Entity-resolution API integration
//!
//! HTTP client for an OAuth2-protected entity-resolution service:
//! resolves identifying fields (name, address, country) to canonical
//! entity records and fetches full entity profiles.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ResolutionClient;
pub use config::ResolutionConfig;
pub use error::ResolutionError;
pub use models::{EntityMatch, ResolutionQuery};
