//! Application layer - Use cases and orchestration
//!
//! Defines the ports the enrichment pipeline depends on and the services
//! that orchestrate domain objects across them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
