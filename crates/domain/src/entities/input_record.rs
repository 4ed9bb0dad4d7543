//! Input record entity

use serde::{Deserialize, Serialize};

/// One row of the input artifact: the identifying fields used for
/// entity resolution. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Entity name as supplied by the caller
    pub name: String,
    /// Free-text address
    pub address: String,
    /// Country name or code
    pub country: String,
}

impl InputRecord {
    /// Create a new input record
    #[must_use]
    pub const fn new(name: String, address: String, country: String) -> Self {
        Self {
            name,
            address,
            country,
        }
    }
}
