//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Resolved entity is missing its identifier
    #[error("Resolved entity has an empty entity id (label: {0})")]
    MissingEntityId(String),

    /// Coordinates outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entity_id_message_names_label() {
        let err = DomainError::MissingEntityId("Acme Corp".to_string());
        assert_eq!(
            err.to_string(),
            "Resolved entity has an empty entity id (label: Acme Corp)"
        );
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }
}
