//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate outside valid geographic ranges
    #[error("Invalid coordinates: longitude {longitude} must be -180 to 180, latitude {latitude} must be -90 to 90")]
    InvalidCoordinates {
        /// Offending longitude
        longitude: f64,
        /// Offending latitude
        latitude: f64,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_display_includes_values() {
        let err = DomainError::InvalidCoordinates {
            longitude: 200.0,
            latitude: 41.3,
        };
        let msg = err.to_string();
        assert!(msg.contains("200"));
        assert!(msg.contains("41.3"));
    }
}
