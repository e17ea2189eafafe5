//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// None of these is fatal to the session: the controller degrades or
/// logs-and-ignores according to its failure policy.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Device position could not be resolved
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Place search request failed
    #[error("Place search failed: {0}")]
    SearchFailed(String),

    /// Route fetch failed or returned no route
    #[error("Route fetch failed: {0}")]
    RouteFailed(String),

    /// A map operation was attempted before the surface was initialized
    #[error("Map surface not initialized")]
    MapNotInitialized,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is transient (the same call may later succeed)
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::LocationUnavailable(_) | Self::SearchFailed(_) | Self::RouteFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(ApplicationError::LocationUnavailable("denied".to_string()).is_transient());
        assert!(ApplicationError::SearchFailed("timeout".to_string()).is_transient());
        assert!(ApplicationError::RouteFailed("no route".to_string()).is_transient());
    }

    #[test]
    fn test_non_transient_errors() {
        assert!(!ApplicationError::MapNotInitialized.is_transient());
        assert!(!ApplicationError::Configuration("bad".to_string()).is_transient());
    }

    #[test]
    fn test_domain_error_passthrough() {
        let err: ApplicationError = DomainError::ValidationError("x".to_string()).into();
        assert!(err.to_string().contains("Validation failed"));
    }
}
