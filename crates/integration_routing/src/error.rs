//! Routing error types

use thiserror::Error;

/// Errors that can occur during route fetching
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Routing connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Routing request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the routing response
    #[error("Routing parse error: {0}")]
    ParseError(String),

    /// The backend returned no route between the endpoints
    #[error("No route found from {from} to {to}")]
    NoRouteFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Request timeout
    #[error("Routing request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RoutingError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(RoutingError::RequestFailed("test".to_string()).is_retryable());
        assert!(RoutingError::Timeout { timeout_secs: 10 }.is_retryable());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!RoutingError::ParseError("test".to_string()).is_retryable());
        assert!(
            !RoutingError::NoRouteFound {
                from: "A".to_string(),
                to: "B".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = RoutingError::NoRouteFound {
            from: "69.30, 41.30".to_string(),
            to: "69.28, 41.29".to_string(),
        };
        assert!(err.to_string().contains("69.30, 41.30"));
        assert!(err.to_string().contains("69.28, 41.29"));
    }
}
