//! Client error types

use thiserror::Error;

/// Client error type
///
/// Rate limiting is its own variant rather than an `Api` case: the dashboard
/// renders it as a "try again shortly" state with the server's retry-after
/// hint, not as a failure.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, no HTTP status available
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429 with an optional retry-after hint in seconds
    #[error("Too many requests{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    /// Non-success response with the server's error message, surfaced verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this is the rate-limit state
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// HTTP status, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(", retry after {secs}s"),
        None => String::new(),
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_display() {
        let err = ClientError::RateLimited {
            retry_after: Some(12),
        };
        assert_eq!(err.to_string(), "Too many requests, retry after 12s");
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(429));

        let err = ClientError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "Too many requests");
    }

    #[test]
    fn test_malformed_body_maps_to_serialization() {
        let err = serde_json::from_str::<Vec<u64>>("{not json")
            .map_err(ClientError::from)
            .unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_api_error_is_verbatim() {
        let err = ClientError::Api {
            status: 409,
            message: "Member already frozen".to_string(),
        };
        assert_eq!(err.to_string(), "Member already frozen");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_rate_limited());
    }
}
