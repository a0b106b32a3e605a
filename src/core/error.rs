//! Error types for the configuration and HTTP boundary
//!
//! The query pipeline itself has no error taxonomy: every malformed input
//! is absorbed by normalization and the engine cannot fail. The only
//! fallible paths are loading configuration and binding the server, plus
//! the router's 404 fallback payload.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while loading [`crate::config::ServerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid YAML for the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// JSON error payload returned by the HTTP layer.
///
/// Only the router fallback produces one today; query endpoints always
/// return a well-formed envelope instead of an error.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(path: &str) -> Self {
        Self {
            code: "ROUTE_NOT_FOUND".to_string(),
            message: format!("No route for '{path}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_source_message() {
        let err = serde_yaml::from_str::<crate::config::ServerConfig>("port: [nope]")
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn not_found_payload_shape() {
        let body = serde_json::to_value(ErrorResponse::not_found("/nope")).unwrap();
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
        assert!(body["message"].as_str().unwrap().contains("/nope"));
    }
}
