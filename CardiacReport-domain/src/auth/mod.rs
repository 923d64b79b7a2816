//! Authentication middleware for the CardiacReport API.
//!
//! The API is protected by a single static bearer token supplied through
//! the `API_TOKEN` environment variable. When the variable is unset the
//! service runs in local mode and requests pass through unauthenticated,
//! which is how the desktop front-end talks to a localhost backend.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

/// Name of the environment variable holding the expected bearer token
pub const API_TOKEN_ENV: &str = "API_TOKEN";

/// Resolved authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Expected bearer token; None disables authentication
    pub token: Option<String>,
}

impl AuthConfig {
    /// Read the token from the environment
    pub fn from_env() -> Self {
        let token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());
        Self { token }
    }

    /// True when requests must carry a bearer token
    pub fn enabled(&self) -> bool {
        self.token.is_some()
    }
}

/// Constant-time token comparison
fn tokens_match(expected: &str, presented: &str) -> bool {
    let expected = expected.as_bytes();
    let presented = presented.as_bytes();
    if expected.len() != presented.len() {
        return false;
    }
    expected
        .iter()
        .zip(presented)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message,
        })),
    )
        .into_response()
}

/// Extract the bearer token from an Authorization header value
fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .or_else(|| header_value.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Axum middleware enforcing the bearer token on protected routes
pub async fn auth_middleware(request: Request<Body>, next: Next) -> Response {
    let config = AuthConfig::from_env();

    let Some(expected) = config.token else {
        // Local mode: no token configured, no authentication.
        return next.run(request).await;
    };

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(header_value) = header_value else {
        warn!("Rejected request without Authorization header: {}", request.uri().path());
        return unauthorized("Missing Authorization header");
    };

    let Some(presented) = bearer_token(header_value) else {
        warn!("Rejected request with malformed Authorization header");
        return unauthorized("Expected a Bearer token");
    };

    if !tokens_match(&expected, presented) {
        warn!("Rejected request with invalid bearer token");
        return unauthorized("Invalid bearer token");
    }

    debug!("Bearer token accepted for {}", request.uri().path());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("secret", "secret"));
        assert!(!tokens_match("secret", "secres"));
        assert!(!tokens_match("secret", "secre"));
        assert!(!tokens_match("secret", ""));
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("Bearer   "), None);
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("abc123"), None);
    }

    #[test]
    fn test_auth_config_enabled() {
        let config = AuthConfig { token: None };
        assert!(!config.enabled());

        let config = AuthConfig {
            token: Some("secret".to_string()),
        };
        assert!(config.enabled());
    }
}
