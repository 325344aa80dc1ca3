// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types returned by the Ride with GPS client.

/// Errors produced by client calls.
///
/// Every error reaches the caller unmodified; the client never retries.
#[derive(Debug, thiserror::Error)]
pub enum RwgpsError {
    /// Credentials were rejected, or the token endpoint answered without a token.
    #[error("Authentication failed (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },

    /// Non-2xx response to an authenticated call.
    #[error("Ride with GPS API error (HTTP {status}){}", format_message(.message))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Connection, DNS, timeout or body read failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response did not have the expected shape.
    #[error("Failed to parse field `{field}`: {reason}")]
    Parse { field: String, reason: String },

    /// Caller passed an argument the API cannot accept.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn format_message(message: &Option<String>) -> String {
    match message {
        Some(msg) => format!(": {}", msg),
        None => String::new(),
    }
}

impl RwgpsError {
    pub(crate) fn parse(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RwgpsError::Parse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RwgpsError::Authentication { status, .. } | RwgpsError::Api { status, .. } => {
                Some(*status)
            }
            RwgpsError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the server rejected the auth token (401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RwgpsError::Api { status: 401, .. })
    }

    /// True when the user may not access the resource (403).
    pub fn is_forbidden(&self) -> bool {
        matches!(self, RwgpsError::Api { status: 403, .. })
    }

    /// True when the requested trip, route or user does not exist (404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, RwgpsError::Api { status: 404, .. })
    }
}

/// Result type alias for client calls
pub type Result<T> = std::result::Result<T, RwgpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_with_message() {
        let err = RwgpsError::Api {
            status: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(err.to_string(), "Ride with GPS API error (HTTP 500): boom");
    }

    #[test]
    fn test_api_error_display_without_message() {
        let err = RwgpsError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "Ride with GPS API error (HTTP 502)");
    }

    #[test]
    fn test_parse_error_names_field() {
        let err = RwgpsError::parse("trips[2].distance", "expected a number");
        assert!(err.to_string().contains("trips[2].distance"));
        assert_eq!(err.status(), None);
    }
}
