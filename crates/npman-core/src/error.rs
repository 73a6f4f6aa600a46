// ── Core error types ──
//
// User-facing errors from npman-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<npman_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

use crate::model::EntityKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {identifier}")]
    NotFound {
        entity: EntityKind,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    /// The server answered 2xx but reported `false` for an
    /// enable/disable/delete action. Distinct from a failed request:
    /// the server heard us and said no.
    #[error("Server refused to {operation} {entity} {identifier}")]
    Rejected {
        operation: String,
        entity: EntityKind,
        identifier: String,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<npman_api::Error> for CoreError {
    fn from(err: npman_api::Error) -> Self {
        match err {
            npman_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            npman_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            npman_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            npman_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            npman_api::Error::Api {
                status,
                message,
                body: _,
            } => CoreError::Api {
                message,
                status: Some(status),
            },
            npman_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
