use thiserror::Error;

/// Top-level error type for the `npman-api` crate.
///
/// Covers every failure mode of the HTTP layer: token acquisition,
/// transport, non-2xx API responses, and payload decoding.
/// `npman-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token exchange failed (empty or rejected credentials), or the
    /// server answered 401/403 to an authenticated request.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response. Carries the raw status and body verbatim --
    /// this crate defines no retry policy, callers see exactly what
    /// the server said.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error is a 404-class "resource absent"
    /// response. Fetch paths use this to map missing entities to `None`
    /// instead of an error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this error indicates rejected or expired
    /// credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
