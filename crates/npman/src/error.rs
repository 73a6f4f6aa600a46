//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use npman_core::{CoreError, EntityKind};

/// Exit codes per error class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to instance at {url}")]
    #[diagnostic(
        code(npman::connection_failed),
        help(
            "Check that the instance is running and the URL is reachable.\n\
             URL: {url}\n\
             Try: npman system health -u {url}"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(npman::timeout),
        help("Increase the timeout with --timeout or check instance responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(npman::auth_failed),
        help(
            "Verify the identity (email) and password for this instance.\n\
             Run: npman config init"
        )
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(
        code(npman::not_found),
        help("Run: npman {list_command} to see what exists")
    )]
    NotFound {
        resource: String,
        identifier: String,
        list_command: String,
    },

    /// The server answered the request and said no -- distinct from a
    /// failed request.
    #[error("Server refused to {operation} {resource} '{identifier}'")]
    #[diagnostic(
        code(npman::rejected),
        help("The instance rejected the operation; it may be referenced elsewhere or locked.")
    )]
    Rejected {
        operation: String,
        resource: String,
        identifier: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error{}: {message}", status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    #[diagnostic(code(npman::api_error))]
    ApiError {
        status: Option<u16>,
        message: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(npman::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No instance configured")]
    #[diagnostic(
        code(npman::no_config),
        help(
            "Create a profile with: npman config init\n\
             Or pass --url/--identity (NPM_URL, NPM_IDENTITY, NPM_PASSWORD).\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(npman::config))]
    Config(#[from] npman_config::ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(npman::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(npman::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

/// The `npman <subcommand> list` invocation that enumerates a kind.
fn list_command(kind: EntityKind) -> String {
    match kind {
        EntityKind::ProxyHost => "proxy-hosts list",
        EntityKind::RedirectionHost => "redirection-hosts list",
        EntityKind::DeadHost => "dead-hosts list",
        EntityKind::Stream => "streams list",
        EntityKind::AccessList => "access-lists list",
        EntityKind::Certificate => "certificates list",
        EntityKind::User => "users list",
        EntityKind::Setting => "settings list",
    }
    .into()
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::NotFound { entity, identifier } => CliError::NotFound {
                resource: entity.to_string(),
                identifier,
                list_command: list_command(entity),
            },

            CoreError::Rejected {
                operation,
                entity,
                identifier,
            } => CliError::Rejected {
                operation,
                resource: entity.to_string(),
                identifier,
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Api { message, status } => CliError::ApiError { status, message },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::ApiError {
                status: None,
                message,
            },
        }
    }
}
