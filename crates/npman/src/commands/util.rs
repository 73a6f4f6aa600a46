//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;

use serde::de::DeserializeOwned;

use npman_core::CertificateRef;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Refuses to block on a prompt when stdin is not a terminal.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON in {}: {e}", path.display()),
    })
}

/// Table cell for an enabled flag.
pub fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.into()
}

/// Table cell for a certificate reference.
pub fn cert_cell(cert: CertificateRef) -> String {
    match cert {
        CertificateRef::None => "-".into(),
        CertificateRef::Existing(id) => format!("#{id}"),
        CertificateRef::New => "new".into(),
    }
}

/// Table cell for an optional timestamp.
pub fn date_cell(ts: Option<chrono::DateTime<chrono::Utc>>) -> String {
    ts.map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d").to_string())
}
