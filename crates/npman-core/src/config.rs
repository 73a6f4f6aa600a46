// Connection configuration for a managed NPM instance.
//
// Validated before any network activity: missing host or credentials is
// a configuration error, never a connection attempt.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::CoreError;

/// TLS verification behavior for the HTTP transport.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// Use the system certificate store.
    #[default]
    SystemDefaults,
    /// Trust a custom CA certificate (PEM file).
    CustomCa(PathBuf),
    /// Accept any certificate (self-signed installs).
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for npman_api::TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => npman_api::TlsMode::System,
            TlsVerification::CustomCa(path) => npman_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => npman_api::TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Everything needed to bootstrap a [`Manager`](crate::Manager).
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Instance base URL (e.g. `http://192.168.1.2:81`).
    pub url: Url,
    /// Login identity (email address).
    pub identity: String,
    /// Login secret.
    pub password: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl ManagerConfig {
    /// Pre-flight validation, run before any network call.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.url.host_str().is_none() {
            return Err(CoreError::Config {
                message: format!("url '{}' has no host", self.url),
            });
        }
        if self.identity.trim().is_empty() {
            return Err(CoreError::Config {
                message: "identity must not be empty".into(),
            });
        }
        if self.password.expose_secret().is_empty() {
            return Err(CoreError::Config {
                message: "password must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Derive the transport configuration for the API client.
    pub(crate) fn transport(&self) -> npman_api::TransportConfig {
        npman_api::TransportConfig {
            tls: (&self.tls).into(),
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ManagerConfig {
        ManagerConfig {
            url: Url::parse("http://192.168.1.2:81").expect("valid url"),
            identity: "admin@example.com".into(),
            password: SecretString::from("changeme"),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_identity_is_a_config_error() {
        let cfg = ManagerConfig {
            identity: "  ".into(),
            ..base_config()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config { .. })));
    }

    #[test]
    fn empty_password_is_a_config_error() {
        let cfg = ManagerConfig {
            password: SecretString::from(""),
            ..base_config()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config { .. })));
    }
}
