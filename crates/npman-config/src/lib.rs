//! Configuration for the npman CLI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `npman_core::ManagerConfig`. The CLI layers its
//! flag overrides on top of what this crate resolves.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use npman_core::{ManagerConfig, TlsVerification};

/// Keyring service name for stored passwords.
pub const KEYRING_SERVICE: &str = "npman";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no password configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named instance profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    10
}

/// A named NPM instance profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Instance base URL (e.g., "http://192.168.1.2:81").
    pub url: String,

    /// Login identity (email address).
    pub identity: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept self-signed TLS certificates.
    pub insecure: Option<bool>,

    /// Override request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "npman", "npman").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("npman");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from defaults, file, and `NPM_*` environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("NPM_CONFIG_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the login identity: profile value, then `NPM_IDENTITY`.
pub fn resolve_identity(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .identity
        .clone()
        .or_else(|| std::env::var("NPM_IDENTITY").ok())
        .ok_or_else(|| ConfigError::Validation {
            field: "identity".into(),
            reason: format!("not set for profile '{profile_name}' (or NPM_IDENTITY)"),
        })
}

/// Resolve the password through the credential chain: the env var named
/// by `password_env`, then `NPM_PASSWORD`, then the system keyring,
/// then the plaintext profile value.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(val) = std::env::var("NPM_PASSWORD") {
        return Ok(SecretString::from(val));
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a password in the system keyring for a profile.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .and_then(|entry| entry.set_password(password))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Profile translation ─────────────────────────────────────────────

/// Build a `ManagerConfig` from a profile -- no CLI flag overrides.
pub fn profile_to_manager_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ManagerConfig, ConfigError> {
    let url: url::Url = profile.url.parse().map_err(|_| ConfigError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {}", profile.url),
    })?;

    let identity = resolve_identity(profile, profile_name)?;
    let password = resolve_password(profile, profile_name)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ManagerConfig {
        url,
        identity,
        password,
        tls,
        timeout,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn profile(password: Option<&str>, password_env: Option<&str>) -> Profile {
        Profile {
            url: "http://192.168.1.2:81".into(),
            identity: Some("admin@example.com".into()),
            password: password.map(Into::into),
            password_env: password_env.map(Into::into),
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }

    #[test]
    fn named_env_var_wins_over_everything() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MY_NPM_PW", "from-named-env");
            jail.set_env("NPM_PASSWORD", "from-npm-password");
            let p = profile(Some("from-plaintext"), Some("MY_NPM_PW"));
            let pw = resolve_password(&p, "default").expect("resolve");
            assert_eq!(pw.expose_secret(), "from-named-env");
            Ok(())
        });
    }

    #[test]
    fn npm_password_env_beats_plaintext() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NPM_PASSWORD", "from-npm-password");
            let p = profile(Some("from-plaintext"), None);
            let pw = resolve_password(&p, "default").expect("resolve");
            assert_eq!(pw.expose_secret(), "from-npm-password");
            Ok(())
        });
    }

    #[test]
    fn plaintext_is_the_last_resort() {
        figment::Jail::expect_with(|_jail| {
            let p = profile(Some("from-plaintext"), None);
            let pw = resolve_password(&p, "default").expect("resolve");
            assert_eq!(pw.expose_secret(), "from-plaintext");
            Ok(())
        });
    }

    #[test]
    fn missing_password_is_a_credentials_error() {
        figment::Jail::expect_with(|_jail| {
            let p = profile(None, None);
            assert!(matches!(
                resolve_password(&p, "default"),
                Err(ConfigError::NoCredentials { .. })
            ));
            Ok(())
        });
    }

    #[test]
    fn identity_falls_back_to_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NPM_IDENTITY", "env@example.com");
            let mut p = profile(Some("pw"), None);
            p.identity = None;
            let id = resolve_identity(&p, "default").expect("resolve");
            assert_eq!(id, "env@example.com");
            Ok(())
        });
    }

    #[test]
    fn profile_translates_with_defaults() {
        figment::Jail::expect_with(|_jail| {
            let p = profile(Some("pw"), None);
            let cfg = profile_to_manager_config(&p, "default", &Defaults::default())
                .expect("translate");
            assert_eq!(cfg.url.as_str(), "http://192.168.1.2:81/");
            assert_eq!(cfg.identity, "admin@example.com");
            assert_eq!(cfg.timeout, Duration::from_secs(10));
            assert!(matches!(cfg.tls, TlsVerification::SystemDefaults));
            Ok(())
        });
    }

    #[test]
    fn invalid_url_is_a_validation_error() {
        let mut p = profile(Some("pw"), None);
        p.url = "not a url".into();
        assert!(matches!(
            profile_to_manager_config(&p, "default", &Defaults::default()),
            Err(ConfigError::Validation { .. })
        ));
    }
}
