// Proxy host domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CertificateRef, Meta, enabled_default};

/// A reverse-proxied site: one or more domain names forwarded to an
/// upstream scheme/host/port, with optional TLS, caching, and custom
/// location blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyHost {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub owner_user_id: u64,
    pub domain_names: Vec<String>,
    pub forward_scheme: String,
    pub forward_host: String,
    pub forward_port: u16,
    pub certificate: CertificateRef,
    pub ssl_forced: bool,
    pub hsts_enabled: bool,
    pub hsts_subdomains: bool,
    pub http2_support: bool,
    pub block_exploits: bool,
    pub caching_enabled: bool,
    pub allow_websocket_upgrade: bool,
    /// Attached access list, if any (`0` on the wire means none).
    pub access_list_id: Option<u64>,
    pub advanced_config: String,
    pub enabled: bool,
    /// Custom location blocks, kept sorted by path.
    pub locations: Vec<Location>,
    pub meta: Meta,
}

/// A custom location block inside a proxy host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub forward_scheme: String,
    pub forward_host: String,
    pub forward_port: u16,
    #[serde(default)]
    pub advanced_config: String,
}

/// Desired state for creating or updating a proxy host.
///
/// Identity and server-computed fields are absent: the id travels in
/// the URL, and `enabled` is reconciled through the dedicated
/// enable/disable endpoints rather than the main payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyHostRequest {
    pub domain_names: Vec<String>,
    #[serde(default = "default_scheme")]
    pub forward_scheme: String,
    pub forward_host: String,
    pub forward_port: u16,
    #[serde(default)]
    pub certificate: CertificateRef,
    #[serde(default)]
    pub ssl_forced: bool,
    #[serde(default)]
    pub hsts_enabled: bool,
    #[serde(default)]
    pub hsts_subdomains: bool,
    #[serde(default)]
    pub http2_support: bool,
    #[serde(default)]
    pub block_exploits: bool,
    #[serde(default)]
    pub caching_enabled: bool,
    #[serde(default)]
    pub allow_websocket_upgrade: bool,
    #[serde(default)]
    pub access_list_id: Option<u64>,
    #[serde(default)]
    pub advanced_config: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub meta: Meta,
}

fn default_scheme() -> String {
    "http".into()
}

impl From<&ProxyHost> for ProxyHostRequest {
    /// Extract the desired state from a fetched entity, e.g. to edit
    /// one field and resubmit.
    fn from(host: &ProxyHost) -> Self {
        Self {
            domain_names: host.domain_names.clone(),
            forward_scheme: host.forward_scheme.clone(),
            forward_host: host.forward_host.clone(),
            forward_port: host.forward_port,
            certificate: host.certificate,
            ssl_forced: host.ssl_forced,
            hsts_enabled: host.hsts_enabled,
            hsts_subdomains: host.hsts_subdomains,
            http2_support: host.http2_support,
            block_exploits: host.block_exploits,
            caching_enabled: host.caching_enabled,
            allow_websocket_upgrade: host.allow_websocket_upgrade,
            access_list_id: host.access_list_id,
            advanced_config: host.advanced_config.clone(),
            enabled: host.enabled,
            locations: host.locations.clone(),
            meta: host.meta.clone(),
        }
    }
}
