// Redirection host domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CertificateRef, Meta, enabled_default};

/// An HTTP redirect: one or more domain names answered with a redirect
/// to a target domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectionHost {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub owner_user_id: u64,
    pub domain_names: Vec<String>,
    /// Redirect status code (300, 301, 302, ...).
    pub forward_http_code: u16,
    pub forward_scheme: String,
    pub forward_domain_name: String,
    pub preserve_path: bool,
    pub certificate: CertificateRef,
    pub ssl_forced: bool,
    pub hsts_enabled: bool,
    pub hsts_subdomains: bool,
    pub http2_support: bool,
    pub block_exploits: bool,
    pub advanced_config: String,
    pub enabled: bool,
    pub meta: Meta,
}

/// Desired state for creating or updating a redirection host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectionHostRequest {
    pub domain_names: Vec<String>,
    #[serde(default = "default_http_code")]
    pub forward_http_code: u16,
    #[serde(default = "default_redirect_scheme")]
    pub forward_scheme: String,
    pub forward_domain_name: String,
    #[serde(default)]
    pub preserve_path: bool,
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
    pub advanced_config: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Meta,
}

fn default_http_code() -> u16 {
    301
}

fn default_redirect_scheme() -> String {
    // "auto" keeps whatever scheme the request arrived on.
    "auto".into()
}

impl From<&RedirectionHost> for RedirectionHostRequest {
    fn from(host: &RedirectionHost) -> Self {
        Self {
            domain_names: host.domain_names.clone(),
            forward_http_code: host.forward_http_code,
            forward_scheme: host.forward_scheme.clone(),
            forward_domain_name: host.forward_domain_name.clone(),
            preserve_path: host.preserve_path,
            certificate: host.certificate,
            ssl_forced: host.ssl_forced,
            hsts_enabled: host.hsts_enabled,
            hsts_subdomains: host.hsts_subdomains,
            http2_support: host.http2_support,
            block_exploits: host.block_exploits,
            advanced_config: host.advanced_config.clone(),
            enabled: host.enabled,
            meta: host.meta.clone(),
        }
    }
}
