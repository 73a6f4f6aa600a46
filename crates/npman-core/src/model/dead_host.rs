// Dead host (404 host) domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CertificateRef, Meta, enabled_default};

/// A 404 host: domain names answered with the instance's 404 page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadHost {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub owner_user_id: u64,
    pub domain_names: Vec<String>,
    pub certificate: CertificateRef,
    pub ssl_forced: bool,
    pub hsts_enabled: bool,
    pub hsts_subdomains: bool,
    pub http2_support: bool,
    pub advanced_config: String,
    pub enabled: bool,
    pub meta: Meta,
}

/// Desired state for creating or updating a dead host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadHostRequest {
    pub domain_names: Vec<String>,
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
    pub advanced_config: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Meta,
}

impl From<&DeadHost> for DeadHostRequest {
    fn from(host: &DeadHost) -> Self {
        Self {
            domain_names: host.domain_names.clone(),
            certificate: host.certificate,
            ssl_forced: host.ssl_forced,
            hsts_enabled: host.hsts_enabled,
            hsts_subdomains: host.hsts_subdomains,
            http2_support: host.http2_support,
            advanced_config: host.advanced_config.clone(),
            enabled: host.enabled,
            meta: host.meta.clone(),
        }
    }
}
