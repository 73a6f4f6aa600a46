// Certificate domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Meta;

/// A TLS certificate record, either Let's Encrypt managed or a custom
/// upload. No enable/disable side channel exists for certificates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub owner_user_id: u64,
    /// `"letsencrypt"` or `"other"` (custom upload).
    pub provider: String,
    pub nice_name: String,
    pub domain_names: Vec<String>,
    pub expires_on: Option<DateTime<Utc>>,
    pub meta: Meta,
}

/// Desired state for creating a certificate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRequest {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub nice_name: String,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub meta: Meta,
}

fn default_provider() -> String {
    "other".into()
}

impl From<&Certificate> for CertificateRequest {
    fn from(cert: &Certificate) -> Self {
        Self {
            provider: cert.provider.clone(),
            nice_name: cert.nice_name.clone(),
            domain_names: cert.domain_names.clone(),
            meta: cert.meta.clone(),
        }
    }
}
