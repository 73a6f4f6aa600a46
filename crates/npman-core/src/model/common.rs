// Shared model pieces: entity kinds, certificate references, metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The kinds of entities this crate manages.
///
/// Display form is the human-readable name used in error messages
/// ("Proxy Host not found: 42").
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "title_case")]
pub enum EntityKind {
    ProxyHost,
    RedirectionHost,
    DeadHost,
    Stream,
    AccessList,
    Certificate,
    User,
    Setting,
}

/// Normalized form of the wire-polymorphic `certificate_id` value.
///
/// On the wire this field may be absent, `null`, `0`, a positive
/// integer, or the sentinel string `"new"`. The decoder collapses
/// absent/null/0/non-numeric to [`None`](Self::None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateRef {
    /// No certificate attached.
    #[default]
    None,
    /// An existing certificate, by server-assigned id.
    Existing(u64),
    /// Request issuance of a new certificate alongside the host.
    New,
}

impl CertificateRef {
    /// The referenced certificate id, if any.
    pub fn existing_id(&self) -> Option<u64> {
        match self {
            Self::Existing(id) => Some(*id),
            Self::None | Self::New => None,
        }
    }
}

/// Free-form entity metadata.
///
/// String-keyed with all values stringified; a BTreeMap keeps iteration
/// (and therefore state write-back) deterministic.
pub type Meta = BTreeMap<String, String>;

/// Instance health/version as reported by the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStatus {
    pub status: String,
    /// `"major.minor.revision"`, when the instance reports one.
    pub version: Option<String>,
}

/// Serde default for request `enabled` fields.
pub(crate) fn enabled_default() -> bool {
    true
}
