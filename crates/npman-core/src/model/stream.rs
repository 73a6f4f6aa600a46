// Stream (TCP/UDP forward) domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CertificateRef, Meta, enabled_default};

/// A raw TCP/UDP port forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub owner_user_id: u64,
    pub incoming_port: u16,
    pub forwarding_host: String,
    pub forwarding_port: u16,
    pub tcp_forwarding: bool,
    pub udp_forwarding: bool,
    pub certificate: CertificateRef,
    pub enabled: bool,
    pub meta: Meta,
}

/// Desired state for creating or updating a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRequest {
    pub incoming_port: u16,
    pub forwarding_host: String,
    pub forwarding_port: u16,
    #[serde(default = "enabled_default")]
    pub tcp_forwarding: bool,
    #[serde(default)]
    pub udp_forwarding: bool,
    #[serde(default)]
    pub certificate: CertificateRef,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Meta,
}

impl From<&Stream> for StreamRequest {
    fn from(stream: &Stream) -> Self {
        Self {
            incoming_port: stream.incoming_port,
            forwarding_host: stream.forwarding_host.clone(),
            forwarding_port: stream.forwarding_port,
            tcp_forwarding: stream.tcp_forwarding,
            udp_forwarding: stream.udp_forwarding,
            certificate: stream.certificate,
            enabled: stream.enabled,
            meta: stream.meta.clone(),
        }
    }
}
