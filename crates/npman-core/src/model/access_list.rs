// Access list domain types.
//
// The server never returns authorization passwords; fetched entries
// carry a masked hint instead, and locally-known secrets are
// re-attached by `convert::merge_auth_secrets`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Meta, enabled_default};

/// An access list: HTTP basic-auth entries plus allow/deny IP rules,
/// attachable to proxy hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessList {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub owner_user_id: u64,
    pub name: String,
    /// Pass when ANY rule matches (vs. requiring all).
    pub satisfy_any: bool,
    /// Forward the Authorization header to the upstream.
    pub pass_auth: bool,
    /// Server-computed count of proxy hosts using this list.
    pub proxy_host_count: u32,
    /// Authorization entries, kept sorted by username.
    pub items: Vec<AuthEntry>,
    /// IP rules, kept sorted by address.
    pub clients: Vec<ClientRule>,
    pub enabled: bool,
    pub meta: Meta,
}

/// One basic-auth entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEntry {
    pub username: String,
    /// The plaintext secret, when known locally. The server never
    /// echoes it back, so a freshly-fetched entry has `None` here until
    /// the secret-preservation merge re-attaches it.
    #[serde(default)]
    pub password: Option<String>,
    /// Masked stand-in for the stored secret, as returned by the server.
    #[serde(default)]
    pub hint: String,
}

/// One allow/deny IP rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRule {
    /// IP address or CIDR range.
    pub address: String,
    /// `"allow"` or `"deny"`.
    pub directive: String,
}

/// Desired state for creating or updating an access list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessListRequest {
    pub name: String,
    #[serde(default)]
    pub satisfy_any: bool,
    #[serde(default)]
    pub pass_auth: bool,
    #[serde(default)]
    pub items: Vec<AuthEntry>,
    #[serde(default)]
    pub clients: Vec<ClientRule>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Meta,
}

impl From<&AccessList> for AccessListRequest {
    fn from(list: &AccessList) -> Self {
        Self {
            name: list.name.clone(),
            satisfy_any: list.satisfy_any,
            pass_auth: list.pass_auth,
            items: list.items.clone(),
            clients: list.clients.clone(),
            enabled: list.enabled,
            meta: list.meta.clone(),
        }
    }
}
