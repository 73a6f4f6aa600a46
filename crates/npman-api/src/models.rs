// Wire-format types for the NPM REST API.
//
// Response structs use `#[serde(default)]` liberally because the API is
// inconsistent about field presence across versions, and carry a flattened
// `extra` map for undocumented fields. Payload structs are the
// serialize-only create/update bodies: they omit server-computed fields
// (`id`, timestamps, owner) and never include `enabled` -- that flag is
// only reachable through the dedicated enable/disable endpoints.
//
// `certificate_id` is wire-polymorphic (absent, null, 0, integer, or the
// sentinel string "new") and is therefore carried as a raw
// `serde_json::Value`; normalization happens in npman-core's mapping layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::wire::{enabled_default, int_bool};

// ── Proxy Host ───────────────────────────────────────────────────────

/// Full proxy host object from `/api/nginx/proxy-hosts`.
///
/// Boolean fields are transmitted as 0/1 integers on this endpoint family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyHost {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub owner_user_id: u64,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub forward_host: String,
    #[serde(default)]
    pub forward_port: u16,
    #[serde(default)]
    pub forward_scheme: String,
    #[serde(default)]
    pub certificate_id: Value,
    #[serde(default, with = "int_bool")]
    pub ssl_forced: bool,
    #[serde(default, with = "int_bool")]
    pub hsts_enabled: bool,
    #[serde(default, with = "int_bool")]
    pub hsts_subdomains: bool,
    #[serde(default, with = "int_bool")]
    pub http2_support: bool,
    #[serde(default, with = "int_bool")]
    pub block_exploits: bool,
    #[serde(default, with = "int_bool")]
    pub caching_enabled: bool,
    #[serde(default, with = "int_bool")]
    pub allow_websocket_upgrade: bool,
    #[serde(default)]
    pub access_list_id: u64,
    #[serde(default)]
    pub advanced_config: String,
    #[serde(default = "enabled_default", with = "int_bool")]
    pub enabled: bool,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Nested custom-location block inside a proxy host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    #[serde(default)]
    pub forward_scheme: String,
    #[serde(default)]
    pub forward_host: String,
    #[serde(default)]
    pub forward_port: u16,
    #[serde(default)]
    pub advanced_config: String,
}

/// Create/update body for proxy hosts.
#[derive(Debug, Clone, Serialize)]
pub struct ProxyHostPayload {
    pub domain_names: Vec<String>,
    pub forward_host: String,
    pub forward_port: u16,
    pub forward_scheme: String,
    pub certificate_id: Value,
    #[serde(with = "int_bool")]
    pub ssl_forced: bool,
    #[serde(with = "int_bool")]
    pub hsts_enabled: bool,
    #[serde(with = "int_bool")]
    pub hsts_subdomains: bool,
    #[serde(with = "int_bool")]
    pub http2_support: bool,
    #[serde(with = "int_bool")]
    pub block_exploits: bool,
    #[serde(with = "int_bool")]
    pub caching_enabled: bool,
    #[serde(with = "int_bool")]
    pub allow_websocket_upgrade: bool,
    pub access_list_id: u64,
    pub advanced_config: String,
    pub locations: Vec<Location>,
    pub meta: Value,
}

// ── Redirection Host ─────────────────────────────────────────────────

/// Redirection host from `/api/nginx/redirection-hosts` (0/1 booleans).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectionHost {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub owner_user_id: u64,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub forward_http_code: u16,
    #[serde(default)]
    pub forward_scheme: String,
    #[serde(default)]
    pub forward_domain_name: String,
    #[serde(default, with = "int_bool")]
    pub preserve_path: bool,
    #[serde(default)]
    pub certificate_id: Value,
    #[serde(default, with = "int_bool")]
    pub ssl_forced: bool,
    #[serde(default, with = "int_bool")]
    pub hsts_enabled: bool,
    #[serde(default, with = "int_bool")]
    pub hsts_subdomains: bool,
    #[serde(default, with = "int_bool")]
    pub http2_support: bool,
    #[serde(default, with = "int_bool")]
    pub block_exploits: bool,
    #[serde(default)]
    pub advanced_config: String,
    #[serde(default = "enabled_default", with = "int_bool")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Create/update body for redirection hosts.
#[derive(Debug, Clone, Serialize)]
pub struct RedirectionHostPayload {
    pub domain_names: Vec<String>,
    pub forward_http_code: u16,
    pub forward_scheme: String,
    pub forward_domain_name: String,
    #[serde(with = "int_bool")]
    pub preserve_path: bool,
    pub certificate_id: Value,
    #[serde(with = "int_bool")]
    pub ssl_forced: bool,
    #[serde(with = "int_bool")]
    pub hsts_enabled: bool,
    #[serde(with = "int_bool")]
    pub hsts_subdomains: bool,
    #[serde(with = "int_bool")]
    pub http2_support: bool,
    #[serde(with = "int_bool")]
    pub block_exploits: bool,
    pub advanced_config: String,
    pub meta: Value,
}

// ── Dead Host (404 host) ─────────────────────────────────────────────

/// 404 host from `/api/nginx/dead-hosts` (0/1 booleans).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadHost {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub owner_user_id: u64,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub certificate_id: Value,
    #[serde(default, with = "int_bool")]
    pub ssl_forced: bool,
    #[serde(default, with = "int_bool")]
    pub hsts_enabled: bool,
    #[serde(default, with = "int_bool")]
    pub hsts_subdomains: bool,
    #[serde(default, with = "int_bool")]
    pub http2_support: bool,
    #[serde(default)]
    pub advanced_config: String,
    #[serde(default = "enabled_default", with = "int_bool")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Create/update body for dead hosts.
#[derive(Debug, Clone, Serialize)]
pub struct DeadHostPayload {
    pub domain_names: Vec<String>,
    pub certificate_id: Value,
    #[serde(with = "int_bool")]
    pub ssl_forced: bool,
    #[serde(with = "int_bool")]
    pub hsts_enabled: bool,
    #[serde(with = "int_bool")]
    pub hsts_subdomains: bool,
    #[serde(with = "int_bool")]
    pub http2_support: bool,
    pub advanced_config: String,
    pub meta: Value,
}

// ── Stream ───────────────────────────────────────────────────────────

/// TCP/UDP stream from `/api/nginx/streams`.
///
/// Unlike the host endpoints, streams use native JSON booleans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub owner_user_id: u64,
    #[serde(default)]
    pub incoming_port: u16,
    #[serde(default)]
    pub forwarding_host: String,
    #[serde(default)]
    pub forwarding_port: u16,
    #[serde(default)]
    pub tcp_forwarding: bool,
    #[serde(default)]
    pub udp_forwarding: bool,
    #[serde(default)]
    pub certificate_id: Value,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Create/update body for streams.
#[derive(Debug, Clone, Serialize)]
pub struct StreamPayload {
    pub incoming_port: u16,
    pub forwarding_host: String,
    pub forwarding_port: u16,
    pub tcp_forwarding: bool,
    pub udp_forwarding: bool,
    pub certificate_id: Value,
    pub meta: Value,
}

// ── Access List ──────────────────────────────────────────────────────

/// Access list from `/api/nginx/access-lists?expand=items,clients`.
///
/// Native JSON booleans. Authorization passwords are never returned;
/// each item instead carries a `hint` of the stored secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessList {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub owner_user_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub satisfy_any: bool,
    #[serde(default)]
    pub pass_auth: bool,
    #[serde(default)]
    pub proxy_host_count: u32,
    #[serde(default)]
    pub items: Vec<AccessListItem>,
    #[serde(default)]
    pub clients: Vec<AccessListClient>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Authorization entry as returned by the server (password withheld).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessListItem {
    #[serde(default)]
    pub username: String,
    /// Masked stand-in for the stored password.
    #[serde(default)]
    pub hint: String,
}

/// IP rule entry (`allow`/`deny` directive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessListClient {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub directive: String,
}

/// Create/update body for access lists. Items carry the plaintext
/// password on the way out; the server never echoes it back.
#[derive(Debug, Clone, Serialize)]
pub struct AccessListPayload {
    pub name: String,
    pub satisfy_any: bool,
    pub pass_auth: bool,
    pub items: Vec<AccessListItemPayload>,
    pub clients: Vec<AccessListClient>,
    pub meta: Value,
}

/// Outbound authorization entry.
#[derive(Debug, Clone, Serialize)]
pub struct AccessListItemPayload {
    pub username: String,
    pub password: String,
}

// ── Certificate ──────────────────────────────────────────────────────

/// Certificate from `/api/nginx/certificates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub owner_user_id: u64,
    /// `"letsencrypt"` or `"other"` (custom upload).
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub nice_name: String,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub expires_on: Option<String>,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Create body for certificates.
#[derive(Debug, Clone, Serialize)]
pub struct CertificatePayload {
    pub provider: String,
    pub nice_name: String,
    pub domain_names: Vec<String>,
    pub meta: Value,
}

// ── User ─────────────────────────────────────────────────────────────

/// User account from `/api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Option<Permissions>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Per-section permission levels (`hidden`, `view`, or `manage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub proxy_hosts: String,
    #[serde(default)]
    pub redirection_hosts: String,
    #[serde(default)]
    pub dead_hosts: String,
    #[serde(default)]
    pub streams: String,
    #[serde(default)]
    pub access_lists: String,
    #[serde(default)]
    pub certificates: String,
}

/// Create/update body for users.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub is_disabled: bool,
    pub roles: Vec<String>,
}

/// Body for `PUT /api/users/{id}/auth`.
#[derive(Debug, Clone, Serialize)]
pub struct UserAuthPayload {
    #[serde(rename = "type")]
    pub auth_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    pub secret: String,
}

// ── Setting ──────────────────────────────────────────────────────────

/// Named setting from `/api/settings`. Settings use string identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub meta: Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Update body for `PUT /api/settings/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct SettingPayload {
    pub value: Value,
    pub meta: Value,
}

// ── System ───────────────────────────────────────────────────────────

/// Health/version probe from `GET /api`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: Option<ApiVersion>,
}

/// Semantic version reported by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiVersion {
    #[serde(default)]
    pub major: u32,
    #[serde(default)]
    pub minor: u32,
    #[serde(default)]
    pub revision: u32,
}
