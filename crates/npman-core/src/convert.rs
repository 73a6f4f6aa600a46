// ── Wire-to-domain type conversions ──
//
// Bridges raw `npman_api` wire types into canonical `npman_core::model`
// domain types, and builds the outbound create/update payloads. Each
// `From` impl normalizes the wire quirks: polymorphic certificate ids,
// zero-means-none foreign keys, stringly metadata, unordered nested
// collections.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use npman_api::models as wire;

use crate::model::{
    AccessList, AccessListRequest, AuthEntry, Certificate, CertificateRef, CertificateRequest,
    ClientRule, DeadHost, DeadHostRequest, Location, Meta, Permissions, ProxyHost,
    ProxyHostRequest, RedirectionHost, RedirectionHostRequest, Setting, SettingRequest, Stream,
    StreamRequest, SystemStatus, User, UserRequest,
};

// ── Helpers ──────────────────────────────────────────────────────────

/// Normalize the wire-polymorphic `certificate_id` value.
///
/// Absent, `null`, `0`, and non-numeric values all mean "no
/// certificate"; a positive integer (or numeric string) references an
/// existing certificate; the sentinel string `"new"` requests issuance.
pub fn certificate_ref(raw: &Value) -> CertificateRef {
    match raw {
        Value::Number(n) => match n.as_u64() {
            Some(0) | None => CertificateRef::None,
            Some(id) => CertificateRef::Existing(id),
        },
        Value::String(s) if s == "new" => CertificateRef::New,
        Value::String(s) => match s.parse::<u64>() {
            Ok(0) | Err(_) => CertificateRef::None,
            Ok(id) => CertificateRef::Existing(id),
        },
        _ => CertificateRef::None,
    }
}

/// Inverse of [`certificate_ref`]: the wire form of a certificate
/// reference.
pub fn certificate_wire(cert: &CertificateRef) -> Value {
    match cert {
        CertificateRef::None => Value::from(0),
        CertificateRef::Existing(id) => Value::from(*id),
        CertificateRef::New => Value::from("new"),
    }
}

/// Parse an NPM timestamp string (RFC 3339, with a space-separated
/// fallback), silently dropping unparseable values.
fn parse_timestamp(raw: &Option<String>) -> Option<DateTime<Utc>> {
    let s = raw.as_deref()?;
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|n| n.and_utc())
        })
}

/// Flatten a free-form JSON `meta` object into a string-keyed map.
///
/// String values pass through; every other JSON type renders via its
/// compact JSON text. Non-object values yield an empty map.
pub fn stringify_meta(raw: &Value) -> Meta {
    let Value::Object(map) = raw else {
        return Meta::new();
    };
    map.iter()
        .map(|(k, v)| {
            let s = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), s)
        })
        .collect()
}

/// Inverse of [`stringify_meta`]: a JSON object of string values.
fn meta_wire(meta: &Meta) -> Value {
    Value::Object(
        meta.iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect(),
    )
}

/// Wire foreign keys use `0` for "none".
fn zero_to_none(id: u64) -> Option<u64> {
    (id != 0).then_some(id)
}

// ── Proxy host ───────────────────────────────────────────────────────

impl From<wire::Location> for Location {
    fn from(l: wire::Location) -> Self {
        Location {
            path: l.path,
            forward_scheme: l.forward_scheme,
            forward_host: l.forward_host,
            forward_port: l.forward_port,
            advanced_config: l.advanced_config,
        }
    }
}

fn location_wire(l: &Location) -> wire::Location {
    wire::Location {
        path: l.path.clone(),
        forward_scheme: l.forward_scheme.clone(),
        forward_host: l.forward_host.clone(),
        forward_port: l.forward_port,
        advanced_config: l.advanced_config.clone(),
    }
}

impl From<wire::ProxyHost> for ProxyHost {
    fn from(h: wire::ProxyHost) -> Self {
        let mut locations: Vec<Location> = h.locations.into_iter().map(Location::from).collect();
        // The API reports nested collections in arbitrary order; sort so
        // repeated reads are byte-stable.
        locations.sort_by(|a, b| a.path.cmp(&b.path));

        ProxyHost {
            id: h.id,
            created_on: parse_timestamp(&h.created_on),
            modified_on: parse_timestamp(&h.modified_on),
            owner_user_id: h.owner_user_id,
            domain_names: h.domain_names,
            forward_scheme: h.forward_scheme,
            forward_host: h.forward_host,
            forward_port: h.forward_port,
            certificate: certificate_ref(&h.certificate_id),
            ssl_forced: h.ssl_forced,
            hsts_enabled: h.hsts_enabled,
            hsts_subdomains: h.hsts_subdomains,
            http2_support: h.http2_support,
            block_exploits: h.block_exploits,
            caching_enabled: h.caching_enabled,
            allow_websocket_upgrade: h.allow_websocket_upgrade,
            access_list_id: zero_to_none(h.access_list_id),
            advanced_config: h.advanced_config,
            enabled: h.enabled,
            locations,
            meta: stringify_meta(&h.meta),
        }
    }
}

/// Build the create/update body for a proxy host. The same payload
/// serves both verbs; identity travels in the URL and `enabled` goes
/// through the dedicated toggle endpoints.
pub fn proxy_host_payload(req: &ProxyHostRequest) -> wire::ProxyHostPayload {
    wire::ProxyHostPayload {
        domain_names: req.domain_names.clone(),
        forward_host: req.forward_host.clone(),
        forward_port: req.forward_port,
        forward_scheme: req.forward_scheme.clone(),
        certificate_id: certificate_wire(&req.certificate),
        ssl_forced: req.ssl_forced,
        hsts_enabled: req.hsts_enabled,
        hsts_subdomains: req.hsts_subdomains,
        http2_support: req.http2_support,
        block_exploits: req.block_exploits,
        caching_enabled: req.caching_enabled,
        allow_websocket_upgrade: req.allow_websocket_upgrade,
        access_list_id: req.access_list_id.unwrap_or(0),
        advanced_config: req.advanced_config.clone(),
        locations: req.locations.iter().map(location_wire).collect(),
        meta: meta_wire(&req.meta),
    }
}

// ── Redirection host ─────────────────────────────────────────────────

impl From<wire::RedirectionHost> for RedirectionHost {
    fn from(h: wire::RedirectionHost) -> Self {
        RedirectionHost {
            id: h.id,
            created_on: parse_timestamp(&h.created_on),
            modified_on: parse_timestamp(&h.modified_on),
            owner_user_id: h.owner_user_id,
            domain_names: h.domain_names,
            forward_http_code: h.forward_http_code,
            forward_scheme: h.forward_scheme,
            forward_domain_name: h.forward_domain_name,
            preserve_path: h.preserve_path,
            certificate: certificate_ref(&h.certificate_id),
            ssl_forced: h.ssl_forced,
            hsts_enabled: h.hsts_enabled,
            hsts_subdomains: h.hsts_subdomains,
            http2_support: h.http2_support,
            block_exploits: h.block_exploits,
            advanced_config: h.advanced_config,
            enabled: h.enabled,
            meta: stringify_meta(&h.meta),
        }
    }
}

pub fn redirection_host_payload(req: &RedirectionHostRequest) -> wire::RedirectionHostPayload {
    wire::RedirectionHostPayload {
        domain_names: req.domain_names.clone(),
        forward_http_code: req.forward_http_code,
        forward_scheme: req.forward_scheme.clone(),
        forward_domain_name: req.forward_domain_name.clone(),
        preserve_path: req.preserve_path,
        certificate_id: certificate_wire(&req.certificate),
        ssl_forced: req.ssl_forced,
        hsts_enabled: req.hsts_enabled,
        hsts_subdomains: req.hsts_subdomains,
        http2_support: req.http2_support,
        block_exploits: req.block_exploits,
        advanced_config: req.advanced_config.clone(),
        meta: meta_wire(&req.meta),
    }
}

// ── Dead host ────────────────────────────────────────────────────────

impl From<wire::DeadHost> for DeadHost {
    fn from(h: wire::DeadHost) -> Self {
        DeadHost {
            id: h.id,
            created_on: parse_timestamp(&h.created_on),
            modified_on: parse_timestamp(&h.modified_on),
            owner_user_id: h.owner_user_id,
            domain_names: h.domain_names,
            certificate: certificate_ref(&h.certificate_id),
            ssl_forced: h.ssl_forced,
            hsts_enabled: h.hsts_enabled,
            hsts_subdomains: h.hsts_subdomains,
            http2_support: h.http2_support,
            advanced_config: h.advanced_config,
            enabled: h.enabled,
            meta: stringify_meta(&h.meta),
        }
    }
}

pub fn dead_host_payload(req: &DeadHostRequest) -> wire::DeadHostPayload {
    wire::DeadHostPayload {
        domain_names: req.domain_names.clone(),
        certificate_id: certificate_wire(&req.certificate),
        ssl_forced: req.ssl_forced,
        hsts_enabled: req.hsts_enabled,
        hsts_subdomains: req.hsts_subdomains,
        http2_support: req.http2_support,
        advanced_config: req.advanced_config.clone(),
        meta: meta_wire(&req.meta),
    }
}

// ── Stream ───────────────────────────────────────────────────────────

impl From<wire::Stream> for Stream {
    fn from(s: wire::Stream) -> Self {
        Stream {
            id: s.id,
            created_on: parse_timestamp(&s.created_on),
            modified_on: parse_timestamp(&s.modified_on),
            owner_user_id: s.owner_user_id,
            incoming_port: s.incoming_port,
            forwarding_host: s.forwarding_host,
            forwarding_port: s.forwarding_port,
            tcp_forwarding: s.tcp_forwarding,
            udp_forwarding: s.udp_forwarding,
            certificate: certificate_ref(&s.certificate_id),
            enabled: s.enabled,
            meta: stringify_meta(&s.meta),
        }
    }
}

pub fn stream_payload(req: &StreamRequest) -> wire::StreamPayload {
    wire::StreamPayload {
        incoming_port: req.incoming_port,
        forwarding_host: req.forwarding_host.clone(),
        forwarding_port: req.forwarding_port,
        tcp_forwarding: req.tcp_forwarding,
        udp_forwarding: req.udp_forwarding,
        certificate_id: certificate_wire(&req.certificate),
        meta: meta_wire(&req.meta),
    }
}

// ── Access list ──────────────────────────────────────────────────────

impl From<wire::AccessList> for AccessList {
    fn from(l: wire::AccessList) -> Self {
        let mut items: Vec<AuthEntry> = l
            .items
            .into_iter()
            .map(|i| AuthEntry {
                username: i.username,
                password: None,
                hint: i.hint,
            })
            .collect();
        items.sort_by(|a, b| a.username.cmp(&b.username));

        let mut clients: Vec<ClientRule> = l
            .clients
            .into_iter()
            .map(|c| ClientRule {
                address: c.address,
                directive: c.directive,
            })
            .collect();
        clients.sort_by(|a, b| a.address.cmp(&b.address));

        AccessList {
            id: l.id,
            created_on: parse_timestamp(&l.created_on),
            modified_on: parse_timestamp(&l.modified_on),
            owner_user_id: l.owner_user_id,
            name: l.name,
            satisfy_any: l.satisfy_any,
            pass_auth: l.pass_auth,
            proxy_host_count: l.proxy_host_count,
            items,
            clients,
            enabled: l.enabled,
            meta: stringify_meta(&l.meta),
        }
    }
}

pub fn access_list_payload(req: &AccessListRequest) -> wire::AccessListPayload {
    wire::AccessListPayload {
        name: req.name.clone(),
        satisfy_any: req.satisfy_any,
        pass_auth: req.pass_auth,
        items: req
            .items
            .iter()
            .map(|i| wire::AccessListItemPayload {
                username: i.username.clone(),
                password: i.password.clone().unwrap_or_default(),
            })
            .collect(),
        clients: req
            .clients
            .iter()
            .map(|c| wire::AccessListClient {
                address: c.address.clone(),
                directive: c.directive.clone(),
            })
            .collect(),
        meta: meta_wire(&req.meta),
    }
}

/// Re-attach locally-known authorization secrets to freshly-fetched
/// entries.
///
/// The server never returns passwords, only a masked hint. A fresh
/// entry inherits a prior entry's password when the username matches
/// exactly AND the hint has the same character count as the known
/// password AND both start with the same character. This is a
/// best-effort correlation, not a guarantee: two rotations sharing
/// length and first character will keep the stale secret.
pub fn merge_auth_secrets(fresh: &mut [AuthEntry], prior: &[AuthEntry]) {
    for entry in fresh.iter_mut().filter(|e| e.password.is_none()) {
        entry.password = prior
            .iter()
            .filter(|p| p.username == entry.username)
            .find_map(|p| {
                let pw = p.password.as_ref()?;
                let matches = pw.chars().count() == entry.hint.chars().count()
                    && pw.chars().next() == entry.hint.chars().next();
                matches.then(|| pw.clone())
            });
    }
}

// ── Certificate ──────────────────────────────────────────────────────

impl From<wire::Certificate> for Certificate {
    fn from(c: wire::Certificate) -> Self {
        Certificate {
            id: c.id,
            created_on: parse_timestamp(&c.created_on),
            modified_on: parse_timestamp(&c.modified_on),
            owner_user_id: c.owner_user_id,
            provider: c.provider,
            nice_name: c.nice_name,
            domain_names: c.domain_names,
            expires_on: parse_timestamp(&c.expires_on),
            meta: stringify_meta(&c.meta),
        }
    }
}

pub fn certificate_payload(req: &CertificateRequest) -> wire::CertificatePayload {
    wire::CertificatePayload {
        provider: req.provider.clone(),
        nice_name: req.nice_name.clone(),
        domain_names: req.domain_names.clone(),
        meta: meta_wire(&req.meta),
    }
}

// ── User ─────────────────────────────────────────────────────────────

impl From<wire::Permissions> for Permissions {
    fn from(p: wire::Permissions) -> Self {
        let level = |s: &str| s.parse().unwrap_or_default();
        Permissions {
            visibility: p.visibility,
            proxy_hosts: level(&p.proxy_hosts),
            redirection_hosts: level(&p.redirection_hosts),
            dead_hosts: level(&p.dead_hosts),
            streams: level(&p.streams),
            access_lists: level(&p.access_lists),
            certificates: level(&p.certificates),
        }
    }
}

pub fn permissions_wire(p: &Permissions) -> wire::Permissions {
    wire::Permissions {
        visibility: p.visibility.clone(),
        proxy_hosts: p.proxy_hosts.to_string(),
        redirection_hosts: p.redirection_hosts.to_string(),
        dead_hosts: p.dead_hosts.to_string(),
        streams: p.streams.to_string(),
        access_lists: p.access_lists.to_string(),
        certificates: p.certificates.to_string(),
    }
}

impl From<wire::User> for User {
    fn from(u: wire::User) -> Self {
        User {
            id: u.id,
            created_on: parse_timestamp(&u.created_on),
            modified_on: parse_timestamp(&u.modified_on),
            name: u.name,
            nickname: u.nickname,
            email: u.email,
            is_disabled: u.is_disabled,
            roles: u.roles,
            permissions: u.permissions.map(Permissions::from),
        }
    }
}

pub fn user_payload(req: &UserRequest) -> wire::UserPayload {
    wire::UserPayload {
        name: req.name.clone(),
        nickname: req.nickname.clone(),
        email: req.email.clone(),
        is_disabled: req.is_disabled,
        roles: req.roles.clone(),
    }
}

// ── Setting ──────────────────────────────────────────────────────────

impl From<wire::Setting> for Setting {
    fn from(s: wire::Setting) -> Self {
        Setting {
            id: s.id,
            name: s.name,
            description: s.description,
            value: s.value,
            meta: stringify_meta(&s.meta),
        }
    }
}

pub fn setting_payload(req: &SettingRequest) -> wire::SettingPayload {
    wire::SettingPayload {
        value: req.value.clone(),
        meta: meta_wire(&req.meta),
    }
}

// ── System ───────────────────────────────────────────────────────────

impl From<wire::Health> for SystemStatus {
    fn from(h: wire::Health) -> Self {
        SystemStatus {
            status: h.status,
            version: h
                .version
                .map(|v| format!("{}.{}.{}", v.major, v.minor, v.revision)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    // ── certificate_id normalization ─────────────────────────────────

    #[test]
    fn certificate_ref_normalization_table() {
        assert_eq!(certificate_ref(&Value::Null), CertificateRef::None);
        assert_eq!(certificate_ref(&json!(0)), CertificateRef::None);
        assert_eq!(certificate_ref(&json!(7)), CertificateRef::Existing(7));
        assert_eq!(certificate_ref(&json!("new")), CertificateRef::New);
        assert_eq!(certificate_ref(&json!("12")), CertificateRef::Existing(12));
        assert_eq!(certificate_ref(&json!("garbage")), CertificateRef::None);
        assert_eq!(certificate_ref(&json!(-3)), CertificateRef::None);
        assert_eq!(certificate_ref(&json!({})), CertificateRef::None);
    }

    #[test]
    fn certificate_wire_round_trip() {
        for cert in [
            CertificateRef::None,
            CertificateRef::Existing(42),
            CertificateRef::New,
        ] {
            assert_eq!(certificate_ref(&certificate_wire(&cert)), cert);
        }
    }

    // ── meta stringification ─────────────────────────────────────────

    #[test]
    fn meta_values_are_stringified() {
        let meta = stringify_meta(&json!({
            "letsencrypt_agree": false,
            "nginx_online": true,
            "count": 3,
            "note": "hello",
            "nested": {"a": 1},
        }));
        assert_eq!(meta.get("letsencrypt_agree"), Some(&"false".to_owned()));
        assert_eq!(meta.get("count"), Some(&"3".to_owned()));
        assert_eq!(meta.get("note"), Some(&"hello".to_owned()));
        assert_eq!(meta.get("nested"), Some(&r#"{"a":1}"#.to_owned()));
    }

    #[test]
    fn non_object_meta_is_empty() {
        assert!(stringify_meta(&Value::Null).is_empty());
        assert!(stringify_meta(&json!([1, 2])).is_empty());
    }

    // ── timestamps ───────────────────────────────────────────────────

    #[test]
    fn timestamps_parse_both_shapes() {
        let rfc = parse_timestamp(&Some("2024-03-01T08:30:00.000Z".into()));
        assert!(rfc.is_some());
        let spaced = parse_timestamp(&Some("2024-03-01 08:30:00".into()));
        assert!(spaced.is_some());
        assert_eq!(parse_timestamp(&Some("not a date".into())), None);
        assert_eq!(parse_timestamp(&None), None);
    }

    // ── proxy host mapping ───────────────────────────────────────────

    fn sample_proxy_host_json() -> Value {
        json!({
            "id": 42,
            "created_on": "2024-03-01T08:30:00.000Z",
            "modified_on": "2024-03-02T09:00:00.000Z",
            "owner_user_id": 1,
            "domain_names": ["a.example.com"],
            "forward_host": "10.0.0.5",
            "forward_port": 8080,
            "forward_scheme": "http",
            "certificate_id": 0,
            "ssl_forced": 0,
            "hsts_enabled": 0,
            "hsts_subdomains": 0,
            "http2_support": 1,
            "block_exploits": 1,
            "caching_enabled": 0,
            "allow_websocket_upgrade": 1,
            "access_list_id": 0,
            "advanced_config": "",
            "enabled": 1,
            "locations": [
                {"path": "/b", "forward_scheme": "http", "forward_host": "10.0.0.6", "forward_port": 81, "advanced_config": ""},
                {"path": "/a", "forward_scheme": "http", "forward_host": "10.0.0.7", "forward_port": 82, "advanced_config": ""}
            ],
            "meta": {"nginx_online": true}
        })
    }

    #[test]
    fn proxy_host_load_normalizes_wire_quirks() {
        let w: wire::ProxyHost =
            serde_json::from_value(sample_proxy_host_json()).expect("decode wire");
        let host = ProxyHost::from(w);

        assert_eq!(host.id, 42);
        assert_eq!(host.certificate, CertificateRef::None);
        assert_eq!(host.access_list_id, None);
        assert!(host.http2_support);
        assert!(!host.ssl_forced);
        assert!(host.enabled);
        // Locations come back sorted by path.
        let paths: Vec<&str> = host.locations.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, ["/a", "/b"]);
        assert_eq!(host.meta.get("nginx_online"), Some(&"true".to_owned()));
    }

    #[test]
    fn proxy_host_round_trip_preserves_settable_fields() {
        let w: wire::ProxyHost =
            serde_json::from_value(sample_proxy_host_json()).expect("decode wire");
        let original = ProxyHost::from(w);

        // Domain entity -> desired state -> outbound payload -> back
        // through the wire decoder: every caller-settable field must
        // survive unchanged.
        let request = ProxyHostRequest::from(&original);
        let payload = proxy_host_payload(&request);
        let mut round = serde_json::to_value(&payload).expect("encode payload");
        round["id"] = json!(original.id);
        round["enabled"] = json!(1);
        let reloaded =
            ProxyHost::from(serde_json::from_value::<wire::ProxyHost>(round).expect("re-decode"));

        assert_eq!(reloaded.domain_names, original.domain_names);
        assert_eq!(reloaded.forward_host, original.forward_host);
        assert_eq!(reloaded.forward_port, original.forward_port);
        assert_eq!(reloaded.forward_scheme, original.forward_scheme);
        assert_eq!(reloaded.certificate, original.certificate);
        assert_eq!(reloaded.ssl_forced, original.ssl_forced);
        assert_eq!(reloaded.http2_support, original.http2_support);
        assert_eq!(reloaded.block_exploits, original.block_exploits);
        assert_eq!(reloaded.access_list_id, original.access_list_id);
        assert_eq!(reloaded.locations, original.locations);
        assert_eq!(reloaded.meta, original.meta);
    }

    // ── access list mapping ──────────────────────────────────────────

    #[test]
    fn access_list_collections_sort_deterministically() {
        let w: wire::AccessList = serde_json::from_value(json!({
            "id": 3,
            "name": "office",
            "satisfy_any": true,
            "pass_auth": false,
            "items": [
                {"username": "zoe", "hint": "a***"},
                {"username": "bob", "hint": "b***"}
            ],
            "clients": [
                {"address": "192.168.2.0/24", "directive": "allow"},
                {"address": "10.0.0.0/8", "directive": "deny"}
            ],
            "enabled": true,
            "meta": {}
        }))
        .expect("decode wire");
        let list = AccessList::from(w);

        let users: Vec<&str> = list.items.iter().map(|i| i.username.as_str()).collect();
        assert_eq!(users, ["bob", "zoe"]);
        let addrs: Vec<&str> = list.clients.iter().map(|c| c.address.as_str()).collect();
        assert_eq!(addrs, ["10.0.0.0/8", "192.168.2.0/24"]);
    }

    // ── secret preservation ──────────────────────────────────────────

    fn entry(username: &str, password: Option<&str>, hint: &str) -> AuthEntry {
        AuthEntry {
            username: username.into(),
            password: password.map(Into::into),
            hint: hint.into(),
        }
    }

    #[test]
    fn known_secret_survives_refresh() {
        let prior = vec![entry("bob", Some("s3cret"), "")];
        // Same length, same first character: the merge re-attaches it.
        let mut fresh = vec![entry("bob", None, "s3cret")];
        merge_auth_secrets(&mut fresh, &prior);
        assert_eq!(fresh[0].password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn mismatched_hint_leaves_secret_unknown() {
        let prior = vec![entry("bob", Some("s3cret"), "")];

        // Wrong length.
        let mut fresh = vec![entry("bob", None, "s3cret!!")];
        merge_auth_secrets(&mut fresh, &prior);
        assert_eq!(fresh[0].password, None);

        // Wrong first character.
        let mut fresh = vec![entry("bob", None, "x3cret")];
        merge_auth_secrets(&mut fresh, &prior);
        assert_eq!(fresh[0].password, None);

        // Wrong username.
        let mut fresh = vec![entry("alice", None, "s3cret")];
        merge_auth_secrets(&mut fresh, &prior);
        assert_eq!(fresh[0].password, None);
    }

    #[test]
    fn merge_never_overwrites_known_secrets() {
        let prior = vec![entry("bob", Some("old-pw"), "")];
        let mut fresh = vec![entry("bob", Some("new-pw"), "old-pw")];
        merge_auth_secrets(&mut fresh, &prior);
        assert_eq!(fresh[0].password.as_deref(), Some("new-pw"));
    }

    // ── permissions ──────────────────────────────────────────────────

    #[test]
    fn permission_levels_round_trip_through_wire_strings() {
        use crate::model::PermissionLevel;

        let w = wire::Permissions {
            visibility: "all".into(),
            proxy_hosts: "manage".into(),
            redirection_hosts: "view".into(),
            dead_hosts: "hidden".into(),
            streams: "bogus".into(),
            access_lists: "manage".into(),
            certificates: "view".into(),
        };
        let perms = Permissions::from(w);
        assert_eq!(perms.proxy_hosts, PermissionLevel::Manage);
        assert_eq!(perms.redirection_hosts, PermissionLevel::View);
        // Unknown levels degrade to hidden.
        assert_eq!(perms.streams, PermissionLevel::Hidden);

        let back = permissions_wire(&perms);
        assert_eq!(back.proxy_hosts, "manage");
        assert_eq!(back.dead_hosts, "hidden");
    }

    // ── system ───────────────────────────────────────────────────────

    #[test]
    fn health_version_formats() {
        let h: wire::Health = serde_json::from_value(json!({
            "status": "OK",
            "version": {"major": 2, "minor": 11, "revision": 3}
        }))
        .expect("decode health");
        let status = SystemStatus::from(h);
        assert_eq!(status.status, "OK");
        assert_eq!(status.version.as_deref(), Some("2.11.3"));
    }
}
