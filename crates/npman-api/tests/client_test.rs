// Integration tests for `ApiClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use npman_api::models::{ProxyHostPayload, StreamPayload};
use npman_api::{ApiClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn sample_proxy_host(id: u64, enabled: u8) -> serde_json::Value {
    json!({
        "id": id,
        "created_on": "2024-03-01T10:00:00.000Z",
        "modified_on": "2024-03-02T11:30:00.000Z",
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
        "enabled": enabled,
        "locations": [],
        "meta": { "nginx_online": true }
    })
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_exchanges_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .and(body_json(json!({ "identity": "admin@example.com", "secret": "changeme" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc.def.ghi",
            "expires": "2024-03-02T00:00:00.000Z"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::connect(
        &server.uri(),
        "admin@example.com",
        &SecretString::from("changeme"),
        &TransportConfig::default(),
    )
    .await;

    assert!(client.is_ok(), "expected connect to succeed: {client:?}");
}

#[tokio::test]
async fn test_connect_rejected_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": { "message": "Invalid password" } })),
        )
        .mount(&server)
        .await;

    let result = ApiClient::connect(
        &server.uri(),
        "admin@example.com",
        &SecretString::from("wrong"),
        &TransportConfig::default(),
    )
    .await;

    match result {
        Err(Error::Authentication { message }) => {
            assert!(message.contains("401"), "status missing from: {message}");
            assert!(
                message.contains("Invalid password"),
                "body missing from: {message}"
            );
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_empty_credentials_fail_before_network() {
    // No mock server at all -- the empty-credential check must fire first.
    let result = ApiClient::connect(
        "http://127.0.0.1:1",
        "admin@example.com",
        &SecretString::from(""),
        &TransportConfig::default(),
    )
    .await;

    match result {
        Err(Error::Authentication { message }) => {
            assert!(message.contains("secret"), "unexpected message: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

// ── Typed reads ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_proxy_hosts_decodes_integer_booleans() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nginx/proxy-hosts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_proxy_host(3, 1)])),
        )
        .mount(&server)
        .await;

    let hosts = client.list_proxy_hosts().await.unwrap();

    assert_eq!(hosts.len(), 1);
    let host = &hosts[0];
    assert_eq!(host.id, 3);
    assert_eq!(host.domain_names, vec!["a.example.com"]);
    assert_eq!(host.forward_port, 8080);
    assert!(host.enabled);
    assert!(host.http2_support);
    assert!(!host.ssl_forced);
}

#[tokio::test]
async fn test_find_proxy_host_maps_404_to_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nginx/proxy-hosts/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let found = client.find_proxy_host(99).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_get_proxy_host_404_stays_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nginx/proxy-hosts/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": { "message": "Not found" } })),
        )
        .mount(&server)
        .await;

    let err = client.get_proxy_host(99).await.expect_err("expected error");
    assert!(err.is_not_found());

    match err {
        Error::Api { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_access_list_requests_expand() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nginx/access-lists/7"))
        .and(query_param("expand", "items,clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "office",
            "satisfy_any": true,
            "pass_auth": false,
            "items": [{ "username": "bob", "hint": "s*****" }],
            "clients": [{ "address": "10.0.0.0/8", "directive": "allow" }],
            "meta": {}
        })))
        .mount(&server)
        .await;

    let list = client.get_access_list(7).await.unwrap();

    assert_eq!(list.name, "office");
    assert!(list.satisfy_any);
    assert_eq!(list.items[0].username, "bob");
    assert_eq!(list.clients[0].directive, "allow");
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_proxy_host_sends_integer_booleans() {
    let (server, client) = setup().await;

    let payload = ProxyHostPayload {
        domain_names: vec!["a.example.com".into()],
        forward_host: "10.0.0.5".into(),
        forward_port: 8080,
        forward_scheme: "http".into(),
        certificate_id: json!(0),
        ssl_forced: false,
        hsts_enabled: false,
        hsts_subdomains: false,
        http2_support: true,
        block_exploits: true,
        caching_enabled: false,
        allow_websocket_upgrade: true,
        access_list_id: 0,
        advanced_config: String::new(),
        locations: Vec::new(),
        meta: json!({}),
    };

    // `enabled` must never appear in the body; flags go out as 0/1.
    let expected_body = json!({
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
        "locations": [],
        "meta": {}
    });

    Mock::given(method("POST"))
        .and(path("/api/nginx/proxy-hosts"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_proxy_host(42, 1)))
        .mount(&server)
        .await;

    let created = client.create_proxy_host(&payload).await.unwrap();

    assert_eq!(created.id, 42);
    assert!(created.enabled);
}

#[tokio::test]
async fn test_create_stream_sends_native_booleans() {
    let (server, client) = setup().await;

    let payload = StreamPayload {
        incoming_port: 2222,
        forwarding_host: "10.0.0.9".into(),
        forwarding_port: 22,
        tcp_forwarding: true,
        udp_forwarding: false,
        certificate_id: json!(0),
        meta: json!({}),
    };

    Mock::given(method("POST"))
        .and(path("/api/nginx/streams"))
        .and(body_json(json!({
            "incoming_port": 2222,
            "forwarding_host": "10.0.0.9",
            "forwarding_port": 22,
            "tcp_forwarding": true,
            "udp_forwarding": false,
            "certificate_id": 0,
            "meta": {}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "incoming_port": 2222,
            "forwarding_host": "10.0.0.9",
            "forwarding_port": 22,
            "tcp_forwarding": true,
            "udp_forwarding": false,
            "certificate_id": 0,
            "enabled": true,
            "meta": {}
        })))
        .mount(&server)
        .await;

    let created = client.create_stream(&payload).await.unwrap();

    assert_eq!(created.id, 5);
    assert!(created.tcp_forwarding);
    assert!(!created.udp_forwarding);
}

// ── Boolean action routes ───────────────────────────────────────────

#[tokio::test]
async fn test_enable_returns_success_flag() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/nginx/proxy-hosts/42/disable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    let ok = client.disable_proxy_host(42).await.unwrap();
    assert!(ok);
}

#[tokio::test]
async fn test_delete_false_body_is_ok_false_not_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/nginx/proxy-hosts/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .mount(&server)
        .await;

    // HTTP succeeded; the logical refusal is the caller's to classify.
    let ok = client.delete_proxy_host(42).await.unwrap();
    assert!(!ok);
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_api_error_preserves_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nginx/streams"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": { "message": "Internal error" } })),
        )
        .mount(&server)
        .await;

    let result = client.list_streams().await;

    match result {
        Err(Error::Api { status, message, body }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal error");
            assert!(body.contains("Internal error"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_401_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_users().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication, got: {result:?}"
    );
}

#[tokio::test]
async fn test_settings_roundtrip() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/settings/default-site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "default-site",
            "name": "Default Site",
            "description": "What to show when Nginx is hit with an unknown Host",
            "value": "congratulations",
            "meta": {}
        })))
        .mount(&server)
        .await;

    let setting = client.get_setting("default-site").await.unwrap();
    assert_eq!(setting.id, "default-site");
    assert_eq!(setting.value, json!("congratulations"));
}
