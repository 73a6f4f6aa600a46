// NPM HTTP client.
//
// Wraps `reqwest::Client` with bearer authentication, `/api/...` URL
// construction, and response classification. All endpoint modules
// (proxy hosts, streams, etc.) are implemented as inherent methods via
// separate files to keep this module focused on transport mechanics.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{self, TokenResponse};
use crate::error::Error;
use crate::transport::TransportConfig;

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: ErrorDetail,
}

#[derive(serde::Deserialize, Default)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Authenticated async client for the NPM REST API.
///
/// Constructed once at bootstrap and handed by reference to every
/// consumer. The bearer token lives in the underlying client's default
/// headers and is never mutated after construction, so concurrent reuse
/// across operations is safe.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Authenticate against `base_url` and build a ready-to-use client.
    ///
    /// Performs the one-time `POST /api/tokens` exchange with a
    /// bootstrap client, then bakes the returned token into the
    /// authenticated client's default headers.
    pub async fn connect(
        base_url: &str,
        identity: &str,
        secret: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        let bootstrap = transport.build_client()?;
        let token: TokenResponse =
            auth::request_token(&bootstrap, &base_url, identity, secret).await?;
        Self::from_token(base_url, &token.token, transport)
    }

    /// Build a client from an already-acquired bearer token.
    pub fn from_token(
        base_url: Url,
        token: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            Error::Authentication {
                message: format!("invalid token header value: {e}"),
            }
        })?;
        bearer.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = transport.build_client_with_headers(headers)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The instance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an `/api/{path}` route.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        auth::join_api(&self.base_url, path).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the typed response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        self.handle_response(resp).await
    }

    /// GET with query parameters.
    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_response(resp).await
    }

    /// Fetch-by-id variant: a 404 maps to `Ok(None)` ("resource absent")
    /// rather than an error. Only fetch paths get this special-casing.
    pub(crate) async fn get_maybe<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, Error> {
        let url = self.api_url(path);
        debug!("GET {url} params={params:?}");

        let mut req = self.http.get(url);
        if !params.is_empty() {
            req = req.query(params);
        }
        let resp = req.send().await.map_err(Error::Transport)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.handle_response(resp).await.map(Some)
    }

    /// Send a POST request with a JSON body and decode the response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_response(resp).await
    }

    /// Send a PUT request with a JSON body and decode the response.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_response(resp).await
    }

    /// Send a POST to an action route (`enable`/`disable`) and decode
    /// the boolean success flag the API answers with. A `false` flag is
    /// NOT an error at this layer -- the reconciliation layer decides.
    pub(crate) async fn post_action(&self, path: &str) -> Result<bool, Error> {
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_bool(resp).await
    }

    /// Send a DELETE request and decode the boolean success flag.
    pub(crate) async fn delete_action(&self, path: &str) -> Result<bool, Error> {
        let url = self.api_url(path);
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_bool(resp).await
    }

    /// Send a PUT with a JSON body and decode the boolean success flag.
    pub(crate) async fn put_action<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<bool, Error> {
        let url = self.api_url(path);
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_bool(resp).await
    }

    /// Send a POST with a multipart form (certificate upload/validate).
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("POST {url} (multipart)");

        let resp = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(Error::Transport)?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::classify_error(status, resp).await)
        }
    }

    async fn handle_bool(&self, resp: reqwest::Response) -> Result<bool, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(Error::Transport)?;
            serde_json::from_str::<bool>(body.trim()).map_err(|e| Error::Deserialization {
                message: format!("expected boolean body: {e}"),
                body,
            })
        } else {
            Err(Self::classify_error(status, resp).await)
        }
    }

    /// Map a non-2xx response to an error, preserving the raw status
    /// and body. 401/403 are credential failures; everything else is a
    /// plain API error (a 404 stays an error here -- only the
    /// `get_maybe` fetch path treats it as "absent").
    async fn classify_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let body = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Error::Authentication {
                message: format!("request rejected (HTTP {status}): {body}"),
            };
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.error.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_owned()
            });

        Error::Api {
            status: status.as_u16(),
            message,
            body,
        }
    }
}
