// Token-exchange authentication.
//
// NPM issues short-lived bearer tokens from `POST /api/tokens` in
// exchange for `{identity, secret}`. Empty credentials are rejected
// before any network call; server rejections propagate the HTTP status
// and body verbatim.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;

#[derive(Serialize)]
struct TokenRequest<'a> {
    identity: &'a str,
    secret: &'a str,
}

/// Response from `POST /api/tokens`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub expires: Option<String>,
}

/// Exchange credentials for a bearer token.
///
/// `http` is an unauthenticated bootstrap client; the caller builds the
/// authenticated client from the returned token.
pub(crate) async fn request_token(
    http: &reqwest::Client,
    base_url: &Url,
    identity: &str,
    secret: &SecretString,
) -> Result<TokenResponse, Error> {
    if identity.trim().is_empty() {
        return Err(Error::Authentication {
            message: "identity must not be empty".into(),
        });
    }
    if secret.expose_secret().is_empty() {
        return Err(Error::Authentication {
            message: "secret must not be empty".into(),
        });
    }

    let url = join_api(base_url, "tokens")?;
    debug!("requesting token at {url}");

    let body = TokenRequest {
        identity,
        secret: secret.expose_secret(),
    };

    let resp = http
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(Error::Transport)?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Authentication {
            message: format!("token request failed (HTTP {status}): {body}"),
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;
    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}

/// Join an `/api/{path}` route onto the instance base URL.
pub(crate) fn join_api(base_url: &Url, path: &str) -> Result<Url, Error> {
    let base = base_url.as_str().trim_end_matches('/');
    let full = if path.is_empty() {
        format!("{base}/api")
    } else {
        format!("{base}/api/{path}")
    };
    Url::parse(&full).map_err(Error::InvalidUrl)
}
