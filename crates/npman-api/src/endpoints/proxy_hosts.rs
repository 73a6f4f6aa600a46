// Proxy host endpoints
//
// CRUD at `/api/nginx/proxy-hosts`, plus the enable/disable side
// channel. The main update endpoint does not honor `enabled`; only the
// dedicated action routes toggle it.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{ProxyHost, ProxyHostPayload};

impl ApiClient {
    /// List all proxy hosts.
    ///
    /// `GET /api/nginx/proxy-hosts`
    pub async fn list_proxy_hosts(&self) -> Result<Vec<ProxyHost>, Error> {
        debug!("listing proxy hosts");
        self.get("nginx/proxy-hosts").await
    }

    /// Fetch a proxy host by id; any non-2xx response is an error.
    ///
    /// `GET /api/nginx/proxy-hosts/{id}`
    pub async fn get_proxy_host(&self, id: u64) -> Result<ProxyHost, Error> {
        self.get(&format!("nginx/proxy-hosts/{id}")).await
    }

    /// Fetch a proxy host by id, mapping 404 to `None`.
    pub async fn find_proxy_host(&self, id: u64) -> Result<Option<ProxyHost>, Error> {
        self.get_maybe(&format!("nginx/proxy-hosts/{id}"), &[]).await
    }

    /// Create a proxy host. The server assigns the id and reports its
    /// own default for `enabled`.
    ///
    /// `POST /api/nginx/proxy-hosts`
    pub async fn create_proxy_host(&self, payload: &ProxyHostPayload) -> Result<ProxyHost, Error> {
        debug!("creating proxy host");
        self.post("nginx/proxy-hosts", payload).await
    }

    /// Update a proxy host in place. The id travels in the URL only.
    ///
    /// `PUT /api/nginx/proxy-hosts/{id}`
    pub async fn update_proxy_host(
        &self,
        id: u64,
        payload: &ProxyHostPayload,
    ) -> Result<ProxyHost, Error> {
        debug!(id, "updating proxy host");
        self.put(&format!("nginx/proxy-hosts/{id}"), payload).await
    }

    /// Delete a proxy host. Returns the server's success flag; `false`
    /// means the server refused the deletion.
    ///
    /// `DELETE /api/nginx/proxy-hosts/{id}`
    pub async fn delete_proxy_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting proxy host");
        self.delete_action(&format!("nginx/proxy-hosts/{id}")).await
    }

    /// `POST /api/nginx/proxy-hosts/{id}/enable`
    pub async fn enable_proxy_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "enabling proxy host");
        self.post_action(&format!("nginx/proxy-hosts/{id}/enable"))
            .await
    }

    /// `POST /api/nginx/proxy-hosts/{id}/disable`
    pub async fn disable_proxy_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "disabling proxy host");
        self.post_action(&format!("nginx/proxy-hosts/{id}/disable"))
            .await
    }
}
