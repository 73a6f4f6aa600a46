// Redirection host endpoints
//
// Same route shape as proxy hosts, under `/api/nginx/redirection-hosts`.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{RedirectionHost, RedirectionHostPayload};

impl ApiClient {
    /// `GET /api/nginx/redirection-hosts`
    pub async fn list_redirection_hosts(&self) -> Result<Vec<RedirectionHost>, Error> {
        debug!("listing redirection hosts");
        self.get("nginx/redirection-hosts").await
    }

    /// `GET /api/nginx/redirection-hosts/{id}`
    pub async fn get_redirection_host(&self, id: u64) -> Result<RedirectionHost, Error> {
        self.get(&format!("nginx/redirection-hosts/{id}")).await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_redirection_host(&self, id: u64) -> Result<Option<RedirectionHost>, Error> {
        self.get_maybe(&format!("nginx/redirection-hosts/{id}"), &[])
            .await
    }

    /// `POST /api/nginx/redirection-hosts`
    pub async fn create_redirection_host(
        &self,
        payload: &RedirectionHostPayload,
    ) -> Result<RedirectionHost, Error> {
        debug!("creating redirection host");
        self.post("nginx/redirection-hosts", payload).await
    }

    /// `PUT /api/nginx/redirection-hosts/{id}`
    pub async fn update_redirection_host(
        &self,
        id: u64,
        payload: &RedirectionHostPayload,
    ) -> Result<RedirectionHost, Error> {
        debug!(id, "updating redirection host");
        self.put(&format!("nginx/redirection-hosts/{id}"), payload)
            .await
    }

    /// `DELETE /api/nginx/redirection-hosts/{id}`
    pub async fn delete_redirection_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting redirection host");
        self.delete_action(&format!("nginx/redirection-hosts/{id}"))
            .await
    }

    /// `POST /api/nginx/redirection-hosts/{id}/enable`
    pub async fn enable_redirection_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "enabling redirection host");
        self.post_action(&format!("nginx/redirection-hosts/{id}/enable"))
            .await
    }

    /// `POST /api/nginx/redirection-hosts/{id}/disable`
    pub async fn disable_redirection_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "disabling redirection host");
        self.post_action(&format!("nginx/redirection-hosts/{id}/disable"))
            .await
    }
}
