// Dead host (404 host) endpoints
//
// Same route shape as proxy hosts, under `/api/nginx/dead-hosts`.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{DeadHost, DeadHostPayload};

impl ApiClient {
    /// `GET /api/nginx/dead-hosts`
    pub async fn list_dead_hosts(&self) -> Result<Vec<DeadHost>, Error> {
        debug!("listing dead hosts");
        self.get("nginx/dead-hosts").await
    }

    /// `GET /api/nginx/dead-hosts/{id}`
    pub async fn get_dead_host(&self, id: u64) -> Result<DeadHost, Error> {
        self.get(&format!("nginx/dead-hosts/{id}")).await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_dead_host(&self, id: u64) -> Result<Option<DeadHost>, Error> {
        self.get_maybe(&format!("nginx/dead-hosts/{id}"), &[]).await
    }

    /// `POST /api/nginx/dead-hosts`
    pub async fn create_dead_host(&self, payload: &DeadHostPayload) -> Result<DeadHost, Error> {
        debug!("creating dead host");
        self.post("nginx/dead-hosts", payload).await
    }

    /// `PUT /api/nginx/dead-hosts/{id}`
    pub async fn update_dead_host(
        &self,
        id: u64,
        payload: &DeadHostPayload,
    ) -> Result<DeadHost, Error> {
        debug!(id, "updating dead host");
        self.put(&format!("nginx/dead-hosts/{id}"), payload).await
    }

    /// `DELETE /api/nginx/dead-hosts/{id}`
    pub async fn delete_dead_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting dead host");
        self.delete_action(&format!("nginx/dead-hosts/{id}")).await
    }

    /// `POST /api/nginx/dead-hosts/{id}/enable`
    pub async fn enable_dead_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "enabling dead host");
        self.post_action(&format!("nginx/dead-hosts/{id}/enable"))
            .await
    }

    /// `POST /api/nginx/dead-hosts/{id}/disable`
    pub async fn disable_dead_host(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "disabling dead host");
        self.post_action(&format!("nginx/dead-hosts/{id}/disable"))
            .await
    }
}
