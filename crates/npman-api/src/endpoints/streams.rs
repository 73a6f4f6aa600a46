// Stream endpoints
//
// TCP/UDP stream forwarding at `/api/nginx/streams`. Same route shape
// as the host families, but native JSON booleans on the wire.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Stream, StreamPayload};

impl ApiClient {
    /// `GET /api/nginx/streams`
    pub async fn list_streams(&self) -> Result<Vec<Stream>, Error> {
        debug!("listing streams");
        self.get("nginx/streams").await
    }

    /// `GET /api/nginx/streams/{id}`
    pub async fn get_stream(&self, id: u64) -> Result<Stream, Error> {
        self.get(&format!("nginx/streams/{id}")).await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_stream(&self, id: u64) -> Result<Option<Stream>, Error> {
        self.get_maybe(&format!("nginx/streams/{id}"), &[]).await
    }

    /// `POST /api/nginx/streams`
    pub async fn create_stream(&self, payload: &StreamPayload) -> Result<Stream, Error> {
        debug!("creating stream");
        self.post("nginx/streams", payload).await
    }

    /// `PUT /api/nginx/streams/{id}`
    pub async fn update_stream(&self, id: u64, payload: &StreamPayload) -> Result<Stream, Error> {
        debug!(id, "updating stream");
        self.put(&format!("nginx/streams/{id}"), payload).await
    }

    /// `DELETE /api/nginx/streams/{id}`
    pub async fn delete_stream(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting stream");
        self.delete_action(&format!("nginx/streams/{id}")).await
    }

    /// `POST /api/nginx/streams/{id}/enable`
    pub async fn enable_stream(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "enabling stream");
        self.post_action(&format!("nginx/streams/{id}/enable")).await
    }

    /// `POST /api/nginx/streams/{id}/disable`
    pub async fn disable_stream(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "disabling stream");
        self.post_action(&format!("nginx/streams/{id}/disable"))
            .await
    }
}
