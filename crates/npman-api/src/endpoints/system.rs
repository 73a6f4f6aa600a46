// System endpoints
//
// The unauthenticated-tolerant health/version probe at `GET /api`.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::Health;

impl ApiClient {
    /// Probe instance health and version.
    ///
    /// `GET /api`
    pub async fn health(&self) -> Result<Health, Error> {
        debug!("probing health");
        self.get("").await
    }
}
