// Settings endpoints
//
// `/api/settings` is GET/PUT only: settings exist server-side from
// installation, keyed by string ids (e.g. "default-site"), and are
// never created or deleted by clients.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Setting, SettingPayload};

impl ApiClient {
    /// `GET /api/settings`
    pub async fn list_settings(&self) -> Result<Vec<Setting>, Error> {
        debug!("listing settings");
        self.get("settings").await
    }

    /// `GET /api/settings/{id}`
    pub async fn get_setting(&self, id: &str) -> Result<Setting, Error> {
        self.get(&format!("settings/{id}")).await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_setting(&self, id: &str) -> Result<Option<Setting>, Error> {
        self.get_maybe(&format!("settings/{id}"), &[]).await
    }

    /// `PUT /api/settings/{id}`
    pub async fn update_setting(&self, id: &str, payload: &SettingPayload) -> Result<Setting, Error> {
        debug!(id, "updating setting");
        self.put(&format!("settings/{id}"), payload).await
    }
}
