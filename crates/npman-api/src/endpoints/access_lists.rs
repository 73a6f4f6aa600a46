// Access list endpoints
//
// `/api/nginx/access-lists` with the `expand=items,clients` query to
// inline nested authorization entries and IP rules. Every read goes out
// expanded -- the mapping layer needs the collections to merge secrets.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{AccessList, AccessListPayload};

const EXPAND: (&str, &str) = ("expand", "items,clients");

impl ApiClient {
    /// `GET /api/nginx/access-lists?expand=items,clients`
    pub async fn list_access_lists(&self) -> Result<Vec<AccessList>, Error> {
        debug!("listing access lists");
        self.get_with_params("nginx/access-lists", &[EXPAND]).await
    }

    /// `GET /api/nginx/access-lists/{id}?expand=items,clients`
    pub async fn get_access_list(&self, id: u64) -> Result<AccessList, Error> {
        self.get_with_params(&format!("nginx/access-lists/{id}"), &[EXPAND])
            .await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_access_list(&self, id: u64) -> Result<Option<AccessList>, Error> {
        self.get_maybe(&format!("nginx/access-lists/{id}"), &[EXPAND])
            .await
    }

    /// `POST /api/nginx/access-lists`
    pub async fn create_access_list(
        &self,
        payload: &AccessListPayload,
    ) -> Result<AccessList, Error> {
        debug!("creating access list");
        self.post("nginx/access-lists", payload).await
    }

    /// `PUT /api/nginx/access-lists/{id}`
    pub async fn update_access_list(
        &self,
        id: u64,
        payload: &AccessListPayload,
    ) -> Result<AccessList, Error> {
        debug!(id, "updating access list");
        self.put(&format!("nginx/access-lists/{id}"), payload).await
    }

    /// `DELETE /api/nginx/access-lists/{id}`
    pub async fn delete_access_list(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting access list");
        self.delete_action(&format!("nginx/access-lists/{id}")).await
    }

    /// `POST /api/nginx/access-lists/{id}/enable`
    pub async fn enable_access_list(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "enabling access list");
        self.post_action(&format!("nginx/access-lists/{id}/enable"))
            .await
    }

    /// `POST /api/nginx/access-lists/{id}/disable`
    pub async fn disable_access_list(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "disabling access list");
        self.post_action(&format!("nginx/access-lists/{id}/disable"))
            .await
    }
}
