// User endpoints
//
// `/api/users` CRUD plus the two dedicated sub-resources: `auth`
// (password change) and `permissions`. The literal id `me` refers to
// the authenticated user.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Permissions, User, UserAuthPayload, UserPayload};

impl ApiClient {
    /// `GET /api/users`
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        debug!("listing users");
        self.get("users").await
    }

    /// `GET /api/users/{id}`
    pub async fn get_user(&self, id: u64) -> Result<User, Error> {
        self.get(&format!("users/{id}")).await
    }

    /// `GET /api/users/me`
    pub async fn get_current_user(&self) -> Result<User, Error> {
        self.get("users/me").await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_user(&self, id: u64) -> Result<Option<User>, Error> {
        self.get_maybe(&format!("users/{id}"), &[]).await
    }

    /// `POST /api/users`
    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, Error> {
        debug!("creating user");
        self.post("users", payload).await
    }

    /// `PUT /api/users/{id}`
    pub async fn update_user(&self, id: u64, payload: &UserPayload) -> Result<User, Error> {
        debug!(id, "updating user");
        self.put(&format!("users/{id}"), payload).await
    }

    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting user");
        self.delete_action(&format!("users/{id}")).await
    }

    /// Change a user's password.
    ///
    /// `PUT /api/users/{id}/auth`
    pub async fn set_user_auth(&self, id: u64, payload: &UserAuthPayload) -> Result<bool, Error> {
        debug!(id, "setting user auth");
        self.put_action(&format!("users/{id}/auth"), payload).await
    }

    /// Replace a user's per-section permissions.
    ///
    /// `PUT /api/users/{id}/permissions`
    pub async fn set_user_permissions(
        &self,
        id: u64,
        permissions: &Permissions,
    ) -> Result<bool, Error> {
        debug!(id, "setting user permissions");
        self.put_action(&format!("users/{id}/permissions"), permissions)
            .await
    }
}
