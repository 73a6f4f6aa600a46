// User account domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-section access level for a user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PermissionLevel {
    #[default]
    Hidden,
    View,
    Manage,
}

/// A user's per-section permissions.
///
/// `visibility` is `"all"` (sees every owner's entities) or `"user"`
/// (sees only their own).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub visibility: String,
    pub proxy_hosts: PermissionLevel,
    pub redirection_hosts: PermissionLevel,
    pub dead_hosts: PermissionLevel,
    pub streams: PermissionLevel,
    pub access_lists: PermissionLevel,
    pub certificates: PermissionLevel,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            visibility: "user".into(),
            proxy_hosts: PermissionLevel::Hidden,
            redirection_hosts: PermissionLevel::Hidden,
            dead_hosts: PermissionLevel::Hidden,
            streams: PermissionLevel::Hidden,
            access_lists: PermissionLevel::Hidden,
            certificates: PermissionLevel::Hidden,
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub is_disabled: bool,
    /// Role slugs; `"admin"` grants everything regardless of
    /// per-section permissions.
    pub roles: Vec<String>,
    pub permissions: Option<Permissions>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == "admin")
    }
}

/// Desired state for creating or updating a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRequest {
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    pub email: String,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<&User> for UserRequest {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            is_disabled: user.is_disabled,
            roles: user.roles.clone(),
        }
    }
}
