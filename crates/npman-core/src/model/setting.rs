// Setting domain types.
//
// Settings are a fixed, server-defined set keyed by string ids
// (e.g. "default-site"); clients only ever read and update them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Meta;

/// A named instance setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Setting values are heterogeneous (strings, objects) and stay as
    /// raw JSON; only `meta` is normalized.
    pub value: Value,
    pub meta: Meta,
}

/// Desired state for updating a setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRequest {
    pub value: Value,
    #[serde(default)]
    pub meta: Meta,
}

impl From<&Setting> for SettingRequest {
    fn from(setting: &Setting) -> Self {
        Self {
            value: setting.value.clone(),
            meta: setting.meta.clone(),
        }
    }
}
