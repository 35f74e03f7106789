//! Keys, the secrets stored in the vault

use chrono::{DateTime, Utc};
use std::fmt;

pub mod batch;
pub mod get;
pub mod list;
pub mod path;
pub mod search;

pub use list::ListKeysOptions;
pub use path::PathKeys;
pub use search::SearchKeysOptions;

/// The kind of secret a key holds
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum KeyType {
    Password,
    ApiKey,
    SshKey,
    Certificate,
    Secret,
    Other,
    /// A type this version of the library doesn't know about
    Unknown(String),
}

impl KeyType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Password => "PASSWORD",
            Self::ApiKey => "API_KEY",
            Self::SshKey => "SSH_KEY",
            Self::Certificate => "CERTIFICATE",
            Self::Secret => "SECRET",
            Self::Other => "OTHER",
            Self::Unknown(value) => value.as_str(),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for KeyType {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "PASSWORD" => Self::Password,
            "API_KEY" => Self::ApiKey,
            "SSH_KEY" => Self::SshKey,
            "CERTIFICATE" => Self::Certificate,
            "SECRET" => Self::Secret,
            "OTHER" => Self::Other,
            _ => Self::Unknown(value.to_string()),
        }
    }
}

impl From<String> for KeyType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<KeyType> for String {
    fn from(value: KeyType) -> Self {
        match value {
            KeyType::Unknown(inner) => inner,
            other => other.as_str().to_string(),
        }
    }
}

/// A structure representing a key in the vault
///
/// The `value` is only present when it was explicitly requested.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: KeyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A page of keys, as returned by the listing and search endpoints
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct KeyPage {
    pub keys: Vec<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl KeyPage {
    /// Finds the first key with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|key| key.name == name)
    }
}
