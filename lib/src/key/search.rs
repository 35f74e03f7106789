//! Resources needed to search keys across all folders

use super::{KeyPage, KeyType};

/// Filters of a key search. Every filter is optional.
///
/// ```rust
/// use keyvault::key::{KeyType, SearchKeysOptions};
///
/// let options = SearchKeysOptions::default()
///     .with_query("stripe")
///     .with_kind(KeyType::ApiKey)
///     .with_favorite(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SearchKeysOptions {
    pub query: Option<String>,
    pub kind: Option<KeyType>,
    pub favorite: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchKeysOptions {
    /// Free text matched against the keys.
    pub fn with_query(mut self, value: impl Into<String>) -> Self {
        self.query = Some(value.into());
        self
    }

    /// Only returns the keys of this type.
    pub fn with_kind(mut self, value: KeyType) -> Self {
        self.kind = Some(value);
        self
    }

    /// Only returns the keys with this favorite flag.
    pub fn with_favorite(mut self, value: bool) -> Self {
        self.favorite = Some(value);
        self
    }

    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    pub fn with_offset(mut self, value: u32) -> Self {
        self.offset = Some(value);
        self
    }
}

#[derive(serde::Serialize)]
struct SearchKeysParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
}

impl<'a> From<&'a SearchKeysOptions> for SearchKeysParams<'a> {
    fn from(value: &'a SearchKeysOptions) -> Self {
        Self {
            search: value.query.as_deref(),
            kind: value.kind.as_ref().map(KeyType::as_str),
            favorite: value.favorite,
            limit: value.limit,
            offset: value.offset,
        }
    }
}

impl crate::Client {
    /// Searches keys across all the folders, without their values.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    pub async fn search_keys(&self, options: &SearchKeysOptions) -> crate::Result<KeyPage> {
        self.get_request(&["keys", "search"], SearchKeysParams::from(options))
            .await
    }
}
