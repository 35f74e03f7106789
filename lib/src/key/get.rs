//! Resources needed to fetch a single key, by id or by name

use super::{Key, ListKeysOptions};

/// Number of keys scanned when looking for a key by name
pub const NAME_LOOKUP_LIMIT: u32 = 100;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GetKeyParams {
    include_value: bool,
}

/// The API either nests the key under `key` or returns it at the top level
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum KeyResponse {
    Wrapped { key: Key },
    Flat(Key),
}

impl From<KeyResponse> for Key {
    fn from(value: KeyResponse) -> Self {
        match value {
            KeyResponse::Wrapped { key } | KeyResponse::Flat(key) => key,
        }
    }
}

impl crate::Client {
    /// Fetches a key by its id.
    ///
    /// # Arguments
    ///
    /// * `key_id` - The id of the key.
    /// * `include_value` - Whether the decrypted value should be returned. When `false`,
    ///   the `value` of the returned key is always `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the key doesn't exist,
    /// or another [`crate::Error`] if the request fails.
    pub async fn get_key(&self, key_id: &str, include_value: bool) -> crate::Result<Key> {
        let mut key: Key = self
            .get_request::<KeyResponse, _>(&["keys", key_id], GetKeyParams { include_value })
            .await
            .map(Key::from)?;
        if !include_value {
            key.value = None;
        }
        Ok(key)
    }

    /// Fetches the value of a key, looking it up by name in a folder.
    ///
    /// The first key of the folder whose name matches exactly is used. Only the first
    /// [`NAME_LOOKUP_LIMIT`] keys of the folder are scanned, a key beyond them is
    /// reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if no key of the folder has this name,
    /// [`crate::Error::MissingValue`] if the server doesn't return the value,
    /// or another [`crate::Error`] if a request fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) -> keyvault::Result<()> {
    /// match client.get_key_by_name("cmdflk67d000gjr04b492q3ha", "DB_URL").await {
    ///     Ok(value) => println!("database at {value}"),
    ///     Err(err) if err.is_not_found() => eprintln!("DB_URL is not defined"),
    ///     Err(err) => return Err(err),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn get_key_by_name(&self, folder_id: &str, name: &str) -> crate::Result<String> {
        let options = ListKeysOptions::default().with_limit(NAME_LOOKUP_LIMIT);
        let page = self.list_keys(folder_id, &options).await?;
        let key = page.find(name).ok_or_else(|| {
            crate::Error::NotFound(format!("key {name:?} in folder {folder_id:?}"))
        })?;
        let key = self.get_key(&key.id, true).await?;
        key.value
            .ok_or_else(|| crate::Error::MissingValue(name.to_string()))
    }
}
