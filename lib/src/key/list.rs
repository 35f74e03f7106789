//! Resources needed to list the keys of a folder

use super::KeyPage;

/// Options of the key listing
///
/// ```rust
/// use keyvault::key::ListKeysOptions;
///
/// let options = ListKeysOptions::default()
///     .with_limit(100)
///     .with_environment("production");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ListKeysOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub environment: Option<String>,
}

impl ListKeysOptions {
    /// Maximum number of keys to return.
    pub fn set_limit(&mut self, value: u32) {
        self.limit = Some(value);
    }

    /// Maximum number of keys to return.
    pub fn with_limit(mut self, value: u32) -> Self {
        self.set_limit(value);
        self
    }

    /// Number of keys to skip.
    pub fn set_offset(&mut self, value: u32) {
        self.offset = Some(value);
    }

    /// Number of keys to skip.
    pub fn with_offset(mut self, value: u32) -> Self {
        self.set_offset(value);
        self
    }

    /// Only returns the keys of this environment, like `PRODUCTION` or `STAGING`.
    pub fn set_environment(&mut self, value: impl Into<String>) {
        self.environment = Some(value.into().to_uppercase());
    }

    /// Only returns the keys of this environment, like `PRODUCTION` or `STAGING`.
    pub fn with_environment(mut self, value: impl Into<String>) -> Self {
        self.set_environment(value);
        self
    }
}

#[derive(serde::Serialize)]
struct ListKeysParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<&'a str>,
}

impl<'a> From<&'a ListKeysOptions> for ListKeysParams<'a> {
    fn from(value: &'a ListKeysOptions) -> Self {
        Self {
            limit: value.limit,
            offset: value.offset,
            environment: value.environment.as_deref(),
        }
    }
}

impl crate::Client {
    /// Lists the keys of a folder, without their values.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) -> keyvault::Result<()> {
    /// use keyvault::key::ListKeysOptions;
    ///
    /// let page = client
    ///     .list_keys("cmdflk67d000gjr04b492q3ha", &ListKeysOptions::default().with_limit(100))
    ///     .await?;
    /// for key in page.keys {
    ///     println!("{} ({})", key.name, key.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_keys(
        &self,
        folder_id: &str,
        options: &ListKeysOptions,
    ) -> crate::Result<KeyPage> {
        self.get_request(
            &["folders", folder_id, "keys"],
            ListKeysParams::from(options),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::ListKeysOptions;
    use crate::{Client, Credentials};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/folders/folder-1/keys")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "100".into()),
                Matcher::UrlEncoded("offset".into(), "20".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "success": true,
    "keys": [
        { "id": "key-1", "name": "DB_URL", "type": "SECRET" },
        { "id": "key-2", "name": "API_KEY", "type": "API_KEY" }
    ],
    "total": 22,
    "limit": 100,
    "offset": 20
}"#,
            )
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let options = ListKeysOptions::default().with_limit(100).with_offset(20);
        let page = client.list_keys("folder-1", &options).await.unwrap();
        assert_eq!(page.keys.len(), 2);
        assert_eq!(page.total, Some(22));
        assert_eq!(page.find("API_KEY").unwrap().id, "key-2");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn without_options() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/folders/folder-1/keys")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(r#"{ "keys": [] }"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let page = client
            .list_keys("folder-1", &ListKeysOptions::default())
            .await
            .unwrap();
        assert!(page.keys.is_empty());
        assert!(page.total.is_none());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn server_error() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/folders/folder-1/keys")
            .with_status(400)
            .with_body(r#"{ "success": false, "error": "Folder ID is required" }"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let error = client
            .list_keys("folder-1", &ListKeysOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::Protocol { status: 400, .. }));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_keys_field() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/folders/folder-1/keys")
            .with_status(200)
            .with_body(r#"{ "total": 3 }"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let error = client
            .list_keys("folder-1", &ListKeysOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::SerdeJson(_)));
    }
}
