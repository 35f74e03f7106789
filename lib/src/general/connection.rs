impl crate::Client {
    /// Checks that the API is reachable and accepts the credentials.
    ///
    /// This never fails: any error is logged and reported as `false`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) {
    /// if !client.test_connection().await {
    ///     eprintln!("unable to reach the vault");
    /// }
    /// # }
    /// ```
    pub async fn test_connection(&self) -> bool {
        match self.list_projects().await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("connection test failed: {err}");
                false
            }
        }
    }
}
