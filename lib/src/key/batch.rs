//! Resources needed to fetch several keys of a folder at once

use std::collections::{BTreeSet, HashMap};

impl crate::Client {
    /// Fetches the values of several keys of a folder, by name.
    ///
    /// Each name is resolved independently and concurrently with
    /// [`get_key_by_name`](crate::Client::get_key_by_name). The returned map contains
    /// exactly the requested names: `Some(value)` when the key was resolved, `None` when
    /// it doesn't exist or couldn't be fetched. Duplicated names are fetched once.
    ///
    /// A failure, rejected credentials included, only affects its own entry and is logged.
    ///
    /// # Errors
    ///
    /// This function doesn't fail, the `Result` is kept for consistency with the
    /// other operations.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) -> keyvault::Result<()> {
    /// let values = client
    ///     .get_multiple_keys("cmdflk67d000gjr04b492q3ha", ["DB_URL", "API_KEY"])
    ///     .await?;
    /// for (name, value) in values {
    ///     match value {
    ///         Some(value) => println!("{name}={value}"),
    ///         None => eprintln!("{name} not found"),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, names))]
    pub async fn get_multiple_keys<I, S>(
        &self,
        folder_id: &str,
        names: I,
    ) -> crate::Result<HashMap<String, Option<String>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        let lookups = names.iter().map(|name| async move {
            (name, self.get_key_by_name(folder_id, name).await)
        });
        let results = futures_util::future::join_all(lookups).await;

        let mut values = HashMap::with_capacity(results.len());
        for (name, result) in results {
            let value = match result {
                Ok(value) => Some(value),
                Err(err) if err.is_not_found() => {
                    tracing::debug!("key {name:?} not found");
                    None
                }
                Err(err) => {
                    tracing::warn!("unable to fetch key {name:?}: {err}");
                    None
                }
            };
            values.insert(name.clone(), value);
        }
        Ok(values)
    }
}
