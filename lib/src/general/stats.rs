use std::collections::HashMap;

/// Summary counts of the vault
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_keys: u64,
    #[serde(default, alias = "totalFolders")]
    pub folders: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<u64>,
    #[serde(default)]
    pub keys_by_type: HashMap<String, u64>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum StatsResponse {
    Wrapped { stats: Stats },
    Flat(Stats),
}

impl crate::Client {
    /// Fetches the number of keys and folders.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    pub async fn get_stats(&self) -> crate::Result<Stats> {
        self.get_request::<StatsResponse, _>(&["stats"], ())
            .await
            .map(|res| match res {
                StatsResponse::Wrapped { stats } | StatsResponse::Flat(stats) => stats,
            })
    }
}
