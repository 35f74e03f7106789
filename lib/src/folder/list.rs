//! Resources needed to list folders and projects

use super::Folder;

#[derive(Debug, serde::Deserialize)]
struct FolderListResponse {
    #[serde(default)]
    folders: Vec<Folder>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FolderListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
}

impl crate::Client {
    /// Lists the folders, nested in their hierarchy.
    ///
    /// # Arguments
    ///
    /// * `project_id` - When provided, only the folders of this project are returned.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) -> keyvault::Result<()> {
    /// for folder in client.list_folders(None).await? {
    ///     println!("{} ({} keys)", folder.name, folder.count.keys);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_folders(&self, project_id: Option<&str>) -> crate::Result<Vec<Folder>> {
        self.get_request::<FolderListResponse, _>(&["folders"], FolderListParams { project_id })
            .await
            .map(|res| res.folders)
    }

    /// Lists the projects, the folders at the top of each hierarchy.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    pub async fn list_projects(&self) -> crate::Result<Vec<Folder>> {
        let folders = self.list_folders(None).await?;
        Ok(folders.into_iter().filter(Folder::is_project).collect())
    }
}
