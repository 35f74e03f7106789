//! Resources needed to fetch a folder with its keys

use super::Folder;
use crate::key::Key;

/// A folder and the keys it directly contains
#[derive(Clone, Debug, serde::Serialize)]
pub struct FolderDetails {
    #[serde(flatten)]
    pub folder: Folder,
    pub keys: Vec<Key>,
}

/// The API either nests the folder under `folder` or returns it at the top level
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum FolderDetailsResponse {
    Wrapped {
        folder: Folder,
        #[serde(default)]
        keys: Vec<Key>,
    },
    Flat {
        #[serde(flatten)]
        folder: Folder,
        #[serde(default)]
        keys: Vec<Key>,
    },
}

impl From<FolderDetailsResponse> for FolderDetails {
    fn from(value: FolderDetailsResponse) -> Self {
        match value {
            FolderDetailsResponse::Wrapped { folder, keys }
            | FolderDetailsResponse::Flat { folder, keys } => Self { folder, keys },
        }
    }
}

impl crate::Client {
    /// Fetches a folder, its sub folders and the keys it contains.
    ///
    /// The keys are returned without their values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the folder doesn't exist,
    /// or another [`crate::Error`] if the request fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) -> keyvault::Result<()> {
    /// let details = client.get_folder("cmdflk67d000gjr04b492q3ha").await?;
    /// for key in details.keys {
    ///     println!("{}: {}", key.name, key.kind);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_folder(&self, folder_id: &str) -> crate::Result<FolderDetails> {
        self.get_request::<FolderDetailsResponse, _>(&["folders", folder_id], ())
            .await
            .map(FolderDetails::from)
    }
}
