//! Folders, the hierarchical containers of keys

use chrono::{DateTime, Utc};

pub mod get;
pub mod list;

pub use get::FolderDetails;

/// The number of direct children of a folder
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FolderCount {
    #[serde(default)]
    pub keys: u64,
    #[serde(rename = "other_folders", alias = "children", default)]
    pub folders: u64,
}

/// A structure representing a folder in the vault
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<Folder>,
    #[serde(rename = "_count", default)]
    pub count: FolderCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Eq for Folder {}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}

impl Folder {
    /// A project is a folder without parent
    pub fn is_project(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Looks for a folder by name in the descendants of this folder.
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        find_folder(&self.children, name)
    }

    /// Looks for a folder by id in this folder and its descendants.
    pub fn find_by_id(&self, id: &str) -> Option<&Folder> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }
}

/// Depth first search of a folder tree, comparing names without case.
///
/// Siblings are checked before descending into the children of the first one.
pub fn find_folder<'a>(folders: &'a [Folder], name: &str) -> Option<&'a Folder> {
    folders
        .iter()
        .find(|folder| folder.name.eq_ignore_ascii_case(name))
        .or_else(|| {
            folders
                .iter()
                .find_map(|folder| find_folder(&folder.children, name))
        })
}
