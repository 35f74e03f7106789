use std::collections::HashSet;

/// Grants every permission
pub const WILDCARD: &str = "*";

/// The permissions granted to the credentials, like `keys:read` or `folders:read`
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct Permissions {
    #[serde(default)]
    permissions: HashSet<String>,
}

impl Permissions {
    pub fn has(&self, permission: &str) -> bool {
        self.permissions.contains(permission) || self.permissions.contains(WILDCARD)
    }

    pub fn has_any<'a>(&self, permissions: impl IntoIterator<Item = &'a str>) -> bool {
        permissions.into_iter().any(|item| self.has(item))
    }

    pub fn has_all<'a>(&self, permissions: impl IntoIterator<Item = &'a str>) -> bool {
        permissions.into_iter().all(|item| self.has(item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Permissions {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            permissions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl crate::Client {
    /// Fetches the permissions granted to the credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    pub async fn get_permissions(&self) -> crate::Result<Permissions> {
        self.get_request(&["auth", "permissions"], ()).await
    }
}
