use chrono::{DateTime, Utc};

/// A role of the user owning the credentials, usually granted through a team membership
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    /// Membership level in the team, like `OWNER`, `ADMIN` or `MEMBER`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub custom_permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Role {
    /// The permissions of the role followed by the ones granted to the member only
    pub fn all_permissions(&self) -> impl Iterator<Item = &str> {
        self.permissions
            .iter()
            .chain(self.custom_permissions.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, serde::Deserialize)]
struct RolesResponse {
    #[serde(default)]
    roles: Vec<Role>,
}

impl crate::Client {
    /// Fetches the roles of the user owning the credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the request fails or the server answers with an unsuccessful status.
    pub async fn get_roles(&self) -> crate::Result<Vec<Role>> {
        self.get_request::<RolesResponse, _>(&["auth", "roles"], ())
            .await
            .map(|res| res.roles)
    }
}
