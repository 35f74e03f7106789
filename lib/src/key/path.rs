//! Resources needed to list keys from a folder path like `Project/Sub/Leaf`

use super::{KeyPage, ListKeysOptions};
use crate::folder::{find_folder, Folder};

/// Default number of keys returned by a path lookup
pub const PATH_LOOKUP_LIMIT: u32 = 100;

/// The keys found at a path, with the folder the path resolved to
#[derive(Clone, Debug, serde::Serialize)]
pub struct PathKeys {
    pub path: String,
    pub folder: Folder,
    #[serde(flatten)]
    pub page: KeyPage,
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

impl crate::Client {
    /// Resolves a folder from its path.
    ///
    /// The first segment is the name of a project, each following segment is looked up
    /// in the descendants of the previous one. Names are compared without case.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if the path has no segment,
    /// [`crate::Error::NotFound`] if a segment doesn't match any folder,
    /// or another [`crate::Error`] if a request fails.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_path(&self, path: &str) -> crate::Result<Folder> {
        let parts = split_path(path);
        let (project_name, rest) = parts
            .split_first()
            .ok_or_else(|| crate::Error::InvalidArgument(format!("invalid path {path:?}")))?;

        let projects = self.list_projects().await?;
        let project = projects
            .into_iter()
            .find(|project| project.name.eq_ignore_ascii_case(project_name))
            .ok_or_else(|| crate::Error::NotFound(format!("project {project_name:?}")))?;
        if rest.is_empty() {
            return Ok(project);
        }

        // the tree is either rooted at the project or made of its direct children
        let tree = self.list_folders(Some(&project.id)).await?;
        let mut siblings: &[Folder] = match tree.iter().find_map(|root| root.find_by_id(&project.id)) {
            Some(root) => &root.children,
            None => &tree,
        };
        let mut current = None;
        for part in rest {
            let folder = find_folder(siblings, part).ok_or_else(|| {
                crate::Error::NotFound(format!("folder {part:?} in path {path:?}"))
            })?;
            siblings = &folder.children;
            current = Some(folder);
        }
        current
            .cloned()
            .ok_or_else(|| crate::Error::NotFound(format!("path {path:?}")))
    }

    /// Lists the keys of the folder at the given path.
    ///
    /// When no limit is given in the options, up to 100 keys are returned.
    ///
    /// # Errors
    ///
    /// See [`resolve_path`](crate::Client::resolve_path) and [`list_keys`](crate::Client::list_keys).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &keyvault::Client) -> keyvault::Result<()> {
    /// use keyvault::key::ListKeysOptions;
    ///
    /// let found = client
    ///     .get_keys_by_path(
    ///         "WebMeter/Database URLs",
    ///         &ListKeysOptions::default().with_environment("production"),
    ///     )
    ///     .await?;
    /// println!("{} keys in {}", found.page.keys.len(), found.folder.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_keys_by_path(
        &self,
        path: &str,
        options: &ListKeysOptions,
    ) -> crate::Result<PathKeys> {
        let folder = self.resolve_path(path).await?;
        let mut options = options.clone();
        if options.limit.is_none() {
            options.set_limit(PATH_LOOKUP_LIMIT);
        }
        let page = self.list_keys(&folder.id, &options).await?;
        Ok(PathKeys {
            path: path.to_string(),
            folder,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::split_path;
    use crate::key::ListKeysOptions;
    use crate::{Client, Credentials};
    use mockito::Matcher;

    const PROJECTS: &str = r#"{ "folders": [
    { "id": "p1", "name": "WebMeter", "children": [] },
    { "id": "p2", "name": "Billing", "children": [] }
] }"#;

    const TREE: &str = r#"{ "folders": [
    {
        "id": "p1",
        "name": "WebMeter",
        "children": [
            { "id": "f1", "name": "Database URLs", "parentId": "p1", "children": [
                { "id": "f2", "name": "Production", "parentId": "f1" }
            ] },
            { "id": "f3", "name": "API Keys", "parentId": "p1" }
        ]
    }
] }"#;

    #[test]
    fn should_split_path() {
        assert_eq!(split_path("/WebMeter//Database URLs/ "), vec!["WebMeter", "Database URLs"]);
        assert!(split_path(" / ").is_empty());
    }

    #[tokio::test]
    async fn project_only() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let projects = server
            .mock("GET", "/folders")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(PROJECTS)
            .create_async()
            .await;
        let keys = server
            .mock("GET", "/folders/p2/keys")
            .match_query(Matcher::UrlEncoded("limit".into(), "100".into()))
            .with_status(200)
            .with_body(r#"{ "keys": [ { "id": "k1", "name": "STRIPE", "type": "API_KEY" } ], "total": 1 }"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let found = client
            .get_keys_by_path("billing", &ListKeysOptions::default())
            .await
            .unwrap();
        assert_eq!(found.folder.id, "p2");
        assert_eq!(found.page.keys[0].name, "STRIPE");
        projects.assert_async().await;
        keys.assert_async().await;
    }

    #[tokio::test]
    async fn nested_with_environment() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _projects = server
            .mock("GET", "/folders")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(PROJECTS)
            .create_async()
            .await;
        let tree = server
            .mock("GET", "/folders")
            .match_query(Matcher::UrlEncoded("projectId".into(), "p1".into()))
            .with_status(200)
            .with_body(TREE)
            .create_async()
            .await;
        let keys = server
            .mock("GET", "/folders/f2/keys")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("environment".into(), "PRODUCTION".into()),
            ]))
            .with_status(200)
            .with_body(r#"{ "keys": [] }"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let options = ListKeysOptions::default()
            .with_limit(10)
            .with_environment("production");
        let found = client
            .get_keys_by_path("WebMeter/database urls/Production", &options)
            .await
            .unwrap();
        assert_eq!(found.folder.id, "f2");
        assert_eq!(found.path, "WebMeter/database urls/Production");
        tree.assert_async().await;
        keys.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_segment() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _projects = server
            .mock("GET", "/folders")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(PROJECTS)
            .create_async()
            .await;
        let _tree = server
            .mock("GET", "/folders")
            .match_query(Matcher::UrlEncoded("projectId".into(), "p1".into()))
            .with_status(200)
            .with_body(TREE)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::bearer("access-token")).unwrap();
        let error = client.resolve_path("WebMeter/Staging").await.unwrap_err();
        assert!(error.is_not_found());
        let error = client.resolve_path("Unknown").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn empty_path() {
        let client = Client::new("http://localhost:1", Credentials::bearer("token")).unwrap();
        let error = client.resolve_path("//").await.unwrap_err();
        assert!(matches!(error, crate::Error::InvalidArgument(_)));
    }
}
