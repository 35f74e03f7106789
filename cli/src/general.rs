use keyvault::Client;

use crate::output::{folder_line, Output};

#[derive(Debug, thiserror::Error)]
#[error("unable to reach {0}")]
pub(crate) struct Unreachable(pub String);

pub(crate) async fn ping(client: &Client) -> anyhow::Result<()> {
    if client.test_connection().await {
        println!("connected to {}", client.base_url());
        Ok(())
    } else {
        Err(Unreachable(client.base_url().to_string()).into())
    }
}

pub(crate) async fn stats(client: &Client, output: Output) -> anyhow::Result<()> {
    let stats = client.get_stats().await?;
    output.write(&stats, |stats| {
        println!("keys       {}", stats.total_keys);
        println!("folders    {}", stats.folders);
        if let Some(favorites) = stats.favorites {
            println!("favorites  {favorites}");
        }
        let mut by_type: Vec<_> = stats.keys_by_type.iter().collect();
        by_type.sort();
        for (kind, count) in by_type {
            println!("  {kind:<12} {count}");
        }
    })
}

pub(crate) async fn projects(client: &Client, output: Output) -> anyhow::Result<()> {
    let projects = client.list_projects().await?;
    tracing::info!("found {} projects", projects.len());
    output.write(&projects, |projects| {
        for project in projects {
            println!("{}", folder_line(project, 0));
        }
    })
}

pub(crate) async fn permissions(client: &Client, output: Output) -> anyhow::Result<()> {
    let permissions = client.get_permissions().await?;
    output.write(&permissions, |permissions| {
        let mut items: Vec<_> = permissions.iter().collect();
        items.sort_unstable();
        for item in items {
            println!("{item}");
        }
    })
}

pub(crate) async fn roles(client: &Client, output: Output) -> anyhow::Result<()> {
    let roles = client.get_roles().await?;
    output.write(&roles, |roles| {
        for role in roles {
            let team = role.team_name.as_deref().unwrap_or("-");
            let level = role.role.as_deref().unwrap_or("-");
            println!("{}  {team}  {level}", role.name);
            for permission in role.all_permissions() {
                println!("  {permission}");
            }
        }
    })
}
