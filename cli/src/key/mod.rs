mod get;
mod list;
mod multiple;
mod path;
mod search;

use keyvault::Client;

use crate::output::Output;

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// Lists the keys of a folder
    List(list::Command),
    /// Prints a key by id
    Get(get::Command),
    /// Prints the value of a key by name
    GetByName(get::ByNameCommand),
    /// Prints the values of several keys of a folder
    Multiple(multiple::Command),
    /// Searches keys across all folders
    Search(search::Command),
    /// Lists the keys of a folder given its path, like `Project/Sub`
    Path(path::Command),
}

impl Command {
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        match self {
            Self::List(inner) => inner.execute(client, output).await,
            Self::Get(inner) => inner.execute(client, output).await,
            Self::GetByName(inner) => inner.execute(client, output).await,
            Self::Multiple(inner) => inner.execute(client, output).await,
            Self::Search(inner) => inner.execute(client, output).await,
            Self::Path(inner) => inner.execute(client, output).await,
        }
    }
}
