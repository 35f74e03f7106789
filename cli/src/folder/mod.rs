mod get;
mod list;

use keyvault::Client;

use crate::output::Output;

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// Prints the folder tree
    List(list::Command),
    /// Prints a folder and its keys
    Get(get::Command),
}

impl Command {
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        match self {
            Self::List(inner) => inner.execute(client, output).await,
            Self::Get(inner) => inner.execute(client, output).await,
        }
    }
}
