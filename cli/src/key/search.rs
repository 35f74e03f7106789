use keyvault::key::{KeyType, SearchKeysOptions};
use keyvault::Client;

use crate::output::{key_lines, Output};

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Free text to look for
    #[clap(long)]
    query: Option<String>,
    /// Type of key, like API_KEY or PASSWORD
    #[clap(long = "type")]
    kind: Option<String>,
    /// Only favorite keys, or only the others when false
    #[clap(long)]
    favorite: Option<bool>,
    #[clap(long)]
    limit: Option<u32>,
    #[clap(long)]
    offset: Option<u32>,
}

impl From<Command> for SearchKeysOptions {
    fn from(value: Command) -> Self {
        Self {
            query: value.query,
            kind: value.kind.map(KeyType::from),
            favorite: value.favorite,
            limit: value.limit,
            offset: value.offset,
        }
    }
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let options = SearchKeysOptions::from(self);
        let page = client.search_keys(&options).await?;
        output.write(&page, |page| {
            for line in key_lines(&page.keys) {
                println!("{line}");
            }
        })
    }
}
