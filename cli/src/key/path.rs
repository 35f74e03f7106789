use keyvault::key::ListKeysOptions;
use keyvault::Client;

use crate::output::{key_lines, Output};

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Path of the folder, starting with the project name
    path: String,
    /// Only the keys of this environment, like production or staging
    #[clap(long)]
    environment: Option<String>,
    #[clap(long)]
    limit: Option<u32>,
    #[clap(long)]
    offset: Option<u32>,
}

impl Command {
    fn options(&self) -> ListKeysOptions {
        let mut options = ListKeysOptions {
            limit: self.limit,
            offset: self.offset,
            environment: None,
        };
        if let Some(ref environment) = self.environment {
            options.set_environment(environment.as_str());
        }
        options
    }

    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let found = client.get_keys_by_path(&self.path, &self.options()).await?;
        output.write(&found, |found| {
            println!("{}  {}", found.path, found.folder.id);
            for line in key_lines(&found.page.keys) {
                println!("  {line}");
            }
        })
    }
}
