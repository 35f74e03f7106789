use keyvault::key::ListKeysOptions;
use keyvault::Client;

use crate::output::{key_lines, Output};

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Id of the folder
    #[clap(env = "KEY_VAULT_FOLDER_ID")]
    folder_id: String,
    #[clap(long)]
    limit: Option<u32>,
    #[clap(long)]
    offset: Option<u32>,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let options = ListKeysOptions {
            limit: self.limit,
            offset: self.offset,
            environment: None,
        };
        let page = client.list_keys(&self.folder_id, &options).await?;
        output.write(&page, |page| {
            for line in key_lines(&page.keys) {
                println!("{line}");
            }
            if let Some(total) = page.total {
                println!("{} of {total} keys", page.keys.len());
            }
        })
    }
}
