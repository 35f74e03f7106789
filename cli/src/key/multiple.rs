use keyvault::Client;
use std::collections::BTreeMap;

use crate::output::Output;

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Id of the folder holding the keys
    folder_id: String,
    /// Names of the keys
    #[clap(required = true)]
    names: Vec<String>,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let values: BTreeMap<_, _> = client
            .get_multiple_keys(&self.folder_id, &self.names)
            .await?
            .into_iter()
            .collect();
        output.write(&values, |values| {
            for (name, value) in values {
                println!("{name}={}", value.as_deref().unwrap_or("<not found>"));
            }
        })
    }
}
