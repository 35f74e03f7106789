use keyvault::Client;

use crate::output::{folder_lines, key_lines, Output};

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Id of the folder
    folder_id: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let details = client.get_folder(&self.folder_id).await?;
        output.write(&details, |details| {
            println!("{}  {}", details.folder.name, details.folder.id);
            if let Some(ref description) = details.folder.description {
                println!("{description}");
            }
            for line in folder_lines(&details.folder.children, 1) {
                println!("{line}");
            }
            for line in key_lines(&details.keys) {
                println!("  {line}");
            }
        })
    }
}
