use keyvault::Client;

use crate::output::{folder_lines, Output};

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Only prints the folders of this project
    #[clap(long)]
    project_id: Option<String>,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let folders = client.list_folders(self.project_id.as_deref()).await?;
        output.write(&folders, |folders| {
            for line in folder_lines(folders, 0) {
                println!("{line}");
            }
        })
    }
}
