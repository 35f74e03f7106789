use keyvault::Client;

use crate::output::Output;

#[derive(clap::Args)]
pub(crate) struct Command {
    /// Id of the key
    key_id: String,
    /// Also prints the value of the key
    #[clap(long)]
    show_value: bool,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let key = client.get_key(&self.key_id, self.show_value).await?;
        output.write(&key, |key| {
            println!("id       {}", key.id);
            println!("name     {}", key.name);
            println!("type     {}", key.kind);
            println!("favorite {}", key.is_favorite);
            if let Some(ref description) = key.description {
                println!("about    {description}");
            }
            if !key.tags.is_empty() {
                println!("tags     {}", key.tags.join(", "));
            }
            if let Some(ref value) = key.value {
                println!("value    {value}");
            }
        })
    }
}

#[derive(clap::Args)]
pub(crate) struct ByNameCommand {
    /// Id of the folder holding the key
    #[clap(env = "KEY_VAULT_FOLDER_ID")]
    folder_id: String,
    /// Name of the key
    #[clap(env = "KEY_VAULT_KEY_NAME")]
    name: String,
}

impl ByNameCommand {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client, output: Output) -> anyhow::Result<()> {
        let value = client.get_key_by_name(&self.folder_id, &self.name).await?;
        output.write(&value, |value| println!("{value}"))
    }
}
