use clap::Parser;
use keyvault::{Client, ClientBuilder, Credentials};
use std::time::Duration;

use crate::output::Output;

#[derive(Parser)]
#[clap(about, author, version)]
pub struct Command {
    /// Base url of the Key Vault API, like https://vault.example.com/api
    #[clap(long, env = "KEY_VAULT_API_URL")]
    api_url: String,
    /// Token used to authenticate
    #[clap(long, env = "KEY_VAULT_TOKEN", hide_env_values = true)]
    token: String,
    /// Request timeout, in seconds
    #[clap(long, env = "KEY_VAULT_TIMEOUT")]
    timeout: Option<u64>,
    /// Prints the results as JSON
    #[clap(long)]
    json: bool,
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(clap::Subcommand)]
pub enum SubCommand {
    /// Checks that the vault is reachable with the given token
    Ping,
    /// Prints the number of keys and folders
    Stats,
    /// Lists the projects
    Projects,
    /// Lists the permissions granted to the token
    Permissions,
    /// Lists the roles of the user owning the token
    Roles,
    /// Folder related sub command
    #[clap(subcommand)]
    Folder(crate::folder::Command),
    /// Key related sub command
    #[clap(subcommand)]
    Key(crate::key::Command),
}

impl Command {
    pub fn client(&self) -> anyhow::Result<Client> {
        let mut builder = ClientBuilder::default()
            .with_base_url(self.api_url.clone())
            .with_credentials(Credentials::bearer(self.token.as_str()));
        if let Some(timeout) = self.timeout {
            builder.set_timeout(Duration::from_secs(timeout));
        }
        Ok(builder.build()?)
    }

    pub async fn execute(self) -> anyhow::Result<()> {
        let client = self.client()?;
        let output = Output::new(self.json);
        match self.subcmd {
            SubCommand::Ping => crate::general::ping(&client).await,
            SubCommand::Stats => crate::general::stats(&client, output).await,
            SubCommand::Projects => crate::general::projects(&client, output).await,
            SubCommand::Permissions => crate::general::permissions(&client, output).await,
            SubCommand::Roles => crate::general::roles(&client, output).await,
            SubCommand::Folder(sub) => sub.execute(&client, output).await,
            SubCommand::Key(sub) => sub.execute(&client, output).await,
        }
    }

    pub fn set_log_level(&self) {
        if self.verbose {
            if let Err(err) = tracing_subscriber::fmt()
                .with_env_filter("keyvault=debug,keyvault_cli=debug")
                .with_writer(std::io::stderr)
                .try_init()
            {
                eprintln!("unable to init logger: {err:?}");
            }
        }
    }
}
