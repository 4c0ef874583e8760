use clap::Subcommand;
use webrevamp_config::Config;
use webrevamp_core_contact_contracts::ContactFeatureService;
use webrevamp_di::Provide;

use crate::{
    database, email,
    environment::{types::ContactFeature, ConfigProvider, Provider},
};

#[derive(Debug, Subcommand)]
pub enum SubmissionsCommand {
    /// Print all contact submissions as JSON, oldest first
    #[command(aliases(["ls", "l"]))]
    List,
}

impl SubmissionsCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            SubmissionsCommand::List => list(config).await,
        }
    }
}

async fn list(config: Config) -> anyhow::Result<()> {
    let database = database::connect(&config.database).await?;
    let email_service = email::connect(&config.email).await?;
    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, database, email_service);

    let contact: ContactFeature = provider.provide();
    let submissions = contact.list_submissions().await?;
    println!("{}", serde_json::to_string_pretty(&submissions)?);

    Ok(())
}
