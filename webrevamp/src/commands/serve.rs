use tracing::{info, warn};
use webrevamp_config::Config;
use webrevamp_di::Provide;
use webrevamp_email_contracts::EmailService;
use webrevamp_persistence_contracts::Database;

use crate::{
    database, email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    if let Err(err) = email.ping().await {
        warn!("SMTP server is not reachable: {err:#}");
    }

    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, database, email);
    let server: RestServer = provider.provide();
    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
