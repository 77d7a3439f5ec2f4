use anyhow::Context;
use convolog::configuration::get_configuration;
use convolog::startup::{prepare_storage, run};
use convolog::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("convolog".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().context("Failed to read configuration.")?;

    tracing::info!(
        db_path = %settings.database.path,
        max_connections = settings.database.max_connections,
        "Opening SQLite database"
    );

    let pool = prepare_storage(&settings).await.map_err(|err| {
        tracing::error!("Storage initialization failed, not serving: {}", err);
        err
    })?;

    let address = settings.address();
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, pool, settings)?.await?;
    Ok(())
}
