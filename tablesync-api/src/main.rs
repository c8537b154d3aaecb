use anyhow::Context;
use tablesync_api::{config::ApiConfig, startup::Application};
use tablesync_config::load_config;
use tablesync_config::shared::PgConnectionConfig;
use tablesync_telemetry::tracing::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    actix_web::rt::System::new().block_on(async_main())?;

    Ok(())
}

async fn async_main() -> anyhow::Result<()> {
    let config = load_config::<ApiConfig>().context("loading tablesync configuration")?;

    log_pg_connection_config("source", &config.source);
    log_pg_connection_config("destination", &config.destination);
    info!(
        source_table = config.pipeline.source_table,
        destination_table = config.pipeline.destination_table,
        "pipeline configuration",
    );

    let application = Application::build(config).await?;
    info!(port = application.port(), "starting http server");
    application.run_until_stopped().await?;

    Ok(())
}

fn log_pg_connection_config(role: &str, config: &PgConnectionConfig) {
    info!(
        role,
        host = config.host,
        port = config.port,
        dbname = config.name,
        username = config.username,
        tls_enabled = config.tls.enabled,
        "pg database options",
    );
}
