use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, web};
use sqlx::PgPool;
use tablesync_postgres::pool::create_pool;
use tablesync_replication::ReplicationPipeline;
use tracing_actix_web::TracingLogger;

use crate::config::ApiConfig;
use crate::routes::{health_check::health_check, replicate::replicate};

/// Each run holds at most one connection per database; a few spare
/// connections let concurrent triggers proceed without blocking each other.
const MAX_POOL_CONNECTIONS: u32 = 4;

/// Tablesync application server wrapper.
///
/// Manages the HTTP server lifecycle from startup to shutdown.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Builds the server: connection pools, listener, routes.
    ///
    /// Pools connect lazily, so both databases may be unreachable at startup
    /// without failing the build.
    pub async fn build(config: ApiConfig) -> Result<Self, anyhow::Error> {
        let source_pool = create_pool(&config.source, MAX_POOL_CONNECTIONS);
        let destination_pool = create_pool(&config.destination, MAX_POOL_CONNECTIONS);

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, source_pool, destination_pool, config)?;

        Ok(Self { port, server })
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Runs the server until it receives a shutdown signal.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Creates and configures the HTTP server with all routes and middleware.
pub fn run(
    listener: TcpListener,
    source_pool: PgPool,
    destination_pool: PgPool,
    config: ApiConfig,
) -> Result<Server, anyhow::Error> {
    let pipeline = web::Data::new(ReplicationPipeline::new(
        source_pool,
        destination_pool,
        config.pipeline,
    ));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(replicate)
            .app_data(pipeline.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
