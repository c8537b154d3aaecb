use sqlx::{PgPool, postgres::PgPoolOptions};
use tablesync_config::shared::PgConnectionConfig;

/// Creates a lazily connecting Postgres pool from the provided configuration.
///
/// No connection is established until the pool is first used, so the service
/// can start before the databases are reachable. Acquisition blocks when all
/// connections are in use.
pub fn create_pool(config: &PgConnectionConfig, max_connections: u32) -> PgPool {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(config.with_db())
}
