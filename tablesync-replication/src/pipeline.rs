use sqlx::PgPool;
use tablesync_config::shared::PipelineConfig;
use tracing::info;

use crate::error::ReplicationError;
use crate::{fetch, insert, provision};

/// Orchestrates one full replication run: source read, schema ensure, insert.
///
/// The pools are injected at construction; each run acquires exactly one
/// source and one destination connection. Connections are pool guards, so
/// they are released exactly once on every exit path, success or failure.
/// No retries and no internal deadline; a hanging query blocks the run.
pub struct ReplicationPipeline {
    source_pool: PgPool,
    destination_pool: PgPool,
    config: PipelineConfig,
}

impl ReplicationPipeline {
    pub fn new(source_pool: PgPool, destination_pool: PgPool, config: PipelineConfig) -> Self {
        Self {
            source_pool,
            destination_pool,
            config,
        }
    }

    /// The table this pipeline copies from.
    pub fn source_table(&self) -> &str {
        &self.config.source_table
    }

    /// The table this pipeline copies into.
    pub fn destination_table(&self) -> &str {
        &self.config.destination_table
    }

    /// Runs one replication end to end and returns the inserted row count.
    pub async fn replicate(&self) -> Result<u64, ReplicationError> {
        let source_table = &self.config.source_table;
        let destination_table = &self.config.destination_table;

        let mut source_conn = self.source_pool.acquire().await.map_err(|source| {
            ReplicationError::SourceQuery {
                table: source_table.clone(),
                source,
            }
        })?;

        let records = fetch::fetch_all(&mut *source_conn, source_table).await?;
        info!(
            rows = records.len(),
            table = %source_table,
            "fetched source rows"
        );

        let mut destination_conn = self.destination_pool.acquire().await.map_err(|source| {
            ReplicationError::Provisioning {
                table: destination_table.clone(),
                source,
            }
        })?;

        let created = provision::ensure_destination_table(
            &mut source_conn,
            &mut destination_conn,
            source_table,
            destination_table,
        )
        .await?;

        // The source connection is only needed for the scan and the schema
        // read; return it to the pool before the insert runs.
        drop(source_conn);

        let inserted = insert::insert_all(&mut destination_conn, destination_table, &records).await?;
        info!(
            rows = inserted,
            table = %destination_table,
            created_destination = created,
            "replication run complete"
        );

        Ok(inserted)
    }
}
