use thiserror::Error;

/// Errors surfaced by a replication run.
///
/// None of these are recovered internally; each aborts the current run and is
/// reported to the triggering interface as text. A failed run makes no
/// guarantee about how much of the destination was mutated: the destination
/// table may exist even when a later insert failed.
#[derive(Debug, Error)]
pub enum ReplicationError {
    /// A catalog query (column metadata or table existence) failed to execute.
    #[error("metadata query for table `{table}` failed: {source}")]
    MetadataQuery {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// The full-table scan of the source failed, including table-not-found.
    #[error("reading rows from source table `{table}` failed: {source}")]
    SourceQuery {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// A fetched column has a Postgres type the engine cannot represent.
    #[error("column `{column}` of table `{table}` has unsupported type `{data_type}`")]
    UnsupportedColumnType {
        table: String,
        column: String,
        data_type: String,
    },

    /// The catalog returned zero columns, so no valid statement can be built.
    #[error("table `{table}` has a zero-column schema; no statement can be derived from it")]
    SchemaDerivation { table: String },

    /// The `CREATE TABLE IF NOT EXISTS` statement failed on the destination.
    #[error("creating destination table `{table}` failed: {source}")]
    Provisioning {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// The bulk insert failed; the whole batch is rejected, no partial rows.
    #[error("bulk insert into table `{table}` failed: {source}")]
    Insert {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}
