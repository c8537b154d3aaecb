use sqlx::PgConnection;
use tablesync_postgres::schema::{self, ColumnDefinition};
use tracing::{debug, info};

use crate::error::ReplicationError;

/// Makes sure the destination table exists, creating it from the source's
/// schema when absent.
///
/// Mutates the destination schema at most once per run, only on the
/// table-absent branch. Creation is `IF NOT EXISTS`, so two concurrent runs
/// racing on the same absent table both succeed. Returns whether the table
/// was created. A failed `CREATE` is not retried and no cleanup of a
/// partially provisioned destination is attempted.
pub async fn ensure_destination_table(
    source_conn: &mut PgConnection,
    destination_conn: &mut PgConnection,
    source_table: &str,
    destination_table: &str,
) -> Result<bool, ReplicationError> {
    let exists = schema::table_exists(&mut *destination_conn, destination_table)
        .await
        .map_err(|source| ReplicationError::MetadataQuery {
            table: destination_table.to_string(),
            source,
        })?;

    if exists {
        debug!(table = destination_table, "destination table already exists");
        return Ok(false);
    }

    let columns = schema::read_columns(&mut *source_conn, source_table)
        .await
        .map_err(|source| ReplicationError::MetadataQuery {
            table: source_table.to_string(),
            source,
        })?;

    let statement = build_create_table_statement(destination_table, source_table, &columns)?;

    sqlx::query(&statement)
        .execute(&mut *destination_conn)
        .await
        .map_err(|source| ReplicationError::Provisioning {
            table: destination_table.to_string(),
            source,
        })?;

    info!(
        table = destination_table,
        columns = columns.len(),
        "created destination table"
    );

    Ok(true)
}

/// Builds the `CREATE TABLE IF NOT EXISTS` statement for the destination.
///
/// An empty column list means the source table is missing or has a
/// zero-column schema; the resulting statement would be malformed, so this
/// fails before anything is sent to the database.
pub fn build_create_table_statement(
    destination_table: &str,
    source_table: &str,
    columns: &[ColumnDefinition],
) -> Result<String, ReplicationError> {
    if columns.is_empty() {
        return Err(ReplicationError::SchemaDerivation {
            table: source_table.to_string(),
        });
    }

    let definitions = columns
        .iter()
        .map(ColumnDefinition::to_sql)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {destination_table} ({definitions})"
    ))
}
