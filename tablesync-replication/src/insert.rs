use sqlx::PgConnection;
use tablesync_postgres::schema;
use tracing::debug;

use crate::error::ReplicationError;
use crate::types::{Cell, Record};

/// Inserts all fetched records into the destination with one bulk statement.
///
/// The column list is read from the destination's own catalog, never the
/// source's, so a pre-existing destination whose schema has diverged governs
/// which values are inserted. The batch is all-or-nothing: any render or
/// execution failure rejects every row. Returns the number of rows inserted.
pub async fn insert_all(
    conn: &mut PgConnection,
    table: &str,
    records: &[Record],
) -> Result<u64, ReplicationError> {
    // An INSERT with an empty VALUES list is invalid SQL; an empty fetch
    // issues no statements at all.
    if records.is_empty() {
        debug!(table, "no records to insert");
        return Ok(0);
    }

    let columns = schema::read_columns(&mut *conn, table)
        .await
        .map_err(|source| ReplicationError::MetadataQuery {
            table: table.to_string(),
            source,
        })?;

    let column_names: Vec<String> = columns.into_iter().map(|column| column.name).collect();

    let Some(statement) = build_insert_statement(table, &column_names, records) else {
        return Err(ReplicationError::SchemaDerivation {
            table: table.to_string(),
        });
    };

    let result = sqlx::query(&statement)
        .execute(&mut *conn)
        .await
        .map_err(|source| ReplicationError::Insert {
            table: table.to_string(),
            source,
        })?;

    Ok(result.rows_affected())
}

/// Renders the multi-row `INSERT` statement, or `None` when either the
/// record set or the column list is empty.
///
/// For every record, values are looked up by the destination's column names
/// in catalog order; a column absent from a record renders as `NULL`.
pub fn build_insert_statement(
    table: &str,
    columns: &[String],
    records: &[Record],
) -> Option<String> {
    if records.is_empty() || columns.is_empty() {
        return None;
    }

    let column_list = columns.join(", ");

    let rows = records
        .iter()
        .map(|record| {
            let values = columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map_or_else(|| Cell::Null.to_sql_literal(), Cell::to_sql_literal)
                })
                .collect::<Vec<_>>()
                .join(", ");

            format!("({values})")
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("INSERT INTO {table} ({column_list}) VALUES {rows}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn record(entries: &[(&str, Cell)]) -> Record {
        entries
            .iter()
            .map(|(name, cell)| (name.to_string(), cell.clone()))
            .collect()
    }

    #[test]
    fn empty_record_set_builds_no_statement() {
        assert_eq!(build_insert_statement("t", &columns(&["a"]), &[]), None);
    }

    #[test]
    fn empty_column_list_builds_no_statement() {
        let records = vec![record(&[("a", Cell::I32(1))])];
        assert_eq!(build_insert_statement("t", &[], &records), None);
    }

    #[test]
    fn single_record_renders_values_in_column_order() {
        let records = vec![record(&[
            ("name", Cell::String("O'Brien".to_string())),
            ("id", Cell::I32(1)),
            ("active", Cell::Bool(true)),
        ])];

        let statement =
            build_insert_statement("users_copy", &columns(&["id", "name", "active"]), &records)
                .unwrap();

        assert_eq!(
            statement,
            "INSERT INTO users_copy (id, name, active) VALUES (1, 'O''Brien', true)"
        );
    }

    #[test]
    fn null_and_absent_columns_render_as_null_literal() {
        let records = vec![record(&[("id", Cell::I32(7)), ("note", Cell::Null)])];

        let statement =
            build_insert_statement("t", &columns(&["id", "note", "missing"]), &records).unwrap();

        assert_eq!(statement, "INSERT INTO t (id, note, missing) VALUES (7, NULL, NULL)");
    }

    #[test]
    fn multiple_records_join_into_one_statement() {
        let records = vec![
            record(&[("id", Cell::I32(1)), ("name", Cell::String("a".to_string()))]),
            record(&[("id", Cell::I32(2)), ("name", Cell::String("b".to_string()))]),
        ];

        let statement =
            build_insert_statement("t", &columns(&["id", "name"]), &records).unwrap();

        assert_eq!(statement, "INSERT INTO t (id, name) VALUES (1, 'a'), (2, 'b')");
    }

    #[test]
    fn null_never_renders_as_empty_string() {
        let records = vec![record(&[("c", Cell::Null)])];

        let statement = build_insert_statement("t", &columns(&["c"]), &records).unwrap();

        assert_eq!(statement, "INSERT INTO t (c) VALUES (NULL)");
        assert!(!statement.contains("''"));
    }
}
