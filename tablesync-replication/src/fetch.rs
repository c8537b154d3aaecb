use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Column, PgExecutor, Row, TypeInfo};
use uuid::Uuid;

use crate::error::ReplicationError;
use crate::types::{Cell, Record};

/// Executes a full-table scan of the source and materializes every row.
///
/// The whole result set is held in memory, which bounds the engine to tables
/// that fit in available memory. Any execution or decode failure, including
/// table-not-found, fails the fetch.
pub async fn fetch_all<'c, E>(executor: E, table: &str) -> Result<Vec<Record>, ReplicationError>
where
    E: PgExecutor<'c>,
{
    let statement = format!("SELECT * FROM {table}");

    let rows = sqlx::query(&statement)
        .fetch_all(executor)
        .await
        .map_err(|source| ReplicationError::SourceQuery {
            table: table.to_string(),
            source,
        })?;

    rows.iter().map(|row| record_from_row(table, row)).collect()
}

/// Decodes one result row into a column-name-keyed record.
fn record_from_row(table: &str, row: &PgRow) -> Result<Record, ReplicationError> {
    let mut record = Record::new();

    for (index, column) in row.columns().iter().enumerate() {
        let cell = decode_cell(table, row, index)?;
        record.insert(column.name().to_string(), cell);
    }

    Ok(record)
}

/// Maps a Postgres value to its [`Cell`] variant based on the column's type.
fn decode_cell(table: &str, row: &PgRow, index: usize) -> Result<Cell, ReplicationError> {
    let column = &row.columns()[index];
    let type_name = column.type_info().name();

    let source_query_error = |source: sqlx::Error| ReplicationError::SourceQuery {
        table: table.to_string(),
        source,
    };

    let cell = match type_name {
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Bool),
        "INT2" => row
            .try_get::<Option<i16>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::I16),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::I32),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::I64),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::F32),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::F64),
        "NUMERIC" => row
            .try_get::<Option<BigDecimal>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Numeric),
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::String),
        "UUID" => row
            .try_get::<Option<Uuid>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Uuid),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Date),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Time),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Timestamp),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::TimestampTz),
        "JSON" | "JSONB" => row
            .try_get::<Option<serde_json::Value>, _>(index)
            .map_err(source_query_error)?
            .map_or(Cell::Null, Cell::Json),
        other => {
            return Err(ReplicationError::UnsupportedColumnType {
                table: table.to_string(),
                column: column.name().to_string(),
                data_type: other.to_string(),
            });
        }
    };

    Ok(cell)
}
