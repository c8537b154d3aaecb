use sqlx::{PgExecutor, Row};

/// A single column read from `information_schema.columns`.
///
/// Immutable once read. Ordering of a column list follows the catalog's
/// `ordinal_position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    /// The declared data type, as reported by the catalog (e.g. `integer`,
    /// `character varying`).
    pub data_type: String,
    /// Maximum length for variable-length types, when the catalog reports one.
    pub character_maximum_length: Option<i32>,
}

impl ColumnDefinition {
    /// Renders the column as a `CREATE TABLE` column definition fragment.
    pub fn to_sql(&self) -> String {
        match self.character_maximum_length {
            Some(len) => format!("{} {}({len})", self.name, self.data_type),
            None => format!("{} {}", self.name, self.data_type),
        }
    }
}

/// Reads the column definitions of a table in the `public` schema.
///
/// Returns an empty vector when the table does not exist or has no columns;
/// a non-empty result is the only signal of existence callers may rely on
/// from this query.
pub async fn read_columns<'c, E>(
    executor: E,
    table: &str,
) -> Result<Vec<ColumnDefinition>, sqlx::Error>
where
    E: PgExecutor<'c>,
{
    let query = r#"
        select
            column_name::text as name,
            data_type::text as data_type,
            character_maximum_length::int4 as character_maximum_length
        from information_schema.columns
        where table_schema = 'public' and table_name = $1
        order by ordinal_position
        "#;

    let columns = sqlx::query(query)
        .bind(table)
        .fetch_all(executor)
        .await?
        .iter()
        .map(|row| ColumnDefinition {
            name: row.get("name"),
            data_type: row.get("data_type"),
            character_maximum_length: row.get("character_maximum_length"),
        })
        .collect();

    Ok(columns)
}

/// Checks whether a table exists in the `public` schema.
pub async fn table_exists<'c, E>(executor: E, table: &str) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'c>,
{
    let query = r#"
        select exists (
            select from information_schema.tables
            where table_schema = 'public' and table_name = $1
        ) as "exists"
        "#;

    let row = sqlx::query(query).bind(table).fetch_one(executor).await?;

    Ok(row.get("exists"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_definition_renders_without_length() {
        let column = ColumnDefinition {
            name: "id".to_string(),
            data_type: "integer".to_string(),
            character_maximum_length: None,
        };

        assert_eq!(column.to_sql(), "id integer");
    }

    #[test]
    fn column_definition_renders_with_length() {
        let column = ColumnDefinition {
            name: "email".to_string(),
            data_type: "character varying".to_string(),
            character_maximum_length: Some(255),
        };

        assert_eq!(column.to_sql(), "email character varying(255)");
    }
}
