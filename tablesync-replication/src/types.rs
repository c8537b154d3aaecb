use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A single scalar value read from a source row.
///
/// Each variant carries its own SQL-literal rendering rule so the insert
/// builder never has to guess how a value should appear in statement text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Numeric(BigDecimal),
    String(String),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    Json(serde_json::Value),
}

impl Cell {
    /// Renders the value as a SQL literal for inclusion in statement text.
    ///
    /// Strings are single-quoted with embedded single quotes doubled; no
    /// other character classes are escaped. This is a narrow, documented
    /// contract, not general injection hardening. Numbers and booleans use
    /// their natural unquoted form, except non-finite floats which Postgres
    /// only accepts as quoted spellings.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Cell::Null => "NULL".to_string(),
            Cell::Bool(value) => value.to_string(),
            Cell::I16(value) => value.to_string(),
            Cell::I32(value) => value.to_string(),
            Cell::I64(value) => value.to_string(),
            Cell::F32(value) => float_literal(f64::from(*value)),
            Cell::F64(value) => float_literal(*value),
            Cell::Numeric(value) => value.to_string(),
            Cell::String(value) => quote_text(value),
            Cell::Uuid(value) => quote_text(&value.to_string()),
            Cell::Date(value) => quote_text(&value.to_string()),
            Cell::Time(value) => quote_text(&value.to_string()),
            Cell::Timestamp(value) => quote_text(&value.to_string()),
            Cell::TimestampTz(value) => quote_text(&value.to_rfc3339()),
            Cell::Json(value) => quote_text(&value.to_string()),
        }
    }
}

/// Wraps a string in single quotes, doubling any embedded single quote.
fn quote_text(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Postgres accepts NaN and infinities only in their quoted spellings.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "'NaN'".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "'Infinity'".to_string()
        } else {
            "'-Infinity'".to_string()
        }
    } else {
        value.to_string()
    }
}

/// One source row, as a mapping from column name to value.
///
/// Produced by the fetcher and consumed read-only by the inserter, which
/// looks values up by the destination's column names. A column missing from
/// the record is treated as [`Cell::Null`].
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: HashMap<String, Cell>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: String, value: Cell) {
        self.values.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.values.get(column)
    }
}

impl FromIterator<(String, Cell)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn null_renders_as_null_literal() {
        assert_eq!(Cell::Null.to_sql_literal(), "NULL");
    }

    #[test]
    fn strings_are_quoted_and_single_quotes_doubled() {
        assert_eq!(
            Cell::String("O'Brien".to_string()).to_sql_literal(),
            "'O''Brien'"
        );
        assert_eq!(Cell::String("plain".to_string()).to_sql_literal(), "'plain'");
    }

    #[test]
    fn backslashes_pass_through_unescaped() {
        assert_eq!(
            Cell::String(r"C:\temp".to_string()).to_sql_literal(),
            r"'C:\temp'"
        );
    }

    #[test]
    fn numbers_and_booleans_render_unquoted() {
        assert_eq!(Cell::Bool(true).to_sql_literal(), "true");
        assert_eq!(Cell::I64(-42).to_sql_literal(), "-42");
        assert_eq!(Cell::F64(1.5).to_sql_literal(), "1.5");
        assert_eq!(
            Cell::Numeric(BigDecimal::from_str("12.340").unwrap()).to_sql_literal(),
            "12.340"
        );
    }

    #[test]
    fn non_finite_floats_render_quoted() {
        assert_eq!(Cell::F64(f64::NAN).to_sql_literal(), "'NaN'");
        assert_eq!(Cell::F64(f64::INFINITY).to_sql_literal(), "'Infinity'");
        assert_eq!(Cell::F64(f64::NEG_INFINITY).to_sql_literal(), "'-Infinity'");
    }

    #[test]
    fn timestamptz_renders_as_quoted_rfc3339() {
        let value = DateTime::parse_from_rfc3339("2024-05-01T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            Cell::TimestampTz(value).to_sql_literal(),
            "'2024-05-01T10:30:00+00:00'"
        );
    }

    #[test]
    fn json_renders_as_quoted_text() {
        let value = serde_json::json!({"k": "v"});
        assert_eq!(Cell::Json(value).to_sql_literal(), r#"'{"k":"v"}'"#);
    }
}
