use serde::Deserialize;

/// Identifies the table pair a replication run copies between.
///
/// Table names are trusted configuration values and are interpolated verbatim
/// into the statements the engine issues.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// The table copied from, in the source database's `public` schema.
    pub source_table: String,
    /// The table copied into, created on first use if absent.
    pub destination_table: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_config_deserializes() {
        let config: PipelineConfig = serde_json::from_value(serde_json::json!({
            "source_table": "users",
            "destination_table": "users_copy"
        }))
        .unwrap();

        assert_eq!(config.source_table, "users");
        assert_eq!(config.destination_table, "users_copy");
    }
}
