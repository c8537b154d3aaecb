use serde::Deserialize;
use tablesync_config::shared::{PgConnectionConfig, PipelineConfig};

/// Top-level configuration for the tablesync service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub application: ApplicationSettings,
    /// The database the rows are copied from.
    pub source: PgConnectionConfig,
    /// The database the rows are copied into.
    pub destination: PgConnectionConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_deserializes_from_layered_shape() {
        let config: ApiConfig = serde_json::from_value(serde_json::json!({
            "application": { "host": "127.0.0.1", "port": 3000 },
            "source": {
                "host": "localhost",
                "port": 5432,
                "name": "app",
                "username": "postgres",
                "password": "postgres"
            },
            "destination": {
                "host": "localhost",
                "port": 5433,
                "name": "app",
                "username": "postgres",
                "password": "postgres"
            },
            "pipeline": {
                "source_table": "users",
                "destination_table": "users"
            }
        }))
        .unwrap();

        assert_eq!(config.application.port, 3000);
        assert_eq!(config.source.port, 5432);
        assert_eq!(config.destination.port, 5433);
        assert_eq!(config.pipeline.source_table, "users");
    }
}
