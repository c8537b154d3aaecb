use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Connection parameters for one Postgres instance.
///
/// The password is wrapped in a [`SecretString`] so it is never printed by
/// accident when the configuration is logged.
#[derive(Debug, Clone, Deserialize)]
pub struct PgConnectionConfig {
    pub host: String,
    pub port: u16,
    /// The database name to connect to.
    pub name: String,
    pub username: String,
    pub password: Option<SecretString>,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl PgConnectionConfig {
    /// Returns sqlx connection options without a database selected.
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.tls.enabled {
            PgSslMode::VerifyFull
        } else {
            PgSslMode::Prefer
        };

        let mut options = PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .ssl_mode(ssl_mode);

        if self.tls.enabled {
            options = options
                .ssl_root_cert_from_pem(self.tls.trusted_root_certs.clone().into_bytes());
        }

        if let Some(password) = &self.password {
            options = options.password(password.expose_secret());
        }

        options
    }

    /// Returns sqlx connection options with the configured database selected.
    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    /// PEM-encoded trusted root certificates used when TLS is enabled.
    #[serde(default)]
    pub trusted_root_certs: String,
    #[serde(default)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_config_deserializes_without_tls_block() {
        let config: PgConnectionConfig = serde_json::from_value(serde_json::json!({
            "host": "localhost",
            "port": 5432,
            "name": "appdb",
            "username": "postgres",
            "password": "secret"
        }))
        .unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.name, "appdb");
        assert!(!config.tls.enabled);
        assert!(config.password.is_some());
    }

    #[test]
    fn password_is_not_exposed_by_debug() {
        let config: PgConnectionConfig = serde_json::from_value(serde_json::json!({
            "host": "localhost",
            "port": 5432,
            "name": "appdb",
            "username": "postgres",
            "password": "supersecret"
        }))
        .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecret"));
    }
}
