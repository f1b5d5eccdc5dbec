//! Configuration management for the Biblioteca server
//!
//! Everything comes from environment variables (optionally via a `.env`
//! file): `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` for the database,
//! `SERVER_HOST`/`SERVER_PORT` for the listener and `LOG_LEVEL` for tracing.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Fixed port of the managed MySQL service.
pub const DATABASE_PORT: u16 = 24111;

/// CA bundle used to verify the database TLS certificate.
pub const DATABASE_CA_FILE: &str = "ca.pem";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let database = Config::builder()
            .add_source(Environment::with_prefix("DB"))
            .build()?
            .try_deserialize()?;

        let server = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .add_source(Environment::with_prefix("SERVER").try_parsing(true))
            .build()?
            .try_deserialize()?;

        let logging = Config::builder()
            .set_default("level", "info")?
            .add_source(Environment::with_prefix("LOG"))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            server,
            database,
            logging,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
