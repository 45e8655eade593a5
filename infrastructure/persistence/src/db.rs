use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

use crate::schema::SchemaError;

/// Migrations shipped with the crate, embedded at build time.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.configuration_error: {0}")]
    ConfigurationError(&'static str),
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
    #[error("database.schema_mismatch")]
    SchemaMismatch(#[from] SchemaError),
}

/// Configuration for the database connection.
///
/// Has no `Default`; a store is only reachable through an explicit
/// connection string.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, acquire_timeout: Duration) -> Self {
        self.acquire_timeout = acquire_timeout;
        self
    }

    fn validate(&self) -> Result<(), DatabaseError> {
        if self.connection_string.trim().is_empty() {
            return Err(DatabaseError::ConfigurationError(
                "connection string is empty",
            ));
        }
        if self.max_connections == 0 {
            return Err(DatabaseError::ConfigurationError(
                "max_connections must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    config.validate()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_pool_defaults() {
        let config = DatabaseConfig::new("postgres://localhost/shopping");

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_override_pool_settings() {
        let config = DatabaseConfig::new("postgres://localhost/shopping")
            .with_max_connections(12)
            .with_acquire_timeout(Duration::from_secs(2));

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn should_reject_empty_connection_string() {
        let result = create_postgres_pool(&DatabaseConfig::new("  ")).await;

        assert!(matches!(
            result,
            Err(DatabaseError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn should_reject_zero_connections() {
        let config = DatabaseConfig::new("postgres://localhost/shopping").with_max_connections(0);

        let result = create_postgres_pool(&config).await;

        assert!(matches!(
            result,
            Err(DatabaseError::ConfigurationError(_))
        ));
    }

    #[test]
    fn should_embed_the_schema_migration() {
        assert!(
            MIGRATOR
                .iter()
                .any(|migration| migration.description == "create shopping list")
        );
    }
}
