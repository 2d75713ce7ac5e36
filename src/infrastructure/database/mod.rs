pub mod entities;
pub mod migrator;
pub mod repositories;
pub mod seed;

pub use repositories::SeaOrmRepositoryProvider;
pub use seed::seed_if_empty;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./reservas.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./reservas.db?mode=rwc".to_string(),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    // sqlx turns PRAGMA foreign_keys on for every pooled SQLite connection,
    // which the cascade/restrict rules in the schema rely on.
    let db = Database::connect(&config.url).await?;
    info!("Database connected successfully");
    Ok(db)
}
