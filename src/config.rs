//! Configuration module
//!
//! Settings are read from a TOML file (path from the `BOOKING_CONFIG`
//! environment variable, falling back to the platform config directory),
//! with environment overrides for the secrets.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub host: String,
    /// Bind port for the REST API
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path of the SQLite database file
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./reservas.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Connection URL for SeaORM. `DATABASE_URL` overrides the file path.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite://{}?mode=rwc", self.path))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. "info" or "court_booking=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Shared secret expected in the `X-Admin-Key` header on reservation delete.
    /// `BOOKING_ADMIN_KEY` overrides the file value.
    pub admin_key: String,
    /// When false the delete endpoint skips the admin-key check entirely
    /// (the historical ungated behavior).
    pub require_admin_key: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            admin_key: String::new(),
            require_admin_key: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Re-run the slot conflict check when an update changes fecha/hora.
    pub recheck_conflict_on_update: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            recheck_conflict_on_update: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&raw)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults plus environment overrides, for deployments that run
    /// without a config file and pass the secret via `BOOKING_ADMIN_KEY`.
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("BOOKING_ADMIN_KEY") {
            self.security.admin_key = key;
        }
    }
}

/// Default config file location: `<config dir>/court-booking/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("court-booking").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.database.path, "./reservas.db");
        assert!(cfg.security.require_admin_key);
        assert!(cfg.booking.recheck_conflict_on_update);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [security]
            admin_key = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.security.admin_key, "s3cret");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn from_env_picks_up_admin_key_without_a_file() {
        std::env::set_var("BOOKING_ADMIN_KEY", "clave-desde-entorno");
        let cfg = AppConfig::from_env();
        std::env::remove_var("BOOKING_ADMIN_KEY");
        assert_eq!(cfg.security.admin_key, "clave-desde-entorno");
        assert!(cfg.security.require_admin_key);
    }

    #[test]
    fn connection_url_points_at_sqlite_file() {
        let db = DatabaseSettings {
            path: "/tmp/reservas.db".to_string(),
        };
        assert_eq!(db.connection_url(), "sqlite:///tmp/reservas.db?mode=rwc");
    }
}
