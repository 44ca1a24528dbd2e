//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{Argon2Config, AuthConfig, BootstrapAdminConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay) and `VENUEHUB__*` variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `VENUEHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("VENUEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        for (name, days) in [
            ("auth.token_ttl_days", self.auth.token_ttl_days),
            ("auth.cookie_max_age_days", self.auth.cookie_max_age_days),
        ] {
            if !(1..=auth::MAX_LIFETIME_DAYS).contains(&days) {
                return Err(AppError::configuration(format!(
                    "{name} must be between 1 and {} days, got {days}",
                    auth::MAX_LIFETIME_DAYS
                )));
            }
        }
        match self.store.provider.as_str() {
            "postgres" | "memory" => {}
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: {other}"
                )));
            }
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(AppError::configuration(format!(
                "Unknown log format: {}",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Whether the shipped placeholder signing secret is still in use.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.auth.jwt_secret == auth::PLACEHOLDER_JWT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.uses_placeholder_secret());
        assert_eq!(config.auth.token_ttl_days, 14);
        assert_eq!(config.auth.cookie_max_age_days, 30);
        assert_eq!(config.auth.password_min_length, 8);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lifetimes_bounded() {
        let mut config = AppConfig::default();
        config.auth.token_ttl_days = 0;
        assert!(config.validate().is_err());

        config.auth.token_ttl_days = 1_000_000_000;
        assert!(config.validate().is_err());

        config.auth.token_ttl_days = auth::MAX_LIFETIME_DAYS;
        assert!(config.validate().is_ok());

        config.auth.cookie_max_age_days = 0;
        assert!(config.validate().is_err());

        config.auth.cookie_max_age_days = -30;
        assert!(config.validate().is_err());

        config.auth.cookie_max_age_days = auth::MAX_LIFETIME_DAYS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let mut config = AppConfig::default();
        config.store.provider = "mongo".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"store": {"provider": "memory"}}"#)
            .expect("partial config should deserialize");
        assert_eq!(parsed.store.provider, "memory");
        assert_eq!(parsed.server.port, 8080);
        assert!(parsed.auth.bootstrap_admin.is_none());
    }
}
