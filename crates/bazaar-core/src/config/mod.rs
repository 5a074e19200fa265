//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so an absent file yields a
//! usable configuration.

pub mod guard;
pub mod logging;
pub mod menu;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::guard::{DenialBehavior, GuardConfig};
pub use self::logging::LoggingConfig;
pub use self::menu::MenuConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `BAZAAR__GUARD__LANDING_PATH`.
pub const ENV_PREFIX: &str = "BAZAAR";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persisted session record settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Route guard settings.
    #[serde(default)]
    pub guard: GuardConfig,
    /// Navigation menu settings.
    #[serde(default)]
    pub menu: MenuConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config_path` with an environment-specific overlay
    /// (`config/{env}`) and environment variables prefixed with `BAZAAR`.
    /// Missing files are skipped.
    pub fn load(config_path: &str, env: &str) -> Result<Self, AppError> {
        tracing::debug!(config = %config_path, env = %env, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.path.trim().is_empty() {
            return Err(AppError::configuration("session.path must not be empty"));
        }
        for (name, path) in [
            ("guard.landing_path", &self.guard.landing_path),
            ("guard.login_path", &self.guard.login_path),
        ] {
            if !path.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "{name} must be an absolute route path, got '{path}'"
                )));
            }
        }
        if self.guard.landing_path == self.guard.login_path {
            return Err(AppError::configuration(
                "guard.landing_path and guard.login_path must differ",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session.path, "data/session.json");
        assert_eq!(config.guard.landing_path, "/dashboard");
        assert_eq!(config.guard.login_path, "/login");
        assert_eq!(config.guard.on_denied, DenialBehavior::Redirect);
        assert!(config.menu.definition_path.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist.toml", "no-such-env").unwrap();
        assert_eq!(config.guard.landing_path, "/dashboard");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[guard]\non_denied = \"explode\"\n").unwrap();

        let err = AppConfig::load(path.to_str().unwrap(), "no-such-env").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.source.is_some());
    }

    #[test]
    fn test_relative_landing_path_is_rejected() {
        let mut config = AppConfig::default();
        config.guard.landing_path = "dashboard".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_landing_equal_to_login_is_rejected() {
        let mut config = AppConfig::default();
        config.guard.landing_path = "/login".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{ "guard": { "on_denied": "access_denied" } }"#).unwrap();
        assert_eq!(parsed.guard.on_denied, DenialBehavior::AccessDenied);
        assert_eq!(parsed.guard.landing_path, "/dashboard");
        assert_eq!(parsed.session.path, "data/session.json");
    }
}
