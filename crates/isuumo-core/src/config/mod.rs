use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::catalog::SearchConditions;
use crate::error::Result;

mod env;

pub const DB_PATH_ENV: &str = "ISUUMO_DB_PATH";
pub const FIXTURE_DIR_ENV: &str = "ISUUMO_FIXTURE_DIR";
pub const FEATURE_THROTTLE_MS_ENV: &str = "ISUUMO_FEATURE_THROTTLE_MS";
pub const HOST_ENV: &str = "ISUUMO_HOST";
pub const PORT_ENV: &str = "SERVER_PORT";

pub const DEFAULT_DB_PATH: &str = "isuumo.sqlite3";
pub const DEFAULT_FEATURE_THROTTLE_MS: u64 = 500;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1323;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub fixture_dir: Option<PathBuf>,
    pub feature_throttle: Duration,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            fixture_dir: None,
            feature_throttle: Duration::from_millis(DEFAULT_FEATURE_THROTTLE_MS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_path: env::read_non_empty_env(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            fixture_dir: env::read_non_empty_env(FIXTURE_DIR_ENV).map(PathBuf::from),
            feature_throttle: env::read_env_u64(FEATURE_THROTTLE_MS_ENV)
                .map_or(defaults.feature_throttle, Duration::from_millis),
            host: env::read_non_empty_env(HOST_ENV).unwrap_or(defaults.host),
            port: env::read_env_u16(PORT_ENV).unwrap_or(defaults.port),
        }
    }

    /// Loads the fixture catalogs when a directory is configured, otherwise
    /// the built-in catalogs derived from the classifier thresholds.
    pub fn load_conditions(&self) -> Result<SearchConditions> {
        match &self.fixture_dir {
            Some(dir) => {
                let conditions = SearchConditions::load(dir)?;
                info!(dir = %dir.display(), "loaded search conditions");
                Ok(conditions)
            }
            None => Ok(SearchConditions::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_match_service_conventions() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, PathBuf::from("isuumo.sqlite3"));
        assert_eq!(config.feature_throttle, Duration::from_millis(500));
        assert_eq!(config.port, 1323);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.fixture_dir.is_none());
    }

    #[test]
    fn builtin_conditions_are_used_without_fixture_dir() {
        let conditions = AppConfig::default().load_conditions().expect("conditions");
        assert_eq!(conditions, SearchConditions::default());
    }

    #[test]
    fn missing_fixture_dir_fails_startup() {
        let temp = tempdir().expect("tempdir");
        let config = AppConfig {
            fixture_dir: Some(temp.path().join("absent")),
            ..AppConfig::default()
        };
        assert!(config.load_conditions().is_err());
    }
}
