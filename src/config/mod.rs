use std::path::PathBuf;

use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::ConfigError;

const ENV_PREFIX: &str = "CHANTIER_";

/// Configuration for the application
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// JSON data set to load instead of the demo records
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Where tracing output goes; the terminal itself belongs to the UI
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Rows shown in the dashboard's recent projects and invoices tables
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("chantier-backoffice.log")
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file: default_log_file(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Load configuration from `CHANTIER_*` environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize prefixed environment variables into Config struct
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();

        let config = envy::prefixed(ENV_PREFIX).from_env::<Config>()?;
        config.validate()
    }

    /// Same as [`Config::load`] but from an explicit list of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?;
        config.validate()
    }

    /// Applies command line values on top of the environment, then checks
    /// the result with the same rules.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        recent_limit: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = data_file {
            self.data_file = Some(path);
        }
        if let Some(limit) = recent_limit {
            self.recent_limit = limit;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.recent_limit == 0 {
            return Err(ConfigError::Invalid {
                name: "CHANTIER_RECENT_LIMIT",
                expected: "at least 1",
                value: self.recent_limit.to_string(),
            });
        }
        Ok(self)
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config, ConfigError> {
    Config::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_vars(vars(&[("UNRELATED", "1")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn prefixed_variables_are_read() {
        let config = Config::from_vars(vars(&[
            ("CHANTIER_DATA_FILE", "/tmp/chantier.json"),
            ("CHANTIER_LOG_FILE", "/tmp/chantier.log"),
            ("CHANTIER_RECENT_LIMIT", "10"),
        ]))
        .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/chantier.json")));
        assert_eq!(config.log_file, PathBuf::from("/tmp/chantier.log"));
        assert_eq!(config.recent_limit, 10);
    }

    #[test]
    fn zero_recent_limit_is_rejected() {
        let err = Config::from_vars(vars(&[("CHANTIER_RECENT_LIMIT", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn command_line_zero_recent_limit_is_rejected_like_env() {
        let err = Config::default().with_overrides(None, Some(0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn command_line_values_override_environment() {
        let config = Config::from_vars(vars(&[("CHANTIER_RECENT_LIMIT", "3")]))
            .unwrap()
            .with_overrides(Some(PathBuf::from("/tmp/other.json")), Some(8))
            .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/other.json")));
        assert_eq!(config.recent_limit, 8);

        let untouched = Config::default().with_overrides(None, None).unwrap();
        assert_eq!(untouched, Config::default());
    }

    #[test]
    fn non_numeric_recent_limit_is_an_env_error() {
        let err = Config::from_vars(vars(&[("CHANTIER_RECENT_LIMIT", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)), "unexpected error: {err:?}");
    }
}
