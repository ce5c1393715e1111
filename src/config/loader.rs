//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::FinderConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV_VAR: &str = "FINDER_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FinderConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<FinderConfig, ConfigError> {
    let config: FinderConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load configuration from `FINDER_CONFIG` if set, otherwise use defaults.
///
/// Defaults are validated too, so a bad default never reaches the server.
pub fn load_from_env() -> Result<(FinderConfig, Option<PathBuf>), ConfigError> {
    match std::env::var_os(CONFIG_PATH_ENV_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            let config = FinderConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok((config, None))
        }
    }
}
