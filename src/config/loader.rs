//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggingConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("level_override_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_load_config() {
        let path = temp_path("loader_ok");
        fs::write(&path, "level = \"debug\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.level, Some(Level::DEBUG));

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("loader_missing");
        assert!(matches!(load_config(&missing), Err(ConfigError::Io(_))));

        let path = temp_path("loader_bad");
        fs::write(&path, "level = \"chatty\"\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));

        fs::remove_file(&path).unwrap_or_default();
    }
}
