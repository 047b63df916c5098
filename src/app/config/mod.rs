use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub mod user;

pub use user::UserConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipients")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }

    pub fn load_from(path: &Path) -> Result<UserConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_default(path: &Path) -> Result<UserConfig, ConfigError> {
        let config = UserConfig::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(&config)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Load `config.toml`, creating it with defaults when missing.
    /// A broken file is reported and replaced by defaults for this run only.
    pub fn load_or_default(path: &Path) -> UserConfig {
        if !path.exists() {
            return match Self::write_default(path) {
                Ok(config) => {
                    info!(path = %path.display(), "created default config");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "could not create default config");
                    UserConfig::default()
                }
            };
        }

        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, "using default config");
            UserConfig::default()
        })
    }

    pub fn load() -> UserConfig {
        Self::load_or_default(&Self::get_config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig::load_or_default(&path);
        assert_eq!(config, UserConfig::default());
        assert!(path.exists());
        assert_eq!(AppConfig::load_from(&path).unwrap(), UserConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "reserve = 8\n\n[keys]\nquit = \"x\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.reserve, 8);
        assert_eq!(config.keys.quit, "x");
        assert_eq!(config.keys.toggle_tooltip, "t");
        assert_eq!(config.width_percent, 100);
        assert_eq!(config.resize_debounce_ms, 50);
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "reserve = \"lots\"").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(AppConfig::load_or_default(&path), UserConfig::default());
    }

    #[test]
    fn test_args_override_and_clamp() {
        let mut config = UserConfig::default();
        let args = crate::app::Args {
            reserve: Some(2),
            width_percent: Some(40),
            debounce_ms: Some(0),
            ..Default::default()
        };
        config.apply_args(&args);
        assert_eq!(config.reserve, 2);
        assert_eq!(config.width_percent, 40);
        assert_eq!(config.resize_debounce_ms, 0);

        let mut config = UserConfig {
            width_percent: 5,
            ..Default::default()
        };
        config.apply_args(&crate::app::Args::default());
        assert_eq!(config.width_percent, 20);
    }
}
