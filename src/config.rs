use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Environment variable that overrides `tmdb.api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

pub const APP_DIR: &str = "moviemuse";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Video host a trailer must come from.
    pub video_site: String,
    pub trailer_base_url: String,
    pub posters: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Config {
    /// Load config: the user file when one exists, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let user_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::config_path(),
        };

        let config = match user_path {
            Some(p) if p.exists() => {
                tracing::info!(path = %p.display(), "loading config");
                let content = std::fs::read_to_string(&p)?;
                Self::from_toml(&content)?
            }
            _ => Self::from_toml(DEFAULT_CONFIG)?,
        };

        Ok(config.with_env_key(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// A non-empty env key wins over whatever the file says.
    pub fn with_env_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.tmdb.api_key = key.trim().to_string();
        }
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        let key = self.tmdb.api_key.trim();
        (!key.is_empty()).then_some(key)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.tmdb.timeout_secs.max(1))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default();
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(config.ui.video_site, "YouTube");
        assert!(config.ui.posters);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut config = Config::default();
        config.tmdb.api_key = "from-file".into();

        let config = config.with_env_key(Some(" from-env ".into()));
        assert_eq!(config.api_key(), Some("from-env"));
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut config = Config::default();
        config.tmdb.api_key = "from-file".into();

        let config = config.with_env_key(Some("   ".into()));
        assert_eq!(config.api_key(), Some("from-file"));
    }

    #[test]
    fn user_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.ui.posters = false;
        config.tmdb.timeout_secs = 3;
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert!(!loaded.ui.posters);
        assert_eq!(loaded.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = Config::from_toml("[tmdb\napi_key = 1").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
