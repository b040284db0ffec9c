// src/config.rs

use crate::constants::{
    API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_REFERER, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// --- Remote assistant ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub model: String,
    /// Replaced by `OPENROUTER_API_KEY` at load time when that is set.
    pub api_key: Option<String>,
    pub referer: String,
    pub title: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            referer: DEFAULT_REFERER.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

// --- Window ---

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

// --- Main Config Struct ---

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Loads `settings.json` from the OS config directory, then applies the
    /// `OPENROUTER_API_KEY` override. A missing file is created with the
    /// defaults; any other problem falls back to defaults.
    pub fn load() -> Self {
        Self::load_or_create(&Self::get_path())
            .with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from(path) {
                Ok(config) => {
                    info!("config loaded from {}", path.display());
                    config
                }
                Err(err) => {
                    warn!("{err}; using defaults");
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            match config.save_to(path) {
                Ok(()) => info!("wrote default config to {}", path.display()),
                Err(err) => warn!("{err}; continuing with defaults"),
            }
            config
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let file = File::create(path).map_err(io_error)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// A non-blank value replaces whatever key the file held.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|key| !key.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
        self
    }

    pub fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("com", "titan", "titan-periodic-table") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("titan-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_point_at_openrouter_without_a_key() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.api.model, "xiaomi/mimo-v2-flash:free");
        assert_eq!(config.api.api_key, None);
        assert!(!config.api.has_credential());
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = scratch_file("partial.json", r#"{"api": {"model": "local/test"}}"#);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.model, "local/test");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let path = scratch_file("broken.json", "{ not json");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("titan-config-does-not-exist.json");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn environment_key_wins_over_the_file() {
        let path = scratch_file("keyed.json", r#"{"api": {"api_key": "from-file"}}"#);
        let config = Config::load_from(&path)
            .unwrap()
            .with_api_key_override(Some("from-env".to_owned()));
        assert_eq!(config.api.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = Config::default();
        config.api.api_key = Some("kept".to_owned());
        let config = config
            .with_api_key_override(Some("   ".to_owned()))
            .with_api_key_override(None);
        assert_eq!(config.api.api_key.as_deref(), Some("kept"));
    }

    #[test]
    fn first_run_writes_the_defaults() {
        let path = std::env::temp_dir()
            .join(format!("titan-config-{}", std::process::id()))
            .join("first-run")
            .join("settings.json");
        let _ = fs::remove_file(&path);

        assert_eq!(Config::load_or_create(&path), Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn unreadable_file_is_left_alone() {
        let path = scratch_file("kept-broken.json", "{ not json");
        assert_eq!(Config::load_or_create(&path), Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn saved_settings_load_back() {
        let path = std::env::temp_dir()
            .join(format!("titan-config-{}", std::process::id()))
            .join("nested")
            .join("saved.json");
        let mut config = Config::default();
        config.window.width = 1600;
        config.api.temperature = 0.2;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
