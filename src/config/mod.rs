use crate::errors::{AppError, AppResult};
use crate::models::person::DEFAULT_AVATAR_COLOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Local mirror (SQLite file).
    #[serde(default = "default_database")]
    pub database: String,
    /// Base URL of the roster API; `None` means the session is always offline.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Force local-only mode even when `api_url` is set.
    #[serde(default)]
    pub offline: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_people_limit")]
    pub people_limit: u32,
    #[serde(default = "default_presences_limit")]
    pub presences_limit: u32,
    #[serde(default = "default_avatar_color")]
    pub default_avatar_color: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_people_limit() -> u32 {
    1000
}
fn default_presences_limit() -> u32 {
    10_000
}
fn default_avatar_color() -> String {
    DEFAULT_AVATAR_COLOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            api_url: None,
            offline: false,
            timeout_secs: default_timeout_secs(),
            people_limit: default_people_limit(),
            presences_limit: default_presences_limit(),
            default_avatar_color: default_avatar_color(),
        }
    }
}

impl Config {
    /// `~/.rpresence` (falls back to the working directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rpresence")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpresence.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rpresence.sqlite")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// True when no remote call should ever be attempted.
    pub fn is_offline(&self) -> bool {
        self.offline
            || self
                .api_url
                .as_deref()
                .is_none_or(|url| url.trim().is_empty())
    }

    /// Load the configuration file, or the defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// return the configuration that was written.
    pub fn init_all(custom_db: Option<String>, api_url: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let database = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_string_lossy().to_string()
                } else {
                    dir.join(p).to_string_lossy().to_string()
                }
            }
            None => default_database(),
        };

        let config = Config {
            database,
            api_url,
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        Ok(config)
    }
}
