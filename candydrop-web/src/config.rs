use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use candydrop_store_db::LookupSeed;
use serde::Deserialize;

use crate::error::{ConfigError, Result, WebError};

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    5555
}

fn default_database_path() -> PathBuf {
    PathBuf::from("candydrop.db")
}

fn default_workers() -> usize {
    4
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default)]
    pub views: ViewsConfig,

    /// Lookup labels inserted at startup if missing
    #[serde(default)]
    pub seed: LookupSeed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            workers: default_workers(),
            views: ViewsConfig::default(),
            seed: LookupSeed::default(),
        }
    }
}

/// Parameters of the pre-defined home page views.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewsConfig {
    pub highlight_color: String,
    pub second_color: String,
    pub name_prefix: String,
    pub name_fragment: String,
    pub light_below: i64,
    pub weight_low: i64,
    pub weight_high: i64,
    pub heaviest: i64,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            highlight_color: "Rød".into(),
            second_color: "Blå".into(),
            name_prefix: "b".into(),
            name_fragment: "e".into(),
            light_below: 10,
            weight_low: 10,
            weight_high: 12,
            heaviest: 3,
        }
    }
}

impl Config {
    pub fn load(settings_file: &Path) -> Result<Config> {
        let contents = read_to_string(settings_file).map_err(|e| ConfigError::ReadFile {
            path: settings_file.display().to_string(),
            source: e,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config> {
        toml::from_str(contents).map_err(|e| WebError::from(ConfigError::from(e)))
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT` and `DATABASE_PATH` overrides.
    ///
    /// An unparsable port falls back to the default rather than failing.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = var("SERVER_PORT") {
            self.port = port.trim().parse().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid SERVER_PORT '{port}': {e}, using {}",
                    default_port()
                );
                default_port()
            });
        }
        if let Some(path) = var("DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid {
                reason: "workers must be greater than 0".to_string(),
            }
            .into());
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "host must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

pub fn load() -> Result<Config> {
    let mut settings = match std::env::var("CONFIG_FILE") {
        Err(_) => {
            if Path::new("settings.toml").exists() {
                Config::load(Path::new("settings.toml"))?
            } else {
                Config::default()
            }
        }
        Ok(settings_file) => Config::load(Path::new(&settings_file))?,
    };

    settings.apply_env(|key| std::env::var(key).ok());
    settings.validate()?;
    Ok(settings)
}
