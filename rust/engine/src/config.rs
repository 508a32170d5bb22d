use serde::{Deserialize, Serialize};
use std::fs;

use thiserror::Error;

use crate::errors::EngineError;
use crate::game::{new_game, Game};

/// Names the TOML file to read settings from.
pub const CONFIG_ENV: &str = "PATIENCE_CONFIG";
/// Overrides the shuffle seed.
pub const SEED_ENV: &str = "PATIENCE_SEED";

/// Settings of the surrounding application that the engine cares about.
/// The table layout itself is fixed and not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Shuffle seed; `None` uses [`crate::deck::DEFAULT_SEED`]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
}

impl Config {
    /// Parses a TOML document; keys it leaves out keep their defaults.
    ///
    /// ```
    /// use patience_engine::config::Config;
    ///
    /// let cfg = Config::from_toml_str("seed = 9").unwrap();
    /// assert_eq!(cfg.seed, Some(9));
    /// assert_eq!(Config::from_toml_str("").unwrap().seed, None);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Config, ConfigError> {
        let f: FileConfig = toml::from_str(s)?;
        Ok(Config { seed: f.seed })
    }

    /// Shuffles with the configured seed and deals a fresh table.
    pub fn deal(&self) -> Result<Game, EngineError> {
        new_game(self.seed)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves settings from defaults, then the file named by
/// `PATIENCE_CONFIG`, then `PATIENCE_SEED`.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f = Config::from_toml_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = std::env::var(SEED_ENV).ok().filter(|v| !v.is_empty()) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("invalid seed {:?}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
