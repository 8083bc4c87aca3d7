use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::{BIG_BLIND, SMALL_BLIND, STREET_BET_CAP};

/// Chips each player sits down with.
pub const STARTING_STACK: u32 = 10;

pub const CONFIG_ENV: &str = "LIMITDUEL_CONFIG";
pub const SEED_ENV: &str = "LIMITDUEL_SEED";
pub const STACK_ENV: &str = "LIMITDUEL_STARTING_STACK";

/// Stakes and shuffling for one table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Maximum street total a bet may reach
    pub bet_cap: u32,
    /// Fixed deck seed; `None` shuffles from the thread RNG
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            bet_cap: STREET_BET_CAP,
            seed: None,
        }
    }
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
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub bet_cap: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            bet_cap: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: TableConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    bet_cap: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

impl TableConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let mut resolved = ConfigResolved {
            config: Self::default(),
            sources: ConfigSources::default(),
        };
        resolved.apply_file(toml::from_str(s)?);
        resolved.config.validate()?;
        Ok(resolved.config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_stack == 0 {
            return Err(ConfigError::Invalid("starting_stack must be >0".into()));
        }
        if self.small_blind == 0 || self.small_blind >= self.big_blind {
            return Err(ConfigError::Invalid(
                "blinds must satisfy 0 < small_blind < big_blind".into(),
            ));
        }
        if self.bet_cap < self.big_blind {
            return Err(ConfigError::Invalid("bet_cap must be >= big_blind".into()));
        }
        Ok(())
    }
}

impl ConfigResolved {
    fn apply_file(&mut self, f: FileConfig) {
        let (cfg, src) = (&mut self.config, &mut self.sources);
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            src.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            src.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            src.big_blind = ValueSource::File;
        }
        if let Some(v) = f.bet_cap {
            cfg.bet_cap = v;
            src.bet_cap = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            src.seed = ValueSource::File;
        }
    }
}

pub fn load() -> Result<TableConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `LIMITDUEL_CONFIG`, then the
/// `LIMITDUEL_SEED` and `LIMITDUEL_STARTING_STACK` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut resolved = ConfigResolved {
        config: TableConfig::default(),
        sources: ConfigSources::default(),
    };

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        resolved.apply_file(toml::from_str(&s)?);
    }

    if let Some(seed) = non_empty_env(SEED_ENV) {
        resolved.config.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("{SEED_ENV}={seed} is not a u64")))?,
        );
        resolved.sources.seed = ValueSource::Env;
    }
    if let Some(stack) = non_empty_env(STACK_ENV) {
        resolved.config.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{STACK_ENV}={stack} is not a u32")))?;
        resolved.sources.starting_stack = ValueSource::Env;
    }

    resolved.config.validate()?;
    Ok(resolved)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
