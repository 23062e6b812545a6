use serde::{Deserialize, Serialize};
use std::fs;

use anteplay_engine::game::STARTING_BANKROLL;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_bankroll: u32,
    pub seed: Option<u64>,
    pub stop_at_zero: bool,
    pub strategy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_bankroll: ValueSource,
    pub seed: ValueSource,
    pub stop_at_zero: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_bankroll: ValueSource::Default,
            seed: ValueSource::Default,
            stop_at_zero: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_bankroll: STARTING_BANKROLL,
            seed: None,
            stop_at_zero: true,
            strategy: "baseline".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `ANTEPLAY_CONFIG`, then individual
/// `ANTEPLAY_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ANTEPLAY_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_bankroll {
            cfg.starting_bankroll = v;
            sources.starting_bankroll = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.stop_at_zero {
            cfg.stop_at_zero = v;
            sources.stop_at_zero = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("ANTEPLAY_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bankroll) = std::env::var("ANTEPLAY_BANKROLL")
        && !bankroll.is_empty()
    {
        cfg.starting_bankroll = bankroll
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bankroll".into()))?;
        sources.starting_bankroll = ValueSource::Env;
    }
    if let Ok(stop) = std::env::var("ANTEPLAY_STOP_AT_ZERO")
        && !stop.is_empty()
    {
        cfg.stop_at_zero =
            parse_bool(&stop).ok_or_else(|| ConfigError::Invalid("Invalid stop_at_zero".into()))?;
        sources.stop_at_zero = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var("ANTEPLAY_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_bankroll: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    stop_at_zero: Option<bool>,
    #[serde(default)]
    strategy: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_bankroll == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_bankroll must be >0".into(),
        ));
    }
    if !anteplay_ai::STRATEGIES.contains(&cfg.strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy '{}'",
            cfg.strategy
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
        assert_eq!(Config::default().starting_bankroll, 100);
    }

    #[test]
    fn zero_bankroll_is_rejected() {
        let cfg = Config {
            starting_bankroll: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let cfg = Config {
            strategy: "martingale".into(),
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
