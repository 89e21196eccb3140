use serde::{Deserialize, Serialize};
use std::fs;

use crate::formatters::CardStyle;

pub const ENV_CONFIG: &str = "HANDRANK_CONFIG";
pub const ENV_SEED: &str = "HANDRANK_SEED";
pub const ENV_CARD_STYLE: &str = "HANDRANK_CARD_STYLE";
pub const ENV_LOG_LEVEL: &str = "HANDRANK_LOG_LEVEL";
pub const ENV_BENCH_ITERATIONS: &str = "HANDRANK_BENCH_ITERATIONS";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub card_style: CardStyle,
    pub log_level: String,
    pub bench_iterations: u32,
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
    pub seed: ValueSource,
    pub card_style: ValueSource,
    pub log_level: ValueSource,
    pub bench_iterations: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            card_style: ValueSource::Default,
            log_level: ValueSource::Default,
            bench_iterations: ValueSource::Default,
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
            seed: None,
            card_style: CardStyle::Ascii,
            log_level: "warn".into(),
            bench_iterations: 200,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the TOML file named by `HANDRANK_CONFIG`, then
/// `HANDRANK_*` overrides, reading variables through `env`. Empty values
/// are ignored.
pub fn resolve<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.card_style {
            cfg.card_style = v;
            sources.card_style = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
        if let Some(v) = f.bench_iterations {
            cfg.bench_iterations = v;
            sources.bench_iterations = ValueSource::File;
        }
    }

    if let Some(seed) = var(ENV_SEED) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(style) = var(ENV_CARD_STYLE) {
        cfg.card_style = CardStyle::parse(&style)
            .ok_or_else(|| ConfigError::Invalid("Invalid card_style".into()))?;
        sources.card_style = ValueSource::Env;
    }
    if let Some(level) = var(ENV_LOG_LEVEL) {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }
    if let Some(iters) = var(ENV_BENCH_ITERATIONS) {
        cfg.bench_iterations = iters
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bench_iterations".into()))?;
        sources.bench_iterations = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    card_style: Option<CardStyle>,
    #[serde(default)]
    log_level: Option<String>,
    #[serde(default)]
    bench_iterations: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.bench_iterations == 0 {
        return Err(ConfigError::Invalid(
            "bench_iterations must be >0".into(),
        ));
    }
    if !LOG_LEVELS.contains(&cfg.log_level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let resolved = resolve(env_of(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_defaults() {
        let resolved = resolve(env_of(&[
            (ENV_SEED, "99"),
            (ENV_CARD_STYLE, "unicode"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_BENCH_ITERATIONS, "10"),
        ]))
        .unwrap();
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.config.card_style, CardStyle::Unicode);
        assert_eq!(resolved.config.log_level, "debug");
        assert_eq!(resolved.config.bench_iterations, 10);
        assert_eq!(resolved.sources.card_style, ValueSource::Env);
    }

    #[test]
    fn empty_values_are_ignored() {
        let resolved = resolve(env_of(&[(ENV_SEED, ""), (ENV_CONFIG, "")])).unwrap();
        assert_eq!(resolved.config.seed, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(resolve(env_of(&[(ENV_SEED, "abc")])).is_err());
        assert!(resolve(env_of(&[(ENV_CARD_STYLE, "emoji")])).is_err());
        assert!(resolve(env_of(&[(ENV_BENCH_ITERATIONS, "0")])).is_err());
        assert!(resolve(env_of(&[(ENV_LOG_LEVEL, "loud")])).is_err());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = resolve(env_of(&[(ENV_CONFIG, "/nonexistent/handrank.toml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
