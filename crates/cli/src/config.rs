//! Runtime configuration from environment variables.

use std::path::PathBuf;

use stockbook_observability::LogFormat;

pub const ENV_CURRENCY: &str = "STOCKBOOK_CURRENCY";
pub const ENV_SEED: &str = "STOCKBOOK_SEED";
pub const ENV_LOG_FORMAT: &str = "STOCKBOOK_LOG_FORMAT";

const DEFAULT_CURRENCY: &str = "₱";

/// Where the initial catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// The built-in ten-item starter catalog.
    #[default]
    Starter,
    /// Start with an empty ledger.
    Empty,
    /// A JSON array of `{id, name, quantity, price}` objects.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub currency_symbol: String,
    pub seed: SeedSource,
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Tracing is not up yet
    /// when config is read, so these are logged by the caller afterwards.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            seed: SeedSource::default(),
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(symbol) = lookup(ENV_CURRENCY) {
            config.currency_symbol = symbol;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = match seed.trim() {
                "" | "starter" => SeedSource::Starter,
                "none" | "empty" => SeedSource::Empty,
                path => SeedSource::File(PathBuf::from(path)),
            };
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_LOG_FORMAT}: {e}; using default")),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_symbol, "₱");
        assert_eq!(config.seed, SeedSource::Starter);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (ENV_CURRENCY, "$"),
            (ENV_SEED, "none"),
            (ENV_LOG_FORMAT, "json"),
        ]);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.seed, SeedSource::Empty);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn seed_path_and_bad_log_format() {
        let config = config_from(&[(ENV_SEED, "catalog.json"), (ENV_LOG_FORMAT, "yaml")]);
        assert_eq!(config.seed, SeedSource::File(PathBuf::from("catalog.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains(ENV_LOG_FORMAT));
    }
}
