//! Runtime configuration, read from `TXPARSE_*` environment variables

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

const ENV_PREFIX: &str = "TXPARSE_";

/// Which chain the explorer serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Main,
    Test,
    Signet,
}

impl Network {
    /// mempool.space REST base for this network
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Network::Main => "https://mempool.space/api",
            Network::Test => "https://mempool.space/testnet/api",
            Network::Signet => "https://mempool.space/signet/api",
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "signet" => Ok(Network::Signet),
            other => Err(ConfigError::Validate(format!(
                "Invalid network '{other}'. Must be one of: main, test, signet"
            ))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Signet => "signet",
        };
        f.write_str(name)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Env: TXPARSE_NETWORK
    /// Default: main
    #[serde(default)]
    pub network: Network,

    /// Explorer base URL, overrides the network default
    ///
    /// Env: TXPARSE_API_URL
    #[serde(default)]
    pub api_url: Option<String>,

    /// Directory for cached raw transactions
    ///
    /// Env: TXPARSE_CACHE_DIR
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Env: TXPARSE_TIMEOUT_SECS
    /// Default: 30
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Env: TXPARSE_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error
    /// Default: warn
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load from explicit `(name, value)` pairs, e.g. a captured environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = Self::load(vars)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `TXPARSE_*` pairs without validating.
    ///
    /// Callers that layer further settings on top (command-line flags) call
    /// [`Config::validate`] once the final values are in place.
    pub fn load<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    /// Replace settings with any values given explicitly
    pub fn with_overrides(
        mut self,
        network: Option<Network>,
        api_url: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(network) = network {
            self.network = network;
        }
        if api_url.is_some() {
            self.api_url = api_url;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Validate(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validate("Timeout cannot be 0".to_string()));
        }

        if let Some(url) = &self.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validate(format!(
                    "API URL '{url}' must start with http:// or https://"
                )));
            }
        }

        Ok(())
    }

    /// Base URL requests are made against, without a trailing slash
    pub fn api_url(&self) -> String {
        self.api_url
            .as_deref()
            .unwrap_or(self.network.default_api_url())
            .trim_end_matches('/')
            .to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::default(),
            api_url: None,
            cache_dir: None,
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}
