//! Runtime configuration from the environment.
//!
//! Values are read after `dotenv` has loaded any `.env` file, and command line
//! flags override them.

use crate::error::{Result, UnrollError};
use crate::processing::DEFAULT_MAX_WIDTH;
use std::env;
use std::path::Path;

pub const ENV_MAX_WIDTH: &str = "WILDCARD_MAX_WIDTH";
pub const ENV_PRINT_LIMIT: &str = "WILDCARD_PRINT_LIMIT";
pub const ENV_LOG_CONFIG: &str = "WILDCARD_LOG_CONFIG";

/// Results beyond this count are summarised instead of listed.
pub const DEFAULT_PRINT_LIMIT: usize = 256;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Widest enumeration that can be requested.
pub const MAX_WIDTH_LIMIT: u32 = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Largest number of wildcard bits to enumerate.
    pub max_width: u32,
    /// Largest result count printed in full.
    pub print_limit: usize,
    /// Path to the log4rs configuration file.
    pub log_config: String,
    /// True when the log config path was set rather than defaulted.
    pub log_config_explicit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_width: DEFAULT_MAX_WIDTH,
            print_limit: DEFAULT_PRINT_LIMIT,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_config_explicit: false,
        }
    }
}

impl Config {
    /// Build a [`Config`] from process environment variables.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build a [`Config`] from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_MAX_WIDTH) {
            let width = parse_value(ENV_MAX_WIDTH, &value)?;
            config.max_width = check_max_width(ENV_MAX_WIDTH, width)?;
        }
        if let Some(value) = lookup(ENV_PRINT_LIMIT) {
            config.print_limit = parse_value(ENV_PRINT_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = value;
            config.log_config_explicit = true;
        }
        log::debug!("Config: {config:?}");
        Ok(config)
    }

    /// Apply a `--max-width` override, held to the same range as the environment value.
    pub fn with_max_width(mut self, max_width: Option<u32>) -> Result<Config> {
        if let Some(width) = max_width {
            self.max_width = check_max_width("--max-width", width)?;
        }
        Ok(self)
    }

    /// Log config to load, `None` when the default file is simply absent.
    pub fn log_config_path(&self) -> Option<&str> {
        if self.log_config_explicit || Path::new(&self.log_config).exists() {
            Some(&self.log_config)
        } else {
            None
        }
    }
}

fn check_max_width(key: &str, width: u32) -> Result<u32> {
    if width > MAX_WIDTH_LIMIT {
        return Err(UnrollError::Config {
            key: key.to_string(),
            value: width.to_string(),
        });
    }
    Ok(width)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| UnrollError::Config {
        key: key.to_string(),
        value: value.to_string(),
    })
}
