//! Runtime configuration and logging setup.
//!
//! Defaults come from the environment (a `.env` file is loaded by `main`),
//! command line arguments override them.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

pub const DEFAULT_ADDRESS: &str = "8.8.8.8";
pub const DEFAULT_PREFIX: &str = "30";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_ADDRESS: &str = "SUBNET_CALC_ADDRESS";
pub const ENV_PREFIX: &str = "SUBNET_CALC_PREFIX";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {M} - {m}{n}";

/// Defaults used when the command line leaves a value out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address calculated when no target is given.
    pub address: String,
    /// Prefix selection for targets without `/n`.
    pub prefix: String,
    /// Path of the log4rs YAML config.
    pub log_config: String,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to the defaults for
    /// missing or blank values.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Settings {
            address: get(ENV_ADDRESS, DEFAULT_ADDRESS),
            prefix: get(ENV_PREFIX, DEFAULT_PREFIX),
            log_config: get(ENV_LOG_CONFIG, DEFAULT_LOG_CONFIG),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_lookup(|_| None)
    }
}

/// Initialise log4rs.
///
/// Uses the YAML file at `log_config` unless `verbose` is set. When the file
/// can't be loaded, or in verbose mode, logs go to stderr through a built-in
/// config at `warn` (`debug` when verbose).
pub fn init_logging(log_config: &str, verbose: bool) -> Result<(), Box<dyn Error>> {
    let file_error = if verbose {
        None
    } else {
        match log4rs::init_file(log_config, Default::default()) {
            Ok(()) => {
                log::debug!("Logging configured from {log_config}");
                return Ok(());
            }
            Err(e) => Some(e),
        }
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;

    if let Some(e) = file_error {
        log::debug!("Log config {log_config} not used: {e}");
    }
    Ok(())
}
