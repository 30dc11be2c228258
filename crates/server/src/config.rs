use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

use services::DEFAULT_API_URL;

use crate::error::ConfigError;

/// Port served when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Directory of static pages served when `TRIVIA_PUBLIC_DIR` is not set.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
    pub trivia_api_url: String,
}

impl Config {
    /// Load settings from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but does not
    /// parse.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("PORT", DEFAULT_PORT)?,
            public_dir: PathBuf::from(load_or("TRIVIA_PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
            trivia_api_url: load_or("TRIVIA_API_URL", DEFAULT_API_URL),
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn load_or(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|()| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
{
    match var(key) {
        Err(()) => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Ok(raw) => raw.parse().map_err(|_| {
            warn!("Invalid {key} value: {raw}");
            ConfigError::Invalid { key, raw }
        }),
    }
}
