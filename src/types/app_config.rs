use std::time::Duration;

use crate::{types::venue::VenueTable, utils::app_error::AppError};

pub const DEFAULT_API_HOST: &str = "https://api.wigle.net";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Which venue list and menu flow the shell runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    /// 32 venues in two columns, loops until the user quits.
    Extended,
    /// 20 venues, one query per run.
    Compact,
}

impl Edition {
    pub fn venues(&self) -> VenueTable {
        match self {
            Edition::Extended => VenueTable::EXTENDED,
            Edition::Compact => VenueTable::COMPACT,
        }
    }
}

impl std::str::FromStr for Edition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" => Ok(Edition::Extended),
            "compact" => Ok(Edition::Compact),
            other => Err(AppError::Config(format!(
                "unknown edition '{}', expected 'extended' or 'compact'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_host: String,
    pub timeout: Duration,
    pub edition: Edition,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            edition: Edition::Extended,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(host) = lookup("WIGLE_API_HOST") {
            let host = host.trim().trim_end_matches('/');
            if host.is_empty() {
                return Err(AppError::Config("WIGLE_API_HOST is empty".to_string()));
            }
            config.api_host = host.to_string();
        }

        if let Some(secs) = lookup("WIGLE_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("invalid WIGLE_TIMEOUT_SECS '{}': {}", secs, e))
            })?;
            if secs == 0 {
                return Err(AppError::Config(
                    "WIGLE_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(edition) = lookup("DCWIFI_EDITION") {
            config.edition = edition.parse()?;
        }

        Ok(config)
    }
}
