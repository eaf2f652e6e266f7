//! Process configuration loaded from the environment

use std::{env, fmt::Display, str::FromStr, time::Duration};

use chrono::{DateTime, Datelike, FixedOffset, Local, Utc, Weekday};
use thiserror::Error;
use tracing::info;

use crate::cache::DEFAULT_CACHE_TTL_SECS;
use crate::data::places::DEFAULT_PLACES_BASE_URL;

pub const PLACE_ID_VAR: &str = "GOOGLE_MAPS_PLACE_ID";
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const CACHE_TTL_VAR: &str = "CACHE_TTL_SECS";
pub const PORT_VAR: &str = "PORT";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const API_BASE_VAR: &str = "PLACES_API_BASE";
pub const SITE_NAME_VAR: &str = "SITE_NAME";
pub const UTC_OFFSET_VAR: &str = "SITE_UTC_OFFSET_MINUTES";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_SITE_NAME: &str = "Shivansh Food Park";

/// Startup configuration errors. Any of these aborts the process.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set in environment variables")]
    Missing(&'static str),

    #[error("Invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub place_id: String,
    pub api_key: String,
    pub cache_ttl: Duration,
    pub port: u16,
    pub bind_addr: String,
    pub api_base_url: String,
    /// Shown on pages rendered without place data
    pub site_name: String,
    /// Restaurant's offset from UTC; the host's local zone when unset
    pub utc_offset: Option<FixedOffset>,
}

impl Config {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let place_id = required(PLACE_ID_VAR)?;
        let api_key = required(API_KEY_VAR)?;

        let ttl_secs: u64 = try_load(&lookup, CACHE_TTL_VAR, DEFAULT_CACHE_TTL_SECS)?;
        let port: u16 = try_load(&lookup, PORT_VAR, DEFAULT_PORT)?;
        let utc_offset = load_utc_offset(&lookup)?;

        Ok(Self {
            place_id,
            api_key,
            cache_ttl: Duration::from_secs(ttl_secs),
            port,
            bind_addr: lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            api_base_url: lookup(API_BASE_VAR)
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string()),
            site_name: lookup(SITE_NAME_VAR).unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            utc_offset,
        })
    }

    /// Day of the week at the restaurant at instant `now`
    pub fn weekday_at(&self, now: DateTime<Utc>) -> Weekday {
        match self.utc_offset {
            Some(offset) => now.with_timezone(&offset).weekday(),
            None => now.with_timezone(&Local).weekday(),
        }
    }

    /// Socket address string to bind the server to
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn load_utc_offset<F>(lookup: &F) -> Result<Option<FixedOffset>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(UTC_OFFSET_VAR) else {
        return Ok(None);
    };

    let invalid = |reason: String| ConfigError::Invalid {
        var: UTC_OFFSET_VAR,
        value: value.clone(),
        reason,
    };

    let minutes: i32 = value.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .map(Some)
        .ok_or_else(|| invalid("offset must be within +/- 24 hours".to_string()))
}

fn try_load<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        }),
        None => {
            info!("{var} not set, using default: {default}");
            Ok(default)
        }
    }
}
