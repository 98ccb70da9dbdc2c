//! Application configuration from environment variables.
//!
//! `main` loads `.env` with dotenvy first; everything here only reads
//! through a lookup function so tests never touch the process environment.

use rust_decimal::Decimal;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::pricing::models::{DefaultSchedule, StayLimits, TierRates};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    pub database_acquire_timeout: Duration,
    pub season_cache_ttl: Duration,
    pub season_cache_capacity: u64,
    /// Low-season fallback rates
    pub schedule: DefaultSchedule,
    pub stay_limits: StayLimits,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host: IpAddr = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parse_or(&lookup, "PORT", 8080)?;

        let defaults = DefaultSchedule::default();
        let schedule = DefaultSchedule {
            name: lookup("DEFAULT_SEASON_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.name),
            rates: TierRates {
                less_than_week: parse_rate(
                    &lookup,
                    "DEFAULT_PRICE_LESS_THAN_WEEK",
                    defaults.rates.less_than_week,
                )?,
                one_week: parse_rate(&lookup, "DEFAULT_PRICE_ONE_WEEK", defaults.rates.one_week)?,
                two_weeks: parse_rate(
                    &lookup,
                    "DEFAULT_PRICE_TWO_WEEKS",
                    defaults.rates.two_weeks,
                )?,
                three_weeks: parse_rate(
                    &lookup,
                    "DEFAULT_PRICE_THREE_WEEKS",
                    defaults.rates.three_weeks,
                )?,
            },
            min_days: parse_or(&lookup, "DEFAULT_MIN_DAYS", defaults.min_days)?,
        };

        let max_days: i64 = parse_or(&lookup, "MAX_STAY_DAYS", StayLimits::default().max_days)?;
        if max_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_STAY_DAYS",
                value: max_days.to_string(),
            });
        }

        Ok(Self {
            database_url,
            bind_addr: SocketAddr::new(host, port),
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            database_acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                5,
            )?),
            season_cache_ttl: Duration::from_secs(parse_or(&lookup, "SEASON_CACHE_TTL_SECS", 300)?),
            season_cache_capacity: parse_or(&lookup, "SEASON_CACHE_CAPACITY", 1_000)?,
            schedule,
            stay_limits: StayLimits { max_days },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::Invalid { key, value })
        }
        None => Ok(default),
    }
}

fn parse_rate<F>(lookup: &F, key: &'static str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let rate: Decimal = parse_or(lookup, key, default)?;
    if rate < Decimal::ZERO {
        return Err(ConfigError::Invalid {
            key,
            value: rate.to_string(),
        });
    }
    Ok(rate)
}
