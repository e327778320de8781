//! Page configuration parsed from the `data-page-config` body attribute.
//!
//! Every field is optional. An absent attribute, or one that fails to parse,
//! leaves the defaults in place, and the defaults reproduce the fixed
//! two-digit `PLN` formatting the templates were written against.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;
use serde::Deserialize;

use crate::consts::MAX_MONEY_PRECISION;
use crate::money::MoneyFormat;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("money precision {requested} exceeds maximum {max}")]
    Precision { requested: usize, max: usize },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPageConfig {
    money: MoneyFormat,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub money: MoneyFormat,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { money: MoneyFormat::default(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl PageConfig {
    /// Build typed page config from the attribute's JSON text.
    ///
    /// Recognized keys:
    /// - `money.precision`: fractional digits, default 2, at most 20
    /// - `money.separator`: text before the suffix, default `" "`
    /// - `money.suffix`: currency suffix, default `"PLN"`
    /// - `log_level`: `off`, `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, an unknown log level, or a
    /// precision above the maximum.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawPageConfig = serde_json::from_str(raw)?;
        if parsed.money.precision > MAX_MONEY_PRECISION {
            return Err(ConfigError::Precision { requested: parsed.money.precision, max: MAX_MONEY_PRECISION });
        }
        let log_level = parse_log_level(parsed.log_level.as_deref())?;
        Ok(Self { money: parsed.money, log_level })
    }

    /// Like [`PageConfig::from_json`], but treats a missing attribute as
    /// defaults and logs a warning instead of failing.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page config: {e}");
                Self::default()
            }
        }
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ConfigError> {
    match raw {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(value.to_owned())),
    }
}
