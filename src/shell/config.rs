// Mock store configuration read from the environment.
//
// Variables
// - FORUM_MOCK_SEED_FIXTURES: seed the bundled dataset (default true)
// - FORUM_MOCK_COLOR_MIN / FORUM_MOCK_COLOR_MAX: colour channel bounds, max exclusive (default 30 / 120)
// - FORUM_MOCK_RNG_SEED: optional seed for reproducible user colours

use crate::core::generators::ColorRange;
use std::str::FromStr;
use thiserror::Error;

pub const SEED_FIXTURES: &str = "FORUM_MOCK_SEED_FIXTURES";
pub const COLOR_MIN: &str = "FORUM_MOCK_COLOR_MIN";
pub const COLOR_MAX: &str = "FORUM_MOCK_COLOR_MAX";
pub const RNG_SEED: &str = "FORUM_MOCK_RNG_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("empty colour range: min {min} must be below max {max}")]
    InvalidColorRange { min: u8, max: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    pub seed_fixtures: bool,
    pub colors: ColorRange,
    pub rng_seed: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: true,
            colors: ColorRange::default(),
            rng_seed: None,
        }
    }
}

impl MockConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed_fixtures = match lookup(SEED_FIXTURES) {
            Some(raw) => parse_bool(SEED_FIXTURES, &raw)?,
            None => defaults.seed_fixtures,
        };
        let min = parse_or(&lookup, COLOR_MIN, defaults.colors.min())?;
        let max = parse_or(&lookup, COLOR_MAX, defaults.colors.max())?;
        let colors = ColorRange::new(min, max).ok_or(ConfigError::InvalidColorRange { min, max })?;
        let rng_seed = lookup(RNG_SEED)
            .map(|raw| parse(RNG_SEED, &raw))
            .transpose()?;

        Ok(Self {
            seed_fixtures,
            colors,
            rng_seed,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => parse(key, &raw),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
