use serde::{Deserialize, Serialize};

use crate::locale::AppLocale;

// ============================================================================
// Order Configuration
// ============================================================================
//
// Pricing constants and display locale are injected into every OrderState
// at construction. Nothing here is mutable after the state is built.
//
// ============================================================================

/// Price of a single cupcake
pub const PRICE_PER_UNIT: f64 = 35000.00;

/// Extra charge when the order is picked up on the day it is placed
pub const SAME_DAY_SURCHARGE: f64 = 5000.00;

pub const ENV_LOCALE: &str = "CUPCAKE_LOCALE";
pub const ENV_PRICE_PER_UNIT: &str = "CUPCAKE_PRICE_PER_UNIT";
pub const ENV_SAME_DAY_SURCHARGE: &str = "CUPCAKE_SAME_DAY_SURCHARGE";

/// Host locale variables, highest precedence first
pub const HOST_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: String, value: String },

    #[error("{field} cannot be negative: {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price charged per unit ordered
    pub price_per_unit: f64,
    /// Added once when the earliest pickup option is selected
    pub same_day_surcharge: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_unit: PRICE_PER_UNIT,
            same_day_surcharge: SAME_DAY_SURCHARGE,
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_amount("price_per_unit", self.price_per_unit)?;
        check_amount("same_day_surcharge", self.same_day_surcharge)?;
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeAmount { field, value });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub pricing: PricingConfig,
    pub locale: AppLocale,
}

impl OrderConfig {
    /// Load configuration from `CUPCAKE_*` environment variables, falling
    /// back to defaults for anything unset.
    ///
    /// Without `CUPCAKE_LOCALE` the host locale (`LC_ALL`, `LC_TIME`, `LANG`)
    /// is used; hosts on an unsupported locale get `en_US`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`OrderConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup(ENV_LOCALE) {
            Some(value) => config.locale = value.parse()?,
            None => config.locale = host_locale(&lookup),
        }
        if let Some(value) = lookup(ENV_PRICE_PER_UNIT) {
            config.pricing.price_per_unit = parse_amount(ENV_PRICE_PER_UNIT, &value)?;
        }
        if let Some(value) = lookup(ENV_SAME_DAY_SURCHARGE) {
            config.pricing.same_day_surcharge = parse_amount(ENV_SAME_DAY_SURCHARGE, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document such as
    /// `{"locale": "id_ID", "pricing": {"price_per_unit": 35000.0}}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pricing.validate()
    }
}

fn host_locale<F>(lookup: &F) -> AppLocale
where
    F: Fn(&str) -> Option<String>,
{
    // An empty variable does not count as set
    let value = HOST_LOCALE_VARS
        .iter()
        .filter_map(|&key| lookup(key))
        .find(|value| !value.trim().is_empty());

    match value {
        Some(value) => AppLocale::from_posix(&value).unwrap_or_else(|| {
            tracing::debug!(host_locale = %value, "Unsupported host locale, using en_US");
            AppLocale::default()
        }),
        None => AppLocale::default(),
    }
}

fn parse_amount(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
