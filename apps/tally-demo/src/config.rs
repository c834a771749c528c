//! # Demo Configuration
//!
//! Pricing configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (`PricingConfig::default()`)
//!
//! Read-only after loading.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tally_core::PricingConfig;

/// Surcharge on ELECTRONICS lines, basis points.
pub const ENV_ELECTRONICS_TAX_BPS: &str = "TALLY_ELECTRONICS_TAX_BPS";
/// Discount on bulk BOOKS lines, basis points.
pub const ENV_BOOK_DISCOUNT_BPS: &str = "TALLY_BOOK_DISCOUNT_BPS";
/// Minimum BOOKS quantity for the discount.
pub const ENV_BOOK_BULK_QUANTITY: &str = "TALLY_BOOK_BULK_QUANTITY";
/// Free-shipping threshold, cents.
pub const ENV_FREE_SHIPPING_CENTS: &str = "TALLY_FREE_SHIPPING_CENTS";
/// Flat shipping below the threshold, cents.
pub const ENV_SHIPPING_CENTS: &str = "TALLY_SHIPPING_CENTS";

/// Demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub pricing: PricingConfig,
}

impl DemoConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `TALLY_ELECTRONICS_TAX_BPS`: e.g. "1000" for 10%
    /// - `TALLY_BOOK_DISCOUNT_BPS`: e.g. "500" for 5%
    /// - `TALLY_BOOK_BULK_QUANTITY`: e.g. "5"
    /// - `TALLY_FREE_SHIPPING_CENTS`: e.g. "10000" for $100.00
    /// - `TALLY_SHIPPING_CENTS`: e.g. "1000" for $10.00
    pub fn from_env() -> Result<Self, ConfigError> {
        DemoConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from any key/value source. Unset keys fall back to
    /// defaults; set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingConfig::default();

        let pricing = PricingConfig {
            electronics_tax_bps: parse_var(&lookup, ENV_ELECTRONICS_TAX_BPS, defaults.electronics_tax_bps)?,
            book_discount_bps: parse_var(&lookup, ENV_BOOK_DISCOUNT_BPS, defaults.book_discount_bps)?,
            book_bulk_quantity: parse_var(&lookup, ENV_BOOK_BULK_QUANTITY, defaults.book_bulk_quantity)?,
            free_shipping_threshold_cents: parse_var(
                &lookup,
                ENV_FREE_SHIPPING_CENTS,
                defaults.free_shipping_threshold_cents,
            )?,
            standard_shipping_cents: parse_var(&lookup, ENV_SHIPPING_CENTS, defaults.standard_shipping_cents)?,
        };

        let config = DemoConfig { pricing };
        config.validate()?;
        Ok(config)
    }

    /// Rejects rates above 100% and non-positive bulk quantities or negative
    /// amounts, using the core's [`PricingConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pricing.validate()?;
        Ok(())
    }
}

/// Environment variable that sets a [`PricingConfig`] field.
fn env_var_for(field: &str) -> &str {
    match field {
        "electronics_tax_bps" => ENV_ELECTRONICS_TAX_BPS,
        "book_discount_bps" => ENV_BOOK_DISCOUNT_BPS,
        "book_bulk_quantity" => ENV_BOOK_BULK_QUANTITY,
        "free_shipping_threshold_cents" => ENV_FREE_SHIPPING_CENTS,
        "standard_shipping_cents" => ENV_SHIPPING_CENTS,
        other => other,
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{var} must be between {min} and {max}")]
    OutOfRange { var: String, min: i64, max: i64 },
}

/// Reports core range errors under the environment variable name.
impl From<tally_core::ConfigError> for ConfigError {
    fn from(err: tally_core::ConfigError) -> Self {
        match err {
            tally_core::ConfigError::OutOfRange { field, min, max } => ConfigError::OutOfRange {
                var: env_var_for(&field).to_string(),
                min,
                max,
            },
        }
    }
}
