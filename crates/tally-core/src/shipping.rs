//! # Shipping Policy
//!
//! Free shipping from a subtotal threshold, flat rate below it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::money::{Money, PreciseAmount};
use crate::types::PricingConfig;
use crate::{FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING_COST};

/// Shipping cost derived from the order subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotals at or above this ship free.
    pub free_threshold: Money,
    /// Charged below the threshold.
    pub flat_rate: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy {
            free_threshold: FREE_SHIPPING_THRESHOLD,
            flat_rate: STANDARD_SHIPPING_COST,
        }
    }
}

impl ShippingPolicy {
    /// Threshold and flat rate from a validated configuration.
    pub fn from_config(config: &PricingConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(ShippingPolicy {
            free_threshold: config.free_shipping_threshold(),
            flat_rate: config.standard_shipping(),
        })
    }

    /// Shipping for an exact, unrounded subtotal.
    ///
    /// The comparison uses the exact value: $99.997 still pays shipping even
    /// though it would display as $100.00.
    pub fn cost_for(&self, subtotal: PreciseAmount) -> Money {
        if subtotal >= PreciseAmount::from_money(self.free_threshold) {
            Money::zero()
        } else {
            self.flat_rate
        }
    }
}
