//! # Order Calculator
//!
//! Prices a whole order: validate, apply category rules, sum, add shipping,
//! round once.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► validate_order_items ──► Err(InvalidOrder) on first problem │
//! │              │                                                          │
//! │              ▼  per item, in input order                               │
//! │  unit_price × quantity ──► rule for CATEGORY ──► adjusted (exact)      │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  subtotal = Σ adjusted (exact)                                          │
//! │  shipping = subtotal >= $100.00 ? $0.00 : $10.00                        │
//! │  total    = round_half_away(subtotal + shipping)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tally_core::{Money, OrderCalculator, OrderItem};
//!
//! let calculator = OrderCalculator::new();
//! let order = [OrderItem::new("Programming Books", Money::from_cents(1000), 5, "BOOKS")];
//!
//! // $50.00 - 5% = $47.50, plus $10.00 shipping
//! assert_eq!(calculator.calculate_order_total(&order).unwrap(), Money::from_cents(5750));
//! ```

use crate::error::{ConfigResult, OrderResult};
use crate::money::{Money, PreciseAmount};
use crate::pricing::{normalize_category, PricingRules};
use crate::shipping::ShippingPolicy;
use crate::types::{OrderItem, OrderQuote, PricingConfig, QuoteLine};
use crate::validation::validate_order_items;

/// Computes order totals from a fixed rule table and shipping policy.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct OrderCalculator {
    rules: PricingRules,
    shipping: ShippingPolicy,
}

impl OrderCalculator {
    /// Calculator with the standard rules and shipping.
    pub fn new() -> Self {
        OrderCalculator::with_rules(PricingRules::standard(), ShippingPolicy::default())
    }

    /// Calculator with the standard rules, using configured rates and shipping.
    ///
    /// ## Errors
    /// [`crate::ConfigError::OutOfRange`] for a rate above 100%, a negative
    /// threshold or shipping charge, or a non-positive bulk quantity. Such a
    /// configuration could price a valid order below zero.
    pub fn from_config(config: &PricingConfig) -> ConfigResult<Self> {
        Ok(OrderCalculator::with_rules(
            PricingRules::from_config(config)?,
            ShippingPolicy::from_config(config)?,
        ))
    }

    /// Calculator with a custom rule table.
    pub fn with_rules(rules: PricingRules, shipping: ShippingPolicy) -> Self {
        OrderCalculator { rules, shipping }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn shipping(&self) -> &ShippingPolicy {
        &self.shipping
    }

    /// Grand total of the order, rounded to the cent.
    ///
    /// ## Errors
    /// [`crate::OrderError::InvalidOrder`] for an empty order, or for the
    /// first item (in input order) with a non-positive quantity, a negative
    /// price, or a blank product name.
    pub fn calculate_order_total(&self, items: &[OrderItem]) -> OrderResult<Money> {
        validate_order_items(items)?;

        let subtotal = self.subtotal(items);
        Ok(self.total(subtotal))
    }

    /// Same computation as [`OrderCalculator::calculate_order_total`], with
    /// the per-line breakdown.
    pub fn quote(&self, items: &[OrderItem]) -> OrderResult<OrderQuote> {
        validate_order_items(items)?;

        let mut subtotal = PreciseAmount::zero();
        let mut lines = Vec::with_capacity(items.len());

        for item in items {
            let adjusted = self.rules.apply(item);
            subtotal += adjusted;

            lines.push(QuoteLine {
                product_name: item.product_name().to_string(),
                category: normalize_category(item.category()),
                quantity: item.quantity(),
                unit_price: item.unit_price(),
                line_total: item.total_price(),
                adjusted_total: adjusted.round_to_money(),
            });
        }

        Ok(OrderQuote {
            lines,
            subtotal: subtotal.round_to_money(),
            shipping: self.shipping.cost_for(subtotal),
            total: self.total(subtotal),
        })
    }

    fn subtotal(&self, items: &[OrderItem]) -> PreciseAmount {
        items.iter().map(|item| self.rules.apply(item)).sum()
    }

    fn total(&self, subtotal: PreciseAmount) -> Money {
        let shipping = self.shipping.cost_for(subtotal);
        (subtotal + shipping).round_to_money()
    }
}

impl Default for OrderCalculator {
    fn default() -> Self {
        OrderCalculator::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
