//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderItem     │   │   OrderQuote    │   │  PricingConfig  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_name   │   │  lines          │   │  tax / discount │       │
//! │  │  unit_price     │   │  subtotal       │   │  bulk quantity  │       │
//! │  │  quantity       │   │  shipping       │   │  shipping       │       │
//! │  │  category       │   │  total          │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │      Rate       │                                                    │
//! │  │  ─────────────  │                                                    │
//! │  │  bps (u32)      │                                                    │
//! │  │  1000 = 10%     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::money::Money;
use crate::validation::validate_pricing_config;
use crate::{
    BOOK_BULK_DISCOUNT_BPS, BOOK_BULK_QUANTITY_THRESHOLD, ELECTRONICS_TAX_BPS,
    FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING_COST,
};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (electronics tax), 500 bps = 5% (bulk book discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One purchased line of an order.
///
/// Immutable once constructed. The value performs no validation of its own;
/// [`crate::validation::validate_order_items`] does that when the order is
/// priced, so an `OrderItem` may hold a zero quantity or a negative price.
///
/// ## JSON Shape
/// ```json
/// { "product_name": "Mouse Pad", "unit_price_cents": 999, "quantity": 2, "category": "ACCESSORIES" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_name: String,
    #[serde(rename = "unit_price_cents")]
    unit_price: Money,
    quantity: i64,
    #[serde(default)]
    category: String,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        category: impl Into<String>,
    ) -> Self {
        OrderItem {
            product_name: product_name.into(),
            unit_price,
            quantity,
            category: category.into(),
        }
    }

    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Category as given by the caller (not normalized).
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Line total before any category adjustment (unit price × quantity).
    ///
    /// Exact; nothing is rounded here.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, OrderItem};
    ///
    /// let item = OrderItem::new("Mouse Pad", Money::from_cents(999), 2, "ACCESSORIES");
    /// assert_eq!(item.total_price(), Money::from_cents(1998));
    /// ```
    #[inline]
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Quote
// =============================================================================

/// One priced line of an [`OrderQuote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_name: String,
    /// Normalized (upper-cased) category used for the rule lookup.
    pub category: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// unit_price × quantity.
    pub line_total: Money,
    /// Line total after the category rule, rounded for display.
    pub adjusted_total: Money,
}

/// Breakdown of a priced order.
///
/// `subtotal` and each `adjusted_total` are rounded for display only. The
/// `total` is computed from the exact, unrounded subtotal, so it can differ
/// by a cent from `subtotal + shipping` as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub lines: Vec<QuoteLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl OrderQuote {
    /// True when the order qualified for free shipping.
    #[inline]
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Configuration Types
// =============================================================================

/// Tunable pricing constants.
///
/// Defaults are the standard policy: 10% electronics tax, 5% off books when
/// buying 5 or more, free shipping from $100.00, otherwise $10.00 flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Surcharge on ELECTRONICS lines, in basis points.
    pub electronics_tax_bps: u32,

    /// Discount on BOOKS lines at or above the bulk quantity, in basis points.
    pub book_discount_bps: u32,

    /// Minimum quantity (inclusive) for the book discount.
    pub book_bulk_quantity: i64,

    /// Subtotal (inclusive) from which shipping is free, in cents.
    pub free_shipping_threshold_cents: i64,

    /// Flat shipping below the threshold, in cents.
    pub standard_shipping_cents: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            electronics_tax_bps: ELECTRONICS_TAX_BPS,
            book_discount_bps: BOOK_BULK_DISCOUNT_BPS,
            book_bulk_quantity: BOOK_BULK_QUANTITY_THRESHOLD,
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD.cents(),
            standard_shipping_cents: STANDARD_SHIPPING_COST.cents(),
        }
    }
}

impl PricingConfig {
    /// Rejects rates above 100% and negative amounts or bulk quantities.
    ///
    /// See [`crate::validation::validate_pricing_config`].
    pub fn validate(&self) -> ConfigResult<()> {
        validate_pricing_config(self)
    }

    #[inline]
    pub fn electronics_tax(&self) -> Rate {
        Rate::from_bps(self.electronics_tax_bps)
    }

    #[inline]
    pub fn book_discount(&self) -> Rate {
        Rate::from_bps(self.book_discount_bps)
    }

    #[inline]
    pub fn free_shipping_threshold(&self) -> Money {
        Money::from_cents(self.free_shipping_threshold_cents)
    }

    #[inline]
    pub fn standard_shipping(&self) -> Money {
        Money::from_cents(self.standard_shipping_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
