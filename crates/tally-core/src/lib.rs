//! # tally-core: Pure Order Pricing for Tally
//!
//! This crate computes the total charge for a shopping order. It contains
//! the pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-demo (caller)                          │   │
//! │  │    env config ──► read order JSON ──► print order summary      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &[OrderItem]                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ OrderItem │  │   Money   │  │   Rules   │  │   rules   │  │   │
//! │  │   │  Quote    │  │  Precise  │  │ Shipping  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                         calculator                              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OrderItem, OrderQuote, PricingConfig, Rate)
//! - [`money`] - Integer cents and exact sub-cent amounts
//! - [`pricing`] - Category pricing rules and the rule table
//! - [`shipping`] - Free-shipping threshold and flat rate
//! - [`calculator`] - The order calculator
//! - [`validation`] - Order preconditions
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same order in, same total out
//! 2. **No I/O**: file system, network and logging belong to the caller
//! 3. **Integer Money**: cents in and out, exact sub-cents in between
//! 4. **Round Once**: only the grand total is rounded
//! 5. **Explicit Errors**: a typed `InvalidOrder`, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Money, OrderCalculator, OrderItem};
//!
//! let calculator = OrderCalculator::new();
//! let order = vec![
//!     OrderItem::new("Headphones", Money::from_cents(10000), 1, "ELECTRONICS"),
//! ];
//!
//! // $100.00 + 10% tax = $110.00, free shipping
//! let total = calculator.calculate_order_total(&order).unwrap();
//! assert_eq!(total, Money::from_cents(11000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod pricing;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::OrderCalculator;
pub use error::{ConfigError, ConfigResult, OrderError, OrderResult, ValidationError};
pub use money::{Money, PreciseAmount};
pub use pricing::{BulkDiscount, PricingRule, PricingRules, Surcharge, Unchanged};
pub use shipping::ShippingPolicy;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Surcharge on ELECTRONICS lines: 10%.
pub const ELECTRONICS_TAX_BPS: u32 = 1000;

/// Discount on bulk BOOKS lines: 5%.
pub const BOOK_BULK_DISCOUNT_BPS: u32 = 500;

/// Minimum BOOKS quantity (inclusive) for the bulk discount.
pub const BOOK_BULK_QUANTITY_THRESHOLD: i64 = 5;

/// Subtotal (inclusive) from which shipping is free: $100.00.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(10_000);

/// Flat shipping below the threshold: $10.00.
pub const STANDARD_SHIPPING_COST: Money = Money::from_cents(1_000);

/// Largest rate a pricing configuration may carry (100%).
pub const MAX_RATE_BPS: u32 = 10_000;
