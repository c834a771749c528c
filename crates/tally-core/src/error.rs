//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── OrderError       - The single failure kind of the calculator      │
//! │  ├── ValidationError  - Which precondition an order broke              │
//! │  └── ConfigError      - A PricingConfig value outside its range        │
//! │                                                                         │
//! │  tally-demo errors (app crate)                                         │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── AppError         - I/O, JSON, config and order failures           │
//! │                                                                         │
//! │  Flow: ValidationError → OrderError::InvalidOrder → AppError           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, position)
//! 3. Errors are enum variants, never String
//! 4. The `Display` text of each variant is the human-readable reason

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Order Error
// =============================================================================

/// Errors returned by the order calculator.
///
/// There is exactly one kind: the order violates a precondition. The wrapped
/// [`ValidationError`] tells callers which one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The order cannot be priced.
    ///
    /// ## When This Occurs
    /// - The order has no items
    /// - An item has a zero or negative quantity
    /// - An item has a negative unit price
    /// - An item has an empty product name
    #[error("{0}")]
    InvalidOrder(#[from] ValidationError),
}

impl OrderError {
    /// Human-readable reason, suitable for showing to whoever built the order.
    pub fn reason(&self) -> String {
        match self {
            OrderError::InvalidOrder(validation) => validation.to_string(),
        }
    }

    /// The precondition that failed.
    pub fn validation(&self) -> &ValidationError {
        match self {
            OrderError::InvalidOrder(validation) => validation,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Order precondition failures.
///
/// Validation is fail-fast: only the first violation, in input order, is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The order has no items at all.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// Quantity is zero or negative.
    #[error("Invalid quantity for item {product_name}")]
    InvalidQuantity { product_name: String, quantity: i64 },

    /// Unit price is negative.
    #[error("Invalid price for item {product_name}")]
    InvalidPrice {
        product_name: String,
        unit_price: Money,
    },

    /// Product name is empty or whitespace only.
    ///
    /// `position` is the zero-based index of the item in the order.
    #[error("Product name cannot be empty")]
    EmptyProductName { position: usize },
}

// =============================================================================
// Config Error
// =============================================================================

/// Pricing configuration that would let a valid order total below zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `field` names the [`crate::PricingConfig`] field.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

/// Result of building anything from a [`crate::PricingConfig`].
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
