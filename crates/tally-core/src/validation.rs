//! # Validation Module
//!
//! Order preconditions, checked before any pricing happens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Validation                                   │
//! │                                                                         │
//! │  items empty? ───────────────────────► EmptyOrder                      │
//! │       │                                                                 │
//! │       ▼  for each item, in input order                                 │
//! │  quantity <= 0? ─────────────────────► InvalidQuantity                 │
//! │  unit price < 0? ────────────────────► InvalidPrice                    │
//! │  name blank? ────────────────────────► EmptyProductName                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OK → pricing                                                          │
//! │                                                                         │
//! │  Fail-fast: the FIRST violation is returned, nothing is aggregated.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_order_items, validate_quantity};
//! use tally_core::{Money, OrderItem};
//!
//! assert!(validate_quantity("Laptop", 1).is_ok());
//!
//! let order = [OrderItem::new("Laptop", Money::from_cents(99999), 1, "ELECTRONICS")];
//! assert!(validate_order_items(&order).is_ok());
//! assert!(validate_order_items(&[]).is_err());
//! ```

use crate::error::{ConfigError, ConfigResult, ValidationError};
use crate::money::Money;
use crate::types::{OrderItem, PricingConfig};
use crate::MAX_RATE_BPS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// `position` is reported back in the error so the caller can point at the
/// offending line.
pub fn validate_product_name(name: &str, position: usize) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyProductName { position });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(product_name: &str, qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::InvalidQuantity {
            product_name: product_name.to_string(),
            quantity: qty,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_unit_price;
/// use tally_core::Money;
///
/// assert!(validate_unit_price("Sticker", Money::zero()).is_ok());
/// assert!(validate_unit_price("Sticker", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_unit_price(product_name: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::InvalidPrice {
            product_name: product_name.to_string(),
            unit_price: price,
        });
    }

    Ok(())
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates one item. Checks quantity, then price, then name.
pub fn validate_order_item(item: &OrderItem, position: usize) -> ValidationResult<()> {
    validate_quantity(item.product_name(), item.quantity())?;
    validate_unit_price(item.product_name(), item.unit_price())?;
    validate_product_name(item.product_name(), position)?;
    Ok(())
}

/// Validates a whole order, stopping at the first violation.
pub fn validate_order_items(items: &[OrderItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }

    items
        .iter()
        .enumerate()
        .try_for_each(|(position, item)| validate_order_item(item, position))
}

// =============================================================================
// Config Validators
// =============================================================================

/// Validates a rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - A discount above 100% would price a line below zero
pub fn validate_rate_bps(field: &str, bps: u32) -> ConfigResult<()> {
    if bps > MAX_RATE_BPS {
        return Err(ConfigError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a configured amount in cents (threshold or shipping charge).
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_amount_cents(field: &str, cents: i64) -> ConfigResult<()> {
    if cents < 0 {
        return Err(ConfigError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the bulk quantity threshold.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_bulk_quantity(field: &str, qty: i64) -> ConfigResult<()> {
    if qty <= 0 {
        return Err(ConfigError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates every field of a pricing configuration, stopping at the first
/// violation in declaration order.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_pricing_config;
/// use tally_core::PricingConfig;
///
/// assert!(validate_pricing_config(&PricingConfig::default()).is_ok());
///
/// let config = PricingConfig { standard_shipping_cents: -1, ..PricingConfig::default() };
/// assert!(validate_pricing_config(&config).is_err());
/// ```
pub fn validate_pricing_config(config: &PricingConfig) -> ConfigResult<()> {
    validate_rate_bps("electronics_tax_bps", config.electronics_tax_bps)?;
    validate_rate_bps("book_discount_bps", config.book_discount_bps)?;
    validate_bulk_quantity("book_bulk_quantity", config.book_bulk_quantity)?;
    validate_amount_cents(
        "free_shipping_threshold_cents",
        config.free_shipping_threshold_cents,
    )?;
    validate_amount_cents("standard_shipping_cents", config.standard_shipping_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: i64, qty: i64) -> OrderItem {
        OrderItem::new(name, Money::from_cents(cents), qty, "ACCESSORIES")
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Mouse Pad", 0).is_ok());
        assert_eq!(
            validate_product_name("", 3),
            Err(ValidationError::EmptyProductName { position: 3 })
        );
        assert!(validate_product_name("   ", 0).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("Pen", 1).is_ok());
        assert!(validate_quantity("Pen", 1000).is_ok());

        assert!(validate_quantity("Pen", 0).is_err());
        assert!(validate_quantity("Pen", -1).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price("Pen", Money::zero()).is_ok());
        assert!(validate_unit_price("Pen", Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price("Pen", Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_empty_order_rejected() {
        assert_eq!(validate_order_items(&[]), Err(ValidationError::EmptyOrder));
    }

    #[test]
    fn test_item_checks_quantity_before_price_before_name() {
        // Everything wrong: quantity is reported.
        let err = validate_order_item(&item("", -5, 0), 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidQuantity { quantity: 0, .. }));

        // Quantity fine, price and name wrong: price is reported.
        let err = validate_order_item(&item("", -5, 1), 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice { .. }));

        let err = validate_order_item(&item(" ", 5, 1), 7).unwrap_err();
        assert_eq!(err, ValidationError::EmptyProductName { position: 7 });
    }

    #[test]
    fn test_first_invalid_item_wins() {
        let order = [
            item("Pen", 100, 1),
            item("Stapler", -1, 1),
            item("Ruler", 100, 0),
        ];
        let err = validate_order_items(&order).unwrap_err();
        assert_eq!(err.to_string(), "Invalid price for item Stapler");
    }

    #[test]
    fn test_validate_rate_bps() {
        assert!(validate_rate_bps("book_discount_bps", 0).is_ok());
        assert!(validate_rate_bps("book_discount_bps", 10_000).is_ok());
        assert_eq!(
            validate_rate_bps("book_discount_bps", 10_001),
            Err(ConfigError::OutOfRange {
                field: "book_discount_bps".to_string(),
                min: 0,
                max: 10_000,
            })
        );
    }

    #[test]
    fn test_validate_amount_cents() {
        assert!(validate_amount_cents("standard_shipping_cents", 0).is_ok());
        assert!(validate_amount_cents("standard_shipping_cents", -1).is_err());
    }

    #[test]
    fn test_validate_bulk_quantity() {
        assert!(validate_bulk_quantity("book_bulk_quantity", 1).is_ok());
        assert!(validate_bulk_quantity("book_bulk_quantity", 0).is_err());
    }

    #[test]
    fn test_validate_pricing_config() {
        assert!(validate_pricing_config(&PricingConfig::default()).is_ok());

        let discount_over_full_price = PricingConfig {
            book_discount_bps: 10_001,
            ..PricingConfig::default()
        };
        let err = validate_pricing_config(&discount_over_full_price).unwrap_err();
        assert_eq!(err.to_string(), "book_discount_bps must be between 0 and 10000");

        let negative_shipping = PricingConfig {
            standard_shipping_cents: -1,
            ..PricingConfig::default()
        };
        assert!(matches!(
            validate_pricing_config(&negative_shipping),
            Err(ConfigError::OutOfRange { ref field, .. }) if field == "standard_shipping_cents"
        ));

        let negative_threshold = PricingConfig {
            free_shipping_threshold_cents: -100,
            ..PricingConfig::default()
        };
        assert!(validate_pricing_config(&negative_threshold).is_err());
    }
}
