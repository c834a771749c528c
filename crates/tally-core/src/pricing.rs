//! # Pricing Rules
//!
//! Category-specific adjustments to a line total.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  category (as given) ──► to_uppercase() ──► table lookup               │
//! │                                                 │                       │
//! │            ┌────────────────────────────────────┼───────────────┐       │
//! │            ▼                                    ▼               ▼       │
//! │   "ELECTRONICS"                           "BOOKS"          (missing)   │
//! │   Surcharge 10%                BulkDiscount 5% if qty >= 5   Unchanged  │
//! │                                                                         │
//! │  New categories are added by registering a rule. Existing rules are    │
//! │  never edited to support a new category.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::money::PreciseAmount;
use crate::types::{OrderItem, PricingConfig, Rate};

/// Category key for the electronics surcharge.
pub const ELECTRONICS_CATEGORY: &str = "ELECTRONICS";

/// Category key for the bulk book discount.
pub const BOOKS_CATEGORY: &str = "BOOKS";

/// Normalizes a category for rule lookup.
///
/// Matching is case-insensitive; surrounding whitespace is significant.
pub fn normalize_category(category: &str) -> String {
    category.to_uppercase()
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// Maps a raw line total and its quantity to an adjusted line total.
///
/// Rules must be pure. Any `Fn(PreciseAmount, i64) -> PreciseAmount` closure
/// that is `Send + Sync` is a rule.
///
/// ## Example
/// ```rust
/// use tally_core::money::{Money, PreciseAmount};
/// use tally_core::pricing::PricingRules;
///
/// // Gift wrapping: flat $2.00 per line.
/// let rules = PricingRules::standard().with_rule("GIFTS", |total: PreciseAmount, _qty: i64| {
///     total + Money::from_cents(200)
/// });
/// assert_eq!(rules.len(), 3);
/// ```
pub trait PricingRule: Send + Sync {
    fn apply(&self, line_total: PreciseAmount, quantity: i64) -> PreciseAmount;
}

impl<F> PricingRule for F
where
    F: Fn(PreciseAmount, i64) -> PreciseAmount + Send + Sync,
{
    fn apply(&self, line_total: PreciseAmount, quantity: i64) -> PreciseAmount {
        self(line_total, quantity)
    }
}

/// Leaves the line total as it is. Used for any unregistered category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unchanged;

impl PricingRule for Unchanged {
    fn apply(&self, line_total: PreciseAmount, _quantity: i64) -> PreciseAmount {
        line_total
    }
}

/// Multiplies the line total by `(1 + rate)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surcharge {
    pub rate: Rate,
}

impl PricingRule for Surcharge {
    fn apply(&self, line_total: PreciseAmount, _quantity: i64) -> PreciseAmount {
        line_total.add_rate(self.rate)
    }
}

/// Multiplies the line total by `(1 - rate)` once `quantity >= min_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDiscount {
    pub rate: Rate,
    pub min_quantity: i64,
}

impl PricingRule for BulkDiscount {
    fn apply(&self, line_total: PreciseAmount, quantity: i64) -> PreciseAmount {
        if quantity >= self.min_quantity {
            line_total.subtract_rate(self.rate)
        } else {
            line_total
        }
    }
}

static UNCHANGED: Unchanged = Unchanged;

// =============================================================================
// Rule Table
// =============================================================================

/// Table from normalized category to its pricing rule.
///
/// Built once, then only read. Cloning shares the rule objects.
#[derive(Clone, Default)]
pub struct PricingRules {
    rules: HashMap<String, Arc<dyn PricingRule>>,
}

impl PricingRules {
    /// An empty table: every category is priced unchanged.
    pub fn new() -> Self {
        PricingRules::default()
    }

    /// The standard ELECTRONICS and BOOKS rules with default rates.
    pub fn standard() -> Self {
        PricingRules::standard_with(&PricingConfig::default())
    }

    /// The standard ELECTRONICS and BOOKS rules with configured rates.
    ///
    /// ## Errors
    /// [`crate::ConfigError::OutOfRange`] when `config` fails
    /// [`PricingConfig::validate`], e.g. a book discount above 100%.
    pub fn from_config(config: &PricingConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(PricingRules::standard_with(config))
    }

    fn standard_with(config: &PricingConfig) -> Self {
        PricingRules::new()
            .with_rule(
                ELECTRONICS_CATEGORY,
                Surcharge {
                    rate: config.electronics_tax(),
                },
            )
            .with_rule(
                BOOKS_CATEGORY,
                BulkDiscount {
                    rate: config.book_discount(),
                    min_quantity: config.book_bulk_quantity,
                },
            )
    }

    /// Registers `rule` for `category`, replacing any earlier rule for the
    /// same normalized category.
    pub fn register(&mut self, category: &str, rule: impl PricingRule + 'static) -> &mut Self {
        self.rules.insert(normalize_category(category), Arc::new(rule));
        self
    }

    /// Builder form of [`PricingRules::register`].
    pub fn with_rule(mut self, category: &str, rule: impl PricingRule + 'static) -> Self {
        self.register(category, rule);
        self
    }

    /// The rule for `category`, or [`Unchanged`] when none is registered.
    pub fn rule_for(&self, category: &str) -> &dyn PricingRule {
        match self.rules.get(&normalize_category(category)) {
            Some(rule) => rule.as_ref(),
            None => &UNCHANGED,
        }
    }

    /// Whether a rule is registered for `category`.
    pub fn contains(&self, category: &str) -> bool {
        self.rules.contains_key(&normalize_category(category))
    }

    /// Adjusted line total for one item.
    pub fn apply(&self, item: &OrderItem) -> PreciseAmount {
        let line_total = PreciseAmount::from_money(item.total_price());
        self.rule_for(item.category()).apply(line_total, item.quantity())
    }

    /// Registered category keys, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for PricingRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingRules")
            .field("categories", &self.categories())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
