//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, and the
//! `PreciseAmount` accumulator used between pricing and the final rounding.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Exact Sub-Cents                          │
//! │    Inputs and outputs are whole cents (i64).                            │
//! │    Tax and discounts produce fractions of a cent, so line amounts       │
//! │    are carried in 1/10000ths of a cent (i128) until the very end,       │
//! │    where the order total is rounded ONCE, half away from zero.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::{Money, PreciseAmount};
//! use tally_core::types::Rate;
//!
//! let price = Money::from_cents(999); // $9.99
//! let line = PreciseAmount::from_money(price).add_rate(Rate::from_bps(1000));
//!
//! // $9.99 + 10% = $10.989 → $10.99
//! assert_eq!(line.round_to_money().cents(), 1099);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::types::Rate;

/// Number of `PreciseAmount` units in one cent.
pub const SUB_CENTS_PER_CENT: i128 = 10_000;

/// Basis points in 100%.
const BPS_PER_UNIT: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values must be representable so validation
///   can reject negative prices instead of the type silently hiding them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: serde support; serializes as a plain integer of cents
///
/// ## Where Money is Used
/// ```text
/// OrderItem.unit_price ──► OrderItem.total_price() ──► PreciseAmount
///                                                          │
///                                    pricing rule ◄────────┘
///                                          │
///                                          ▼
///                               subtotal + shipping ──► round ──► Money
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity. Exact, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(999); // $9.99
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 1998); // $19.98
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$10.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Precise Amount
// =============================================================================

/// A monetary amount in 1/10000ths of a cent.
///
/// Pricing rules work on this type so that a 10% surcharge on $9.99 stays
/// exactly $10.989 until the order total is rounded. One rate application to
/// a whole-cent amount is always exact; further applications round half away
/// from zero at the sub-cent scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PreciseAmount(i128);

impl PreciseAmount {
    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        PreciseAmount(0)
    }

    /// Exact conversion from whole cents.
    #[inline]
    pub const fn from_money(money: Money) -> Self {
        PreciseAmount(money.cents() as i128 * SUB_CENTS_PER_CENT)
    }

    /// Raw value in 1/10000ths of a cent.
    #[inline]
    pub const fn sub_cents(&self) -> i128 {
        self.0
    }

    /// Multiplies by `(1 + rate)`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{Money, PreciseAmount};
    /// use tally_core::types::Rate;
    ///
    /// let taxed = PreciseAmount::from_money(Money::from_cents(10000))
    ///     .add_rate(Rate::from_bps(1000));
    /// assert_eq!(taxed, PreciseAmount::from_money(Money::from_cents(11000)));
    /// ```
    pub fn add_rate(self, rate: Rate) -> Self {
        self.scale_bps(BPS_PER_UNIT + rate.bps() as i128)
    }

    /// Multiplies by `(1 - rate)`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{Money, PreciseAmount};
    /// use tally_core::types::Rate;
    ///
    /// let discounted = PreciseAmount::from_money(Money::from_cents(5000))
    ///     .subtract_rate(Rate::from_bps(500));
    /// assert_eq!(discounted.round_to_money().cents(), 4750);
    /// ```
    pub fn subtract_rate(self, rate: Rate) -> Self {
        self.scale_bps(BPS_PER_UNIT - rate.bps() as i128)
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// ## Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF AWAY FROM ZERO                                          │
    /// │                                                                     │
    /// │    $10.985  → $10.99        -$10.985 → -$10.99                      │
    /// │    $10.9849 → $10.98        -$10.9849 → -$10.98                     │
    /// │                                                                     │
    /// │  Applied exactly once per order, to the grand total.                │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn round_to_money(&self) -> Money {
        Money::from_cents(div_round_half_away(self.0, SUB_CENTS_PER_CENT) as i64)
    }

    fn scale_bps(self, factor_bps: i128) -> Self {
        PreciseAmount(div_round_half_away(self.0 * factor_bps, BPS_PER_UNIT))
    }
}

/// Integer division rounding half away from zero. `denominator` must be > 0.
fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.abs() * 2 >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

impl Add for PreciseAmount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        PreciseAmount(self.0 + other.0)
    }
}

impl Add<Money> for PreciseAmount {
    type Output = Self;

    #[inline]
    fn add(self, other: Money) -> Self {
        self + PreciseAmount::from_money(other)
    }
}

impl AddAssign for PreciseAmount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for PreciseAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(PreciseAmount::zero(), |acc, amount| acc + amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
