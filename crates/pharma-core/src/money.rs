//! # Money Module
//!
//! Provides the `Money` and `Percent` types for handling monetary values
//! and discount percentages safely.
//!
//! ## Why Full-Precision Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING PROBLEM                                                   │
//! │                                                                         │
//! │  Discounted unit prices routinely carry fractional minor units:        │
//! │    25.50 × (1 − 5/100) = 24.225                                        │
//! │                                                                         │
//! │  Rounding every line before summing compounds the error:               │
//! │    round(24.225) × 4 = 96.92   vs   round(24.225 × 4) = 96.90          │
//! │                                                                         │
//! │  OUR SOLUTION: keep `rust_decimal` full precision through every        │
//! │  aggregation step and round exactly once, at presentation, with        │
//! │  banker's rounding (round half to even — no systematic bias).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pharma_core::money::{Money, Percent};
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_major(100);
//! let pct = Percent::new(Decimal::from(20)).unwrap();
//!
//! let discounted = price.apply_discount(pct);
//! assert_eq!(discounted, Money::from_major(80));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_percent;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value at full decimal precision.
///
/// ## Design Decisions
/// - **`Decimal` inside**: exact base-10 arithmetic, no float drift
/// - **Single-field tuple struct**: zero-cost abstraction
/// - **Rounding is explicit**: only [`Money::rounded`] and `Display` round;
///   arithmetic never does
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► effective_price ──► OrderItem.unit_price
///                                              │
///                                              ▼
///                               OrderItem.line_total ──► Order.total
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Creates a Money value from a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from a whole number of major currency units.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    ///
    /// let price = Money::from_major(25);
    /// assert_eq!(price.amount().to_string(), "25");
    /// ```
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Returns the underlying decimal amount at full precision.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Applies a percentage discount and returns the discounted amount
    /// at full precision.
    ///
    /// Formula: `amount × (1 − percent/100)`. No rounding happens here;
    /// callers aggregate first and round once at presentation.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::{Money, Percent};
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_major(100);
    /// let discounted = subtotal.apply_discount(Percent::new(Decimal::from(10)).unwrap());
    /// assert_eq!(discounted, Money::from_major(90));
    /// ```
    pub fn apply_discount(&self, percent: Percent) -> Money {
        Money(self.0 * (Decimal::ONE - percent.fraction()))
    }

    /// Rounds to the currency's minor-unit precision (2 decimal places)
    /// using banker's rounding (round half to even).
    ///
    /// This is the presentation boundary. Over many transactions, round
    /// half to even avoids the systematic bias of always rounding up.
    pub fn rounded(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        )
    }
}

// =============================================================================
// Money Trait Implementations
// =============================================================================

/// Display rounds to 2 decimal places. Debug keeps full precision.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded().0;
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, rounded.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Summation of line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A discount percentage, guaranteed to be within [0, 100].
///
/// ## Why a Newtype?
/// Validation happens once, at construction. Everything downstream
/// (resolution, aggregation) can apply a `Percent` without re-checking
/// the range — an out-of-range discount is unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Percent(#[ts(as = "String")] Decimal);

impl Percent {
    /// Creates a validated percentage.
    ///
    /// ## Errors
    /// Fails with [`crate::error::CoreError::InvalidDiscount`] when the
    /// value is outside [0, 100].
    pub fn new(value: Decimal) -> CoreResult<Self> {
        validate_percent(value)?;
        Ok(Percent(value))
    }

    /// Creates a percentage from a whole number, the common case for
    /// tier labels and coupon forms.
    pub fn from_whole(value: u32) -> CoreResult<Self> {
        Percent::new(Decimal::from(value))
    }

    /// Zero percent (no discount).
    #[inline]
    pub const fn zero() -> Self {
        Percent(Decimal::ZERO)
    }

    /// Returns the percentage value (e.g., 20 for 20%).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the percentage as a fraction (e.g., 0.2 for 20%).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Checks if this is a zero discount.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(25);
        assert_eq!(money.amount(), dec!(25));
    }

    #[test]
    fn test_display_rounds_to_minor_units() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "$10.99");
        assert_eq!(format!("{}", Money::new(dec!(5))), "$5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.5))), "-$5.50");
        // Banker's rounding: 24.225 → 24.22 (2 is even)
        assert_eq!(format!("{}", Money::new(dec!(24.225))), "$24.22");
        // 24.235 → 24.24 (4 is even)
        assert_eq!(format!("{}", Money::new(dec!(24.235))), "$24.24");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10));
        let b = Money::new(dec!(5));

        assert_eq!((a + b).amount(), dec!(15));
        assert_eq!((a - b).amount(), dec!(5));
        assert_eq!((a * 3).amount(), dec!(30));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.amount(), dec!(15));
    }

    #[test]
    fn test_sum_of_line_totals() {
        let total: Money = [Money::new(dec!(100)), Money::new(dec!(27))]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), dec!(127));
    }

    #[test]
    fn test_apply_discount_keeps_full_precision() {
        // 25.50 at 5% off = 24.225: the fractional minor unit survives
        let price = Money::new(dec!(25.50));
        let pct = Percent::new(dec!(5)).unwrap();
        let discounted = price.apply_discount(pct);
        assert_eq!(discounted.amount(), dec!(24.2250));
        assert_eq!(discounted.rounded().amount(), dec!(24.22));
    }

    #[test]
    fn test_percent_range_validation() {
        assert!(Percent::new(dec!(0)).is_ok());
        assert!(Percent::new(dec!(100)).is_ok());
        assert!(Percent::new(dec!(45.5)).is_ok());
        assert!(Percent::new(dec!(-1)).is_err());
        assert!(Percent::new(dec!(101)).is_err());
    }

    #[test]
    fn test_percent_fraction() {
        let pct = Percent::new(dec!(20)).unwrap();
        assert_eq!(pct.fraction(), dec!(0.2));
        assert_eq!(pct.to_string(), "20%");
    }

    #[test]
    fn test_negative_checks() {
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(!Money::from_major(1).is_negative());
    }
}
