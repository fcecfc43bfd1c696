//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Summing thousands of sale values as floats drifts the ACC report.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Storage and aggregation use i64 cents.                               │
//! │    Decimals exist only at the HTTP boundary (rust_decimal).             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loja_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let value = Money::from_decimal(Decimal::new(1099, 2)).unwrap(); // 10.99
//! assert_eq!(value.cents(), 1099);
//! assert_eq!(value.to_decimal(), Decimal::new(1099, 2));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: the ledger does not forbid negative sale values
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  POST /adicionando_venda {"value": 10.5}                                │
/// │        │ Money::from_decimal                                            │
/// │        ▼                                                                │
/// │  Sale.value_cents = 1050  ──►  SUM(value_cents) ──► ACC                 │
/// │                                                     │ Money::average_over│
/// │                                                     ▼                   │
/// │                                          {"acc": 10.5}                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (e.g. `10.995`) into cents.
    ///
    /// Sub-cent digits are rounded with Bankers Rounding (half to even), so
    /// `10.995` becomes `1100` and `10.985` becomes `1098`.
    ///
    /// ## Returns
    /// * `Some(Money)` - the amount fits in i64 cents
    /// * `None` - the amount overflows
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        cents.to_i64().map(Money)
    }

    /// Returns the value as a decimal with two fractional digits.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` when the sum leaves the `i64` range.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Divides this amount evenly over `count` parties.
    ///
    /// The quotient keeps two fractional digits, rounded half to even.
    ///
    /// ## Returns
    /// * `None` when `count` is zero. Callers must treat this as "no data",
    ///   never as zero.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let total = Money::from_cents(6000);
    /// assert_eq!(total.average_over(2), Some(Decimal::new(3000, 2)));
    /// assert_eq!(total.average_over(0), None);
    /// ```
    pub fn average_over(&self, count: i64) -> Option<Decimal> {
        if count == 0 {
            return None;
        }

        self.to_decimal()
            .checked_div(Decimal::from(count))
            .map(|avg| avg.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with two decimals. Used in logs only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
