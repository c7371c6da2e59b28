//! # Money Module
//!
//! Provides the `Money` type for amounts that are shown to a user.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ACCUMULATE IN f64, ROUND ONCE                                          │
//! │                                                                         │
//! │  line 1: 3 × 33.33  ─┐                                                  │
//! │  line 2: 2 × 12.10  ─┼──► Σ (full precision) ──► tax ──► grand total   │
//! │  line 3: 1 × 0.333  ─┘                                   (f64)          │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                        Money::from_amount() → paise     │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                                     "₹99.99"            │
//! │                                                                         │
//! │  Rounding every line to paise first compounds error across long        │
//! │  orders, so `Money` is only ever built from a finished figure.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use harvest_core::money::Money;
//!
//! let total = Money::from_amount(120.0);
//! assert_eq!(total.to_string(), "₹120.00");
//! assert_eq!(Money::from_paise(5).to_string(), "₹0.05");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A display-ready amount in paise (1/100 rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative inputs still display with a sign
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Built from f64 only once**: see the module docs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount; larger figures clamp here.
    pub const MAX: Money = Money(i64::MAX);

    /// Smallest representable amount.
    pub const MIN: Money = Money(i64::MIN);

    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use harvest_core::money::Money;
    ///
    /// let fee = Money::from_paise(1050); // ₹10.50
    /// assert_eq!(fee.paise(), 1050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Rounds a full-precision amount to the nearest paisa.
    ///
    /// Halves round away from zero. NaN and infinities become zero so a
    /// display never shows "NaN". Finite amounts past the i64 paise range
    /// clamp to [`Money::MAX`] or [`Money::MIN`].
    ///
    /// ## Example
    /// ```rust
    /// use harvest_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(99.99).paise(), 9999);
    /// assert_eq!(Money::from_amount(0.125).paise(), 13);
    /// assert_eq!(Money::from_amount(f64::NAN), Money::zero());
    /// assert_eq!(Money::from_amount(1e300), Money::MAX);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        let paise = (amount * 100.0).round();
        if paise >= i64::MAX as f64 {
            Money::MAX
        } else if paise <= i64::MIN as f64 {
            Money::MIN
        } else {
            Money(paise as i64)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount as a plain number of rupees.
    #[inline]
    pub fn to_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `₹<rupees>.<paise>` with exactly two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.rupees().abs(),
            self.paise_part()
        )
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(12000).to_string(), "₹120.00");
        assert_eq!(Money::from_paise(9999).to_string(), "₹99.99");
        assert_eq!(Money::from_paise(5).to_string(), "₹0.05");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_from_amount_rounds_once() {
        // 3 × 33.33 is not exactly 99.99 in binary floating point
        assert_eq!(Money::from_amount(3.0 * 33.33).paise(), 9999);
        assert_eq!(Money::from_amount(120.0).paise(), 12000);
        assert_eq!(Money::from_amount(0.005).paise(), 1);
        assert_eq!(Money::from_amount(-0.005).paise(), -1);
    }

    #[test]
    fn test_from_amount_non_finite_is_zero() {
        assert_eq!(Money::from_amount(f64::NAN), Money::zero());
        assert_eq!(Money::from_amount(f64::INFINITY), Money::zero());
        assert_eq!(Money::from_amount(f64::NEG_INFINITY), Money::zero());
        assert_eq!(Money::from_amount(f64::NAN).to_string(), "₹0.00");
    }

    #[test]
    fn test_to_amount() {
        assert!((Money::from_paise(12345).to_amount() - 123.45).abs() < 1e-9);
    }

    #[test]
    fn test_from_amount_clamps_out_of_range() {
        assert_eq!(Money::from_amount(1e300), Money::MAX);
        assert_eq!(Money::from_amount(-1e300), Money::MIN);
        assert_eq!(Money::from_amount(f64::MAX), Money::MAX);
        assert_eq!(Money::MAX.to_string(), "₹92233720368547758.07");
    }
}
