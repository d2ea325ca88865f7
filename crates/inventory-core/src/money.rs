//! # Money Module
//!
//! `Money` for amounts and `DiscountRate` for the percent discount typed
//! into the sale form.
//!
//! ## Integer Money, Decimal Wire
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Backend JSON          inside the crate           Sales template        │
//! │  ────────────          ────────────────           ──────────────        │
//! │  "price": 100.5  ───►  Money(10050)  ───────────► "Rs 100.50"           │
//! │                        price × qty                                      │
//! │                        − discount (bps)                                 │
//! │                        − amount paid                                    │
//! │  "total": 180.0  ◄───  Money(18000)                                     │
//! │                                                                         │
//! │  Floats only exist at the JSON boundary (`money::decimal`).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::MINOR_UNITS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (paisa for PKR, cents for USD).
///
/// Serializes as an integer by default; wire types that carry decimal
/// numbers use `#[serde(with = "money::decimal")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use inventory_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount in major units, rounding half away from zero.
    ///
    /// Only used where the backend hands us JSON numbers.
    pub fn from_major(amount: f64) -> Self {
        Money((amount * MINOR_UNITS as f64).round() as i64)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in major units, for JSON output.
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS as f64
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `self` or zero, whichever is larger.
    ///
    /// ```rust
    /// use inventory_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-250).or_zero(), Money::zero());
    /// assert_eq!(Money::from_cents(250).or_zero().cents(), 250);
    /// ```
    #[inline]
    pub fn or_zero(self) -> Self {
        self.max(Money::zero())
    }

    /// Multiplies a unit price by a quantity, saturating at the i64 bounds.
    ///
    /// ```rust
    /// use inventory_core::money::Money;
    ///
    /// let line_total = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    ///
    /// let huge = Money::from_cents(10_000).multiply_quantity(i64::MAX);
    /// assert_eq!(huge.cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Parses amount text as typed into a numeric input ("150", "99.5").
    ///
    /// ## Rules
    /// - Leading/trailing whitespace is ignored
    /// - An optional sign, digits, and an optional fractional part
    /// - Fractions beyond two digits round half away from zero
    /// - Anything else (including empty text) is `None`
    ///
    /// ```rust
    /// use inventory_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("150"), Some(Money::from_cents(15_000)));
    /// assert_eq!(Money::parse_decimal(" 12.5 "), Some(Money::from_cents(1_250)));
    /// assert_eq!(Money::parse_decimal("0.005"), Some(Money::from_cents(1)));
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// assert_eq!(Money::parse_decimal(""), None);
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

        let mut frac_digits = fraction.bytes().map(|b| (b - b'0') as i64);
        let tens = frac_digits.next().unwrap_or(0);
        let units = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().map(|d| d >= 5).unwrap_or(false);

        let cents = whole
            .checked_mul(MINOR_UNITS)?
            .checked_add(tens * 10 + units + round_up as i64)?;

        Some(Money(if negative { -cents } else { cents }))
    }
}

/// Shows the amount with two decimals and no currency symbol ("180.00").
///
/// The symbol is added by the view's configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            (self.0 / MINOR_UNITS).abs(),
            (self.0 % MINOR_UNITS).abs()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Serde adapter for fields that travel as decimal major-unit numbers.
///
/// ```rust,ignore
/// #[serde(with = "crate::money::decimal")]
/// pub total: Money,
/// ```
pub mod decimal {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_major())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(D::Error::custom("amount must be a finite number"));
        }
        Ok(Money::from_major(amount))
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage discount held in basis points (1000 bps = 10%).
///
/// Always within 0%..=100%. Serializes as the percent number the backend
/// stores (`10`, `12.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100% in basis points.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a rate from basis points, clamped to 100%.
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        DiscountRate(bps.min(Self::MAX_BPS))
    }

    /// Creates a rate from a percentage, clamped to `0..=100`.
    ///
    /// ```rust
    /// use inventory_core::money::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(12.5).bps(), 1250);
    /// assert_eq!(DiscountRate::from_percentage(150.0).bps(), 10_000);
    /// assert_eq!(DiscountRate::from_percentage(-5.0).bps(), 0);
    /// assert_eq!(DiscountRate::from_percentage(f64::NAN).bps(), 0);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return DiscountRate(0);
        }
        let bps = (pct * 100.0).round().min(Self::MAX_BPS as f64);
        DiscountRate(bps as u32)
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (10.0 for 10%).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The discount taken off `amount`, rounded half away from zero.
    ///
    /// ```rust
    /// use inventory_core::money::{DiscountRate, Money};
    ///
    /// let discount = DiscountRate::from_percentage(10.0).amount_of(Money::from_cents(20_000));
    /// assert_eq!(discount.cents(), 2_000);
    /// ```
    pub fn amount_of(&self, amount: Money) -> Money {
        // i128 keeps large totals from overflowing
        let scaled = amount.cents() as i128 * self.0 as i128;
        let rounded = (scaled.abs() + (Self::MAX_BPS as i128 / 2)) / Self::MAX_BPS as i128;
        Money::from_cents((rounded * scaled.signum()) as i64)
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percentage())
    }
}

impl Serialize for DiscountRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.percentage())
    }
}

impl<'de> Deserialize<'de> for DiscountRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(DiscountRate::from_percentage(f64::deserialize(deserializer)?))
    }
}
