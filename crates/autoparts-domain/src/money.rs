//! Money module - fixed-point prices

use std::fmt;

/// Markup percentages are applied in millionths of the base amount
/// (1% = 10_000), which covers four decimal places of a percent.
const MARKUP_SCALE: i128 = 1_000_000;

/// A price in the smallest currency unit (cents)
///
/// Prices are stored as whole cents so that markup arithmetic rounds exactly
/// once, at the point where a derived price is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create an amount from whole cents
    ///
    /// # Examples
    ///
    /// ```
    /// use autoparts_domain::Money;
    ///
    /// let price = Money::from_cents(1250);
    /// assert_eq!(price.to_string(), "12.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number (for serialization only)
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Apply a percentage markup, rounding half away from zero to the cent
    ///
    /// # Examples
    ///
    /// ```
    /// use autoparts_domain::Money;
    ///
    /// let base = Money::from_cents(1999);
    /// assert_eq!(base.with_markup(25.0), Money::from_cents(2499));
    /// ```
    pub fn with_markup(&self, percent: f64) -> Money {
        // Only the percent goes through floating point; the product and the
        // rounding are exact integer arithmetic.
        let factor = MARKUP_SCALE.saturating_add((percent * 10_000.0).round() as i128);
        let product = i128::from(self.0).saturating_mul(factor);

        let magnitude = (product.unsigned_abs() + (MARKUP_SCALE as u128) / 2) / MARKUP_SCALE as u128;
        let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
        Money(if product < 0 { -magnitude } else { magnitude })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
