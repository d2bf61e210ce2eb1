use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// quantize to 2 fractional digits, round half-up (ties away from zero)
fn quantize_cents(d: Decimal) -> Decimal {
    let mut cents = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // keep a canonical scale of 2 so "100" renders and serializes as "100.00"
    cents.rescale(2);
    cents
}

/// Money type quantized to 2 decimal places with round-half-up (currency minor units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, 2));
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// create from decimal, rounding half-up to cents
    pub fn from_decimal(d: Decimal) -> Self {
        Money(quantize_cents(d))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money::from_decimal(Decimal::from_str(s)?))
    }

    /// create from whole currency units (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(quantize_cents(Decimal::from(amount)))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(quantize_cents(self.0 + other.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(quantize_cents(self.0 - other.0))
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(quantize_cents(self.0 * other))
    }
}

/// rate type for interest rates expressed as a decimal fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal fraction (e.g., 0.055 for 5.5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 5.5 for 5.5%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::from(100))
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage, trailing zeros stripped
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * Decimal::from(100)).normalize()
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_up_at_the_half_cent() {
        // ties round away from zero, not to even
        assert_eq!(Money::from_decimal(dec!(0.005)), Money::CENT);
        assert_eq!(Money::from_decimal(dec!(0.015)).to_string(), "0.02");
        assert_eq!(Money::from_decimal(dec!(1419.465)).to_string(), "1419.47");
        assert_eq!(Money::from_decimal(dec!(-0.005)).to_string(), "-0.01");
    }

    #[test]
    fn test_canonical_two_digit_scale() {
        assert_eq!(Money::from_major(100).to_string(), "100.00");
        assert_eq!(Money::from_decimal(dec!(2.5)).to_string(), "2.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");

        let converted: Money = dec!(7.125).into();
        assert_eq!(converted.to_string(), "7.13");
        let parsed: Money = "1419.465".parse().unwrap();
        assert_eq!(parsed.to_string(), "1419.47");
    }

    #[test]
    fn test_deserialized_money_is_requantized() {
        // a hand-edited serialized value cannot smuggle sub-cent precision
        let m: Money = serde_json::from_str("\"100.005\"").unwrap();
        assert_eq!(m.to_string(), "100.01");

        let m: Money = serde_json::from_str("\"1419.47\"").unwrap();
        assert_eq!(m, Money::from_str_exact("1419.47").unwrap());
    }

    #[test]
    fn test_money_arithmetic_stays_in_cents() {
        let payment = Money::from_str_exact("1419.47").unwrap();
        let interest = Money::from_decimal(dec!(1145.83));
        let principal_portion = payment - interest;
        assert_eq!(principal_portion.to_string(), "273.64");
        assert_eq!((principal_portion + interest), payment);

        let balance = Money::from_major(250_000);
        let monthly_interest = balance * dec!(0.0045833333333333333333333333);
        assert_eq!(monthly_interest.to_string(), "1145.83");
    }

    #[test]
    fn test_money_sign_checks() {
        assert!(Money::from_major(10).is_positive());
        assert!((Money::ZERO - Money::CENT).is_negative());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn test_min_max() {
        let a = Money::from_major(5);
        let b = Money::from_major(7);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(5.5));
        assert_eq!(rate.as_decimal(), dec!(0.055));
        assert_eq!(rate.as_percentage(), dec!(5.5));
        assert_eq!(rate.to_string(), "5.5%");

        let from_fraction: Rate = dec!(0.055).into();
        assert_eq!(from_fraction, rate);
    }

    #[test]
    fn test_monthly_rate_division_order() {
        // percent / 100 first, then / 12
        let monthly = Rate::from_percentage(dec!(5.5)).monthly_rate();
        assert_eq!(monthly.as_decimal(), dec!(0.055) / Decimal::from(12));
        assert!(!monthly.is_zero());
        assert!(Rate::ZERO.monthly_rate().is_zero());
    }
}
