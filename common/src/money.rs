//! [`Money`]-related definitions.

use std::{fmt, ops, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Percent;

/// Non-negative amount of US dollars.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new [`Money`] by checking the provided amount is
    /// non-negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount >= Decimal::ZERO).then_some(Self(amount))
    }

    /// Creates a new [`Money`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided amount must be non-negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a new [`Money`] from the provided whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Returns the provided [`Percent`] of this [`Money`], rounded to
    /// cents.
    #[must_use]
    pub fn percentage(self, percent: Percent) -> Self {
        Self(round_to_cents(
            self.0 * Decimal::from(percent.as_u8()) / Decimal::ONE_HUNDRED,
        ))
    }
}

/// Rounds the provided amount to cents, away from zero at the midpoint.
fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.strip_prefix('$').unwrap_or(s))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Money` amount")
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(round_to_cents(self.0 * Decimal::from(rhs)))
    }
}

impl ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0).expect("subtraction underflow")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use crate::Percent;

    use super::Money;

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("1.99").unwrap(), Money::from_cents(199));
        assert_eq!(Money::from_str("$1.99").unwrap(), Money::from_cents(199));
        assert_eq!(Money::from_str("$0").unwrap(), Money::from_cents(0));

        assert!(Money::from_str("-1.99").is_err());
        assert!(Money::from_str("$-1.99").is_err());
        assert!(Money::from_str("one dollar").is_err());
    }

    #[test]
    fn displays_whole_cents() {
        assert_eq!(Money::from_cents(199).to_string(), "$1.99");
        assert_eq!(Money::from_cents(40).to_string(), "$0.40");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn multiplies_by_day_count() {
        assert_eq!(Money::from_cents(199) * 2, Money::from_cents(398));
        assert_eq!(Money::from_cents(299) * 3, Money::from_cents(897));
        assert_eq!(Money::from_cents(299) * 0, Money::from_cents(0));
    }

    #[test]
    fn percentage_rounds_half_up() {
        let ten = Percent::new(10).unwrap();
        let quarter = Percent::new(25).unwrap();

        // 3.98 * 10% = 0.398
        assert_eq!(
            Money::from_cents(398).percentage(ten),
            Money::from_cents(40),
        );
        // 4.47 * 25% = 1.1175
        assert_eq!(
            Money::from_cents(447).percentage(quarter),
            Money::from_cents(112),
        );
        assert_eq!(
            Money::from_cents(897).percentage(Percent::new(0).unwrap()),
            Money::from_cents(0),
        );
    }

    #[test]
    fn subtracts_discount() {
        assert_eq!(
            Money::from_cents(398) - Money::from_cents(40),
            Money::from_cents(358),
        );
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(Money::new("-0.01".parse().unwrap()).is_none());
        assert!(Money::new("0".parse().unwrap()).is_some());
    }
}
