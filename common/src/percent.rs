//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;

/// Whole-number percentage between `0` and `100`.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
#[display("{_0}%")]
pub struct Percent(u8);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is
    /// between `0` and `100` inclusively.
    #[must_use]
    pub fn new(val: i64) -> Option<Self> {
        u8::try_from(val).ok().filter(|v| *v <= 100).map(Self)
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be between `0` and `100` inclusively.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: u8) -> Self {
        Self(val)
    }

    /// Converts this [`Percent`] into its [`u8`] representation.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_suffix('%')
            .unwrap_or(s)
            .parse()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Percent` value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Percent;

    #[test]
    fn new_checks_bounds() {
        assert_eq!(Percent::new(0).map(Percent::as_u8), Some(0));
        assert_eq!(Percent::new(100).map(Percent::as_u8), Some(100));

        assert!(Percent::new(-1).is_none());
        assert!(Percent::new(101).is_none());
    }

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("10").unwrap().as_u8(), 10);
        assert_eq!(Percent::from_str("10%").unwrap().as_u8(), 10);

        assert!(Percent::from_str("101").is_err());
        assert!(Percent::from_str("ten").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Percent::new(10).unwrap().to_string(), "10%");
        assert_eq!(Percent::new(0).unwrap().to_string(), "0%");
    }
}
