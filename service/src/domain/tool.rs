//! [`Tool`] definitions.

use std::str::FromStr;

use common::Money;
use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

use crate::calendar::DayClass;

/// Piece of rentable equipment.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tool {
    /// [`Code`] of this [`Tool`].
    pub code: Code,

    /// [`Category`] of this [`Tool`].
    pub category: Category,

    /// [`Brand`] of this [`Tool`].
    pub brand: Brand,

    /// Rental charge per billable day of this [`Tool`].
    pub daily_charge: Money,

    /// [`Charging`] policy of this [`Tool`].
    pub charging: Charging,
}

/// Unique code of a [`Tool`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
pub struct Code(String);

impl Code {
    /// Creates a new [`Code`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `code` is valid.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Creates a new [`Code`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`Code`].
    fn check(code: impl AsRef<str>) -> bool {
        let code = code.as_ref();
        !code.is_empty()
            && code.len() <= 16
            && code.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl FromStr for Code {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Code`")
    }
}

/// Category of a [`Tool`], such as "Ladder" or "Chainsaw".
#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub struct Category(String);

impl Category {
    /// Creates a new [`Category`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `category` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    /// Creates a new [`Category`] if the given `category` is valid.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Option<Self> {
        let category = category.into();
        Self::check(&category).then_some(Self(category))
    }

    /// Checks whether the given `category` is a valid [`Category`].
    fn check(category: impl AsRef<str>) -> bool {
        let category = category.as_ref();
        category.trim() == category
            && !category.is_empty()
            && category.len() <= 64
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Category`")
    }
}

/// Brand of a [`Tool`], such as "Werner" or "Stihl".
#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub struct Brand(String);

impl Brand {
    /// Creates a new [`Brand`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `brand` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }

    /// Creates a new [`Brand`] if the given `brand` is valid.
    #[must_use]
    pub fn new(brand: impl Into<String>) -> Option<Self> {
        let brand = brand.into();
        Self::check(&brand).then_some(Self(brand))
    }

    /// Checks whether the given `brand` is a valid [`Brand`].
    fn check(brand: impl AsRef<str>) -> bool {
        let brand = brand.as_ref();
        brand.trim() == brand && !brand.is_empty() && brand.len() <= 64
    }
}

impl FromStr for Brand {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Brand`")
    }
}

/// Per-[`DayClass`] charging policy of a [`Tool`].
///
/// Each flag independently controls whether a day of its class
/// contributes to the billable day count.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Charging {
    /// Whether weekdays are billable.
    pub weekday: bool,

    /// Whether Saturdays and Sundays are billable.
    pub weekend: bool,

    /// Whether observed holidays are billable.
    pub holiday: bool,
}

impl Charging {
    /// Indicates whether a day of the provided [`DayClass`] is billable
    /// under this policy.
    #[must_use]
    pub fn applies_on(&self, class: DayClass) -> bool {
        match class {
            DayClass::Weekday => self.weekday,
            DayClass::Weekend => self.weekend,
            DayClass::Holiday => self.holiday,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Charging, Code, DayClass};

    #[test]
    fn code_validation() {
        assert!(Code::new("LADW").is_some());
        assert!(Code::new("JAKR").is_some());

        assert!(Code::new("").is_none());
        assert!(Code::new("LA DW").is_none());
        assert!(Code::new("LADW-1").is_none());
        assert!(Code::new("X".repeat(17)).is_none());
    }

    #[test]
    fn charging_follows_flags() {
        let weekday_only = Charging {
            weekday: true,
            weekend: false,
            holiday: false,
        };

        assert!(weekday_only.applies_on(DayClass::Weekday));
        assert!(!weekday_only.applies_on(DayClass::Weekend));
        assert!(!weekday_only.applies_on(DayClass::Holiday));
    }
}
