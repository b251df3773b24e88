//! [`Date`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

pub use time::{Month, Weekday};

/// Single calendar day, with no time-of-day component.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn of(year: i32, month: Month, day: u8) -> Option<Self> {
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns this [`Date`] shifted by the provided number of days,
    /// crossing month and year boundaries naturally.
    #[must_use]
    pub fn plus_days(self, days: i64) -> Self {
        Self(
            self.0
                .checked_add(time::Duration::days(days))
                .expect("date overflow"),
        )
    }

    /// Returns the [`Weekday`] of this [`Date`].
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:02}",
            u8::from(self.0.month()),
            self.0.day(),
            self.0.year().rem_euclid(100),
        )
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses a [`Date`] from the `MM/DD/YY` format, mapping two-digit
    /// years onto 2000-2099.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseError as E;

        let parts: [&str; 3] = s
            .split('/')
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| E::Format)?;
        if parts.iter().any(|p| p.len() != 2) {
            return Err(E::Format);
        }

        let [month, day, year] = parts.map(|p| p.parse::<u8>());
        let month = Month::try_from(month.map_err(|_| E::Format)?)
            .map_err(E::ComponentRange)?;
        let day = day.map_err(|_| E::Format)?;
        let year = 2000 + i32::from(year.map_err(|_| E::Format)?);

        time::Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(E::ComponentRange)
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// The string is not in the `MM/DD/YY` format.
    #[display("not a `MM/DD/YY` formatted date")]
    Format,

    /// Parsed [`Date`] has an out of range component.
    ComponentRange(time::error::ComponentRange),
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    pub mod mdy {
        //! Module providing serialization and deserialization of [`Date`]
        //! as an `MM/DD/YY` string.
        //!
        //! [`Date`]: crate::Date

        use serde::{de, Deserialize as _, Deserializer, Serializer};

        use crate::Date;

        /// Serializes the [`Date`] as an `MM/DD/YY` string.
        ///
        /// # Errors
        ///
        /// Never errors.
        pub fn serialize<S: Serializer>(
            date: &Date,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&date.to_string())
        }

        /// Deserializes an `MM/DD/YY` string into a [`Date`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid `MM/DD/YY` date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Date, D::Error> {
            String::deserialize(deserializer)?
                .parse()
                .map_err(de::Error::custom)
        }
    }
}
