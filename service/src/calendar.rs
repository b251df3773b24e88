//! Billing calendar of weekends and observed US holidays.

use common::date::{Date, Month, Weekday};
use strum::{Display, EnumString};

/// Billing classification of a single calendar day.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DayClass {
    /// Monday through Friday, excluding observed holidays.
    Weekday,

    /// Saturday or Sunday, excluding observed holidays.
    Weekend,

    /// Observed Independence Day or Labor Day.
    Holiday,
}

/// Returns the [`DayClass`] of the provided [`Date`].
///
/// Holiday classification takes precedence over the weekend one: a
/// holiday observed on a Saturday or Sunday is a [`DayClass::Holiday`].
#[must_use]
pub fn day_class(date: Date) -> DayClass {
    if is_holiday(date) {
        DayClass::Holiday
    } else if is_weekend(date) {
        DayClass::Weekend
    } else {
        DayClass::Weekday
    }
}

/// Indicates whether the provided [`Date`] falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Indicates whether the provided [`Date`] is an observed holiday of its
/// year.
#[must_use]
pub fn is_holiday(date: Date) -> bool {
    date == observed_independence_day(date.year())
        || date == labor_day(date.year())
}

/// Returns the observed Independence Day of the provided year.
///
/// Nominally July 4, shifting to the preceding Friday when July 4 falls
/// on a Saturday, and to the following Monday when it falls on a Sunday.
#[must_use]
pub fn observed_independence_day(year: i32) -> Date {
    let fourth = Date::of(year, Month::July, 4).expect("infallible");
    match fourth.weekday() {
        Weekday::Saturday => fourth.plus_days(-1),
        Weekday::Sunday => fourth.plus_days(1),
        Weekday::Monday
        | Weekday::Tuesday
        | Weekday::Wednesday
        | Weekday::Thursday
        | Weekday::Friday => fourth,
    }
}

/// Returns the Labor Day of the provided year: the first Monday of
/// September.
#[must_use]
pub fn labor_day(year: i32) -> Date {
    let first = Date::of(year, Month::September, 1).expect("infallible");
    let until_monday =
        (7 - i64::from(first.weekday().number_days_from_monday())) % 7;
    first.plus_days(until_monday)
}

#[cfg(test)]
mod spec {
    use super::{
        day_class, labor_day, observed_independence_day, Date, DayClass, Month,
    };

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::of(year, month, day).unwrap()
    }

    #[test]
    fn independence_day_shifts_to_friday_from_saturday() {
        // July 4 falls on a Saturday in both years.
        assert_eq!(
            observed_independence_day(2020),
            date(2020, Month::July, 3),
        );
        assert_eq!(
            observed_independence_day(2015),
            date(2015, Month::July, 3),
        );
    }

    #[test]
    fn independence_day_shifts_to_monday_from_sunday() {
        // July 4, 2021 falls on a Sunday.
        assert_eq!(
            observed_independence_day(2021),
            date(2021, Month::July, 5),
        );
    }

    #[test]
    fn independence_day_stays_put_midweek() {
        // July 4, 2023 falls on a Tuesday.
        assert_eq!(
            observed_independence_day(2023),
            date(2023, Month::July, 4),
        );
    }

    #[test]
    fn labor_day_is_first_monday_of_september() {
        assert_eq!(labor_day(2015), date(2015, Month::September, 7));
        assert_eq!(labor_day(2020), date(2020, Month::September, 7));
        assert_eq!(labor_day(2021), date(2021, Month::September, 6));
        assert_eq!(labor_day(2024), date(2024, Month::September, 2));
        // September 1 itself is a Monday in 2025.
        assert_eq!(labor_day(2025), date(2025, Month::September, 1));
    }

    #[test]
    fn holiday_takes_precedence_over_weekday() {
        // The shifted observance lands on a Friday.
        assert_eq!(day_class(date(2020, Month::July, 3)), DayClass::Holiday);
        // The nominal July 4 is just a regular Saturday that year.
        assert_eq!(day_class(date(2020, Month::July, 4)), DayClass::Weekend);
        assert_eq!(day_class(date(2020, Month::July, 6)), DayClass::Weekday);
    }

    #[test]
    fn day_class_parses_and_displays() {
        assert_eq!(DayClass::Holiday.to_string(), "HOLIDAY");
        assert_eq!("WEEKEND".parse::<DayClass>().unwrap(), DayClass::Weekend);
    }
}
