//! [`RentalAgreement`] definitions.

use common::{Date, Money, Percent};
use serde::{Deserialize, Serialize};

use crate::domain::Tool;

/// Fully itemized result of a successful checkout.
///
/// Produced exactly once per checkout and never mutated afterwards: a
/// pure snapshot of the billing computation, owned by the caller.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RentalAgreement {
    /// [`Tool`] being rented.
    pub tool: Tool,

    /// Number of days the [`Tool`] is rented for.
    pub rental_days: u32,

    /// [`Date`] the [`Tool`] is checked out.
    #[serde(with = "common::date::serde::mdy")]
    pub checkout_date: Date,

    /// [`Date`] the [`Tool`] is due back: the checkout date plus the
    /// rental day count.
    #[serde(with = "common::date::serde::mdy")]
    pub due_date: Date,

    /// Number of billable days within the rental period.
    ///
    /// Never exceeds the rental day count, and never includes the
    /// checkout day itself.
    pub charge_days: u32,

    /// Charge before the discount: billable days times the daily charge.
    pub pre_discount_charge: Money,

    /// [`Percent`] discount applied to the pre-discount charge.
    pub discount_percent: Percent,

    /// Discounted amount, rounded to cents.
    pub discount_amount: Money,

    /// Final charge: the pre-discount charge less the discount amount.
    pub final_charge: Money,
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use crate::infra::{Catalog as _, InMemory};

    use super::RentalAgreement;

    fn agreement() -> RentalAgreement {
        let ladder = InMemory::stock()
            .lookup(&"LADW".parse().unwrap())
            .unwrap();
        RentalAgreement {
            tool: ladder,
            rental_days: 3,
            checkout_date: "07/02/20".parse().unwrap(),
            due_date: "07/05/20".parse().unwrap(),
            charge_days: 2,
            pre_discount_charge: Money::from_cents(398),
            discount_percent: Percent::new(10).unwrap(),
            discount_amount: Money::from_cents(40),
            final_charge: Money::from_cents(358),
        }
    }

    #[test]
    fn serializes_dates_as_mdy_strings() {
        let json = serde_json::to_value(agreement()).unwrap();

        assert_eq!(json["checkout_date"], "07/02/20");
        assert_eq!(json["due_date"], "07/05/20");
    }

    #[test]
    fn round_trips_through_serde() {
        let agreement = agreement();
        let json = serde_json::to_string(&agreement).unwrap();

        let parsed: RentalAgreement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, agreement);
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut json = serde_json::to_value(agreement()).unwrap();
        json["due_date"] = "7/5/2020".into();

        assert!(serde_json::from_value::<RentalAgreement>(json).is_err());
    }
}
