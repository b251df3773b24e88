//! [`Command`] for checking out a [`Tool`] rental.

use common::{Date, Percent};
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    calendar,
    domain::{tool, RentalAgreement},
    infra::Catalog,
    Service,
};
#[cfg(doc)]
use crate::domain::Tool;

use super::Command;

/// [`Command`] for checking out a [`Tool`] rental, producing a
/// [`RentalAgreement`].
#[derive(Clone, Debug)]
pub struct Checkout {
    /// [`tool::Code`] of the [`Tool`] to rent.
    pub tool_code: tool::Code,

    /// Number of days the [`Tool`] is rented for.
    pub rental_days: i64,

    /// Discount percentage to apply.
    pub discount_percent: i64,

    /// [`Date`] the [`Tool`] is checked out.
    ///
    /// The checkout day itself is never billed; billing starts the day
    /// after and runs through the due date inclusively.
    pub checkout_date: Date,
}

impl<C: Catalog> Command<Checkout> for Service<C> {
    type Ok = RentalAgreement;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Checkout) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Checkout {
            tool_code,
            rental_days,
            discount_percent,
            checkout_date,
        } = cmd;

        if rental_days < 1 {
            return Err(tracerr::new!(E::InvalidRentalDays(rental_days)));
        }
        let max = self.config().max_rental_days;
        if rental_days > i64::from(max) {
            return Err(tracerr::new!(E::RentalDaysTooLarge {
                days: rental_days,
                max,
            }));
        }
        let rental_days =
            u32::try_from(rental_days).expect("bounded by `max_rental_days`");

        let discount = Percent::new(discount_percent)
            .ok_or(E::InvalidDiscountPercent(discount_percent))
            .map_err(tracerr::wrap!())?;

        let tool = self
            .catalog()
            .lookup(&tool_code)
            .ok_or(E::UnknownToolCode(tool_code))
            .map_err(tracerr::wrap!())?;

        let due_date = checkout_date.plus_days(i64::from(rental_days));
        let charge_days = (1..=i64::from(rental_days))
            .map(|offset| checkout_date.plus_days(offset))
            .filter(|day| tool.charging.applies_on(calendar::day_class(*day)))
            .count();
        let charge_days =
            u32::try_from(charge_days).expect("bounded by `rental_days`");

        let pre_discount_charge = tool.daily_charge * charge_days;
        let discount_amount = pre_discount_charge.percentage(discount);
        let final_charge = pre_discount_charge - discount_amount;

        tracing::debug!(
            code = %tool.code,
            rental_days,
            charge_days,
            %final_charge,
            "checkout computed",
        );

        Ok(RentalAgreement {
            tool,
            rental_days,
            checkout_date,
            due_date,
            charge_days,
            pre_discount_charge,
            discount_percent: discount,
            discount_amount,
            final_charge,
        })
    }
}

/// Error of [`Checkout`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error)]
pub enum ExecutionError {
    /// Rental day count is less than `1`.
    #[display("rental day count must be `1` or greater, got `{_0}`")]
    InvalidRentalDays(#[error(not(source))] i64),

    /// Rental day count exceeds the configured maximum.
    #[display("rental day count `{days}` exceeds the maximum of `{max}`")]
    RentalDaysTooLarge {
        /// Requested rental day count.
        days: i64,

        /// Maximum allowed rental day count.
        max: u32,
    },

    /// Discount percent is out of the `[0, 100]` range.
    #[display("discount percent must be between `0` and `100`, got `{_0}`")]
    InvalidDiscountPercent(#[error(not(source))] i64),

    /// No [`Tool`] with the provided [`tool::Code`] exists in the
    /// [`Catalog`].
    #[display("no `Tool` with `Code(\"{_0}\")` exists in the `Catalog`")]
    UnknownToolCode(#[error(not(source))] tool::Code),
}
