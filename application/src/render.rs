//! Plain-text rendering of a [`RentalAgreement`].

use service::domain::RentalAgreement;

/// Renders the provided [`RentalAgreement`] as an itemized plain-text
/// listing.
#[must_use]
pub fn agreement(agreement: &RentalAgreement) -> String {
    let RentalAgreement {
        tool,
        rental_days,
        checkout_date,
        due_date,
        charge_days,
        pre_discount_charge,
        discount_percent,
        discount_amount,
        final_charge,
    } = agreement;

    format!(
        "Tool code: {}\n\
         Tool type: {}\n\
         Brand: {}\n\
         Rental days: {rental_days}\n\
         Checkout date: {checkout_date}\n\
         Due date: {due_date}\n\
         Daily rental charge: {}\n\
         Charge days: {charge_days}\n\
         Pre-discount charge: {pre_discount_charge}\n\
         Discount percent: {discount_percent}\n\
         Discount amount: {discount_amount}\n\
         Final charge: {final_charge}\n",
        tool.code, tool.category, tool.brand, tool.daily_charge,
    )
}

#[cfg(test)]
mod spec {
    use service::{command::Checkout, infra::InMemory, Command as _};

    #[tokio::test]
    async fn matches_the_reference_listing() {
        let service =
            crate::Service::new(service::Config::default(), InMemory::stock());
        let result = service
            .execute(Checkout {
                tool_code: "LADW".parse().unwrap(),
                rental_days: 3,
                discount_percent: 10,
                checkout_date: "07/02/20".parse().unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(
            super::agreement(&result),
            "Tool code: LADW\n\
             Tool type: Ladder\n\
             Brand: Werner\n\
             Rental days: 3\n\
             Checkout date: 07/02/20\n\
             Due date: 07/05/20\n\
             Daily rental charge: $1.99\n\
             Charge days: 2\n\
             Pre-discount charge: $3.98\n\
             Discount percent: 10%\n\
             Discount amount: $0.40\n\
             Final charge: $3.58\n",
        );
    }
}
