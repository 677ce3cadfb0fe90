use time::Date;

use kernel::prelude::entity::{BillingPeriod, Payment, RentAmount, RentStatus, TenantId};

/// Outcome of the monthly rent check for one tenant.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RentCheck {
    pub status: RentStatus,
    pub amount_due: i64,
}

/// A payment booked by the tenant against today's calendar month counts as
/// paid in full; anything else is overdue for the whole rent. Exact
/// month/year match only, no ranges. `RentStatus::Due` is reserved and
/// never produced here.
pub fn rent_status(
    payments: &[Payment],
    tenant_id: &TenantId,
    rent: &RentAmount,
    today: Date,
) -> RentCheck {
    let period = BillingPeriod::from_date(&today);
    let paid_this_month = payments
        .iter()
        .any(|payment| payment.tenant_id() == tenant_id && payment.period() == &period);

    if paid_this_month {
        RentCheck {
            status: RentStatus::Paid,
            amount_due: 0,
        }
    } else {
        RentCheck {
            status: RentStatus::Overdue,
            amount_due: *rent.as_ref(),
        }
    }
}

#[cfg(test)]
mod test {
    use time::{Date, Month};
    use uuid::Uuid;

    use kernel::prelude::entity::{
        BillingPeriod, PaidOn, Payment, PaymentAmount, PaymentId, PropertyId, RentAmount,
        RentStatus, TenantId, UserId,
    };

    use super::rent_status;

    fn payment_for(tenant_id: &TenantId, paid_on: Date) -> Payment {
        Payment::new(
            PaymentId::new(Uuid::new_v4()),
            tenant_id.clone(),
            PropertyId::new(Uuid::new_v4()),
            PaymentAmount::new(25_000i64),
            PaidOn::new(paid_on),
            BillingPeriod::from_date(&paid_on),
            UserId::new(Uuid::new_v4()),
        )
    }

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).expect("valid calendar date")
    }

    #[test]
    fn payment_this_month_is_paid_in_full() {
        let tenant_id = TenantId::new(Uuid::new_v4());
        let today = date(2024, Month::June, 20);
        let payments = vec![payment_for(&tenant_id, date(2024, Month::June, 3))];

        let check = rent_status(&payments, &tenant_id, &RentAmount::new(25_000i64), today);
        assert_eq!(check.status, RentStatus::Paid);
        assert_eq!(check.amount_due, 0);
    }

    #[test]
    fn no_payments_means_overdue_for_whole_rent() {
        let tenant_id = TenantId::new(Uuid::new_v4());
        let today = date(2024, Month::June, 20);

        let check = rent_status(&[], &tenant_id, &RentAmount::new(25_000i64), today);
        assert_eq!(check.status, RentStatus::Overdue);
        assert_eq!(check.amount_due, 25_000);
    }

    #[test]
    fn last_months_payment_does_not_count() {
        let tenant_id = TenantId::new(Uuid::new_v4());
        let today = date(2024, Month::June, 20);
        let payments = vec![payment_for(&tenant_id, date(2024, Month::May, 28))];

        let check = rent_status(&payments, &tenant_id, &RentAmount::new(25_000i64), today);
        assert_eq!(check.status, RentStatus::Overdue);
        assert_eq!(check.amount_due, 25_000);
    }

    #[test]
    fn same_month_of_another_year_does_not_count() {
        let tenant_id = TenantId::new(Uuid::new_v4());
        let today = date(2024, Month::June, 20);
        let payments = vec![payment_for(&tenant_id, date(2023, Month::June, 20))];

        let check = rent_status(&payments, &tenant_id, &RentAmount::new(25_000i64), today);
        assert_eq!(check.status, RentStatus::Overdue);
    }

    #[test]
    fn another_tenants_payment_does_not_count() {
        let tenant_id = TenantId::new(Uuid::new_v4());
        let other = TenantId::new(Uuid::new_v4());
        let today = date(2024, Month::June, 20);
        let payments = vec![payment_for(&other, date(2024, Month::June, 3))];

        let check = rent_status(&payments, &tenant_id, &RentAmount::new(25_000i64), today);
        assert_eq!(check.status, RentStatus::Overdue);
    }
}
