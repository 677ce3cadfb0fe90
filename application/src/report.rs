use time::Date;

use kernel::prelude::entity::{BillingPeriod, RentStatus};

use crate::status::rent_status;
use crate::store::StoreSnapshot;

/// Headline numbers for the landlord dashboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DashboardReport {
    pub total_properties: usize,
    pub occupied_properties: usize,
    pub collected_this_month: i64,
    pub overdue_total: i64,
}

/// Collected-this-month goes by each payment's date, not its stored
/// billing period; overdue sums the resolver's amount over every occupied
/// property.
pub fn dashboard(snapshot: &StoreSnapshot, today: Date) -> DashboardReport {
    let period = BillingPeriod::from_date(&today);

    let collected_this_month = snapshot
        .payments
        .iter()
        .filter(|payment| BillingPeriod::from_date(payment.paid_on().as_ref()) == period)
        .map(|payment| *payment.amount().as_ref())
        .sum();

    let overdue_total = snapshot
        .properties
        .iter()
        .filter(|property| property.is_occupied())
        .filter_map(|property| {
            property
                .tenant_id()
                .as_ref()
                .map(|tenant_id| (tenant_id, property.rent()))
        })
        .map(|(tenant_id, rent)| rent_status(&snapshot.payments, tenant_id, rent, today))
        .filter(|check| check.status == RentStatus::Overdue)
        .map(|check| check.amount_due)
        .sum();

    DashboardReport {
        total_properties: snapshot.properties.len(),
        occupied_properties: snapshot
            .properties
            .iter()
            .filter(|property| property.is_occupied())
            .count(),
        collected_this_month,
        overdue_total,
    }
}
