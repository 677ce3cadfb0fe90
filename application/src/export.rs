use time::Date;

use kernel::prelude::entity::TenantId;

use crate::store::StoreSnapshot;

/// A rendered export, ready to hand to the download layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaymentsCsv {
    pub file_name: String,
    pub content: String,
}

const HEADER: &str = "Date,Tenant Name,Tenant Email,Tenant Phone,Property,Amount (₹)";
const MISSING: &str = "N/A";

/// Renders payment history as CSV, either for every tenant or filtered to
/// one. Rows are newest-first, matching the on-screen listing. Every field
/// is double-quoted with embedded quotes doubled.
pub fn payments_csv(snapshot: &StoreSnapshot, tenant_filter: Option<&TenantId>) -> PaymentsCsv {
    let mut payments: Vec<_> = snapshot
        .payments
        .iter()
        .filter(|payment| tenant_filter.map_or(true, |tenant| payment.tenant_id() == tenant))
        .collect();
    payments.sort_by(|a, b| b.paid_on().cmp(a.paid_on()));

    let mut lines = vec![HEADER.to_string()];
    for payment in payments {
        let tenant = snapshot.tenant(payment.tenant_id());
        let address = snapshot
            .property(payment.property_id())
            .map(|property| property.address().as_ref().as_str())
            .unwrap_or(MISSING);
        let fields = [
            format_date(payment.paid_on().as_ref()),
            tenant
                .map(|tenant| tenant.name().as_ref().clone())
                .unwrap_or_else(|| MISSING.to_string()),
            tenant
                .map(|tenant| tenant.email().as_ref().clone())
                .unwrap_or_else(|| MISSING.to_string()),
            tenant
                .map(|tenant| tenant.phone().as_ref().clone())
                .unwrap_or_else(|| MISSING.to_string()),
            address.to_string(),
            payment.amount().as_ref().to_string(),
        ];
        let row: Vec<_> = fields.iter().map(|field| escape(field)).collect();
        lines.push(row.join(","));
    }

    let file_name = match tenant_filter {
        None => "rent_payments_all.csv".to_string(),
        Some(id) => {
            let name = snapshot
                .tenant(id)
                .map(|tenant| tenant.name().as_ref().replace(' ', "_"))
                .unwrap_or_else(|| "tenant".to_string());
            format!("rent_payments_{name}.csv")
        }
    };

    PaymentsCsv {
        file_name,
        content: lines.join("\n"),
    }
}

fn escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn format_date(date: &Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod test {
    use time::{Date, Month};
    use uuid::Uuid;

    use kernel::prelude::entity::{
        BathroomCount, BedroomCount, BillingPeriod, EmailAddress, MoveInDate, PaidOn, Payment,
        PaymentAmount, PaymentId, PhoneNumber, Property, PropertyAddress, PropertyId,
        PropertyStatus, RentAmount, Tenant, TenantId, TenantName, UserId,
    };

    use crate::store::StoreSnapshot;

    use super::payments_csv;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).expect("valid calendar date")
    }

    fn snapshot_with_one_payment() -> (StoreSnapshot, TenantId) {
        let owner_id = UserId::new(Uuid::new_v4());
        let property_id = PropertyId::new(Uuid::new_v4());
        let tenant_id = TenantId::new(Uuid::new_v4());

        let property = Property::new(
            property_id.clone(),
            PropertyAddress::new("4 \"Sunrise\" Court".to_string()),
            RentAmount::new(18_000i64),
            BedroomCount::new(1i16),
            BathroomCount::new(1i16),
            PropertyStatus::Occupied,
            Some(tenant_id.clone()),
            owner_id.clone(),
        );
        let tenant = Tenant::new(
            tenant_id.clone(),
            TenantName::new("Ravi Sharma".to_string()),
            EmailAddress::new("ravi@example.com".to_string()),
            PhoneNumber::new("+91 98111 22222".to_string()),
            MoveInDate::new(date(2024, Month::January, 15)),
            Some(property_id.clone()),
            owner_id.clone(),
        );
        let paid_on = date(2024, Month::June, 5);
        let payment = Payment::new(
            PaymentId::new(Uuid::new_v4()),
            tenant_id.clone(),
            property_id,
            PaymentAmount::new(18_000i64),
            PaidOn::new(paid_on),
            BillingPeriod::from_date(&paid_on),
            owner_id,
        );

        let snapshot = StoreSnapshot {
            properties: vec![property],
            tenants: vec![tenant],
            payments: vec![payment],
            ..StoreSnapshot::default()
        };
        (snapshot, tenant_id)
    }

    #[test]
    fn renders_header_and_quoted_fields() {
        let (snapshot, _) = snapshot_with_one_payment();

        let csv = payments_csv(&snapshot, None);
        assert_eq!(csv.file_name, "rent_payments_all.csv");

        let mut lines = csv.content.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Tenant Name,Tenant Email,Tenant Phone,Property,Amount (₹)")
        );
        assert_eq!(
            lines.next(),
            Some(
                "\"2024-06-05\",\"Ravi Sharma\",\"ravi@example.com\",\"+91 98111 22222\",\"4 \"\"Sunrise\"\" Court\",\"18000\""
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn tenant_filter_names_the_file_with_underscores() {
        let (snapshot, tenant_id) = snapshot_with_one_payment();

        let csv = payments_csv(&snapshot, Some(&tenant_id));
        assert_eq!(csv.file_name, "rent_payments_Ravi_Sharma.csv");
        assert_eq!(csv.content.lines().count(), 2);
    }

    #[test]
    fn unknown_tenant_falls_back_everywhere() {
        let (mut snapshot, tenant_id) = snapshot_with_one_payment();
        snapshot.tenants.clear();

        let csv = payments_csv(&snapshot, Some(&tenant_id));
        assert_eq!(csv.file_name, "rent_payments_tenant.csv");
        assert!(csv.content.lines().nth(1).is_some_and(|row| row.contains("\"N/A\"")));
    }

    #[test]
    fn rows_are_newest_first() {
        let (mut snapshot, tenant_id) = snapshot_with_one_payment();
        let later = date(2024, Month::July, 1);
        let newer = Payment::new(
            PaymentId::new(Uuid::new_v4()),
            tenant_id,
            PropertyId::new(Uuid::new_v4()),
            PaymentAmount::new(18_000i64),
            PaidOn::new(later),
            BillingPeriod::from_date(&later),
            UserId::new(Uuid::new_v4()),
        );
        snapshot.payments.push(newer);

        let csv = payments_csv(&snapshot, None);
        let rows: Vec<_> = csv.content.lines().skip(1).collect();
        assert!(rows[0].starts_with("\"2024-07-01\""));
        assert!(rows[1].starts_with("\"2024-06-05\""));
    }
}
