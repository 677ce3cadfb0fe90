use time::Date;
use vodca::References;

/// The calendar month a payment settles, duplicated out of the payment date
/// so status checks can match on month/year equality alone.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, References)]
pub struct BillingPeriod {
    month: i16,
    year: i32,
}

impl BillingPeriod {
    pub fn new(month: impl Into<i16>, year: impl Into<i32>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Month is 1-12.
    pub fn from_date(date: &Date) -> Self {
        Self {
            month: u8::from(date.month()) as i16,
            year: date.year(),
        }
    }
}
