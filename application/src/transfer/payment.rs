use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{DestructPayment, Payment};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub amount: i64,
    pub paid_on: Date,
    pub month: i16,
    pub year: i32,
}

impl From<Payment> for PaymentDto {
    fn from(value: Payment) -> Self {
        let DestructPayment {
            id,
            tenant_id,
            property_id,
            amount,
            paid_on,
            period,
            owner_id: _,
        } = value.into_destruct();
        Self {
            id: id.into(),
            tenant_id: tenant_id.into(),
            property_id: property_id.into(),
            amount: amount.into(),
            paid_on: paid_on.into(),
            month: *period.month(),
            year: *period.year(),
        }
    }
}

/// The billing period is derived from the date here, not supplied.
pub struct LogPaymentDto {
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub amount: i64,
    pub paid_on: Date,
}
