mod amount;
mod id;
mod paid_on;
mod period;
mod status;

pub use self::{amount::*, id::*, paid_on::*, period::*, status::*};
use crate::entity::{PropertyId, TenantId, UserId};
use destructure::Destructure;
use vodca::References;

/// A rent payment record. Append-only: never updated or deleted.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Payment {
    id: PaymentId,
    tenant_id: TenantId,
    property_id: PropertyId,
    amount: PaymentAmount,
    paid_on: PaidOn,
    period: BillingPeriod,
    owner_id: UserId,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        tenant_id: TenantId,
        property_id: PropertyId,
        amount: PaymentAmount,
        paid_on: PaidOn,
        period: BillingPeriod,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            tenant_id,
            property_id,
            amount,
            paid_on,
            period,
            owner_id,
        }
    }
}
