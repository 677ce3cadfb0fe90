use crate::controller::Intake;
use application::transfer::LogPaymentDto;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PaymentFilter {
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct LogPaymentRequest {
    tenant_id: Uuid,
    property_id: Uuid,
    amount: i64,
    paid_on: Date,
}

pub struct Transformer;

impl Intake<LogPaymentRequest> for Transformer {
    type To = LogPaymentDto;
    fn emit(
        &self,
        LogPaymentRequest {
            tenant_id,
            property_id,
            amount,
            paid_on,
        }: LogPaymentRequest,
    ) -> Self::To {
        LogPaymentDto {
            tenant_id,
            property_id,
            amount,
            paid_on,
        }
    }
}
