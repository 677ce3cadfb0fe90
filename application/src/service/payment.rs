use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{DependOnPaymentModifier, PaymentModifier};
use kernel::prelude::entity::{
    BillingPeriod, PaidOn, Payment, PaymentAmount, PaymentId, PropertyId, RentAmount, TenantId,
};
use kernel::KernelError;

use crate::service::SyncService;
use crate::status::{rent_status, RentCheck};
use crate::store::DependOnDomainStore;
use crate::transfer::LogPaymentDto;

#[async_trait::async_trait]
pub trait LogPaymentService<Connection: Transaction + Send>:
    'static + Sync + Send + SyncService<Connection> + DependOnPaymentModifier<Connection>
{
    /// Appends a payment record; the billing period is stamped from the
    /// payment date here, never taken from the caller.
    async fn log_payment(&self, dto: LogPaymentDto) -> error_stack::Result<Uuid, KernelError> {
        let Some(owner_id) = self.domain_store().current_user_id() else {
            return Err(Report::new(KernelError::AuthRequired));
        };

        let uuid = Uuid::new_v4();
        let payment = Payment::new(
            PaymentId::new(uuid),
            TenantId::new(dto.tenant_id),
            PropertyId::new(dto.property_id),
            PaymentAmount::new(dto.amount),
            PaidOn::new(dto.paid_on),
            BillingPeriod::from_date(&dto.paid_on),
            owner_id,
        );

        let mut connection = self.database_connection().transact().await?;
        self.payment_modifier()
            .create(&mut connection, &payment)
            .await?;
        connection.commit().await?;

        self.reload().await?;
        Ok(uuid)
    }
}

impl<Connection: Transaction + Send, T> LogPaymentService<Connection> for T where
    T: SyncService<Connection> + DependOnPaymentModifier<Connection>
{
}

pub trait RentStatusService: 'static + Sync + Send + DependOnDomainStore {
    /// Pure read over the loaded snapshot against the system clock.
    fn rent_status_for_tenant(&self, tenant_id: &TenantId, rent: &RentAmount) -> RentCheck {
        let snapshot = self.domain_store().snapshot();
        let today = OffsetDateTime::now_utc().date();
        rent_status(&snapshot.payments, tenant_id, rent, today)
    }
}

impl<T> RentStatusService for T where T: DependOnDomainStore {}
