use crate::database::Transaction;
use crate::entity::{Payment, TenantId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PaymentQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_all(
        &self,
        con: &mut Connection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Payment>, KernelError>;

    async fn find_by_tenant_id(
        &self,
        con: &mut Connection,
        tenant_id: &TenantId,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Payment>, KernelError>;
}

pub trait DependOnPaymentQuery<Connection: Transaction>: Sync + Send + 'static {
    type PaymentQuery: PaymentQuery<Connection>;
    fn payment_query(&self) -> &Self::PaymentQuery;
}
