use crate::database::Transaction;
use crate::entity::Payment;
use crate::KernelError;

/// Payments are append-only, so create is the only write.
#[async_trait::async_trait]
pub trait PaymentModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        payment: &Payment,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPaymentModifier<Connection: Transaction>: Sync + Send + 'static {
    type PaymentModifier: PaymentModifier<Connection>;
    fn payment_modifier(&self) -> &Self::PaymentModifier;
}
