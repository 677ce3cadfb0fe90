use crate::database::Transaction;
use crate::entity::{Tenant, TenantId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait TenantQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &TenantId,
        owner_id: &UserId,
    ) -> error_stack::Result<Option<Tenant>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Tenant>, KernelError>;
}

pub trait DependOnTenantQuery<Connection: Transaction>: Sync + Send + 'static {
    type TenantQuery: TenantQuery<Connection>;
    fn tenant_query(&self) -> &Self::TenantQuery;
}
