use crate::database::Transaction;
use crate::entity::{PropertyId, Tenant, TenantId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait TenantModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        tenant: &Tenant,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        tenant: &Tenant,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &TenantId,
    ) -> error_stack::Result<(), KernelError>;

    /// Repoints (or clears) the tenant's side of the occupancy link.
    async fn set_residence(
        &self,
        con: &mut Connection,
        id: &TenantId,
        property_id: Option<&PropertyId>,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnTenantModifier<Connection: Transaction>: Sync + Send + 'static {
    type TenantModifier: TenantModifier<Connection>;
    fn tenant_modifier(&self) -> &Self::TenantModifier;
}
