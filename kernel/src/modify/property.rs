use crate::database::Transaction;
use crate::entity::{Property, PropertyId, TenantId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PropertyModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        property: &Property,
    ) -> error_stack::Result<(), KernelError>;

    /// Overwrites the whole row as given, occupancy fields included.
    async fn update(
        &self,
        con: &mut Connection,
        property: &Property,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &PropertyId,
    ) -> error_stack::Result<(), KernelError>;

    /// Marks the property occupied by the given tenant.
    async fn occupy(
        &self,
        con: &mut Connection,
        id: &PropertyId,
        tenant_id: &TenantId,
    ) -> error_stack::Result<(), KernelError>;

    /// Marks the property vacant and clears its tenant pointer.
    async fn vacate(
        &self,
        con: &mut Connection,
        id: &PropertyId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPropertyModifier<Connection: Transaction>: Sync + Send + 'static {
    type PropertyModifier: PropertyModifier<Connection>;
    fn property_modifier(&self) -> &Self::PropertyModifier;
}
