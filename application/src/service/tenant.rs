use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{
    DependOnPropertyModifier, DependOnTenantModifier, PropertyModifier, TenantModifier,
};
use kernel::prelude::entity::{
    EmailAddress, MoveInDate, PhoneNumber, PropertyId, Tenant, TenantId, TenantName,
};
use kernel::KernelError;

use crate::service::SyncService;
use crate::store::DependOnDomainStore;
use crate::transfer::{
    AssignTenantDto, CreateTenantDto, DeleteTenantDto, UnassignPropertyDto, UpdateTenantDto,
};

#[async_trait::async_trait]
pub trait CreateTenantService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnTenantModifier<Connection>
    + DependOnPropertyModifier<Connection>
{
    /// Inserts the tenant; when it arrives already pointing at a property,
    /// the property is marked occupied in the same transaction.
    async fn create_tenant(&self, dto: CreateTenantDto) -> error_stack::Result<Uuid, KernelError> {
        let Some(owner_id) = self.domain_store().current_user_id() else {
            return Err(Report::new(KernelError::AuthRequired));
        };

        let uuid = Uuid::new_v4();
        let tenant = Tenant::new(
            TenantId::new(uuid),
            TenantName::new(dto.name),
            EmailAddress::new(dto.email),
            PhoneNumber::new(dto.phone),
            MoveInDate::new(dto.move_in_date),
            dto.property_id.map(PropertyId::new),
            owner_id,
        );

        let mut connection = self.database_connection().transact().await?;
        self.tenant_modifier()
            .create(&mut connection, &tenant)
            .await?;
        if let Some(property_id) = tenant.property_id() {
            self.property_modifier()
                .occupy(&mut connection, property_id, tenant.id())
                .await?;
        }
        connection.commit().await?;

        self.reload().await?;
        Ok(uuid)
    }
}

impl<Connection: Transaction + Send, T> CreateTenantService<Connection> for T where
    T: SyncService<Connection>
        + DependOnTenantModifier<Connection>
        + DependOnPropertyModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateTenantService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnTenantModifier<Connection>
    + DependOnPropertyModifier<Connection>
{
    /// When the residence pointer moved, the old property is vacated and
    /// the new one occupied before the tenant row itself is rewritten, all
    /// in one transaction. An id not present in the loaded snapshot is a
    /// stale-client artifact and the whole call is a no-op.
    async fn update_tenant(&self, dto: UpdateTenantDto) -> error_stack::Result<(), KernelError> {
        let id = TenantId::new(dto.id);
        let snapshot = self.domain_store().snapshot();
        let Some(original) = snapshot.tenant(&id) else {
            return Ok(());
        };

        let updated = Tenant::new(
            id.clone(),
            TenantName::new(dto.name),
            EmailAddress::new(dto.email),
            PhoneNumber::new(dto.phone),
            MoveInDate::new(dto.move_in_date),
            dto.property_id.map(PropertyId::new),
            original.owner_id().clone(),
        );

        let mut connection = self.database_connection().transact().await?;
        if original.property_id() != updated.property_id() {
            if let Some(old) = original.property_id() {
                self.property_modifier().vacate(&mut connection, old).await?;
            }
            if let Some(new) = updated.property_id() {
                self.property_modifier()
                    .occupy(&mut connection, new, &id)
                    .await?;
            }
        }
        self.tenant_modifier()
            .update(&mut connection, &updated)
            .await?;
        connection.commit().await?;

        self.reload().await
    }
}

impl<Connection: Transaction + Send, T> UpdateTenantService<Connection> for T where
    T: SyncService<Connection>
        + DependOnTenantModifier<Connection>
        + DependOnPropertyModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteTenantService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnTenantModifier<Connection>
    + DependOnPropertyModifier<Connection>
{
    /// Vacates the tenant's property before the row disappears. Unknown
    /// ids are a no-op.
    async fn delete_tenant(&self, dto: DeleteTenantDto) -> error_stack::Result<(), KernelError> {
        let id = TenantId::new(dto.id);
        let snapshot = self.domain_store().snapshot();
        let Some(tenant) = snapshot.tenant(&id) else {
            return Ok(());
        };

        let mut connection = self.database_connection().transact().await?;
        if let Some(property_id) = tenant.property_id() {
            self.property_modifier()
                .vacate(&mut connection, property_id)
                .await?;
        }
        self.tenant_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        self.reload().await
    }
}

impl<Connection: Transaction + Send, T> DeleteTenantService<Connection> for T where
    T: SyncService<Connection>
        + DependOnTenantModifier<Connection>
        + DependOnPropertyModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait AssignTenantService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnTenantModifier<Connection>
    + DependOnPropertyModifier<Connection>
{
    /// Property side first, then the tenant's back-pointer, so "occupied
    /// implies a tenant pointer" holds through the sequence.
    async fn assign_tenant(&self, dto: AssignTenantDto) -> error_stack::Result<(), KernelError> {
        let tenant_id = TenantId::new(dto.tenant_id);
        let property_id = PropertyId::new(dto.property_id);

        let mut connection = self.database_connection().transact().await?;
        self.property_modifier()
            .occupy(&mut connection, &property_id, &tenant_id)
            .await?;
        self.tenant_modifier()
            .set_residence(&mut connection, &tenant_id, Some(&property_id))
            .await?;
        connection.commit().await?;

        self.reload().await
    }
}

impl<Connection: Transaction + Send, T> AssignTenantService<Connection> for T where
    T: SyncService<Connection>
        + DependOnTenantModifier<Connection>
        + DependOnPropertyModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UnassignTenantService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnTenantModifier<Connection>
    + DependOnPropertyModifier<Connection>
{
    /// Resolves the resident from the loaded snapshot; a property that is
    /// already vacant (or unknown) is a no-op.
    async fn unassign_tenant(
        &self,
        dto: UnassignPropertyDto,
    ) -> error_stack::Result<(), KernelError> {
        let property_id = PropertyId::new(dto.property_id);
        let snapshot = self.domain_store().snapshot();
        let Some(tenant_id) = snapshot
            .property(&property_id)
            .and_then(|property| property.tenant_id().clone())
        else {
            return Ok(());
        };

        let mut connection = self.database_connection().transact().await?;
        self.property_modifier()
            .vacate(&mut connection, &property_id)
            .await?;
        self.tenant_modifier()
            .set_residence(&mut connection, &tenant_id, None)
            .await?;
        connection.commit().await?;

        self.reload().await
    }
}

impl<Connection: Transaction + Send, T> UnassignTenantService<Connection> for T where
    T: SyncService<Connection>
        + DependOnTenantModifier<Connection>
        + DependOnPropertyModifier<Connection>
{
}
