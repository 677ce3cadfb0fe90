use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{
    DependOnPropertyModifier, DependOnTenantModifier, PropertyModifier, TenantModifier,
};
use kernel::prelude::entity::{
    BathroomCount, BedroomCount, Property, PropertyAddress, PropertyId, PropertyStatus, RentAmount,
    TenantId,
};
use kernel::KernelError;

use crate::service::SyncService;
use crate::store::DependOnDomainStore;
use crate::transfer::{CreatePropertyDto, DeletePropertyDto, UpdatePropertyDto};

#[async_trait::async_trait]
pub trait CreatePropertyService<Connection: Transaction + Send>:
    'static + Sync + Send + SyncService<Connection> + DependOnPropertyModifier<Connection>
{
    /// New listings always start vacant; occupancy only changes through
    /// the assignment flows.
    async fn create_property(
        &self,
        dto: CreatePropertyDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let Some(owner_id) = self.domain_store().current_user_id() else {
            return Err(Report::new(KernelError::AuthRequired));
        };

        let uuid = Uuid::new_v4();
        let property = Property::new(
            PropertyId::new(uuid),
            PropertyAddress::new(dto.address),
            RentAmount::new(dto.rent),
            BedroomCount::new(dto.bedrooms),
            BathroomCount::new(dto.bathrooms),
            PropertyStatus::Vacant,
            None,
            owner_id,
        );

        let mut connection = self.database_connection().transact().await?;
        self.property_modifier()
            .create(&mut connection, &property)
            .await?;
        connection.commit().await?;

        self.reload().await?;
        Ok(uuid)
    }
}

impl<Connection: Transaction + Send, T> CreatePropertyService<Connection> for T where
    T: SyncService<Connection> + DependOnPropertyModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdatePropertyService<Connection: Transaction + Send>:
    'static + Sync + Send + SyncService<Connection> + DependOnPropertyModifier<Connection>
{
    /// Overwrites the row exactly as given; consistency of the occupancy
    /// fields is the caller's responsibility here.
    async fn update_property(
        &self,
        dto: UpdatePropertyDto,
    ) -> error_stack::Result<(), KernelError> {
        let Some(owner_id) = self.domain_store().current_user_id() else {
            return Err(Report::new(KernelError::AuthRequired));
        };

        let property = Property::new(
            PropertyId::new(dto.id),
            PropertyAddress::new(dto.address),
            RentAmount::new(dto.rent),
            BedroomCount::new(dto.bedrooms),
            BathroomCount::new(dto.bathrooms),
            dto.status,
            dto.tenant_id.map(TenantId::new),
            owner_id,
        );

        let mut connection = self.database_connection().transact().await?;
        self.property_modifier()
            .update(&mut connection, &property)
            .await?;
        connection.commit().await?;

        self.reload().await
    }
}

impl<Connection: Transaction + Send, T> UpdatePropertyService<Connection> for T where
    T: SyncService<Connection> + DependOnPropertyModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeletePropertyService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnPropertyModifier<Connection>
    + DependOnTenantModifier<Connection>
{
    /// Deleting a home clears the resident's back-pointer in the same
    /// transaction, keeping delete symmetric with the tenant side.
    async fn delete_property(
        &self,
        dto: DeletePropertyDto,
    ) -> error_stack::Result<(), KernelError> {
        let id = PropertyId::new(dto.id);
        let resident = self
            .domain_store()
            .snapshot()
            .tenant_of_property(&id)
            .map(|tenant| tenant.id().clone());

        let mut connection = self.database_connection().transact().await?;
        if let Some(tenant_id) = resident {
            self.tenant_modifier()
                .set_residence(&mut connection, &tenant_id, None)
                .await?;
        }
        self.property_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        self.reload().await
    }
}

impl<Connection: Transaction + Send, T> DeletePropertyService<Connection> for T where
    T: SyncService<Connection>
        + DependOnPropertyModifier<Connection>
        + DependOnTenantModifier<Connection>
{
}
