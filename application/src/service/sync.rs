use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnPaymentQuery, DependOnPropertyQuery, DependOnTenantQuery, PaymentQuery, PropertyQuery,
    TenantQuery,
};
use kernel::KernelError;

use crate::store::DependOnDomainStore;

/// Full refetch of the three collections, scoped to the signed-in user.
/// Runs after every mutation and on session changes. Collections are
/// swapped whole, so readers see the old snapshot or the new one, never a
/// mix.
#[async_trait::async_trait]
pub trait SyncService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnDomainStore
    + DependOnPropertyQuery<Connection>
    + DependOnTenantQuery<Connection>
    + DependOnPaymentQuery<Connection>
{
    async fn reload(&self) -> error_stack::Result<(), KernelError> {
        let Some(owner_id) = self.domain_store().current_user_id() else {
            self.domain_store().clear_collections();
            return Ok(());
        };

        let mut connection = self.database_connection().transact().await?;
        let properties = self
            .property_query()
            .find_all(&mut connection, &owner_id)
            .await?;
        let tenants = self
            .tenant_query()
            .find_all(&mut connection, &owner_id)
            .await?;
        let payments = self
            .payment_query()
            .find_all(&mut connection, &owner_id)
            .await?;
        connection.commit().await?;

        self.domain_store()
            .replace_collections(properties, tenants, payments);
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> SyncService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnDomainStore
        + DependOnPropertyQuery<Connection>
        + DependOnTenantQuery<Connection>
        + DependOnPaymentQuery<Connection>
{
}
