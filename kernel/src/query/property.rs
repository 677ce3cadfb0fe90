use crate::database::Transaction;
use crate::entity::{Property, PropertyId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PropertyQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &PropertyId,
        owner_id: &UserId,
    ) -> error_stack::Result<Option<Property>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Property>, KernelError>;
}

pub trait DependOnPropertyQuery<Connection: Transaction>: Sync + Send + 'static {
    type PropertyQuery: PropertyQuery<Connection>;
    fn property_query(&self) -> &Self::PropertyQuery;
}
