use crate::database::Transaction;
use crate::entity::{User, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ProfileQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError>;
}

pub trait DependOnProfileQuery<Connection: Transaction>: Sync + Send + 'static {
    type ProfileQuery: ProfileQuery<Connection>;
    fn profile_query(&self) -> &Self::ProfileQuery;
}
