use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::ProfileQuery;
use kernel::prelude::entity::{EmailAddress, User, UserId, UserName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

/// Profiles are written by the identity provider; this side only reads
/// the display name after sign-in.
pub struct PostgresProfileRepository;

#[async_trait::async_trait]
impl ProfileQuery<PostgresTransaction> for PostgresProfileRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgProfileInternal::find_by_id(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    name: String,
    email: String,
}

impl From<ProfileRow> for User {
    fn from(row: ProfileRow) -> Self {
        User::new(
            UserId::new(row.id),
            UserName::new(row.name),
            EmailAddress::new(row.email),
        )
    }
}

pub(in crate::database) struct PgProfileInternal;

impl PgProfileInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            // language=postgresql
            r#"
            SELECT id, name, email
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(User::from))
    }
}
