use sqlx::types::Uuid;
use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::TenantQuery;
use kernel::interface::update::TenantModifier;
use kernel::prelude::entity::{
    EmailAddress, MoveInDate, PhoneNumber, PropertyId, Tenant, TenantId, TenantName, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresTenantRepository;

#[async_trait::async_trait]
impl TenantQuery<PostgresTransaction> for PostgresTenantRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &TenantId,
        owner_id: &UserId,
    ) -> error_stack::Result<Option<Tenant>, KernelError> {
        PgTenantInternal::find_by_id(con, id, owner_id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Tenant>, KernelError> {
        PgTenantInternal::find_all(con, owner_id).await
    }
}

#[async_trait::async_trait]
impl TenantModifier<PostgresTransaction> for PostgresTenantRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        tenant: &Tenant,
    ) -> error_stack::Result<(), KernelError> {
        PgTenantInternal::create(con, tenant).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        tenant: &Tenant,
    ) -> error_stack::Result<(), KernelError> {
        PgTenantInternal::update(con, tenant).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &TenantId,
    ) -> error_stack::Result<(), KernelError> {
        PgTenantInternal::delete(con, id).await
    }

    async fn set_residence(
        &self,
        con: &mut PostgresTransaction,
        id: &TenantId,
        property_id: Option<&PropertyId>,
    ) -> error_stack::Result<(), KernelError> {
        PgTenantInternal::set_residence(con, id, property_id).await
    }
}

#[derive(sqlx::FromRow)]
struct TenantRow {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    move_in_date: Date,
    property_id: Option<Uuid>,
    user_id: Uuid,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant::new(
            TenantId::new(row.id),
            TenantName::new(row.name),
            EmailAddress::new(row.email),
            PhoneNumber::new(row.phone),
            MoveInDate::new(row.move_in_date),
            row.property_id.map(PropertyId::new),
            UserId::new(row.user_id),
        )
    }
}

pub(in crate::database) struct PgTenantInternal;

impl PgTenantInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &TenantId,
        owner_id: &UserId,
    ) -> error_stack::Result<Option<Tenant>, KernelError> {
        let row = sqlx::query_as::<_, TenantRow>(
            // language=postgresql
            r#"
            SELECT id, name, email, phone, move_in_date, property_id, user_id
            FROM tenants
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_ref())
        .bind(owner_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Tenant::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Tenant>, KernelError> {
        let rows = sqlx::query_as::<_, TenantRow>(
            // language=postgresql
            r#"
            SELECT id, name, email, phone, move_in_date, property_id, user_id
            FROM tenants
            WHERE user_id = $1
            "#,
        )
        .bind(owner_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    async fn create(con: &mut PgConnection, tenant: &Tenant) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO tenants (id, name, email, phone, move_in_date, property_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(tenant.id().as_ref())
        .bind(tenant.name().as_ref())
        .bind(tenant.email().as_ref())
        .bind(tenant.phone().as_ref())
        .bind(tenant.move_in_date().as_ref())
        .bind(tenant.property_id().as_ref().map(|property| *property.as_ref()))
        .bind(tenant.owner_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, tenant: &Tenant) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE tenants
            SET name = $2, email = $3, phone = $4, move_in_date = $5, property_id = $6
            WHERE id = $1
            "#,
        )
        .bind(tenant.id().as_ref())
        .bind(tenant.name().as_ref())
        .bind(tenant.email().as_ref())
        .bind(tenant.phone().as_ref())
        .bind(tenant.move_in_date().as_ref())
        .bind(tenant.property_id().as_ref().map(|property| *property.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &TenantId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn set_residence(
        con: &mut PgConnection,
        id: &TenantId,
        property_id: Option<&PropertyId>,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE tenants
            SET property_id = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(property_id.map(|property| *property.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::{Date, Month};
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::TenantQuery;
    use kernel::interface::update::TenantModifier;
    use kernel::prelude::entity::{
        EmailAddress, MoveInDate, PhoneNumber, PropertyId, Tenant, TenantId, TenantName, UserId,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresTenantRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn residence_round_trip() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let owner_id = UserId::new(Uuid::new_v4());
        let id = TenantId::new(Uuid::new_v4());
        let move_in = Date::from_calendar_date(2024, Month::March, 1)
            .expect("valid calendar date");
        let tenant = Tenant::new(
            id.clone(),
            TenantName::new("Asha Kulkarni".to_string()),
            EmailAddress::new("asha@example.com".to_string()),
            PhoneNumber::new("+91 98200 00000".to_string()),
            MoveInDate::new(move_in),
            None,
            owner_id.clone(),
        );
        PostgresTenantRepository.create(&mut con, &tenant).await?;

        let found = PostgresTenantRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?;
        assert_eq!(found, Some(tenant.clone()));

        let property_id = PropertyId::new(Uuid::new_v4());
        PostgresTenantRepository
            .set_residence(&mut con, &id, Some(&property_id))
            .await?;
        let found = PostgresTenantRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?
            .expect("tenant should still exist");
        assert_eq!(found.property_id(), &Some(property_id));

        PostgresTenantRepository
            .set_residence(&mut con, &id, None)
            .await?;
        let found = PostgresTenantRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?
            .expect("tenant should still exist");
        assert_eq!(found.property_id(), &None);

        PostgresTenantRepository.delete(&mut con, &id).await?;
        let found = PostgresTenantRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
