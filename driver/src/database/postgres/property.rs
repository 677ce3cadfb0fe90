use error_stack::Report;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::PropertyQuery;
use kernel::interface::update::PropertyModifier;
use kernel::prelude::entity::{
    BathroomCount, BedroomCount, Property, PropertyAddress, PropertyId, PropertyStatus,
    RentAmount, TenantId, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresPropertyRepository;

#[async_trait::async_trait]
impl PropertyQuery<PostgresTransaction> for PostgresPropertyRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &PropertyId,
        owner_id: &UserId,
    ) -> error_stack::Result<Option<Property>, KernelError> {
        PgPropertyInternal::find_by_id(con, id, owner_id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Property>, KernelError> {
        PgPropertyInternal::find_all(con, owner_id).await
    }
}

#[async_trait::async_trait]
impl PropertyModifier<PostgresTransaction> for PostgresPropertyRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        PgPropertyInternal::create(con, property).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        PgPropertyInternal::update(con, property).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &PropertyId,
    ) -> error_stack::Result<(), KernelError> {
        PgPropertyInternal::delete(con, id).await
    }

    async fn occupy(
        &self,
        con: &mut PostgresTransaction,
        id: &PropertyId,
        tenant_id: &TenantId,
    ) -> error_stack::Result<(), KernelError> {
        PgPropertyInternal::occupy(con, id, tenant_id).await
    }

    async fn vacate(
        &self,
        con: &mut PostgresTransaction,
        id: &PropertyId,
    ) -> error_stack::Result<(), KernelError> {
        PgPropertyInternal::vacate(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: Uuid,
    address: String,
    rent: i64,
    bedrooms: i16,
    bathrooms: i16,
    status: String,
    tenant_id: Option<Uuid>,
    user_id: Uuid,
}

impl TryFrom<PropertyRow> for Property {
    type Error = Report<KernelError>;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        let status = match row.status.as_str() {
            "occupied" => PropertyStatus::Occupied,
            "vacant" => PropertyStatus::Vacant,
            other => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("Unknown property status {other}")))
            }
        };
        Ok(Property::new(
            PropertyId::new(row.id),
            PropertyAddress::new(row.address),
            RentAmount::new(row.rent),
            BedroomCount::new(row.bedrooms),
            BathroomCount::new(row.bathrooms),
            status,
            row.tenant_id.map(TenantId::new),
            UserId::new(row.user_id),
        ))
    }
}

pub(in crate::database) struct PgPropertyInternal;

impl PgPropertyInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &PropertyId,
        owner_id: &UserId,
    ) -> error_stack::Result<Option<Property>, KernelError> {
        let row = sqlx::query_as::<_, PropertyRow>(
            // language=postgresql
            r#"
            SELECT id, address, rent, bedrooms, bathrooms, status, tenant_id, user_id
            FROM properties
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_ref())
        .bind(owner_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Property::try_from).transpose()
    }

    async fn find_all(
        con: &mut PgConnection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Property>, KernelError> {
        let rows = sqlx::query_as::<_, PropertyRow>(
            // language=postgresql
            r#"
            SELECT id, address, rent, bedrooms, bathrooms, status, tenant_id, user_id
            FROM properties
            WHERE user_id = $1
            "#,
        )
        .bind(owner_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Property::try_from).collect()
    }

    async fn create(
        con: &mut PgConnection,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO properties (id, address, rent, bedrooms, bathrooms, status, tenant_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(property.id().as_ref())
        .bind(property.address().as_ref())
        .bind(property.rent().as_ref())
        .bind(property.bedrooms().as_ref())
        .bind(property.bathrooms().as_ref())
        .bind(property.status().as_str())
        .bind(property.tenant_id().as_ref().map(|tenant| *tenant.as_ref()))
        .bind(property.owner_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE properties
            SET address = $2, rent = $3, bedrooms = $4, bathrooms = $5, status = $6, tenant_id = $7
            WHERE id = $1
            "#,
        )
        .bind(property.id().as_ref())
        .bind(property.address().as_ref())
        .bind(property.rent().as_ref())
        .bind(property.bedrooms().as_ref())
        .bind(property.bathrooms().as_ref())
        .bind(property.status().as_str())
        .bind(property.tenant_id().as_ref().map(|tenant| *tenant.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &PropertyId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn occupy(
        con: &mut PgConnection,
        id: &PropertyId,
        tenant_id: &TenantId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE properties
            SET status = 'occupied', tenant_id = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(tenant_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn vacate(con: &mut PgConnection, id: &PropertyId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE properties
            SET status = 'vacant', tenant_id = NULL
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::PropertyQuery;
    use kernel::interface::update::PropertyModifier;
    use kernel::prelude::entity::{
        BathroomCount, BedroomCount, Property, PropertyAddress, PropertyId, PropertyStatus,
        RentAmount, TenantId, UserId,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresPropertyRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn occupancy_round_trip() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let owner_id = UserId::new(Uuid::new_v4());
        let id = PropertyId::new(Uuid::new_v4());
        let property = Property::new(
            id.clone(),
            PropertyAddress::new("12 Hill Road, Bandra".to_string()),
            RentAmount::new(25_000i64),
            BedroomCount::new(2i16),
            BathroomCount::new(1i16),
            PropertyStatus::Vacant,
            None,
            owner_id.clone(),
        );
        PostgresPropertyRepository.create(&mut con, &property).await?;

        let found = PostgresPropertyRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?;
        assert_eq!(found, Some(property.clone()));

        let tenant_id = TenantId::new(Uuid::new_v4());
        PostgresPropertyRepository
            .occupy(&mut con, &id, &tenant_id)
            .await?;
        let found = PostgresPropertyRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?
            .expect("property should still exist");
        assert!(found.is_occupied());
        assert_eq!(found.tenant_id(), &Some(tenant_id));

        PostgresPropertyRepository.vacate(&mut con, &id).await?;
        let found = PostgresPropertyRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?
            .expect("property should still exist");
        assert!(!found.is_occupied());
        assert_eq!(found.tenant_id(), &None);

        PostgresPropertyRepository.delete(&mut con, &id).await?;
        let found = PostgresPropertyRepository
            .find_by_id(&mut con, &id, &owner_id)
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
