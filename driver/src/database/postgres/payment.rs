use sqlx::types::Uuid;
use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::PaymentQuery;
use kernel::interface::update::PaymentModifier;
use kernel::prelude::entity::{
    BillingPeriod, PaidOn, Payment, PaymentAmount, PaymentId, PropertyId, TenantId, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresPaymentRepository;

#[async_trait::async_trait]
impl PaymentQuery<PostgresTransaction> for PostgresPaymentRepository {
    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Payment>, KernelError> {
        PgPaymentInternal::find_all(con, owner_id).await
    }

    async fn find_by_tenant_id(
        &self,
        con: &mut PostgresTransaction,
        tenant_id: &TenantId,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Payment>, KernelError> {
        PgPaymentInternal::find_by_tenant_id(con, tenant_id, owner_id).await
    }
}

#[async_trait::async_trait]
impl PaymentModifier<PostgresTransaction> for PostgresPaymentRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        payment: &Payment,
    ) -> error_stack::Result<(), KernelError> {
        PgPaymentInternal::create(con, payment).await
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    tenant_id: Uuid,
    property_id: Uuid,
    amount: i64,
    paid_on: Date,
    month: i16,
    year: i32,
    user_id: Uuid,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Payment::new(
            PaymentId::new(row.id),
            TenantId::new(row.tenant_id),
            PropertyId::new(row.property_id),
            PaymentAmount::new(row.amount),
            PaidOn::new(row.paid_on),
            BillingPeriod::new(row.month, row.year),
            UserId::new(row.user_id),
        )
    }
}

pub(in crate::database) struct PgPaymentInternal;

impl PgPaymentInternal {
    async fn find_all(
        con: &mut PgConnection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Payment>, KernelError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            // language=postgresql
            r#"
            SELECT id, tenant_id, property_id, amount, paid_on, month, year, user_id
            FROM payments
            WHERE user_id = $1
            "#,
        )
        .bind(owner_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Payment::from).collect())
    }

    async fn find_by_tenant_id(
        con: &mut PgConnection,
        tenant_id: &TenantId,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Payment>, KernelError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            // language=postgresql
            r#"
            SELECT id, tenant_id, property_id, amount, paid_on, month, year, user_id
            FROM payments
            WHERE tenant_id = $1 AND user_id = $2
            "#,
        )
        .bind(tenant_id.as_ref())
        .bind(owner_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Payment::from).collect())
    }

    async fn create(con: &mut PgConnection, payment: &Payment) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO payments (id, tenant_id, property_id, amount, paid_on, month, year, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(payment.id().as_ref())
        .bind(payment.tenant_id().as_ref())
        .bind(payment.property_id().as_ref())
        .bind(payment.amount().as_ref())
        .bind(payment.paid_on().as_ref())
        .bind(payment.period().month())
        .bind(payment.period().year())
        .bind(payment.owner_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
