use crate::controller::Exhaust;
use application::status::RentCheck;
use application::transfer::TenantDto;
use axum::Json;
use kernel::prelude::entity::{RentStatus, Tenant};
use serde::Serialize;
use uuid::Uuid;

pub struct Presenter;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RentStatusResponse {
    pub status: RentStatus,
    pub amount_due: i64,
}

impl Exhaust<Vec<Tenant>> for Presenter {
    type To = Json<Vec<TenantDto>>;
    fn emit(&self, input: Vec<Tenant>) -> Self::To {
        Json(input.into_iter().map(TenantDto::from).collect())
    }
}

impl Exhaust<Uuid> for Presenter {
    type To = Json<CreatedResponse>;
    fn emit(&self, input: Uuid) -> Self::To {
        Json(CreatedResponse { id: input })
    }
}

impl Exhaust<Option<RentCheck>> for Presenter {
    type To = Json<Option<RentStatusResponse>>;
    fn emit(&self, input: Option<RentCheck>) -> Self::To {
        Json(input.map(|check| RentStatusResponse {
            status: check.status,
            amount_due: check.amount_due,
        }))
    }
}

impl Exhaust<()> for Presenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
