use crate::controller::Intake;
use application::transfer::{CreateTenantDto, DeleteTenantDto, UpdateTenantDto};
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateTenantRequest {
    name: String,
    email: String,
    phone: String,
    move_in_date: Date,
    property_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTenantRequest {
    name: String,
    email: String,
    phone: String,
    move_in_date: Date,
    property_id: Option<Uuid>,
}

pub struct DeleteTenantRequest(pub Uuid);

pub struct Transformer;

impl Intake<CreateTenantRequest> for Transformer {
    type To = CreateTenantDto;
    fn emit(
        &self,
        CreateTenantRequest {
            name,
            email,
            phone,
            move_in_date,
            property_id,
        }: CreateTenantRequest,
    ) -> Self::To {
        CreateTenantDto {
            name,
            email,
            phone,
            move_in_date,
            property_id,
        }
    }
}

impl Intake<(Uuid, UpdateTenantRequest)> for Transformer {
    type To = UpdateTenantDto;
    fn emit(&self, (id, req): (Uuid, UpdateTenantRequest)) -> Self::To {
        UpdateTenantDto {
            id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            move_in_date: req.move_in_date,
            property_id: req.property_id,
        }
    }
}

impl Intake<DeleteTenantRequest> for Transformer {
    type To = DeleteTenantDto;
    fn emit(&self, DeleteTenantRequest(id): DeleteTenantRequest) -> Self::To {
        DeleteTenantDto { id }
    }
}
