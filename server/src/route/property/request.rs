use crate::controller::Intake;
use application::transfer::{
    AssignTenantDto, CreatePropertyDto, DeletePropertyDto, UnassignPropertyDto, UpdatePropertyDto,
};
use kernel::prelude::entity::PropertyStatus;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    address: String,
    rent: i64,
    bedrooms: i16,
    bathrooms: i16,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePropertyRequest {
    address: String,
    rent: i64,
    bedrooms: i16,
    bathrooms: i16,
    status: PropertyStatus,
    tenant_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AssignTenantRequest {
    tenant_id: Uuid,
}

pub struct DeletePropertyRequest(pub Uuid);

pub struct UnassignPropertyRequest(pub Uuid);

pub struct Transformer;

impl Intake<CreatePropertyRequest> for Transformer {
    type To = CreatePropertyDto;
    fn emit(
        &self,
        CreatePropertyRequest {
            address,
            rent,
            bedrooms,
            bathrooms,
        }: CreatePropertyRequest,
    ) -> Self::To {
        CreatePropertyDto {
            address,
            rent,
            bedrooms,
            bathrooms,
        }
    }
}

impl Intake<(Uuid, UpdatePropertyRequest)> for Transformer {
    type To = UpdatePropertyDto;
    fn emit(&self, (id, req): (Uuid, UpdatePropertyRequest)) -> Self::To {
        UpdatePropertyDto {
            id,
            address: req.address,
            rent: req.rent,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            status: req.status,
            tenant_id: req.tenant_id,
        }
    }
}

impl Intake<(Uuid, AssignTenantRequest)> for Transformer {
    type To = AssignTenantDto;
    fn emit(&self, (property_id, req): (Uuid, AssignTenantRequest)) -> Self::To {
        AssignTenantDto {
            tenant_id: req.tenant_id,
            property_id,
        }
    }
}

impl Intake<DeletePropertyRequest> for Transformer {
    type To = DeletePropertyDto;
    fn emit(&self, DeletePropertyRequest(id): DeletePropertyRequest) -> Self::To {
        DeletePropertyDto { id }
    }
}

impl Intake<UnassignPropertyRequest> for Transformer {
    type To = UnassignPropertyDto;
    fn emit(&self, UnassignPropertyRequest(property_id): UnassignPropertyRequest) -> Self::To {
        UnassignPropertyDto { property_id }
    }
}
