use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{DestructTenant, Tenant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub move_in_date: Date,
    pub property_id: Option<Uuid>,
}

impl From<Tenant> for TenantDto {
    fn from(value: Tenant) -> Self {
        let DestructTenant {
            id,
            name,
            email,
            phone,
            move_in_date,
            property_id,
            owner_id: _,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            move_in_date: move_in_date.into(),
            property_id: property_id.map(Into::into),
        }
    }
}

/// A tenant may arrive already pointing at the property it occupies; the
/// matching property-side write happens in the same operation.
pub struct CreateTenantDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub move_in_date: Date,
    pub property_id: Option<Uuid>,
}

pub struct UpdateTenantDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub move_in_date: Date,
    pub property_id: Option<Uuid>,
}

pub struct DeleteTenantDto {
    pub id: Uuid,
}

pub struct AssignTenantDto {
    pub tenant_id: Uuid,
    pub property_id: Uuid,
}

pub struct UnassignPropertyDto {
    pub property_id: Uuid,
}
