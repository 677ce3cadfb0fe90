use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kernel::prelude::entity::{DestructProperty, Property, PropertyStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDto {
    pub id: Uuid,
    pub address: String,
    pub rent: i64,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub status: PropertyStatus,
    pub tenant_id: Option<Uuid>,
}

impl From<Property> for PropertyDto {
    fn from(value: Property) -> Self {
        let DestructProperty {
            id,
            address,
            rent,
            bedrooms,
            bathrooms,
            status,
            tenant_id,
            owner_id: _,
        } = value.into_destruct();
        Self {
            id: id.into(),
            address: address.into(),
            rent: rent.into(),
            bedrooms: bedrooms.into(),
            bathrooms: bathrooms.into(),
            status,
            tenant_id: tenant_id.map(Into::into),
        }
    }
}

pub struct CreatePropertyDto {
    pub address: String,
    pub rent: i64,
    pub bedrooms: i16,
    pub bathrooms: i16,
}

/// Verbatim replacement of an existing row, occupancy fields included.
/// The caller is responsible for handing over a consistent record.
pub struct UpdatePropertyDto {
    pub id: Uuid,
    pub address: String,
    pub rent: i64,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub status: PropertyStatus,
    pub tenant_id: Option<Uuid>,
}

pub struct DeletePropertyDto {
    pub id: Uuid,
}
