mod address;
mod id;
mod rent;
mod rooms;
mod status;

pub use self::{address::*, id::*, rent::*, rooms::*, status::*};
use crate::entity::{TenantId, UserId};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Property {
    id: PropertyId,
    address: PropertyAddress,
    rent: RentAmount,
    bedrooms: BedroomCount,
    bathrooms: BathroomCount,
    status: PropertyStatus,
    tenant_id: Option<TenantId>,
    owner_id: UserId,
}

impl Property {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PropertyId,
        address: PropertyAddress,
        rent: RentAmount,
        bedrooms: BedroomCount,
        bathrooms: BathroomCount,
        status: PropertyStatus,
        tenant_id: Option<TenantId>,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            address,
            rent,
            bedrooms,
            bathrooms,
            status,
            tenant_id,
            owner_id,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status == PropertyStatus::Occupied
    }
}
