mod id;
mod move_in_date;
mod name;
mod phone;

pub use self::{id::*, move_in_date::*, name::*, phone::*};
use crate::entity::{EmailAddress, PropertyId, UserId};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Tenant {
    id: TenantId,
    name: TenantName,
    email: EmailAddress,
    phone: PhoneNumber,
    move_in_date: MoveInDate,
    property_id: Option<PropertyId>,
    owner_id: UserId,
}

impl Tenant {
    pub fn new(
        id: TenantId,
        name: TenantName,
        email: EmailAddress,
        phone: PhoneNumber,
        move_in_date: MoveInDate,
        property_id: Option<PropertyId>,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            move_in_date,
            property_id,
            owner_id,
        }
    }
}
