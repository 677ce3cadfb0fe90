mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::EmailAddress;
use destructure::Destructure;
use vodca::References;

/// The signed-in landlord's profile. Account records themselves live with
/// the identity provider; this mirrors the `profiles` row.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
}

impl User {
    pub fn new(id: UserId, name: UserName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }
}
