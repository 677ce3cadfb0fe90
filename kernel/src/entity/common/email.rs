use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
