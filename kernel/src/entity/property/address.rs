use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct PropertyAddress(String);

impl PropertyAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
