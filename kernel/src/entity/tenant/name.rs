use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct TenantName(String);

impl TenantName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
