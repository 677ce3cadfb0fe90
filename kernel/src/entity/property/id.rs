use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, Fromln, AsRefln)]
pub struct PropertyId(Uuid);

impl PropertyId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
