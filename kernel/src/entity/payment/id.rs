use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, Fromln, AsRefln)]
pub struct PaymentId(Uuid);

impl PaymentId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
