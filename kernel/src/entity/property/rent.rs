use vodca::{AsRefln, Fromln};

/// Monthly rent in whole rupees.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct RentAmount(i64);

impl RentAmount {
    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into())
    }
}
