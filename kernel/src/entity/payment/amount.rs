use vodca::{AsRefln, Fromln};

/// Amount received, in whole rupees.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct PaymentAmount(i64);

impl PaymentAmount {
    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into())
    }
}
