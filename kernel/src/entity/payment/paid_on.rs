use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Fromln, AsRefln)]
pub struct PaidOn(Date);

impl PaidOn {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
