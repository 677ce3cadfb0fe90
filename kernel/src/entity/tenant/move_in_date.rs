use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct MoveInDate(Date);

impl MoveInDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
