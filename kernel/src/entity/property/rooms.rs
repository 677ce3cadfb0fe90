use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BedroomCount(i16);

impl BedroomCount {
    pub fn new(count: impl Into<i16>) -> Self {
        Self(count.into())
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BathroomCount(i16);

impl BathroomCount {
    pub fn new(count: impl Into<i16>) -> Self {
        Self(count.into())
    }
}
