mod payment;
mod property;
mod tenant;

pub use self::{payment::*, property::*, tenant::*};
