mod payment;
mod profile;
mod property;
mod tenant;

pub use self::{payment::*, profile::*, property::*, tenant::*};
