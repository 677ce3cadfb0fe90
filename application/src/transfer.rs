mod payment;
mod property;
mod session;
mod tenant;

pub use self::{payment::*, property::*, session::*, tenant::*};
