mod payment;
mod property;
mod session;
mod sync;
mod tenant;

pub use self::{payment::*, property::*, session::*, sync::*, tenant::*};
