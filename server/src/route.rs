mod auth;
mod dashboard;
mod payment;
mod property;
mod tenant;

pub use self::{auth::*, dashboard::*, payment::*, property::*, tenant::*};
