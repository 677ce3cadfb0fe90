mod common;
mod payment;
mod property;
mod tenant;
mod user;

pub use self::{common::*, payment::*, property::*, tenant::*, user::*};
