mod email;

pub use self::email::*;
