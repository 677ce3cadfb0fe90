use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    AuthRequired,
    EmailNotConfirmed,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::AuthRequired => write!(f, "No authenticated user"),
            KernelError::EmailNotConfirmed => write!(f, "Email address not confirmed"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
