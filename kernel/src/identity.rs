use tokio::sync::broadcast;

use crate::entity::{EmailAddress, UserId, UserName};
use crate::KernelError;

/// Session-state change published by the identity provider.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SignedIn {
        id: UserId,
        email: EmailAddress,
    },
    /// A password-reset link was followed; the session may only change the
    /// password until it is completed or abandoned.
    PasswordRecovery,
    SignedOut,
}

/// Hosted email/password authentication. Account storage, verification
/// mail and recovery mail are all the provider's problem; this side only
/// drives the flows and listens for session changes.
#[async_trait::async_trait]
pub trait IdentityProvider: 'static + Sync + Send {
    /// Registers an account and triggers the verification email.
    async fn sign_up(
        &self,
        email: &EmailAddress,
        password: &str,
        display_name: &UserName,
    ) -> error_stack::Result<(), KernelError>;

    /// Establishes a session. Fails with [`KernelError::EmailNotConfirmed`]
    /// when the account has not finished verification.
    async fn sign_in(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> error_stack::Result<(), KernelError>;

    async fn sign_out(&self) -> error_stack::Result<(), KernelError>;

    async fn resend_verification(
        &self,
        email: &EmailAddress,
    ) -> error_stack::Result<(), KernelError>;

    async fn send_password_reset(
        &self,
        email: &EmailAddress,
    ) -> error_stack::Result<(), KernelError>;

    /// Adopts the short-lived session carried by an emailed recovery link.
    async fn enter_recovery(&self, access_token: &str) -> error_stack::Result<(), KernelError>;

    async fn update_password(&self, new_password: &str) -> error_stack::Result<(), KernelError>;

    fn sessions(&self) -> broadcast::Receiver<SessionEvent>;
}

pub trait DependOnIdentityProvider: 'static + Sync + Send {
    type IdentityProvider: IdentityProvider;
    fn identity_provider(&self) -> &Self::IdentityProvider;
}
