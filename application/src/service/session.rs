use tokio::sync::broadcast::error::RecvError;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::identity::{DependOnIdentityProvider, IdentityProvider, SessionEvent};
use kernel::interface::query::{DependOnProfileQuery, ProfileQuery};
use kernel::prelude::entity::{EmailAddress, User, UserId, UserName};
use kernel::KernelError;

use crate::service::SyncService;
use crate::store::{DependOnDomainStore, SessionState};
use crate::transfer::{
    EnterRecoveryDto, PasswordResetDto, ResendVerificationDto, SignInDto, SignUpDto,
    UpdatePasswordDto,
};

/// Account flows delegated to the identity provider. Store updates happen
/// in the session watcher, driven by the provider's event stream, not
/// here.
#[async_trait::async_trait]
pub trait AccountService: 'static + Sync + Send + DependOnIdentityProvider {
    async fn sign_up(&self, dto: SignUpDto) -> error_stack::Result<(), KernelError> {
        self.identity_provider()
            .sign_up(
                &EmailAddress::new(dto.email),
                &dto.password,
                &UserName::new(dto.name),
            )
            .await
    }

    async fn sign_in(&self, dto: SignInDto) -> error_stack::Result<(), KernelError> {
        self.identity_provider()
            .sign_in(&EmailAddress::new(dto.email), &dto.password)
            .await
    }

    async fn sign_out(&self) -> error_stack::Result<(), KernelError> {
        self.identity_provider().sign_out().await
    }

    async fn resend_verification(
        &self,
        dto: ResendVerificationDto,
    ) -> error_stack::Result<(), KernelError> {
        self.identity_provider()
            .resend_verification(&EmailAddress::new(dto.email))
            .await
    }

    async fn send_password_reset(
        &self,
        dto: PasswordResetDto,
    ) -> error_stack::Result<(), KernelError> {
        self.identity_provider()
            .send_password_reset(&EmailAddress::new(dto.email))
            .await
    }

    async fn enter_recovery(&self, dto: EnterRecoveryDto) -> error_stack::Result<(), KernelError> {
        self.identity_provider()
            .enter_recovery(&dto.access_token)
            .await
    }

    async fn update_password(
        &self,
        dto: UpdatePasswordDto,
    ) -> error_stack::Result<(), KernelError> {
        self.identity_provider().update_password(&dto.password).await
    }
}

impl<T> AccountService for T where T: DependOnIdentityProvider {}

#[async_trait::async_trait]
pub trait SessionWatchService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + SyncService<Connection>
    + DependOnProfileQuery<Connection>
    + DependOnIdentityProvider
{
    /// Long-running: follows the provider's session stream and keeps the
    /// store in step with it.
    async fn watch_sessions(&self) {
        let mut events = self.identity_provider().sessions();
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Err(report) = self.apply_session_event(event).await {
                        tracing::error!("Failed to apply session change: {report:?}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Session stream lagged, skipped {skipped} events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    async fn apply_session_event(
        &self,
        event: SessionEvent,
    ) -> error_stack::Result<(), KernelError> {
        match event {
            SessionEvent::SignedIn { id, email } => {
                let name = match self.load_profile_name(&id).await {
                    Ok(Some(name)) => name,
                    Ok(None) => UserName::new(""),
                    Err(report) => {
                        // Let the session in anyway; the name is cosmetic.
                        tracing::warn!("Could not fetch user profile: {report:?}");
                        UserName::new("User")
                    }
                };
                let user = User::new(id, name, email);
                self.domain_store().set_session(SessionState::Active(user));
                self.reload().await
            }
            SessionEvent::PasswordRecovery => {
                self.domain_store()
                    .set_session(SessionState::PasswordRecovery);
                self.domain_store().clear_collections();
                Ok(())
            }
            SessionEvent::SignedOut => {
                self.domain_store().set_session(SessionState::SignedOut);
                self.domain_store().clear_collections();
                Ok(())
            }
        }
    }

    async fn load_profile_name(
        &self,
        id: &UserId,
    ) -> error_stack::Result<Option<UserName>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let profile = self.profile_query().find_by_id(&mut connection, id).await?;
        connection.commit().await?;
        Ok(profile.map(|user| user.name().clone()))
    }
}

impl<Connection: Transaction + Send, T> SessionWatchService<Connection> for T where
    T: SyncService<Connection> + DependOnProfileQuery<Connection> + DependOnIdentityProvider
{
}
