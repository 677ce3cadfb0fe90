use error_stack::{Report, ResultExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::{broadcast, RwLock};

use kernel::interface::identity::{IdentityProvider, SessionEvent};
use kernel::prelude::entity::{EmailAddress, UserId, UserName};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

static AUTH_API_URL: &str = "AUTH_API_URL";
static AUTH_API_KEY: &str = "AUTH_API_KEY";

const SESSION_CHANNEL_CAPACITY: usize = 16;

/// Client for the hosted email/password auth API. The project-scoped api
/// key rides along as a default header; per-session calls add a bearer
/// token on top.
pub struct HostedIdentityProvider {
    base_url: String,
    client: reqwest::Client,
    access_token: RwLock<Option<String>>,
    sessions: broadcast::Sender<SessionEvent>,
}

impl HostedIdentityProvider {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let base_url = env(AUTH_API_URL)?;
        let api_key = env(AUTH_API_KEY)?;

        let mut headers = reqwest::header::HeaderMap::new();
        let mut key_value = reqwest::header::HeaderValue::from_str(&api_key)
            .change_context_lazy(|| KernelError::Internal)?;
        key_value.set_sensitive(true);
        headers.insert("apikey", key_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .change_context_lazy(|| KernelError::Internal)?;

        let (sessions, _) = broadcast::channel(SESSION_CHANNEL_CAPACITY);
        Ok(Self {
            base_url,
            client,
            access_token: RwLock::new(None),
            sessions,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn bearer_token(&self) -> error_stack::Result<String, KernelError> {
        self.access_token
            .read()
            .await
            .clone()
            .ok_or_else(|| Report::new(KernelError::AuthRequired))
    }

    fn publish(&self, event: SessionEvent) {
        // Nobody listening is fine; the watcher may not be up yet.
        let _ = self.sessions.send(event);
    }
}

#[derive(Debug, Deserialize)]
struct SessionBody {
    access_token: String,
    user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    id: uuid::Uuid,
    email: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl ApiErrorBody {
    fn describe(&self) -> &str {
        self.error_description
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.message.as_deref())
            .unwrap_or("authentication request failed")
    }
}

async fn api_failure(response: reqwest::Response) -> Report<KernelError> {
    let status = response.status();
    let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
    let message = body.describe().to_string();
    let context = if message.contains("Email not confirmed") {
        KernelError::EmailNotConfirmed
    } else {
        KernelError::Internal
    };
    Report::new(context).attach_printable(format!("{status}: {message}"))
}

#[async_trait::async_trait]
impl IdentityProvider for HostedIdentityProvider {
    #[tracing::instrument(skip(self, password))]
    async fn sign_up(
        &self,
        email: &EmailAddress,
        password: &str,
        display_name: &UserName,
    ) -> error_stack::Result<(), KernelError> {
        let response = self
            .client
            .post(self.endpoint("/signup"))
            .json(&json!({
                "email": email.as_ref(),
                "password": password,
                "data": { "name": display_name.as_ref() },
            }))
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        // The provider sends the confirmation email; nothing else to do.
        Ok(())
    }

    #[tracing::instrument(skip(self, password))]
    async fn sign_in(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> error_stack::Result<(), KernelError> {
        let response = self
            .client
            .post(self.endpoint("/token?grant_type=password"))
            .json(&json!({
                "email": email.as_ref(),
                "password": password,
            }))
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        let session = response.json::<SessionBody>().await.convert_error()?;
        *self.access_token.write().await = Some(session.access_token);
        self.publish(SessionEvent::SignedIn {
            id: UserId::new(session.user.id),
            email: EmailAddress::new(session.user.email),
        });
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn sign_out(&self) -> error_stack::Result<(), KernelError> {
        let token = self.bearer_token().await?;
        let response = self
            .client
            .post(self.endpoint("/logout"))
            .bearer_auth(token)
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        *self.access_token.write().await = None;
        self.publish(SessionEvent::SignedOut);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn resend_verification(
        &self,
        email: &EmailAddress,
    ) -> error_stack::Result<(), KernelError> {
        let response = self
            .client
            .post(self.endpoint("/resend"))
            .json(&json!({
                "type": "signup",
                "email": email.as_ref(),
            }))
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn send_password_reset(
        &self,
        email: &EmailAddress,
    ) -> error_stack::Result<(), KernelError> {
        let response = self
            .client
            .post(self.endpoint("/recover"))
            .json(&json!({ "email": email.as_ref() }))
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, access_token))]
    async fn enter_recovery(&self, access_token: &str) -> error_stack::Result<(), KernelError> {
        // Check the link token before trusting it with a session slot.
        let response = self
            .client
            .get(self.endpoint("/user"))
            .bearer_auth(access_token)
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        *self.access_token.write().await = Some(access_token.to_string());
        self.publish(SessionEvent::PasswordRecovery);
        Ok(())
    }

    #[tracing::instrument(skip(self, new_password))]
    async fn update_password(&self, new_password: &str) -> error_stack::Result<(), KernelError> {
        let token = self.bearer_token().await?;
        let response = self
            .client
            .put(self.endpoint("/user"))
            .bearer_auth(token)
            .json(&json!({ "password": new_password }))
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(api_failure(response).await);
        }
        // The recovery session is single-purpose: drop it and make the
        // user sign in again with the new password.
        *self.access_token.write().await = None;
        self.publish(SessionEvent::SignedOut);
        Ok(())
    }

    fn sessions(&self) -> broadcast::Receiver<SessionEvent> {
        self.sessions.subscribe()
    }
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            if error.is_timeout() {
                Report::from(error).change_context(KernelError::Timeout)
            } else {
                Report::from(error).change_context(KernelError::Internal)
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::ApiErrorBody;

    #[test]
    fn error_body_prefers_oauth_description() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#)
                .expect("valid error body");
        assert_eq!(body.describe(), "Email not confirmed");
    }

    #[test]
    fn error_body_falls_back_to_msg() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"msg":"User already registered"}"#)
            .expect("valid error body");
        assert_eq!(body.describe(), "User already registered");
    }

    #[test]
    fn error_body_defaults_when_empty() {
        let body: ApiErrorBody = serde_json::from_str("{}").expect("valid error body");
        assert_eq!(body.describe(), "authentication request failed");
    }
}
