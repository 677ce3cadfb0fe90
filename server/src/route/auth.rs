mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::auth::request::{
    EnterRecoveryRequest, PasswordResetRequest, ResendVerificationRequest, SignInRequest,
    SignUpRequest, Transformer, UpdatePasswordRequest,
};
use crate::route::auth::response::Presenter;
use application::service::AccountService;
use axum::extract::State;
use axum::routing::{post, put};
use axum::{Json, Router};

pub trait AuthRouter {
    fn route_auth(self) -> Self;
}

impl AuthRouter for Router<AppModule> {
    fn route_auth(self) -> Self {
        self.route(
            "/auth/signup",
            post(
                |State(handler): State<AppModule>, Json(req): Json<SignUpRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.sign_up(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/auth/login",
            post(
                |State(handler): State<AppModule>, Json(req): Json<SignInRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.sign_in(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/auth/logout",
            post(|State(handler): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { handler.sign_out().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/auth/resend",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<ResendVerificationRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.resend_verification(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/auth/recover",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<PasswordResetRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.send_password_reset(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/auth/recovery-session",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<EnterRecoveryRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.enter_recovery(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/auth/password",
            put(
                |State(handler): State<AppModule>,
                 Json(req): Json<UpdatePasswordRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.update_password(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
