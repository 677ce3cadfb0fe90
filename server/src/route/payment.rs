mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::payment::request::{LogPaymentRequest, PaymentFilter, Transformer};
use crate::route::payment::response::Presenter;
use application::export::payments_csv;
use application::service::LogPaymentService;
use application::store::DependOnDomainStore;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use error_stack::Report;
use kernel::prelude::entity::TenantId;
use kernel::KernelError;

pub trait PaymentRouter {
    fn route_payment(self) -> Self;
}

impl PaymentRouter for Router<AppModule> {
    fn route_payment(self) -> Self {
        self.route(
            "/payments",
            get(
                |State(handler): State<AppModule>, Query(filter): Query<PaymentFilter>| async move {
                    Controller::new((), Presenter)
                        .bypass(|| async move {
                            let snapshot = handler.domain_store().snapshot();
                            let tenant_id = filter.tenant_id.map(TenantId::new);
                            let payments = snapshot
                                .payments
                                .into_iter()
                                .filter(|payment| {
                                    tenant_id
                                        .as_ref()
                                        .map_or(true, |tenant| payment.tenant_id() == tenant)
                                })
                                .collect::<Vec<_>>();
                            Ok::<_, Report<KernelError>>(payments)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 Json(req): Json<LogPaymentRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.log_payment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/payments/export",
            get(
                |State(handler): State<AppModule>, Query(filter): Query<PaymentFilter>| async move {
                    Controller::new((), Presenter)
                        .bypass(|| async move {
                            let snapshot = handler.domain_store().snapshot();
                            let tenant_id = filter.tenant_id.map(TenantId::new);
                            Ok::<_, Report<KernelError>>(payments_csv(
                                &snapshot,
                                tenant_id.as_ref(),
                            ))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
