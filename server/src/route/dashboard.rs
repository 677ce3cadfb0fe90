mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::dashboard::response::Presenter;
use application::report::dashboard;
use application::store::DependOnDomainStore;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use error_stack::Report;
use kernel::KernelError;
use time::OffsetDateTime;

pub trait DashboardRouter {
    fn route_dashboard(self) -> Self;
}

impl DashboardRouter for Router<AppModule> {
    fn route_dashboard(self) -> Self {
        self.route(
            "/dashboard",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move {
                        let snapshot = handler.domain_store().snapshot();
                        let today = OffsetDateTime::now_utc().date();
                        Ok::<_, Report<KernelError>>(dashboard(&snapshot, today))
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
