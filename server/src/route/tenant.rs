mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::tenant::request::{
    CreateTenantRequest, DeleteTenantRequest, Transformer, UpdateTenantRequest,
};
use crate::route::tenant::response::Presenter;
use application::service::{
    CreateTenantService, DeleteTenantService, RentStatusService, UpdateTenantService,
};
use application::store::DependOnDomainStore;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use error_stack::Report;
use kernel::prelude::entity::TenantId;
use kernel::KernelError;
use uuid::Uuid;

pub trait TenantRouter {
    fn route_tenant(self) -> Self;
}

impl TenantRouter for Router<AppModule> {
    fn route_tenant(self) -> Self {
        self.route(
            "/tenants",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move {
                        Ok::<_, Report<KernelError>>(handler.domain_store().snapshot().tenants)
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(handler): State<AppModule>,
                 Json(req): Json<CreateTenantRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.create_tenant(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/tenants/:id",
            put(
                |State(handler): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateTenantRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| handler.update_tenant(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteTenantRequest(id))
                        .handle(|dto| handler.delete_tenant(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/tenants/:id/rent-status",
            get(|State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move {
                        let snapshot = handler.domain_store().snapshot();
                        let tenant_id = TenantId::new(id);
                        let check = snapshot
                            .tenant(&tenant_id)
                            .and_then(|tenant| tenant.property_id().as_ref())
                            .and_then(|property_id| snapshot.property(property_id))
                            .map(|property| {
                                handler.rent_status_for_tenant(&tenant_id, property.rent())
                            });
                        Ok::<_, Report<KernelError>>(check)
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
