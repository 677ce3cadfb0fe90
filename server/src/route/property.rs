mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::property::request::{
    AssignTenantRequest, CreatePropertyRequest, DeletePropertyRequest, Transformer,
    UnassignPropertyRequest, UpdatePropertyRequest,
};
use crate::route::property::response::Presenter;
use application::service::{
    AssignTenantService, CreatePropertyService, DeletePropertyService, UnassignTenantService,
    UpdatePropertyService,
};
use application::store::DependOnDomainStore;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

pub trait PropertyRouter {
    fn route_property(self) -> Self;
}

impl PropertyRouter for Router<AppModule> {
    fn route_property(self) -> Self {
        self.route(
            "/properties",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move {
                        Ok::<_, Report<KernelError>>(
                            handler.domain_store().snapshot().properties,
                        )
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(handler): State<AppModule>,
                 Json(req): Json<CreatePropertyRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.create_property(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/properties/:id",
            put(
                |State(handler): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdatePropertyRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| handler.update_property(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeletePropertyRequest(id))
                        .handle(|dto| handler.delete_property(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/properties/:id/tenant",
            put(
                |State(handler): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<AssignTenantRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| handler.assign_tenant(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(UnassignPropertyRequest(id))
                        .handle(|dto| handler.unassign_tenant(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
