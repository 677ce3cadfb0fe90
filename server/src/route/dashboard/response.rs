use crate::controller::Exhaust;
use application::report::DashboardReport;
use axum::Json;
use serde::Serialize;

pub struct Presenter;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_properties: usize,
    pub occupied_properties: usize,
    pub collected_this_month: i64,
    pub overdue_total: i64,
}

impl Exhaust<DashboardReport> for Presenter {
    type To = Json<DashboardResponse>;
    fn emit(&self, input: DashboardReport) -> Self::To {
        Json(DashboardResponse {
            total_properties: input.total_properties,
            occupied_properties: input.occupied_properties,
            collected_this_month: input.collected_this_month,
            overdue_total: input.overdue_total,
        })
    }
}
