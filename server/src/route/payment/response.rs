use crate::controller::Exhaust;
use application::export::PaymentsCsv;
use application::transfer::PaymentDto;
use axum::http::header::{self, HeaderName};
use axum::Json;
use kernel::prelude::entity::Payment;
use serde::Serialize;
use uuid::Uuid;

pub struct Presenter;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

impl Exhaust<Vec<Payment>> for Presenter {
    type To = Json<Vec<PaymentDto>>;
    fn emit(&self, input: Vec<Payment>) -> Self::To {
        Json(input.into_iter().map(PaymentDto::from).collect())
    }
}

impl Exhaust<Uuid> for Presenter {
    type To = Json<CreatedResponse>;
    fn emit(&self, input: Uuid) -> Self::To {
        Json(CreatedResponse { id: input })
    }
}

impl Exhaust<PaymentsCsv> for Presenter {
    type To = ([(HeaderName, String); 2], String);
    fn emit(&self, input: PaymentsCsv) -> Self::To {
        (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", input.file_name),
                ),
            ],
            input.content,
        )
    }
}
