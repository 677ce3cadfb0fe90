use crate::controller::Exhaust;
use application::transfer::PropertyDto;
use axum::Json;
use kernel::prelude::entity::Property;
use serde::Serialize;
use uuid::Uuid;

pub struct Presenter;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

impl Exhaust<Vec<Property>> for Presenter {
    type To = Json<Vec<PropertyDto>>;
    fn emit(&self, input: Vec<Property>) -> Self::To {
        Json(input.into_iter().map(PropertyDto::from).collect())
    }
}

impl Exhaust<Uuid> for Presenter {
    type To = Json<CreatedResponse>;
    fn emit(&self, input: Uuid) -> Self::To {
        Json(CreatedResponse { id: input })
    }
}

impl Exhaust<()> for Presenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
