//! JSON shapes of the two resources, kept apart from the entity models.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use entity::{baked_good, bakery};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedGoodView {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub bakery_id: i32,
}

impl From<baked_good::Model> for BakedGoodView {
    fn from(model: baked_good::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            bakery_id: model.bakery_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakeryView {
    pub id: i32,
    pub name: String,
    pub baked_goods: Vec<BakedGoodView>,
}

impl From<(bakery::Model, Vec<baked_good::Model>)> for BakeryView {
    fn from((bakery, baked_goods): (bakery::Model, Vec<baked_good::Model>)) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name,
            baked_goods: baked_goods.into_iter().map(BakedGoodView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// JSON response indented with two spaces.
#[derive(Clone, Debug)]
pub struct PrettyJson<T>(pub T);

impl<T> IntoResponse for PrettyJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
