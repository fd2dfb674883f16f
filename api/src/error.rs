use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bakery_service::sea_orm::DbErr;
use thiserror::Error;

use crate::form::FormError;
use crate::view::{ErrorBody, PrettyJson};

pub const BAKERY_NOT_FOUND: &str = "Bakery not found";
pub const BAKED_GOOD_NOT_FOUND: &str = "Baked good not found";
pub const NO_BAKED_GOODS: &str = "No baked goods found";

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Validation(#[from] FormError),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::Db(err) => {
                tracing::error!(error = %err, "database operation failed");
                "Internal server error".to_owned()
            }
            other => other.to_string(),
        };

        (status, PrettyJson(ErrorBody { error })).into_response()
    }
}
