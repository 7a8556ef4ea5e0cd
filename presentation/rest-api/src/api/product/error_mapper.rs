use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, code) = match &self {
            ProductError::AlreadyExists | ProductError::InvalidDateFormat => {
                (StatusCode::CONFLICT, "Conflict")
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::InvalidData => (StatusCode::BAD_REQUEST, "BadRequest"),
            ProductError::Internal(source) => {
                tracing::error!(error = %source, "product request failed on storage");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError")
            }
        };

        (
            status,
            Json(ErrorResponse::new(status, code, &self.to_string())),
        )
    }
}
