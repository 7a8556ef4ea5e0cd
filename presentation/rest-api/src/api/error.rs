use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error category, e.g. "NotFound"
    pub code: String,
    /// i18n message key
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: &str, message: &str) -> Self {
        Self {
            status: status.as_u16(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    /// Unparseable id, query value or request body.
    pub fn invalid_data() -> Json<Self> {
        Json(Self::new(
            StatusCode::BAD_REQUEST,
            "BadRequest",
            "product.invalid_data",
        ))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Maps a request the operation never saw (failed token check or unbindable input).
pub fn rejection(err: &poem::Error) -> (StatusCode, Json<ErrorResponse>) {
    if err.status() == StatusCode::UNAUTHORIZED {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "auth.invalid_token",
            )),
        )
    } else {
        (StatusCode::BAD_REQUEST, ErrorResponse::invalid_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_unauthorized_when_token_check_fails() {
        let err = poem::Error::from_status(StatusCode::UNAUTHORIZED);

        let (status, json) = rejection(&err);

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.0.code, "Unauthorized");
    }

    #[test]
    fn should_report_invalid_data_when_binding_fails() {
        let err = poem::Error::from_status(StatusCode::BAD_REQUEST);

        let (status, json) = rejection(&err);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.status, 400);
        assert_eq!(json.0.message, "product.invalid_data");
    }
}
