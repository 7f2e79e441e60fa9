use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SessionError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "session.not_found"),
            SessionError::SubmitWhileLoading => (
                StatusCode::CONFLICT,
                "Conflict",
                "session.submit_while_loading",
            ),
            SessionError::InvalidTransition => (
                StatusCode::CONFLICT,
                "Conflict",
                "session.invalid_transition",
            ),
            SessionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
