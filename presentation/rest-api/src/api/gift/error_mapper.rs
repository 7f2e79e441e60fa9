use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::gift::errors::GiftError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GiftError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            GiftError::InterestsEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "gift.interests_empty",
            ),
            // A missing key is only told apart in the log.
            GiftError::ConfigurationMissing | GiftError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "gift.generation_failed",
            ),
            GiftError::InvalidSuggestion => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "gift.invalid_suggestion",
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
