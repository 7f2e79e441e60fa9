use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body. `message` is a dotted code (e.g. `gift.generation_failed`)
/// the frontend translates; it never carries upstream error detail.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
