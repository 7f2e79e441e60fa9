use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::session::use_cases::create::CreateSessionUseCase;
use business::domain::session::use_cases::get::{GetSessionParams, GetSessionUseCase};
use business::domain::session::use_cases::reset::{ResetSessionParams, ResetSessionUseCase};
use business::domain::session::use_cases::submit::{
    SubmitPreferenceParams, SubmitPreferenceUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::gift::dto::GiftPreferenceRequest;
use crate::api::session::dto::SessionResponse;
use crate::api::tags::ApiTags;

pub struct SessionApi {
    create_use_case: Arc<dyn CreateSessionUseCase>,
    get_use_case: Arc<dyn GetSessionUseCase>,
    submit_use_case: Arc<dyn SubmitPreferenceUseCase>,
    reset_use_case: Arc<dyn ResetSessionUseCase>,
}

impl SessionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateSessionUseCase>,
        get_use_case: Arc<dyn GetSessionUseCase>,
        submit_use_case: Arc<dyn SubmitPreferenceUseCase>,
        reset_use_case: Arc<dyn ResetSessionUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            submit_use_case,
            reset_use_case,
        }
    }
}

fn parse_session_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id).map_err(|_| ErrorResponse::validation("session.invalid_id"))
}

/// Session API
///
/// Server-side view state for one browser tab: idle form, loading,
/// results grid or error banner.
#[OpenApi]
impl SessionApi {
    /// Start a session
    ///
    /// Creates a session in the `idle` state.
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn create(&self) -> CreateSessionResponse {
        match self.create_use_case.execute().await {
            Ok(session) => CreateSessionResponse::Created(Json(session.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CreateSessionResponse::InternalError(json)
            }
        }
    }

    /// Get a session
    ///
    /// Returns the current view state. Poll this while a submission is loading.
    #[oai(path = "/sessions/:id", method = "get", tag = "ApiTags::Sessions")]
    async fn get(&self, id: Path<String>) -> GetSessionResponse {
        let id = match parse_session_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetSessionResponse::BadRequest(json),
        };

        match self.get_use_case.execute(GetSessionParams { id }).await {
            Ok(session) => GetSessionResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSessionResponse::NotFound(json),
                    _ => GetSessionResponse::InternalError(json),
                }
            }
        }
    }

    /// Submit the gift finder form
    ///
    /// Only accepted while the session is `idle`. Responds once the session
    /// has settled in `results` or `error`. Generation keeps running if the
    /// client disconnects, so the session never stays `loading`.
    #[oai(
        path = "/sessions/:id/submit",
        method = "post",
        tag = "ApiTags::Sessions"
    )]
    async fn submit(
        &self,
        id: Path<String>,
        body: Json<GiftPreferenceRequest>,
    ) -> SubmitSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(id) => id,
            Err(json) => return SubmitSessionResponse::BadRequest(json),
        };
        let preference = match body.0.into_domain() {
            Ok(preference) => preference,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return SubmitSessionResponse::BadRequest(json);
            }
        };

        let use_case = self.submit_use_case.clone();
        let task = tokio::spawn(async move {
            use_case
                .execute(SubmitPreferenceParams {
                    session_id,
                    preference,
                })
                .await
        });

        match task.await {
            Ok(Ok(session)) => SubmitSessionResponse::Ok(Json(session.into())),
            Ok(Err(err)) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SubmitSessionResponse::NotFound(json),
                    409 => SubmitSessionResponse::Conflict(json),
                    _ => SubmitSessionResponse::InternalError(json),
                }
            }
            Err(join_err) => {
                tracing::error!(%session_id, error = %join_err, "Submit task did not complete");
                SubmitSessionResponse::InternalError(Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "session.submit_aborted".to_string(),
                }))
            }
        }
    }

    /// Start over
    ///
    /// Returns a `results` or `error` session to `idle`, clearing suggestions
    /// and the error message.
    #[oai(
        path = "/sessions/:id/reset",
        method = "post",
        tag = "ApiTags::Sessions"
    )]
    async fn reset(&self, id: Path<String>) -> ResetSessionResponse {
        let id = match parse_session_id(&id.0) {
            Ok(id) => id,
            Err(json) => return ResetSessionResponse::BadRequest(json),
        };

        match self.reset_use_case.execute(ResetSessionParams { id }).await {
            Ok(session) => ResetSessionResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ResetSessionResponse::NotFound(json),
                    409 => ResetSessionResponse::Conflict(json),
                    _ => ResetSessionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
