use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::gift::card::build_cards;
use business::domain::gift::preference::options;
use business::domain::gift::use_cases::generate::{
    GenerateGiftSuggestionsParams, GenerateGiftSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::gift::dto::{GiftCardResponse, GiftOptionsResponse, GiftPreferenceRequest};
use crate::api::tags::ApiTags;

pub struct GiftApi {
    generate_use_case: Arc<dyn GenerateGiftSuggestionsUseCase>,
}

impl GiftApi {
    pub fn new(generate_use_case: Arc<dyn GenerateGiftSuggestionsUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Gift API
///
/// Stateless endpoints behind the gift finder form.
#[OpenApi]
impl GiftApi {
    /// List form choices
    ///
    /// Recipient types, occasions, budget brackets (INR) and vibes, with the
    /// codes the suggestion endpoints accept.
    #[oai(path = "/gift-options", method = "get", tag = "ApiTags::Gifts")]
    async fn get_options(&self) -> Json<GiftOptionsResponse> {
        Json(options().into())
    }

    /// Generate gift suggestions
    ///
    /// Asks the model for six gift ideas, then attaches a generated preview
    /// image to each one where possible. Cards without a preview carry a
    /// placeholder caption instead.
    #[oai(path = "/gift-suggestions", method = "post", tag = "ApiTags::Gifts")]
    async fn generate(&self, body: Json<GiftPreferenceRequest>) -> GenerateGiftSuggestionsResponse {
        let preference = match body.0.into_domain() {
            Ok(preference) => preference,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return GenerateGiftSuggestionsResponse::BadRequest(json);
            }
        };

        match self
            .generate_use_case
            .execute(GenerateGiftSuggestionsParams { preference })
            .await
        {
            Ok(suggestions) => {
                let cards: Vec<GiftCardResponse> = build_cards(suggestions)
                    .into_iter()
                    .map(|c| c.into())
                    .collect();
                GenerateGiftSuggestionsResponse::Ok(Json(cards))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateGiftSuggestionsResponse::BadRequest(json),
                    _ => GenerateGiftSuggestionsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateGiftSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<GiftCardResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
