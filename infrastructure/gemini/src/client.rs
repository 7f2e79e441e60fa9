use std::time::Duration;

use reqwest::Client;

use crate::types::GenerateContentResponse;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum GeminiCallError {
    #[error("gemini api key is not configured")]
    MissingApiKey,
    #[error("gemini request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("gemini returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("gemini response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Shared Gemini HTTP client configuration.
#[derive(Clone)]
pub struct GeminiClient {
    pub client: Client,
    api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl GeminiClient {
    /// A missing key is accepted here; every call then fails with `MissingApiKey`.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the generateContent endpoint URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    pub async fn generate_content(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<GenerateContentResponse, GeminiCallError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GeminiCallError::MissingApiKey)?;

        let response = self
            .client
            .post(self.generate_content_url(model))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(GeminiCallError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiCallError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(GeminiCallError::Decode)
    }
}
