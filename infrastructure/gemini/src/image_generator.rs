use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::gift::errors::ImageError;
use business::domain::gift::model::{ImageReference, Suggestion};
use business::domain::gift::services::ImageGeneratorService;
use business::domain::logger::Logger;

use crate::client::{GeminiCallError, GeminiClient};

pub struct ImageGeneratorGemini {
    client: GeminiClient,
    logger: Arc<dyn Logger>,
}

impl ImageGeneratorGemini {
    pub fn new(client: GeminiClient, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }

    fn build_prompt(suggestion: &Suggestion) -> String {
        format!(
            "Professional product photography of a {}. {}. High-quality, clean background, aesthetic lighting, premium gifting style.",
            suggestion.name,
            suggestion.description.trim_end_matches('.')
        )
    }
}

#[async_trait]
impl ImageGeneratorService for ImageGeneratorGemini {
    async fn generate_preview(
        &self,
        suggestion: &Suggestion,
    ) -> Result<ImageReference, ImageError> {
        let body = json!({
            "contents": [
                {"parts": [{"text": Self::build_prompt(suggestion)}]}
            ],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
            }
        });

        let response = self
            .client
            .generate_content(&self.client.image_model, &body)
            .await
            .map_err(|err| match err {
                GeminiCallError::MissingApiKey => ImageError::ConfigurationMissing,
                other => {
                    self.logger.debug(&format!(
                        "Image call for '{}' failed: {}",
                        suggestion.name, other
                    ));
                    ImageError::RequestFailed
                }
            })?;

        let inline = response.first_inline_data().ok_or(ImageError::NoImage)?;

        ImageReference::from_inline_data(inline.mime_type.as_deref(), &inline.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    fn coffee_kit() -> Suggestion {
        Suggestion::new(
            "Artisan Coffee Brewing Kit".to_string(),
            "Hand grinder with a ceramic pour-over dripper.".to_string(),
            "She brews filter coffee every morning".to_string(),
            "₹3,200".to_string(),
            "pour over coffee kit".to_string(),
            "Home Decor".to_string(),
        )
        .unwrap()
    }

    fn generator_for(server: &MockServer, api_key: Option<&str>) -> ImageGeneratorGemini {
        let client = GeminiClient::new(api_key.map(str::to_string), Duration::from_secs(5))
            .with_base_url(server.uri())
            .with_image_model("test-image");
        ImageGeneratorGemini::new(client, Arc::new(SilentLogger))
    }

    #[test]
    fn should_describe_product_photo_from_name_and_description() {
        let prompt = ImageGeneratorGemini::build_prompt(&coffee_kit());

        assert_eq!(
            prompt,
            "Professional product photography of a Artisan Coffee Brewing Kit. Hand grinder with a ceramic pour-over dripper. High-quality, clean background, aesthetic lighting, premium gifting style."
        );
    }

    #[tokio::test]
    async fn should_return_data_uri_from_first_inline_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-image:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [
                    {"text": "Here is the photo"},
                    {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}},
                    {"inlineData": {"mimeType": "image/png", "data": "d29ybGQ="}}
                ]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let image = generator.generate_preview(&coffee_kit()).await.unwrap();

        assert_eq!(image.as_str(), "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn should_report_no_image_when_only_text_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "I cannot draw that"}]}}]
            })))
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let result = generator.generate_preview(&coffee_kit()).await;

        assert!(matches!(result.unwrap_err(), ImageError::NoImage));
    }

    #[tokio::test]
    async fn should_report_request_failure_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let result = generator.generate_preview(&coffee_kit()).await;

        assert!(matches!(result.unwrap_err(), ImageError::RequestFailed));
    }

    #[tokio::test]
    async fn should_report_missing_configuration_without_calling_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let generator = generator_for(&server, None);

        let result = generator.generate_preview(&coffee_kit()).await;

        assert!(matches!(
            result.unwrap_err(),
            ImageError::ConfigurationMissing
        ));
    }
}
