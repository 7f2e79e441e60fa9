use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use business::domain::gift::errors::GiftError;
use business::domain::gift::model::Suggestion;
use business::domain::gift::preference::Preference;
use business::domain::gift::services::SuggestionGeneratorService;
use business::domain::logger::Logger;

use crate::client::{GeminiCallError, GeminiClient};

const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "description",
    "reason",
    "estimatedPrice",
    "searchQuery",
    "category",
];

// Schema mode should return bare JSON, but fenced output still shows up
static MARKDOWN_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("fence pattern is valid")
});

/// One item of the structured response. Every field is required; a missing
/// one fails deserialization of the whole batch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedGift {
    name: String,
    description: String,
    reason: String,
    estimated_price: String,
    search_query: String,
    category: String,
}

pub struct SuggestionGeneratorGemini {
    client: GeminiClient,
    logger: Arc<dyn Logger>,
}

impl SuggestionGeneratorGemini {
    pub fn new(client: GeminiClient, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }

    fn build_prompt(preference: &Preference, count: usize) -> String {
        format!(
            r#"Suggest {count} unique, thoughtful, and creative gift ideas for my {recipient} in India.

Context:
- Occasion: {occasion}
- Interests/Hobbies: {interests}
- Budget Range: {budget} (in Indian Rupees - INR)
- Desired Vibe: {vibe}
- Market: Assume the user is in India and looking for items available on Indian e-commerce sites like Amazon.in, Flipkart, Myntra, or local boutiques.

For each gift, provide:
1. A catchy name.
2. A short description (under 20 words).
3. A reason why it fits this specific person and occasion.
4. An estimated price in INR (e.g., ₹1,200).
5. A search query string optimized for Indian shopping sites.
6. A category (e.g., Tech, Fashion, Experience, Home Decor).

Ensure the output is strictly valid JSON matching the schema."#,
            count = count,
            recipient = preference.recipient_type.label(),
            occasion = preference.occasion.label(),
            interests = preference.interests,
            budget = preference.budget.label(),
            vibe = preference.vibe.label(),
        )
    }

    fn response_schema() -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = REQUIRED_FIELDS
            .iter()
            .map(|field| (field.to_string(), json!({ "type": "STRING" })))
            .collect();

        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": properties,
                "required": REQUIRED_FIELDS,
            }
        })
    }

    fn request_body(preference: &Preference, count: usize) -> serde_json::Value {
        json!({
            "contents": [
                {"role": "user", "parts": [{"text": Self::build_prompt(preference, count)}]}
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
            }
        })
    }

    fn parse_response(content: &str) -> Result<Vec<Suggestion>, GiftError> {
        let json_text = MARKDOWN_FENCE
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(content)
            .trim();

        let gifts: Vec<GeneratedGift> =
            serde_json::from_str(json_text).map_err(|_| GiftError::GenerationFailed)?;

        gifts
            .into_iter()
            .map(|g| {
                Suggestion::new(
                    g.name,
                    g.description,
                    g.reason,
                    g.estimated_price,
                    g.search_query,
                    g.category,
                )
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GiftError::GenerationFailed)
    }
}

#[async_trait]
impl SuggestionGeneratorService for SuggestionGeneratorGemini {
    async fn generate(
        &self,
        preference: &Preference,
        count: usize,
    ) -> Result<Vec<Suggestion>, GiftError> {
        let body = Self::request_body(preference, count);

        let response = self
            .client
            .generate_content(&self.client.text_model, &body)
            .await
            .map_err(|err| match err {
                GeminiCallError::MissingApiKey => {
                    self.logger
                        .error("Gemini API key is not configured; cannot generate suggestions");
                    GiftError::ConfigurationMissing
                }
                other => {
                    self.logger
                        .error(&format!("Text generation call failed: {}", other));
                    GiftError::GenerationFailed
                }
            })?;

        let content = response.text().ok_or_else(|| {
            self.logger.error("Text generation returned no payload");
            GiftError::GenerationFailed
        })?;

        Self::parse_response(&content).inspect_err(|_| {
            self.logger.error(&format!(
                "Text generation payload did not match the suggestion schema: {}",
                content.chars().take(300).collect::<String>()
            ));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::gift::preference::{Budget, Occasion, RecipientType, Vibe};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    fn preference() -> Preference {
        Preference::new(
            RecipientType::Wife,
            Occasion::Anniversary,
            "filter coffee, trekking".to_string(),
            Budget::From2000To5000,
            Vibe::Romantic,
        )
        .unwrap()
    }

    fn gift_json(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "description": "Hand grinder with pour-over set",
            "reason": "She brews filter coffee every morning",
            "estimatedPrice": "₹3,200",
            "searchQuery": "pour over coffee kit",
            "category": "Home Decor"
        })
    }

    fn six_gifts_text() -> String {
        let gifts: Vec<_> = (1..=6).map(|i| gift_json(&format!("Gift {}", i))).collect();
        serde_json::to_string(&gifts).unwrap()
    }

    fn text_response(text: &str) -> serde_json::Value {
        json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
    }

    fn generator_for(server: &MockServer, api_key: Option<&str>) -> SuggestionGeneratorGemini {
        let client = GeminiClient::new(api_key.map(str::to_string), Duration::from_secs(5))
            .with_base_url(server.uri())
            .with_text_model("test-text");
        SuggestionGeneratorGemini::new(client, Arc::new(SilentLogger))
    }

    #[test]
    fn should_embed_every_preference_field_in_prompt() {
        let prompt = SuggestionGeneratorGemini::build_prompt(&preference(), 6);

        assert!(prompt.starts_with("Suggest 6 unique"));
        assert!(prompt.contains("for my Wife in India"));
        assert!(prompt.contains("Occasion: Anniversary"));
        assert!(prompt.contains("Interests/Hobbies: filter coffee, trekking"));
        assert!(prompt.contains("Budget Range: ₹2000 - ₹5000"));
        assert!(prompt.contains("Desired Vibe: Romantic"));
        assert!(prompt.contains("Amazon.in, Flipkart"));
    }

    #[test]
    fn should_require_all_six_fields_in_schema() {
        let body = SuggestionGeneratorGemini::request_body(&preference(), 6);
        let schema = &body["generationConfig"]["responseSchema"];

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["required"], json!(REQUIRED_FIELDS));
        assert_eq!(
            schema["items"]["properties"]["estimatedPrice"]["type"],
            "STRING"
        );
    }

    #[test]
    fn should_parse_fenced_json_array() {
        let content = format!("```json\n{}\n```", six_gifts_text());

        let suggestions = SuggestionGeneratorGemini::parse_response(&content).unwrap();

        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].estimated_price, "₹3,200");
        assert_eq!(suggestions[0].search_query, "pour over coffee kit");
    }

    #[test]
    fn should_reject_item_missing_required_field() {
        let content = r#"[{"name":"Mug","description":"d","reason":"r","estimatedPrice":"₹500","category":"Home"}]"#;

        let result = SuggestionGeneratorGemini::parse_response(content);

        assert!(matches!(result.unwrap_err(), GiftError::GenerationFailed));
    }

    #[test]
    fn should_reject_item_with_blank_field() {
        let mut gift = gift_json("Mug");
        gift["reason"] = json!("   ");
        let content = serde_json::to_string(&vec![gift]).unwrap();

        let result = SuggestionGeneratorGemini::parse_response(&content);

        assert!(matches!(result.unwrap_err(), GiftError::GenerationFailed));
    }

    #[tokio::test]
    async fn should_generate_suggestions_from_structured_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-text:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&six_gifts_text())))
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let suggestions = generator.generate(&preference(), 6).await.unwrap();

        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[5].name, "Gift 6");
        assert!(suggestions.iter().all(|s| s.image.is_none()));
    }

    #[tokio::test]
    async fn should_fail_when_payload_is_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response("Sure! Here are some lovely gift ideas...")),
            )
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let result = generator.generate(&preference(), 6).await;

        assert!(matches!(result.unwrap_err(), GiftError::GenerationFailed));
    }

    #[tokio::test]
    async fn should_fail_when_response_has_no_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let result = generator.generate(&preference(), 6).await;

        assert!(matches!(result.unwrap_err(), GiftError::GenerationFailed));
    }

    #[tokio::test]
    async fn should_fail_when_service_returns_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator_for(&server, Some("test-key"));

        let result = generator.generate(&preference(), 6).await;

        assert!(matches!(result.unwrap_err(), GiftError::GenerationFailed));
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

        let result = generator.generate(&preference(), 6).await;

        assert!(matches!(
            result.unwrap_err(),
            GiftError::ConfigurationMissing
        ));
    }
}
