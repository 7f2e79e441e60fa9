use std::env;
use std::time::Duration;

use gemini::client::{DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiClient};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API key (falls back to API_KEY). Optional at startup;
///   without it every generation attempt fails with a configuration error.
/// - GEMINI_BASE_URL: REST base URL
/// - GEMINI_TEXT_MODEL: Model for gift suggestions
/// - GEMINI_IMAGE_MODEL: Model for preview images
/// - GEMINI_TIMEOUT_SECS: Per-request timeout in seconds (default: 60)
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank("GEMINI_API_KEY").or_else(|| non_blank("API_KEY"));
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; gift generation requests will fail");
        }

        let timeout_secs = non_blank("GEMINI_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url: non_blank("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            text_model: non_blank("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: non_blank("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn client(&self) -> GeminiClient {
        GeminiClient::new(self.api_key.clone(), self.timeout)
            .with_base_url(self.base_url.clone())
            .with_text_model(self.text_model.clone())
            .with_image_model(self.image_model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GeminiConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GeminiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_use_defaults_when_nothing_set() {
        let config = config_from(&[]);

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.text_model, "gemini-3-flash-preview");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn should_fall_back_to_api_key_variable() {
        let config = config_from(&[("GEMINI_API_KEY", "  "), ("API_KEY", "legacy-key")]);

        assert_eq!(config.api_key.as_deref(), Some("legacy-key"));
    }

    #[test]
    fn should_prefer_gemini_api_key_and_read_overrides() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "legacy-key"),
            ("GEMINI_TEXT_MODEL", "gemini-2.5-flash"),
            ("GEMINI_TIMEOUT_SECS", "15"),
        ]);

        assert_eq!(config.api_key.as_deref(), Some("primary"));
        assert_eq!(config.text_model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.client().has_api_key());
    }

    #[test]
    fn should_ignore_unparseable_timeout() {
        let config = config_from(&[("GEMINI_TIMEOUT_SECS", "soon")]);

        assert_eq!(config.timeout, Duration::from_secs(60));
    }
}
