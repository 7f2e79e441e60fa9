use async_trait::async_trait;

use super::errors::{GiftError, ImageError};
use super::model::{ImageReference, Suggestion};
use super::preference::Preference;

/// Service port for turning a preference into structured gift ideas.
#[async_trait]
pub trait SuggestionGeneratorService: Send + Sync {
    async fn generate(
        &self,
        preference: &Preference,
        count: usize,
    ) -> Result<Vec<Suggestion>, GiftError>;
}

/// Service port for synthesizing a product preview for one idea.
#[async_trait]
pub trait ImageGeneratorService: Send + Sync {
    async fn generate_preview(&self, suggestion: &Suggestion)
    -> Result<ImageReference, ImageError>;
}
