use std::sync::Arc;

use async_trait::async_trait;

use crate::application::gift::enrich::ImageEnricher;
use crate::domain::gift::errors::GiftError;
use crate::domain::gift::model::{SUGGESTION_COUNT, Suggestion};
use crate::domain::gift::services::{ImageGeneratorService, SuggestionGeneratorService};
use crate::domain::gift::use_cases::generate::{
    GenerateGiftSuggestionsParams, GenerateGiftSuggestionsUseCase,
};
use crate::domain::logger::Logger;

pub struct GenerateGiftSuggestionsUseCaseImpl {
    pub generator: Arc<dyn SuggestionGeneratorService>,
    pub images: Arc<dyn ImageGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateGiftSuggestionsUseCase for GenerateGiftSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateGiftSuggestionsParams,
    ) -> Result<Vec<Suggestion>, GiftError> {
        let preference = params.preference;
        self.logger.info(&format!(
            "Generating gift suggestions for {} ({}, {}, {})",
            preference.recipient_type, preference.occasion, preference.budget, preference.vibe
        ));

        let mut suggestions = self
            .generator
            .generate(&preference, SUGGESTION_COUNT)
            .await
            .inspect_err(|err| {
                self.logger
                    .error(&format!("Suggestion generation failed: {}", err));
            })?;

        if suggestions.len() < SUGGESTION_COUNT {
            self.logger.error(&format!(
                "Expected {} suggestions, service returned {}",
                SUGGESTION_COUNT,
                suggestions.len()
            ));
            return Err(GiftError::GenerationFailed);
        }
        if suggestions.len() > SUGGESTION_COUNT {
            self.logger.warn(&format!(
                "Service returned {} suggestions, keeping the first {}",
                suggestions.len(),
                SUGGESTION_COUNT
            ));
            suggestions.truncate(SUGGESTION_COUNT);
        }

        let enricher = ImageEnricher {
            images: self.images.clone(),
            logger: self.logger.clone(),
        };
        let suggestions = enricher.enrich_all(suggestions).await;

        self.logger.info(&format!(
            "Generated {} suggestions ({} with preview images)",
            suggestions.len(),
            suggestions.iter().filter(|s| s.has_image()).count()
        ));

        Ok(suggestions)
    }
}
