use std::sync::Arc;

use futures::future::join_all;

use crate::domain::gift::model::Suggestion;
use crate::domain::gift::services::ImageGeneratorService;
use crate::domain::logger::Logger;

/// Best-effort preview images for generated suggestions.
///
/// Every suggestion gets its own request; all of them run concurrently and the
/// step finishes once each one has either attached an image or given up. A
/// failed request only costs that suggestion its image.
pub struct ImageEnricher {
    pub images: Arc<dyn ImageGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

impl ImageEnricher {
    pub async fn enrich(&self, suggestion: Suggestion) -> Suggestion {
        match self.images.generate_preview(&suggestion).await {
            Ok(image) => suggestion.with_image(image),
            Err(err) => {
                self.logger.warn(&format!(
                    "No preview image for '{}': {}",
                    suggestion.name, err
                ));
                suggestion
            }
        }
    }

    /// Output has the same length and order as `suggestions`.
    pub async fn enrich_all(&self, suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
        join_all(suggestions.into_iter().map(|s| self.enrich(s))).await
    }
}
