use async_trait::async_trait;

use crate::domain::gift::errors::GiftError;
use crate::domain::gift::model::Suggestion;
use crate::domain::gift::preference::Preference;

pub struct GenerateGiftSuggestionsParams {
    pub preference: Preference,
}

#[async_trait]
pub trait GenerateGiftSuggestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateGiftSuggestionsParams,
    ) -> Result<Vec<Suggestion>, GiftError>;
}
