#[derive(Debug, thiserror::Error)]
pub enum GiftError {
    #[error("gift.interests_empty")]
    InterestsEmpty,
    #[error("gift.configuration_missing")]
    ConfigurationMissing,
    #[error("gift.generation_failed")]
    GenerationFailed,
    #[error("gift.invalid_suggestion")]
    InvalidSuggestion,
}

/// Failure to obtain a preview image for a single suggestion.
/// Never leaves the enrichment step; it is logged and dropped there.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.configuration_missing")]
    ConfigurationMissing,
    #[error("image.request_failed")]
    RequestFailed,
    #[error("image.no_image")]
    NoImage,
    #[error("image.invalid_payload")]
    InvalidPayload,
}
