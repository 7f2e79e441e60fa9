use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::{GiftError, ImageError};

/// Number of ideas requested per submission.
pub const SUGGESTION_COUNT: usize = 6;

const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Currency markers the model puts around prices, including a mis-encoded rupee sign.
static CURRENCY_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)â‚¹|₹|\bINR|\bRs\.?").expect("currency marker pattern is valid")
});

/// Self-contained `data:` URI for a generated preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference(String);

impl ImageReference {
    /// Builds a data URI from an inline base64 payload returned by the image service.
    /// The payload is checked to decode, since the service output is not trusted.
    pub fn from_inline_data(mime_type: Option<&str>, data: &str) -> Result<Self, ImageError> {
        let data: String = data.chars().filter(|c| !c.is_whitespace()).collect();
        if data.is_empty() {
            return Err(ImageError::NoImage);
        }

        STANDARD
            .decode(&data)
            .map_err(|_| ImageError::InvalidPayload)?;

        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MIME);

        Ok(Self(format!("data:{};base64,{}", mime_type, data)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One gift idea. Position in the result sequence is its only identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    pub reason: String,
    /// Opaque display text, e.g. "₹3,200". Never parsed as a number.
    pub estimated_price: String,
    pub search_query: String,
    pub category: String,
    pub image: Option<ImageReference>,
}

impl Suggestion {
    pub fn new(
        name: String,
        description: String,
        reason: String,
        estimated_price: String,
        search_query: String,
        category: String,
    ) -> Result<Self, GiftError> {
        let fields = [
            &name,
            &description,
            &reason,
            &estimated_price,
            &search_query,
            &category,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(GiftError::InvalidSuggestion);
        }

        Ok(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            reason: reason.trim().to_string(),
            estimated_price: estimated_price.trim().to_string(),
            search_query: search_query.trim().to_string(),
            category: category.trim().to_string(),
            image: None,
        })
    }

    pub fn with_image(mut self, image: ImageReference) -> Self {
        self.image = Some(image);
        self
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Price text for display beside a rupee icon.
    ///
    /// The model mixes currency markers (and sometimes mis-encoded ones), so
    /// they are stripped; the remaining text is shown as-is.
    pub fn display_price(&self) -> String {
        CURRENCY_MARKERS
            .replace_all(&self.estimated_price, "")
            .trim()
            .to_string()
    }
}
