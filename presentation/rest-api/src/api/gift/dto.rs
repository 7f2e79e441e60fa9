use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::gift::card::{CardImage, GiftCard, PREVIEW_UNAVAILABLE};
use business::domain::gift::errors::GiftError;
use business::domain::gift::marketplace::MarketplaceLink;
use business::domain::gift::preference::{
    Budget, ChoiceOption, Occasion, Preference, PreferenceOptions, RecipientType, Vibe,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum RecipientTypeDto {
    #[oai(rename = "girlfriend")]
    Girlfriend,
    #[oai(rename = "boyfriend")]
    Boyfriend,
    #[oai(rename = "wife")]
    Wife,
    #[oai(rename = "husband")]
    Husband,
    #[oai(rename = "partner")]
    Partner,
    #[oai(rename = "friend")]
    Friend,
}

impl From<RecipientTypeDto> for RecipientType {
    fn from(r: RecipientTypeDto) -> Self {
        match r {
            RecipientTypeDto::Girlfriend => RecipientType::Girlfriend,
            RecipientTypeDto::Boyfriend => RecipientType::Boyfriend,
            RecipientTypeDto::Wife => RecipientType::Wife,
            RecipientTypeDto::Husband => RecipientType::Husband,
            RecipientTypeDto::Partner => RecipientType::Partner,
            RecipientTypeDto::Friend => RecipientType::Friend,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum OccasionDto {
    #[oai(rename = "birthday")]
    Birthday,
    #[oai(rename = "anniversary")]
    Anniversary,
    #[oai(rename = "valentines_day")]
    ValentinesDay,
    #[oai(rename = "diwali")]
    Diwali,
    #[oai(rename = "wedding")]
    Wedding,
    #[oai(rename = "just_because")]
    JustBecause,
    #[oai(rename = "apology")]
    Apology,
}

impl From<OccasionDto> for Occasion {
    fn from(o: OccasionDto) -> Self {
        match o {
            OccasionDto::Birthday => Occasion::Birthday,
            OccasionDto::Anniversary => Occasion::Anniversary,
            OccasionDto::ValentinesDay => Occasion::ValentinesDay,
            OccasionDto::Diwali => Occasion::Diwali,
            OccasionDto::Wedding => Occasion::Wedding,
            OccasionDto::JustBecause => Occasion::JustBecause,
            OccasionDto::Apology => Occasion::Apology,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum BudgetDto {
    #[oai(rename = "under_500")]
    Under500,
    #[oai(rename = "500_2000")]
    From500To2000,
    #[oai(rename = "2000_5000")]
    From2000To5000,
    #[oai(rename = "5000_15000")]
    From5000To15000,
    #[oai(rename = "above_15000")]
    Above15000,
}

impl From<BudgetDto> for Budget {
    fn from(b: BudgetDto) -> Self {
        match b {
            BudgetDto::Under500 => Budget::Under500,
            BudgetDto::From500To2000 => Budget::From500To2000,
            BudgetDto::From2000To5000 => Budget::From2000To5000,
            BudgetDto::From5000To15000 => Budget::From5000To15000,
            BudgetDto::Above15000 => Budget::Above15000,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum VibeDto {
    #[oai(rename = "romantic")]
    Romantic,
    #[oai(rename = "practical")]
    Practical,
    #[oai(rename = "funny")]
    Funny,
    #[oai(rename = "sentimental")]
    Sentimental,
    #[oai(rename = "luxurious")]
    Luxurious,
    #[oai(rename = "creative")]
    Creative,
}

impl From<VibeDto> for Vibe {
    fn from(v: VibeDto) -> Self {
        match v {
            VibeDto::Romantic => Vibe::Romantic,
            VibeDto::Practical => Vibe::Practical,
            VibeDto::Funny => Vibe::Funny,
            VibeDto::Sentimental => Vibe::Sentimental,
            VibeDto::Luxurious => Vibe::Luxurious,
            VibeDto::Creative => Vibe::Creative,
        }
    }
}

/// The gift finder form.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GiftPreferenceRequest {
    pub recipient_type: RecipientTypeDto,
    pub occasion: OccasionDto,
    /// Free-text interests and hobbies (cannot be blank)
    pub interests: String,
    pub budget: BudgetDto,
    pub vibe: VibeDto,
}

impl GiftPreferenceRequest {
    pub fn into_domain(self) -> Result<Preference, GiftError> {
        Preference::new(
            self.recipient_type.into(),
            self.occasion.into(),
            self.interests,
            self.budget.into(),
            self.vibe.into(),
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct MarketplaceLinkResponse {
    /// Marketplace code (amazon_in, flipkart)
    pub marketplace: String,
    /// Button label
    pub label: String,
    /// Search URL for the gift's query
    pub url: String,
}

impl From<MarketplaceLink> for MarketplaceLinkResponse {
    fn from(link: MarketplaceLink) -> Self {
        Self {
            marketplace: link.marketplace.to_string(),
            label: link.marketplace.label().to_string(),
            url: link.url,
        }
    }
}

/// One card in the results grid.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GiftCardResponse {
    /// Zero-based position in the results grid
    pub position: u32,
    pub name: String,
    pub description: String,
    /// Why this gift fits the recipient
    pub reason: String,
    /// Price exactly as generated, e.g. "₹3,200"
    pub estimated_price: String,
    /// Price with currency markers removed, shown beside a rupee icon
    pub display_price: String,
    pub category: String,
    pub search_query: String,
    /// `data:` URI of the generated preview; absent when none was produced
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Caption for the placeholder shown when there is no preview
    #[oai(skip_serializing_if_is_none)]
    pub image_placeholder: Option<String>,
    pub links: Vec<MarketplaceLinkResponse>,
}

impl From<GiftCard> for GiftCardResponse {
    fn from(card: GiftCard) -> Self {
        let (image_url, image_placeholder) = match card.image {
            CardImage::Generated(image) => (Some(image.to_string()), None),
            CardImage::Placeholder => (None, Some(PREVIEW_UNAVAILABLE.to_string())),
        };
        let s = card.suggestion;

        Self {
            position: card.position as u32,
            name: s.name,
            description: s.description,
            reason: s.reason,
            estimated_price: s.estimated_price,
            display_price: card.display_price,
            category: s.category,
            search_query: s.search_query,
            image_url,
            image_placeholder,
            links: card.links.into_iter().map(|l| l.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ChoiceOptionResponse {
    /// Value to send back in the form
    pub code: String,
    /// Human label
    pub label: String,
}

impl From<ChoiceOption> for ChoiceOptionResponse {
    fn from(option: ChoiceOption) -> Self {
        Self {
            code: option.code,
            label: option.label.to_string(),
        }
    }
}

/// Choice sets for the form; the first entry of each list is the default.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GiftOptionsResponse {
    pub recipient_types: Vec<ChoiceOptionResponse>,
    pub occasions: Vec<ChoiceOptionResponse>,
    pub budgets: Vec<ChoiceOptionResponse>,
    pub vibes: Vec<ChoiceOptionResponse>,
}

fn to_responses(options: Vec<ChoiceOption>) -> Vec<ChoiceOptionResponse> {
    options.into_iter().map(|o| o.into()).collect()
}

impl From<PreferenceOptions> for GiftOptionsResponse {
    fn from(options: PreferenceOptions) -> Self {
        Self {
            recipient_types: to_responses(options.recipient_types),
            occasions: to_responses(options.occasions),
            budgets: to_responses(options.budgets),
            vibes: to_responses(options.vibes),
        }
    }
}
