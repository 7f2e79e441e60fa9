use super::marketplace::{MarketplaceLink, links_for};
use super::model::{ImageReference, Suggestion};

pub const PREVIEW_UNAVAILABLE: &str = "Preview image unavailable";

#[derive(Debug, Clone, PartialEq)]
pub enum CardImage {
    Generated(ImageReference),
    /// Enrichment did not attach an image; the frontend draws its fallback.
    Placeholder,
}

/// A suggestion as shown in the results grid.
#[derive(Debug, Clone)]
pub struct GiftCard {
    pub position: usize,
    pub suggestion: Suggestion,
    pub image: CardImage,
    pub display_price: String,
    pub links: Vec<MarketplaceLink>,
}

impl GiftCard {
    pub fn from_suggestion(position: usize, suggestion: Suggestion) -> Self {
        let image = match &suggestion.image {
            Some(image) => CardImage::Generated(image.clone()),
            None => CardImage::Placeholder,
        };

        Self {
            position,
            display_price: suggestion.display_price(),
            links: links_for(&suggestion.search_query),
            image,
            suggestion,
        }
    }
}

pub fn build_cards(suggestions: Vec<Suggestion>) -> Vec<GiftCard> {
    suggestions
        .into_iter()
        .enumerate()
        .map(|(position, s)| GiftCard::from_suggestion(position, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(name: &str) -> Suggestion {
        Suggestion::new(
            name.to_string(),
            "desc".to_string(),
            "reason".to_string(),
            "₹1,499".to_string(),
            format!("{} gift", name),
            "Tech".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn should_use_placeholder_only_for_items_without_image() {
        let image = ImageReference::from_inline_data(None, "aGVsbG8=").unwrap();
        let cards = build_cards(vec![
            suggestion("Kindle").with_image(image.clone()),
            suggestion("Earbuds"),
        ]);

        assert_eq!(cards[0].image, CardImage::Generated(image));
        assert_eq!(cards[1].image, CardImage::Placeholder);
        assert_eq!(cards[1].position, 1);
    }

    #[test]
    fn should_carry_display_price_and_links() {
        let card = GiftCard::from_suggestion(0, suggestion("Kindle"));

        assert_eq!(card.display_price, "1,499");
        assert_eq!(card.links.len(), 2);
        assert!(card.links[0].url.ends_with("k=Kindle+gift"));
    }
}
