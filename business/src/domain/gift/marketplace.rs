use url::Url;

/// E-commerce search endpoints each card links out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marketplace {
    AmazonIn,
    Flipkart,
}

impl Marketplace {
    pub const ALL: [Marketplace; 2] = [Marketplace::AmazonIn, Marketplace::Flipkart];

    pub fn label(&self) -> &'static str {
        match self {
            Marketplace::AmazonIn => "Amazon.in",
            Marketplace::Flipkart => "Flipkart",
        }
    }

    fn search_endpoint(&self) -> (&'static str, &'static str) {
        match self {
            Marketplace::AmazonIn => ("https://www.amazon.in/s", "k"),
            Marketplace::Flipkart => ("https://www.flipkart.com/search", "q"),
        }
    }

    /// Builds the search URL for `query`, percent-encoding it as a query parameter.
    pub fn search_url(&self, query: &str) -> String {
        let (endpoint, param) = self.search_endpoint();
        Url::parse_with_params(endpoint, &[(param, query)])
            .map(|url| url.to_string())
            .unwrap_or_else(|_| endpoint.to_string())
    }
}

impl std::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marketplace::AmazonIn => write!(f, "amazon_in"),
            Marketplace::Flipkart => write!(f, "flipkart"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceLink {
    pub marketplace: Marketplace,
    pub url: String,
}

pub fn links_for(query: &str) -> Vec<MarketplaceLink> {
    Marketplace::ALL
        .iter()
        .map(|m| MarketplaceLink {
            marketplace: *m,
            url: m.search_url(query),
        })
        .collect()
}
