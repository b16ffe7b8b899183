use url::Url;

/// Address of the search provider used when none is configured.
pub const DEFAULT_SEARCH_PROVIDER: &str = "https://duckduckgo.com/";

/// Builds search addresses for pending queries.
///
/// The template has a single substitution point: the query string is
/// replaced by `<param>=<query>`, form-urlencoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProvider {
    base: Url,
    param: String,
}

impl SearchProvider {
    pub fn new(base: Url, param: impl Into<String>) -> Self {
        Self {
            base,
            param: param.into(),
        }
    }

    /// Creates a provider from a base address string, searching with `q`.
    pub fn from_base(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base)?, "q"))
    }

    /// The provider's landing address, used as the default for new pages.
    pub fn home(&self) -> &Url {
        &self.base
    }

    /// Search address for `query`. Surrounding whitespace is not part of the query.
    pub fn address_for(&self, query: &str) -> Url {
        let mut address = self.base.clone();
        address
            .query_pairs_mut()
            .clear()
            .append_pair(&self.param, query.trim());
        address
    }
}

impl Default for SearchProvider {
    fn default() -> Self {
        let base =
            Url::parse(DEFAULT_SEARCH_PROVIDER).expect("default search provider is a valid URL");
        Self::new(base, "q")
    }
}
