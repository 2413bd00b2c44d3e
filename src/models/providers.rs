use crate::types::{AddressMap, RawSuggestion};
use crate::{Error, IndexToken, SuggestRequest};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Upstream model that ranks or discovers cashtags for a request.
///
/// The same provider serves the fast and the live call; `request.live` selects the quality.
/// Implementations should stop work once `cancel` fires and may return [`Error::Cancelled`].
/// The returned records are untrusted and always go through filtering.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(
        &self,
        request: &SuggestRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<RawSuggestion>, Error>;
}

/// Third-party search returning the highest-volume verified address per ticker.
#[async_trait]
pub trait AddressVerifier: Send + Sync {
    async fn verify(
        &self,
        keyword: &str,
        chain: Option<&str>,
        cancel: CancellationToken,
    ) -> Result<AddressMap, Error>;
}

/// A refreshable source of index entries (e.g. top tokens by volume, new listings).
#[async_trait]
pub trait IndexSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_tokens(&self) -> Result<Vec<IndexToken>, Error>;
}

/// Verifier used when no verification backend is configured.
pub struct NoopAddressVerifier;

#[async_trait]
impl AddressVerifier for NoopAddressVerifier {
    async fn verify(
        &self,
        _keyword: &str,
        _chain: Option<&str>,
        _cancel: CancellationToken,
    ) -> Result<AddressMap, Error> {
        Ok(AddressMap::new())
    }
}

/// A fixed list of entries, e.g. the static stock universe.
pub struct StaticIndexSource {
    name: String,
    tokens: Vec<IndexToken>,
}

impl StaticIndexSource {
    pub fn new(name: &str, tokens: Vec<IndexToken>) -> Self {
        StaticIndexSource {
            name: name.to_string(),
            tokens,
        }
    }
}

#[async_trait]
impl IndexSource for StaticIndexSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_tokens(&self) -> Result<Vec<IndexToken>, Error> {
        Ok(self.tokens.clone())
    }
}
