#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_ORCHESTRATOR_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    detect_cashtag, search_index, AddressVerifier, AssetType, CacheKey, CashtagDetector,
    CashtagSuggestion, Error, HistoryStore, IndexSource, IndexToken, JsonFileHistoryStore,
    MemoryHistoryStore, NoopAddressVerifier, OrchestratorConfig, ResultCache, SelectionHistory,
    SessionProfile, StaticIndexSource, SuggestRequest, SuggestionOrchestrator, SuggestionProvider,
    SuggestionState, TokenIndex, TriggerSignal, UserType,
};
pub mod types;
pub use types::{
    AddressMap, AddressMatch, ChainCode, RawSuggestion, SelectionCount, SelectionHistoryMap,
    TickerSymbol, TokenAddress,
};
pub mod utils;

/// Ranks local index candidates for `prefix` using the embedded token index.
///
/// Convenience wrapper for one-off lookups; long-lived callers should hold on to a
/// [`TokenIndex`] and call [`search_index`] directly.
#[cfg(feature = "embed-bytes")]
pub fn search_embedded_index(
    prefix: &str,
    user_type: Option<UserType>,
    preferred_chain: Option<&str>,
    history: &SelectionHistory,
) -> Result<Vec<IndexToken>, Error> {
    let index = TokenIndex::embedded()?;

    Ok(search_index(
        index.tokens(),
        prefix,
        user_type,
        preferred_chain,
        history,
    ))
}
