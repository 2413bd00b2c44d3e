pub mod asset_type;
pub use asset_type::{AssetType, UserType};

pub mod cashtag_detector;
pub use cashtag_detector::{detect_cashtag, CashtagDetector, TriggerSignal};

pub mod cashtag_suggestion;
pub use cashtag_suggestion::CashtagSuggestion;

pub mod config;
pub use config::OrchestratorConfig;

pub mod error;
pub use error::Error;

pub mod index_ranker;
pub use index_ranker::{search_index, RankingContext, RankingTier, RANKING_TIERS};

pub mod index_token;
pub use index_token::IndexToken;

pub mod providers;
pub use providers::{
    AddressVerifier, IndexSource, NoopAddressVerifier, StaticIndexSource, SuggestionProvider,
};

pub mod result_cache;
pub use result_cache::{CacheEntry, ResultCache};

pub mod selection_history;
pub use selection_history::{
    HistoryStore, JsonFileHistoryStore, MemoryHistoryStore, SelectionHistory,
};

pub mod suggest_request;
pub use suggest_request::{CacheKey, SuggestRequest};

pub mod suggestion_orchestrator;
pub use suggestion_orchestrator::{SessionProfile, SuggestionOrchestrator, SuggestionState};

pub mod token_index;
pub use token_index::TokenIndex;
