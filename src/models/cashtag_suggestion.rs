use crate::types::{ChainCode, TickerSymbol, TokenAddress};
use crate::{AssetType, IndexToken};
use serde::{Deserialize, Serialize};

/// An output-ready, ranked cashtag recommendation.
///
/// Created from an upstream provider record (or, as a zero-confidence placeholder, from a
/// local index entry). Backfill and enrichment return new records instead of mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashtagSuggestion {
    pub ticker: TickerSymbol,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(default)]
    pub chain: Option<ChainCode>,
    /// Human-readable justification. Empty for placeholders.
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub address: Option<TokenAddress>,
    #[serde(default)]
    pub exchange: Option<String>,
    /// Reliability estimate in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl CashtagSuggestion {
    /// A placeholder shown instantly while the upstream providers load.
    pub fn placeholder(token: &IndexToken) -> Self {
        CashtagSuggestion {
            ticker: token.ticker.clone(),
            name: token.name.clone(),
            asset_type: token.asset_type,
            chain: token.chain.clone(),
            reason: String::new(),
            address: token.address.clone(),
            exchange: token.exchange.clone(),
            confidence: 0.0,
            market_cap: token.market_cap,
        }
    }
}
