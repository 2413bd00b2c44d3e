use crate::types::{ChainCode, TickerSymbol, TokenAddress};
use crate::AssetType;
use serde::{Deserialize, Serialize};

/// A candidate identifier known to the local index.
///
/// `ticker` is unique only within one `(asset_type, chain)` combination: `USDC` on `ETH` and
/// `USDC` on `SOL` are distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexToken {
    pub ticker: TickerSymbol,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Meaningful only for crypto entries.
    #[serde(default)]
    pub chain: Option<ChainCode>,
    #[serde(default)]
    pub address: Option<TokenAddress>,
    /// Listing venue. Meaningful only for stock entries.
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl IndexToken {
    pub fn stock(ticker: &str, name: &str, exchange: Option<&str>) -> Self {
        IndexToken {
            ticker: ticker.to_uppercase(),
            name: name.to_string(),
            asset_type: AssetType::Stock,
            chain: None,
            address: None,
            exchange: exchange.map(|exchange| exchange.to_string()),
            market_cap: None,
        }
    }

    pub fn crypto(ticker: &str, name: &str, chain: Option<&str>, address: Option<&str>) -> Self {
        IndexToken {
            ticker: ticker.to_uppercase(),
            name: name.to_string(),
            asset_type: AssetType::Crypto,
            chain: chain.map(|chain| chain.to_uppercase()),
            address: address.map(|address| address.to_string()),
            exchange: None,
            market_cap: None,
        }
    }

    pub fn is_stock(&self) -> bool {
        self.asset_type == AssetType::Stock
    }

    /// Identity used when merging index sources; multi-chain variants stay distinct.
    pub fn identity(&self) -> (&str, AssetType, Option<&str>) {
        (&self.ticker, self.asset_type, self.chain.as_deref())
    }
}
