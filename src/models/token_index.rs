use crate::constants::NATIVE_CHAINS;
use crate::types::ChainCode;
use crate::utils::normalize_ticker;
use crate::{AssetType, Error, IndexToken};
use csv::ReaderBuilder;
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

#[cfg(feature = "embed-bytes")]
const COMPRESSED_TOKEN_INDEX_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/token_index.csv.gz"));

#[derive(Debug, Deserialize)]
struct IndexCsvRow {
    ticker: String,
    name: String,
    #[serde(rename = "type")]
    asset_type: String,
    chain: Option<String>,
    address: Option<String>,
    exchange: Option<String>,
    market_cap: Option<f64>,
}

/// A snapshot of the known stock/token universe.
///
/// Entries are normalized on construction (canonical tickers, uppercase chain codes).
/// The same ticker may appear several times with different chains.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    tokens: Vec<IndexToken>,
}

impl TokenIndex {
    pub fn new(tokens: Vec<IndexToken>) -> Self {
        let tokens = tokens.into_iter().filter_map(normalize_token).collect();

        TokenIndex { tokens }
    }

    /// Decompresses and parses the static index embedded at build time.
    #[cfg(feature = "embed-bytes")]
    pub fn embedded() -> Result<Self, Error> {
        let decoder = flate2::read::GzDecoder::new(COMPRESSED_TOKEN_INDEX_BYTES);
        let token_index = Self::from_csv_reader(decoder)?;

        info!("Loaded embedded token index with {} entries", token_index.len());

        Ok(token_index)
    }

    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        Self::from_csv_reader(Cursor::new(csv))
    }

    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Parses `ticker,name,type,chain,address,exchange,market_cap` records. Empty cells are `None`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut tokens = Vec::new();

        for record in reader.deserialize::<IndexCsvRow>() {
            let row = record?;

            let asset_type: AssetType = row.asset_type.parse().map_err(|err| {
                Error::ParserError(format!("Invalid row for '{}': {}", row.ticker, err))
            })?;

            tokens.push(IndexToken {
                ticker: row.ticker,
                name: row.name,
                asset_type,
                chain: row.chain,
                address: row.address,
                exchange: row.exchange,
                market_cap: row.market_cap,
            });
        }

        Ok(Self::new(tokens))
    }

    /// Combines priority-ordered sources (highest priority first) into one universe.
    ///
    /// The first entry per `(ticker, type, chain)` wins, so multi-chain variants survive side by
    /// side. Crypto entries for a native L1 asset listed on a foreign chain (e.g. `SOL` on
    /// `BASE`) are bridged wrappers and are dropped.
    pub fn merge(sources: &[&[IndexToken]]) -> Self {
        let mut seen: HashSet<(String, AssetType, Option<ChainCode>)> = HashSet::new();
        let mut tokens = Vec::new();

        for token in sources.iter().flat_map(|source| source.iter()) {
            let Some(token) = normalize_token(token.clone()) else {
                continue;
            };

            if is_bridged_native(&token) {
                debug!(
                    "Skipping bridged {} on {:?}",
                    token.ticker,
                    token.chain.as_deref()
                );
                continue;
            }

            let (ticker, asset_type, chain) = token.identity();
            if seen.insert((ticker.to_string(), asset_type, chain.map(str::to_string))) {
                tokens.push(token);
            }
        }

        TokenIndex { tokens }
    }

    pub fn tokens(&self) -> &[IndexToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn normalize_token(token: IndexToken) -> Option<IndexToken> {
    let ticker = normalize_ticker(&token.ticker);
    if ticker.is_empty() {
        return None;
    }

    let chain = token
        .chain
        .map(|chain| chain.trim().to_uppercase())
        .filter(|chain| !chain.is_empty());

    Some(IndexToken {
        ticker,
        chain,
        ..token
    })
}

fn is_bridged_native(token: &IndexToken) -> bool {
    if token.asset_type != AssetType::Crypto {
        return false;
    }

    let Some(chain) = token.chain.as_deref() else {
        return false;
    };

    NATIVE_CHAINS
        .iter()
        .any(|(ticker, native_chain)| *ticker == token.ticker && *native_chain != chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
ticker,name,type,chain,address,exchange,market_cap
$usdc,USD Coin,crypto,sol,EPjF,,
USDC,USD Coin,crypto,ETH,0xA0b8,,
AAPL,Apple Inc.,stock,,,NASDAQ,3400000000000
";

    #[test]
    fn test_from_csv_str_normalizes() {
        let index = TokenIndex::from_csv_str(CSV).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.tokens()[0].ticker, "USDC");
        assert_eq!(index.tokens()[0].chain.as_deref(), Some("SOL"));
        assert_eq!(index.tokens()[2].exchange.as_deref(), Some("NASDAQ"));
        assert_eq!(index.tokens()[2].chain, None);
        assert_eq!(index.tokens()[2].market_cap, Some(3.4e12));
    }

    #[test]
    fn test_invalid_type_is_a_parser_error() {
        let csv = "ticker,name,type,chain,address,exchange,market_cap\nXYZ,Xyz,bond,,,,\n";
        assert!(matches!(
            TokenIndex::from_csv_str(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_merge_keeps_chain_variants_and_priority() {
        let warm = vec![
            IndexToken::crypto("USDC", "USD Coin (Solana)", Some("SOL"), Some("EPjF")),
            IndexToken::crypto("BONK", "Bonk", Some("SOL"), Some("DezX")),
        ];
        let hot = vec![
            IndexToken::crypto("BONK", "Bonk imposter", Some("SOL"), Some("scam")),
            IndexToken::crypto("USDC", "USD Coin", Some("ETH"), Some("0xA0b8")),
        ];
        let index = TokenIndex::merge(&[&warm, &hot]);

        assert_eq!(index.len(), 3);
        let bonk = index.tokens().iter().find(|t| t.ticker == "BONK").unwrap();
        assert_eq!(bonk.address.as_deref(), Some("DezX"));
    }

    #[test]
    fn test_merge_drops_bridged_natives() {
        let listings = vec![
            IndexToken::crypto("SOL", "Wrapped SOL on Base", Some("BASE"), Some("0xsol")),
            IndexToken::crypto("SOL", "Solana", Some("SOL"), None),
            IndexToken::crypto("ETH", "Ether", None, None),
        ];
        let index = TokenIndex::merge(&[&listings]);

        assert_eq!(index.len(), 2);
        assert!(index
            .tokens()
            .iter()
            .all(|t| t.chain.as_deref() != Some("BASE")));
    }

    #[cfg(feature = "embed-bytes")]
    #[test]
    fn test_embedded_index_loads() {
        let index = TokenIndex::embedded().unwrap();

        assert!(!index.is_empty());
        assert!(index.tokens().iter().any(|t| t.ticker == "AAPL"));
        assert!(index
            .tokens()
            .iter()
            .filter(|t| t.ticker == "USDC")
            .count() > 1);
    }
}
