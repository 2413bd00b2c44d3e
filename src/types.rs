use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker or token symbol) as an owned `String`.
///
/// Canonical form is uppercase without a leading `$`. Ticker symbols are not globally
/// unique: the same symbol can name a stock and several chain-specific tokens.
pub type TickerSymbol = String;

/// A chain code such as `SOL`, `ETH` or `BASE`.
pub type ChainCode = String;

/// A contract or mint address of a crypto token.
pub type TokenAddress = String;

/// Number of times a ticker symbol was picked from the suggestion list.
pub type SelectionCount = u32;

/// Represents a map of ticker symbols to their selection counts.
pub type SelectionHistoryMap = HashMap<TickerSymbol, SelectionCount>;

/// A verified `{address, chain}` pair returned by the address-verification search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMatch {
    pub address: TokenAddress,
    pub chain: ChainCode,
}

/// Maps a ticker symbol to its single best verified address (highest volume wins).
pub type AddressMap = HashMap<TickerSymbol, AddressMatch>;

/// An untrusted suggestion record as returned by an upstream provider.
pub type RawSuggestion = serde_json::Value;
