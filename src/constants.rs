use std::collections::HashSet;
use std::sync::LazyLock;

/// Longest stock ticker in the index (GOOGL). Beyond this length no stock can match a prefix.
pub const MAX_STOCK_TICKER_LEN: usize = 5;

/// Maximum number of local index candidates returned by a search.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Maximum number of suggestions kept after filtering, and shown at once.
pub const MAX_SUGGESTIONS: usize = 5;

/// Preferred-chain and user-type bias only apply from this prefix length onward.
pub const BIAS_MIN_PREFIX_LEN: usize = 3;

/// Prefixes with a length in `[NEAR_ECHO_MIN_PREFIX_LEN, NEAR_ECHO_MAX_PREFIX_LEN)` require
/// upstream tickers to start with the prefix.
pub const NEAR_ECHO_MIN_PREFIX_LEN: usize = 2;
pub const NEAR_ECHO_MAX_PREFIX_LEN: usize = 5;

/// Up to this prefix length, an upstream ticker no longer than the prefix is a bare echo.
pub const BARE_ECHO_MAX_PREFIX_LEN: usize = 2;

/// Globally prominent tickers which always surface above obscure matches,
/// regardless of user type or prefix length.
pub const TIER1_TICKERS: &[&str] = &[
    // Market indexes & most-traded ETFs
    "SPX", "SPY", "QQQ", "NDX", "VIX", "DIA", "IWM",
    // Mega-cap tech stocks
    "AAPL", "MSFT", "NVDA", "TSLA", "GOOGL", "GOOG", "AMZN", "META",
    // Other widely discussed stocks
    "JPM", "BAC", "GS", "COIN", "MSTR", "GME", "PLTR", "AMD",
    // Major crypto
    "BTC", "ETH", "SOL", "BNB", "XRP", "DOGE", "USDT", "USDC", "TON", "AVAX", "ADA", "LINK",
    "PEPE", "BONK", "WIF",
];

pub static TIER1_TICKER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TIER1_TICKERS.iter().copied().collect());

/// L1 assets and the chain they are native to. The same ticker on any other chain is a
/// bridged wrapper and must not displace the native asset in the index.
pub const NATIVE_CHAINS: &[(&str, &str)] = &[
    ("SOL", "SOL"),
    ("ETH", "ETH"),
    ("BTC", "BTC"),
    ("BNB", "BSC"),
    ("AVAX", "AVAX"),
    ("TON", "TON"),
    ("APT", "APT"),
    ("SUI", "SUI"),
];

/// Address-verification network names and the chain codes they map to.
pub const NETWORK_CHAIN_CODES: &[(&str, &str)] = &[
    ("solana", "SOL"),
    ("ethereum", "ETH"),
    ("arbitrum", "ARB"),
    ("avalanche", "AVAX"),
    ("bsc", "BSC"),
    ("polygon", "POL"),
    ("base", "BASE"),
    ("sui", "SUI"),
    ("ton", "TON"),
    ("aptos", "APT"),
];

/// Chain assumed when the verification search reports no network.
pub const DEFAULT_VERIFICATION_CHAIN: &str = "SOL";
