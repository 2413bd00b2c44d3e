#[path = "../shared/lib.rs"]
mod shared;
pub use shared::constants;

pub mod models;
pub use models::{
    ScriptedAddressVerifier, ScriptedOutcome, ScriptedResponse, ScriptedSuggestionProvider,
};

use cashtag_sniffer::{
    search_index, AssetType, CashtagSuggestion, IndexToken, SelectionHistory, TokenIndex,
    UserType,
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Utility to load the token index from a CSV file for testing and benchmarking.
pub fn load_index_from_file<P: AsRef<Path>>(file_path: P) -> TokenIndex {
    TokenIndex::from_csv_file(&file_path).unwrap_or_else(|err| {
        panic!(
            "Failed to load index from {}: {}",
            file_path.as_ref().display(),
            err
        )
    })
}

pub fn load_test_index() -> TokenIndex {
    load_index_from_file(&*constants::TEST_INDEX_CSV_FILE_PATH)
}

pub fn stock(ticker: &str) -> IndexToken {
    IndexToken::stock(ticker, &format!("{} Inc.", ticker), Some("NASDAQ"))
}

pub fn crypto(ticker: &str, chain: &str) -> IndexToken {
    IndexToken::crypto(ticker, ticker, Some(chain), None)
}

/// A raw provider record, as the model would return it.
pub fn raw_suggestion(ticker: &str, asset_type: &str, chain: Option<&str>, confidence: f64) -> Value {
    json!({
        "ticker": ticker,
        "name": ticker,
        "type": asset_type,
        "chain": chain,
        "reason": format!("{} is relevant", ticker),
        "confidence": confidence,
    })
}

pub fn suggestion(ticker: &str, confidence: f64) -> CashtagSuggestion {
    CashtagSuggestion {
        ticker: ticker.to_string(),
        name: ticker.to_string(),
        asset_type: AssetType::Crypto,
        chain: None,
        reason: format!("{} is relevant", ticker),
        address: None,
        exchange: None,
        confidence,
        market_cap: None,
    }
}

pub fn tickers(suggestions: &[CashtagSuggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.ticker.as_str()).collect()
}

// Helper function to collect the values of all lines starting with `directive`
pub fn get_directive_values(content: &str, directive: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(directive)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

/// A ranking scenario read from a test file.
///
/// ```text
/// COMMENT: Two-letter prefixes ignore the user's asset type
/// PREFIX: AA
/// USER_TYPE: crypto
/// PREFERRED_CHAIN: SOL
/// SELECTED: AAL
/// EXPECTED_FIRST: AAL
/// EXPECTED: AAL
/// EXPECTED: AAPL
/// ```
///
/// `EXPECTED:` lines list the full result in rank order. `SELECTED:` may repeat.
pub struct RankingScenario {
    pub prefix: String,
    pub user_type: Option<UserType>,
    pub preferred_chain: Option<String>,
    pub selected: Vec<String>,
    pub expected_first: Option<String>,
    pub expected: Vec<String>,
}

impl RankingScenario {
    pub fn from_file(file_path: &Path) -> Self {
        let content = fs::read_to_string(file_path).expect("Failed to read test file");

        let first = |directive: &str| get_directive_values(&content, directive).into_iter().next();

        RankingScenario {
            prefix: first("PREFIX:").unwrap_or_default(),
            user_type: first("USER_TYPE:")
                .map(|value| value.parse().expect("Invalid USER_TYPE in test file")),
            preferred_chain: first("PREFERRED_CHAIN:"),
            selected: get_directive_values(&content, "SELECTED:"),
            expected_first: first("EXPECTED_FIRST:"),
            expected: get_directive_values(&content, "EXPECTED:"),
        }
    }
}

// Helper function to run the ranking scenario in one test file against `index`
pub fn run_test_for_file(test_file_path: &Path, index: &TokenIndex) {
    let scenario = RankingScenario::from_file(test_file_path);

    eprintln!("Testing file: {}", test_file_path.display());

    let mut history = SelectionHistory::in_memory();
    for ticker in &scenario.selected {
        history.record(ticker);
    }

    let results: Vec<String> = search_index(
        index.tokens(),
        &scenario.prefix,
        scenario.user_type,
        scenario.preferred_chain.as_deref(),
        &history,
    )
    .into_iter()
    .map(|token| token.ticker)
    .collect();

    if let Some(expected_first) = &scenario.expected_first {
        assert_eq!(
            results.first(),
            Some(expected_first),
            "{} - Expected {} first, but got: {:?}",
            test_file_path.display(),
            expected_first,
            results
        );
    }

    if !scenario.expected.is_empty() {
        assert_eq!(
            results,
            scenario.expected,
            "{} - Expected: {:?}, but got: {:?}",
            test_file_path.display(),
            scenario.expected,
            results
        );
    }
}
