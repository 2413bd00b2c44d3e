use crate::constants::{
    BARE_ECHO_MAX_PREFIX_LEN, MAX_SUGGESTIONS, NEAR_ECHO_MAX_PREFIX_LEN, NEAR_ECHO_MIN_PREFIX_LEN,
};
use crate::types::RawSuggestion;
use crate::utils::{dedup_by_ticker, normalize_ticker};
use crate::{AssetType, CashtagSuggestion};
use serde_json::Value;

/// Validates, normalizes, deduplicates and trims raw upstream suggestions.
///
/// ### Rules (applied in order):
/// - Items without a non-empty string `ticker` are dropped.
/// - Tickers are normalized (leading `$` stripped, uppercased).
/// - For prefixes of length 2 to 4, tickers must start with the prefix.
/// - For prefixes of length 0 to 2, "bare echoes" (tickers no longer than the prefix, e.g. `B`
///   for `$B`) are dropped. From length 3 onward an exact match is accepted.
/// - Duplicates are removed, first occurrence wins (upstream order is best-first).
/// - At most 5 suggestions are kept.
///
/// Other fields are read leniently: a malformed field is treated as absent.
pub fn filter_suggestions(raw_items: &[RawSuggestion], prefix: &str) -> Vec<CashtagSuggestion> {
    let prefix = prefix.to_uppercase();
    let prefix_len = prefix.chars().count();

    let suggestions: Vec<CashtagSuggestion> = raw_items
        .iter()
        .filter_map(to_suggestion)
        .filter(|suggestion| {
            if (NEAR_ECHO_MIN_PREFIX_LEN..NEAR_ECHO_MAX_PREFIX_LEN).contains(&prefix_len)
                && !suggestion.ticker.starts_with(&prefix)
            {
                return false;
            }

            if prefix_len <= BARE_ECHO_MAX_PREFIX_LEN
                && suggestion.ticker.chars().count() <= prefix_len
            {
                return false;
            }

            true
        })
        .collect();

    let mut suggestions = dedup_by_ticker(suggestions, |suggestion| &suggestion.ticker);
    suggestions.truncate(MAX_SUGGESTIONS);

    suggestions
}

fn to_suggestion(item: &RawSuggestion) -> Option<CashtagSuggestion> {
    let ticker = normalize_ticker(item.get("ticker")?.as_str()?);
    if ticker.is_empty() {
        return None;
    }

    let exchange = optional_string(item, "exchange");
    let asset_type = match string_field(item, "type").map(|value| value.parse::<AssetType>()) {
        Some(Ok(asset_type)) => asset_type,
        // Models occasionally omit or garble the type; a listing venue implies a stock
        _ if exchange.is_some() => AssetType::Stock,
        _ => AssetType::Crypto,
    };

    Some(CashtagSuggestion {
        name: string_field(item, "name").unwrap_or_else(|| ticker.clone()),
        ticker,
        asset_type,
        chain: optional_string(item, "chain").map(|chain| chain.to_uppercase()),
        reason: string_field(item, "reason").unwrap_or_default(),
        address: optional_string(item, "address"),
        exchange,
        confidence: item
            .get("confidence")
            .and_then(Value::as_f64)
            .map(|confidence| confidence.clamp(0.0, 1.0))
            .unwrap_or(0.0),
        market_cap: item.get("marketCap").and_then(Value::as_f64),
    })
}

fn string_field(item: &RawSuggestion, key: &str) -> Option<String> {
    item.get(key)
        .and_then(Value::as_str)
        .map(|value| value.trim().to_string())
}

// Models spell "unknown" as null, "" or the literal string "null"
fn optional_string(item: &RawSuggestion, key: &str) -> Option<String> {
    string_field(item, key).filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("null"))
}
