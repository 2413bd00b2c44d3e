use crate::CashtagSuggestion;
use std::collections::HashSet;

/// Merges live-search results into the currently displayed list.
///
/// Displayed suggestions keep their order and members. Live results only contribute tickers
/// not already displayed, appended in their own order, and the result is capped at `cap`.
pub fn merge_suggestions(
    displayed: &[CashtagSuggestion],
    live: &[CashtagSuggestion],
    cap: usize,
) -> Vec<CashtagSuggestion> {
    let displayed_tickers: HashSet<&str> = displayed.iter().map(|s| s.ticker.as_str()).collect();

    displayed
        .iter()
        .chain(
            live.iter()
                .filter(|s| !displayed_tickers.contains(s.ticker.as_str())),
        )
        .take(cap)
        .cloned()
        .collect()
}

/// True when there is at least one suggestion and every one meets `threshold`.
pub fn is_high_confidence(suggestions: &[CashtagSuggestion], threshold: f64) -> bool {
    !suggestions.is_empty() && suggestions.iter().all(|s| s.confidence >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssetType;

    fn suggestion(ticker: &str, confidence: f64) -> CashtagSuggestion {
        CashtagSuggestion {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            asset_type: AssetType::Crypto,
            chain: None,
            reason: "r".to_string(),
            address: None,
            exchange: None,
            confidence,
            market_cap: None,
        }
    }

    fn tickers(suggestions: &[CashtagSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.ticker.as_str()).collect()
    }

    #[test]
    fn test_merge_keeps_displayed_order_and_appends_new() {
        let displayed = vec![suggestion("BONK", 0.9), suggestion("BOME", 0.7)];
        let live = vec![
            suggestion("BOME", 0.95),
            suggestion("BODEN", 0.6),
            suggestion("BONK", 0.99),
        ];
        let merged = merge_suggestions(&displayed, &live, 5);

        assert_eq!(tickers(&merged), vec!["BONK", "BOME", "BODEN"]);
        assert_eq!(merged[1].confidence, 0.7);
    }

    #[test]
    fn test_merge_caps_length() {
        let displayed: Vec<_> = ["A1", "A2", "A3", "A4"]
            .iter()
            .map(|t| suggestion(t, 0.9))
            .collect();
        let live = vec![suggestion("A5", 0.9), suggestion("A6", 0.9)];

        assert_eq!(
            tickers(&merge_suggestions(&displayed, &live, 5)),
            vec!["A1", "A2", "A3", "A4", "A5"]
        );
    }

    #[test]
    fn test_high_confidence() {
        assert!(!is_high_confidence(&[], 0.8));
        assert!(is_high_confidence(&[suggestion("BTC", 0.8)], 0.8));
        assert!(!is_high_confidence(
            &[suggestion("BTC", 0.95), suggestion("BTCX", 0.5)],
            0.8
        ));
    }
}
