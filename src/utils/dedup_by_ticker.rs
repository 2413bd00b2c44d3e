use std::collections::HashSet;

/// Deduplicates items by ticker symbol while maintaining the original order.
///
/// The first occurrence of each ticker wins, so callers sort by priority beforehand.
///
/// # Arguments
/// * `items` - Items to deduplicate.
/// * `ticker_of` - Extracts the ticker symbol of an item.
///
/// # Returns
/// A new vector with later duplicates removed.
pub fn dedup_by_ticker<T, F>(items: Vec<T>, ticker_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(ticker_of(item).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let items = vec![("USDC", "SOL"), ("BONK", "SOL"), ("USDC", "ETH")];
        let deduped = dedup_by_ticker(items, |item| item.0);

        assert_eq!(deduped, vec![("USDC", "SOL"), ("BONK", "SOL")]);
    }
}
