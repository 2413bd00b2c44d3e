use crate::types::AddressMap;
use crate::CashtagSuggestion;

/// Overlays verified addresses from the address-verification search onto suggestions.
///
/// The verification search keeps the highest global-volume entry per ticker, which for
/// multi-chain tokens is often a different chain than the one already resolved. When a
/// suggestion already has a chain and the map's chain differs, the suggestion is left as is.
/// Otherwise the map's address replaces any existing one and the chain is kept, or taken from
/// the map when absent.
pub fn enrich_with_address_map(
    suggestions: Vec<CashtagSuggestion>,
    address_map: &AddressMap,
) -> Vec<CashtagSuggestion> {
    if address_map.is_empty() {
        return suggestions;
    }

    suggestions
        .into_iter()
        .map(|suggestion| {
            let Some(verified) = address_map.get(&suggestion.ticker) else {
                return suggestion;
            };

            match &suggestion.chain {
                Some(chain) if chain != &verified.chain => suggestion,
                _ => CashtagSuggestion {
                    address: Some(verified.address.clone()),
                    chain: suggestion.chain.or_else(|| Some(verified.chain.clone())),
                    ..suggestion
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddressMatch;
    use crate::AssetType;

    fn suggestion(ticker: &str, chain: Option<&str>, address: Option<&str>) -> CashtagSuggestion {
        CashtagSuggestion {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            asset_type: AssetType::Crypto,
            chain: chain.map(|c| c.to_string()),
            reason: "test".to_string(),
            address: address.map(|a| a.to_string()),
            exchange: None,
            confidence: 0.9,
            market_cap: None,
        }
    }

    fn address_map(entries: &[(&str, &str, &str)]) -> AddressMap {
        entries
            .iter()
            .map(|(ticker, address, chain)| {
                (
                    ticker.to_string(),
                    AddressMatch {
                        address: address.to_string(),
                        chain: chain.to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_fills_address_and_chain() {
        let map = address_map(&[("BONK", "DezXAZ8z", "SOL")]);
        let result = enrich_with_address_map(vec![suggestion("BONK", None, None)], &map);

        assert_eq!(result[0].address.as_deref(), Some("DezXAZ8z"));
        assert_eq!(result[0].chain.as_deref(), Some("SOL"));
    }

    #[test]
    fn test_conflicting_chain_is_a_no_op() {
        let map = address_map(&[("USDC", "0xA0b86991c", "ETH")]);
        let s = suggestion("USDC", Some("SOL"), None);
        let result = enrich_with_address_map(vec![s.clone()], &map);

        assert_eq!(result, vec![s]);
    }

    #[test]
    fn test_matching_chain_overwrites_address() {
        let map = address_map(&[("BONK", "DezXAZ8z", "SOL")]);
        let result =
            enrich_with_address_map(vec![suggestion("BONK", Some("SOL"), Some("old"))], &map);

        assert_eq!(result[0].address.as_deref(), Some("DezXAZ8z"));
        assert_eq!(result[0].chain.as_deref(), Some("SOL"));
    }

    #[test]
    fn test_unmatched_passes_through() {
        let map = address_map(&[("BONK", "DezXAZ8z", "SOL")]);
        let s = suggestion("UNKNOWN", Some("SOL"), None);

        assert_eq!(enrich_with_address_map(vec![s.clone()], &map), vec![s]);
    }
}
