use crate::constants::{DEFAULT_VERIFICATION_CHAIN, NETWORK_CHAIN_CODES};
use crate::types::{AddressMap, AddressMatch, ChainCode};
use crate::utils::normalize_ticker;
use serde::Deserialize;

/// One row of an address-verification search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSearchItem {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "networkId")]
    pub network: Option<String>,
}

/// Builds the per-ticker address map from search rows ordered by 24h volume, highest first.
///
/// Rows missing a symbol or address are skipped. The first row per (uppercased) symbol wins,
/// so each ticker maps to its highest-volume chain.
pub fn build_address_map(items: &[AddressSearchItem]) -> AddressMap {
    let mut address_map = AddressMap::new();

    for item in items {
        let (Some(symbol), Some(address)) = (&item.symbol, &item.address) else {
            continue;
        };

        let ticker = normalize_ticker(symbol);
        if ticker.is_empty() || address.is_empty() || address_map.contains_key(&ticker) {
            continue;
        }

        address_map.insert(
            ticker,
            AddressMatch {
                address: address.clone(),
                chain: network_to_chain(item.network.as_deref()),
            },
        );
    }

    address_map
}

/// Maps a verification network name to a chain code. Unknown networks are uppercased.
pub fn network_to_chain(network: Option<&str>) -> ChainCode {
    let network = network.unwrap_or_default().trim().to_lowercase();
    if network.is_empty() {
        return DEFAULT_VERIFICATION_CHAIN.to_string();
    }

    NETWORK_CHAIN_CODES
        .iter()
        .find(|(name, _)| *name == network)
        .map(|(_, chain)| chain.to_string())
        .unwrap_or_else(|| network.to_uppercase())
}

/// Maps a chain code back to the verification network name used to scope a search.
pub fn chain_to_network(chain: &str) -> Option<&'static str> {
    NETWORK_CHAIN_CODES
        .iter()
        .find(|(_, code)| code.eq_ignore_ascii_case(chain))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        symbol: Option<&str>,
        address: Option<&str>,
        network: Option<&str>,
    ) -> AddressSearchItem {
        AddressSearchItem {
            symbol: symbol.map(|s| s.to_string()),
            address: address.map(|s| s.to_string()),
            network: network.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_highest_volume_entry_wins() {
        let items = vec![
            item(Some("usdc"), Some("0xA0b8"), Some("ethereum")),
            item(Some("USDC"), Some("EPjF"), Some("solana")),
            item(Some("BONK"), Some("DezX"), Some("solana")),
        ];
        let map = build_address_map(&items);

        assert_eq!(map["USDC"].chain, "ETH");
        assert_eq!(map["USDC"].address, "0xA0b8");
        assert_eq!(map["BONK"].chain, "SOL");
    }

    #[test]
    fn test_skips_incomplete_rows() {
        let items = vec![
            item(None, Some("addr"), Some("solana")),
            item(Some("WIF"), None, Some("solana")),
            item(Some("WIF"), Some("EKpQ"), None),
        ];
        let map = build_address_map(&items);

        assert_eq!(map.len(), 1);
        assert_eq!(map["WIF"].chain, DEFAULT_VERIFICATION_CHAIN);
    }

    #[test]
    fn test_network_mapping() {
        assert_eq!(network_to_chain(Some("Base")), "BASE");
        assert_eq!(network_to_chain(Some("monad")), "MONAD");
        assert_eq!(chain_to_network("pol"), Some("polygon"));
        assert_eq!(chain_to_network("BTC"), None);
    }

    #[test]
    fn test_deserializes_network_id_alias() {
        let row: AddressSearchItem =
            serde_json::from_str(r#"{"symbol":"JUP","address":"JUPy","networkId":"solana"}"#)
                .unwrap();
        assert_eq!(row.network.as_deref(), Some("solana"));
    }
}
