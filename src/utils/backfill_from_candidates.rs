use crate::{AssetType, CashtagSuggestion, IndexToken};
use std::collections::HashMap;

/// Fills chain, address and market cap on upstream suggestions from local index candidates.
///
/// Candidates arrive best-match-first from the ranker, so the first candidate per ticker is
/// the one used. For a matched suggestion:
/// - `chain` resolves to the candidate's chain, else `preferred_chain` (crypto suggestions
///   only), else the suggestion's own chain.
/// - If that changes the chain the model returned, the model's address belongs to another
///   chain's contract and is replaced with the candidate's address. Otherwise the address is
///   only filled when the model left it empty.
/// - `market_cap` is filled when absent.
///
/// Suggestions without a matching candidate, and all suggestions when no candidates are
/// supplied, pass through unchanged.
pub fn backfill_from_candidates(
    suggestions: Vec<CashtagSuggestion>,
    candidates: Option<&[IndexToken]>,
    preferred_chain: Option<&str>,
) -> Vec<CashtagSuggestion> {
    let candidates = match candidates {
        Some(candidates) if !candidates.is_empty() => candidates,
        _ => return suggestions,
    };

    let mut by_ticker: HashMap<&str, &IndexToken> = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        by_ticker.entry(candidate.ticker.as_str()).or_insert(candidate);
    }

    suggestions
        .into_iter()
        .map(|suggestion| match by_ticker.get(suggestion.ticker.as_str()) {
            Some(candidate) => backfill(suggestion, candidate, preferred_chain),
            None => suggestion,
        })
        .collect()
}

fn backfill(
    suggestion: CashtagSuggestion,
    candidate: &IndexToken,
    preferred_chain: Option<&str>,
) -> CashtagSuggestion {
    let preferred_chain = preferred_chain
        .filter(|_| suggestion.asset_type == AssetType::Crypto)
        .map(|chain| chain.to_string());

    let chain = candidate
        .chain
        .clone()
        .or(preferred_chain)
        .or_else(|| suggestion.chain.clone());

    let address = if chain != suggestion.chain {
        candidate.address.clone()
    } else {
        suggestion.address.or_else(|| candidate.address.clone())
    };

    CashtagSuggestion {
        chain,
        address,
        market_cap: suggestion.market_cap.or(candidate.market_cap),
        ..suggestion
    }
}
