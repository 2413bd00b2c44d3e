use crate::types::{AddressMap, RawSuggestion};
use crate::utils::{backfill_from_candidates, enrich_with_address_map, filter_suggestions};
use crate::{CashtagSuggestion, SuggestRequest};

/// Runs filter, backfill and enrich, in that order, on one provider response.
pub fn post_process_suggestions(
    raw_items: &[RawSuggestion],
    request: &SuggestRequest,
    address_map: &AddressMap,
) -> Vec<CashtagSuggestion> {
    let filtered = filter_suggestions(raw_items, &request.prefix);
    let backfilled = backfill_from_candidates(
        filtered,
        request.candidates.as_deref(),
        request.preferred_chain.as_deref(),
    );

    enrich_with_address_map(backfilled, address_map)
}
