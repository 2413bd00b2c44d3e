pub mod backfill_from_candidates;
pub mod build_address_map;
pub mod dedup_by_ticker;
pub mod enrich_with_address_map;
pub mod filter_suggestions;
pub mod merge_suggestions;
pub mod normalize_ticker;
pub mod parse_raw_suggestions;
pub mod post_process_suggestions;

pub use backfill_from_candidates::backfill_from_candidates;
pub use build_address_map::{
    build_address_map, chain_to_network, network_to_chain, AddressSearchItem,
};
pub use dedup_by_ticker::dedup_by_ticker;
pub use enrich_with_address_map::enrich_with_address_map;
pub use filter_suggestions::filter_suggestions;
pub use merge_suggestions::{is_high_confidence, merge_suggestions};
pub use normalize_ticker::normalize_ticker;
pub use parse_raw_suggestions::parse_raw_suggestions;
pub use post_process_suggestions::post_process_suggestions;
