use crate::constants::MAX_SUGGESTIONS;
use crate::models::OrchestratorConfig;
use std::time::Duration;

pub const DEFAULT_ORCHESTRATOR_CONFIG: OrchestratorConfig = OrchestratorConfig {
    prefetch_debounce: Duration::from_millis(50),
    typing_debounce: Duration::from_millis(200),
    fast_timeout: Duration::from_secs(8),
    live_timeout: Duration::from_secs(22),
    cache_ttl: Duration::from_secs(120),
    high_confidence_threshold: 0.8,
    min_verification_prefix_len: 2,
    max_displayed_suggestions: MAX_SUGGESTIONS,
};
