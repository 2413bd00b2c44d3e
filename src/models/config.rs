use std::time::Duration;

/// Timing and threshold settings for [`SuggestionOrchestrator`](crate::SuggestionOrchestrator).
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorConfig {
    /// Debounce when the prefix is empty (trigger character just typed).
    pub prefetch_debounce: Duration,
    /// Debounce once a prefix is being typed.
    pub typing_debounce: Duration,
    pub fast_timeout: Duration,
    pub live_timeout: Duration,
    pub cache_ttl: Duration,
    /// When every fast suggestion reaches this confidence the live call is dropped.
    pub high_confidence_threshold: f64,
    /// Address verification only runs from this prefix length onward.
    pub min_verification_prefix_len: usize,
    pub max_displayed_suggestions: usize,
}

impl OrchestratorConfig {
    pub fn debounce_for(&self, prefix: &str) -> Duration {
        if prefix.is_empty() {
            self.prefetch_debounce
        } else {
            self.typing_debounce
        }
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        crate::DEFAULT_ORCHESTRATOR_CONFIG
    }
}
