use crate::models::suggest_request::CacheKey;
use crate::types::{AddressMap, ChainCode, RawSuggestion};
use crate::utils::{
    is_high_confidence, merge_suggestions, normalize_ticker, post_process_suggestions,
};
use crate::{
    search_index, AddressVerifier, CashtagSuggestion, Error, IndexSource, OrchestratorConfig,
    ResultCache, SelectionHistory, SuggestRequest, SuggestionProvider, TokenIndex, TriggerSignal,
    UserType, DEFAULT_ORCHESTRATOR_CONFIG,
};
use futures::future::{join_all, BoxFuture, FutureExt, Shared};
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// What the host should display for the active cashtag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionState {
    pub suggestions: Vec<CashtagSuggestion>,
    /// The fast call is outstanding.
    pub loading: bool,
    /// The live call is outstanding.
    pub live_loading: bool,
    /// `suggestions` still holds local index placeholders; no provider result has replaced them.
    pub placeholders: bool,
    pub error: Option<String>,
}

/// Classification of the composing user, used for ranking and cache keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionProfile {
    pub user_type: Option<UserType>,
    pub preferred_chain: Option<ChainCode>,
}

type VerificationFuture = Shared<BoxFuture<'static, AddressMap>>;

/// State shared with in-flight request tasks.
struct Inner {
    config: OrchestratorConfig,
    provider: Arc<dyn SuggestionProvider>,
    verifier: Arc<dyn AddressVerifier>,
    cache: Mutex<ResultCache>,
    state_tx: watch::Sender<SuggestionState>,
}

impl Inner {
    /// The single update path for displayed state. Updates from a cancelled operation are
    /// dropped; the check runs under the state lock, so a superseding request always wins.
    fn apply<F>(&self, cancel: &CancellationToken, update: F) -> bool
    where
        F: FnOnce(&mut SuggestionState) -> bool,
    {
        self.state_tx.send_if_modified(|state| {
            if cancel.is_cancelled() {
                return false;
            }
            update(state)
        })
    }

    fn store_cached(&self, key: CacheKey, suggestions: Vec<CashtagSuggestion>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.store(key, suggestions, Instant::now());
        }
    }
}

struct InFlightRequest {
    request: SuggestRequest,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Drives cashtag suggestions for one composition session.
///
/// Each qualifying trigger update supersedes the previous request: local index candidates are
/// shown at once as placeholders, then (after a debounce) a fast and a live provider call run
/// concurrently with an address-verification search. The fast result replaces the
/// placeholders; the live result is merged in afterwards without reordering what is shown.
///
/// Must be driven from within a Tokio runtime.
pub struct SuggestionOrchestrator {
    inner: Arc<Inner>,
    index: Arc<TokenIndex>,
    history: SelectionHistory,
    profile: SessionProfile,
    current: Option<InFlightRequest>,
}

impl SuggestionOrchestrator {
    pub fn new(
        index: Arc<TokenIndex>,
        history: SelectionHistory,
        provider: Arc<dyn SuggestionProvider>,
        verifier: Arc<dyn AddressVerifier>,
    ) -> Self {
        Self::with_config(
            index,
            history,
            provider,
            verifier,
            DEFAULT_ORCHESTRATOR_CONFIG,
        )
    }

    pub fn with_config(
        index: Arc<TokenIndex>,
        history: SelectionHistory,
        provider: Arc<dyn SuggestionProvider>,
        verifier: Arc<dyn AddressVerifier>,
        config: OrchestratorConfig,
    ) -> Self {
        let (state_tx, _) = watch::channel(SuggestionState::default());

        SuggestionOrchestrator {
            inner: Arc::new(Inner {
                config,
                provider,
                verifier,
                cache: Mutex::new(ResultCache::new(config.cache_ttl)),
                state_tx,
            }),
            index,
            history,
            profile: SessionProfile::default(),
            current: None,
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.inner.config
    }

    pub fn set_profile(&mut self, user_type: Option<UserType>, preferred_chain: Option<&str>) {
        self.profile = SessionProfile {
            user_type,
            preferred_chain: preferred_chain.map(|chain| chain.to_uppercase()),
        };
    }

    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    pub fn index(&self) -> &Arc<TokenIndex> {
        &self.index
    }

    pub fn set_index(&mut self, index: Arc<TokenIndex>) {
        self.index = index;
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// The single entry point for recording a picked suggestion. The ticker is stored in its
    /// canonical form, so `"$bonk"` and `"BONK"` count towards the same entry.
    pub fn record_selection(&mut self, ticker: &str) {
        let ticker = normalize_ticker(ticker);
        if ticker.is_empty() {
            return;
        }

        let count = self.history.record(&ticker);
        debug!("Recorded selection of {} ({} total)", ticker, count);
    }

    /// Current displayed state.
    pub fn state(&self) -> SuggestionState {
        self.inner.state_tx.borrow().clone()
    }

    /// Receives every displayed-state change.
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.inner.state_tx.subscribe()
    }

    pub fn cache_lookup(&self, key: &CacheKey) -> Option<Vec<CashtagSuggestion>> {
        let mut cache = self.inner.cache.lock().ok()?;
        cache.lookup(key, Instant::now())
    }

    /// Seeds the result cache, e.g. from a pre-warm on profile load. Empty lists are ignored.
    pub fn cache_store(&self, key: CacheKey, suggestions: Vec<CashtagSuggestion>) {
        self.inner.store_cached(key, suggestions);
    }

    /// Reacts to a trigger-detection update for the text being composed.
    pub fn handle_trigger(&mut self, signal: &TriggerSignal, text: &str) {
        if !signal.active {
            self.cancel_current();
            self.inner.state_tx.send_replace(SuggestionState::default());
            return;
        }

        let request = SuggestRequest {
            text: text.to_string(),
            prefix: signal.prefix.clone(),
            user_type: self.profile.user_type,
            candidates: None,
            preferred_chain: self.profile.preferred_chain.clone(),
            live: false,
        };

        if let Some(current) = &self.current {
            if current.request == request && !current.cancel.is_cancelled() {
                return;
            }
        }

        self.cancel_current();

        if let Some(cached) = self.cache_lookup(&request.cache_key()) {
            debug!("Cache hit for prefix '{}'", request.prefix);
            self.inner.state_tx.send_replace(SuggestionState {
                suggestions: cached,
                ..SuggestionState::default()
            });
            return;
        }

        let candidates = search_index(
            self.index.tokens(),
            &request.prefix,
            request.user_type,
            request.preferred_chain.as_deref(),
            &self.history,
        );

        let placeholders: Vec<CashtagSuggestion> = candidates
            .iter()
            .take(self.inner.config.max_displayed_suggestions)
            .map(CashtagSuggestion::placeholder)
            .collect();

        debug!(
            "Showing {} placeholders for prefix '{}'",
            placeholders.len(),
            request.prefix
        );

        self.inner.state_tx.send_replace(SuggestionState {
            placeholders: !placeholders.is_empty(),
            suggestions: placeholders,
            loading: true,
            live_loading: true,
            error: None,
        });

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_request(
            self.inner.clone(),
            request.clone().with_candidates(candidates),
            cancel.clone(),
        ));

        self.current = Some(InFlightRequest {
            request,
            cancel,
            task: Some(task),
        });
    }

    /// Waits for the current request's background work to finish.
    pub async fn settle(&mut self) {
        let Some(task) = self.current.as_mut().and_then(|current| current.task.take()) else {
            return;
        };

        if let Err(err) = task.await {
            warn!("Suggestion task ended abnormally: {}", err);
        }
    }

    /// Cancels any in-flight request without touching displayed state.
    pub fn cancel_current(&mut self) {
        if let Some(current) = self.current.take() {
            current.cancel.cancel();
        }
    }

    /// Rebuilds the index from priority-ordered sources (highest priority first).
    ///
    /// Failed sources are skipped. The current index is kept when every source fails.
    pub async fn refresh_index(&mut self, sources: &[&dyn IndexSource]) -> Result<usize, Error> {
        let results = join_all(sources.iter().map(|source| source.fetch_tokens())).await;

        let mut fetched = Vec::with_capacity(results.len());
        for (source, result) in sources.iter().zip(results) {
            match result {
                Ok(tokens) => fetched.push(tokens),
                Err(err) => warn!("Skipping index source {}: {}", source.name(), err),
            }
        }

        if fetched.is_empty() {
            return Err(Error::Other(
                "No index source could be fetched; keeping the current index".to_string(),
            ));
        }

        let slices: Vec<&[_]> = fetched.iter().map(|tokens| tokens.as_slice()).collect();
        let index = TokenIndex::merge(&slices);
        let len = index.len();

        info!("Refreshed token index with {} entries", len);
        self.index = Arc::new(index);

        Ok(len)
    }
}

impl Drop for SuggestionOrchestrator {
    fn drop(&mut self) {
        self.cancel_current();
    }
}

async fn run_request(inner: Arc<Inner>, request: SuggestRequest, cancel: CancellationToken) {
    let debounce = inner.config.debounce_for(&request.prefix);

    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(debounce) => {}
    }

    let fast_cancel = cancel.child_token();
    let live_cancel = cancel.child_token();
    let verification = verify_addresses(inner.clone(), &request, cancel.child_token());
    let (fast_settled_tx, fast_settled_rx) = oneshot::channel();

    tokio::join!(
        run_fast(
            &inner,
            &request,
            verification.clone(),
            &fast_cancel,
            &live_cancel,
            fast_settled_tx,
        ),
        run_live(
            &inner,
            &request,
            verification,
            &live_cancel,
            fast_settled_rx
        ),
    );
}

fn verify_addresses(
    inner: Arc<Inner>,
    request: &SuggestRequest,
    cancel: CancellationToken,
) -> VerificationFuture {
    let keyword = request.prefix.clone();
    let chain = request.preferred_chain.clone();

    async move {
        if keyword.chars().count() < inner.config.min_verification_prefix_len {
            return AddressMap::new();
        }

        let call = tokio::time::timeout(
            inner.config.fast_timeout,
            inner.verifier.verify(&keyword, chain.as_deref(), cancel.clone()),
        );

        let outcome = tokio::select! {
            _ = cancel.cancelled() => return AddressMap::new(),
            outcome = call => outcome,
        };

        match outcome {
            Ok(Ok(address_map)) => address_map,
            Ok(Err(err)) => {
                if !err.is_cancelled() {
                    warn!("Address verification failed: {}", err);
                }
                AddressMap::new()
            }
            Err(_) => {
                warn!("Address verification timed out for '{}'", keyword);
                AddressMap::new()
            }
        }
    }
    .boxed()
    .shared()
}

async fn call_provider(
    inner: &Inner,
    request: &SuggestRequest,
    budget: Duration,
    path: &'static str,
    cancel: &CancellationToken,
) -> Result<Vec<RawSuggestion>, Error> {
    let call_cancel = cancel.child_token();

    tokio::select! {
        _ = cancel.cancelled() => Err(Error::Cancelled),
        outcome = tokio::time::timeout(budget, inner.provider.suggest(request, call_cancel.clone())) => {
            match outcome {
                Ok(result) => result,
                Err(_) => {
                    call_cancel.cancel();
                    Err(Error::Timeout(path))
                }
            }
        }
    }
}

async fn run_fast(
    inner: &Inner,
    request: &SuggestRequest,
    verification: VerificationFuture,
    cancel: &CancellationToken,
    live_cancel: &CancellationToken,
    settled: oneshot::Sender<()>,
) {
    let fast_request = request.with_live(false);
    let (outcome, address_map) = tokio::join!(
        call_provider(
            inner,
            &fast_request,
            inner.config.fast_timeout,
            "fast",
            cancel
        ),
        verification,
    );

    match outcome {
        Err(err) if err.is_cancelled() || cancel.is_cancelled() => {}
        Err(err) => {
            warn!("Fast suggestion request failed: {}", err);
            let message = match err {
                Error::Timeout(_) => "Request timed out",
                _ => "Fast request failed",
            };

            // Placeholders or cached content already on screen stay visible
            inner.apply(cancel, |state| {
                state.loading = false;
                state.error = Some(message.to_string());
                true
            });
        }
        Ok(raw_items) => {
            let suggestions = post_process_suggestions(&raw_items, request, &address_map);
            let skip_live =
                is_high_confidence(&suggestions, inner.config.high_confidence_threshold);

            if skip_live && !cancel.is_cancelled() {
                debug!("Fast results are high confidence; dropping live search");
                live_cancel.cancel();
            }

            inner.apply(cancel, |state| {
                if !suggestions.is_empty() {
                    inner.store_cached(request.cache_key(), suggestions.clone());
                    state.suggestions = suggestions;
                    state.placeholders = false;
                }
                state.loading = false;
                if skip_live {
                    state.live_loading = false;
                }
                state.error = None;
                true
            });
        }
    }

    let _ = settled.send(());
}

async fn run_live(
    inner: &Inner,
    request: &SuggestRequest,
    verification: VerificationFuture,
    cancel: &CancellationToken,
    fast_settled: oneshot::Receiver<()>,
) {
    let live_request = request.with_live(true);
    let (outcome, address_map) = tokio::join!(
        call_provider(
            inner,
            &live_request,
            inner.config.live_timeout,
            "live",
            cancel
        ),
        verification,
    );

    // Live results merge into the fast result, so the fast result is applied first
    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = fast_settled => {}
    }

    match outcome {
        Err(err) if err.is_cancelled() || cancel.is_cancelled() => {}
        Err(err) => {
            debug!("Live suggestion request failed: {}", err);
            inner.apply(cancel, |state| {
                state.live_loading = false;
                true
            });
        }
        Ok(raw_items) => {
            let live = post_process_suggestions(&raw_items, request, &address_map);
            let cap = inner.config.max_displayed_suggestions;

            inner.apply(cancel, |state| {
                let merged = if live.is_empty() {
                    state.suggestions.clone()
                } else {
                    merge_suggestions(&state.suggestions, &live, cap)
                };

                // Placeholders left over from a failed or empty fast call are not worth caching
                if !merged.is_empty() && !state.placeholders {
                    inner.store_cached(request.cache_key(), merged.clone());
                }
                state.suggestions = merged;
                state.live_loading = false;
                true
            });
        }
    }
}
