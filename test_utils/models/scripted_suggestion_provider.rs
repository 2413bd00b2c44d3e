use async_trait::async_trait;
use cashtag_sniffer::{Error, RawSuggestion, SuggestRequest, SuggestionProvider};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    Items(Vec<RawSuggestion>),
    Failure(String),
    /// Never resolves; only cancellation or a timeout ends the call.
    Hang,
}

/// What the provider answers for one call, and after how long.
#[derive(Debug, Clone)]
pub struct ScriptedResponse {
    pub delay: Duration,
    pub outcome: ScriptedOutcome,
}

impl ScriptedResponse {
    pub fn items(items: Vec<RawSuggestion>) -> Self {
        ScriptedResponse {
            delay: Duration::ZERO,
            outcome: ScriptedOutcome::Items(items),
        }
    }

    pub fn empty() -> Self {
        Self::items(vec![])
    }

    pub fn failure(message: &str) -> Self {
        ScriptedResponse {
            delay: Duration::ZERO,
            outcome: ScriptedOutcome::Failure(message.to_string()),
        }
    }

    pub fn hang() -> Self {
        ScriptedResponse {
            delay: Duration::ZERO,
            outcome: ScriptedOutcome::Hang,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A [`SuggestionProvider`] answering from per-prefix scripts, separately for the fast and the
/// live call. Prefixes without a script answer with an empty list.
#[derive(Default)]
pub struct ScriptedSuggestionProvider {
    fast: HashMap<String, ScriptedResponse>,
    live: HashMap<String, ScriptedResponse>,
    calls: Mutex<Vec<SuggestRequest>>,
}

impl ScriptedSuggestionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fast(mut self, prefix: &str, response: ScriptedResponse) -> Self {
        self.fast.insert(prefix.to_lowercase(), response);
        self
    }

    pub fn with_live(mut self, prefix: &str, response: ScriptedResponse) -> Self {
        self.live.insert(prefix.to_lowercase(), response);
        self
    }

    /// Every request received so far, in call order.
    pub fn calls(&self) -> Vec<SuggestRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn live_call_count(&self) -> usize {
        self.calls().iter().filter(|request| request.live).count()
    }

    fn script_for(&self, request: &SuggestRequest) -> ScriptedResponse {
        let scripts = if request.live { &self.live } else { &self.fast };

        scripts
            .get(&request.prefix.to_lowercase())
            .cloned()
            .unwrap_or_else(ScriptedResponse::empty)
    }
}

#[async_trait]
impl SuggestionProvider for ScriptedSuggestionProvider {
    async fn suggest(
        &self,
        request: &SuggestRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<RawSuggestion>, Error> {
        self.calls.lock().unwrap().push(request.clone());
        let script = self.script_for(request);

        let respond = async move {
            tokio::time::sleep(script.delay).await;

            match script.outcome {
                ScriptedOutcome::Items(items) => Ok(items),
                ScriptedOutcome::Failure(message) => Err(Error::TransportError(message)),
                ScriptedOutcome::Hang => hang_forever().await,
            }
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = respond => result,
        }
    }
}

async fn hang_forever() -> Result<Vec<RawSuggestion>, Error> {
    std::future::pending().await
}
