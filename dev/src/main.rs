use async_trait::async_trait;
use cashtag_sniffer::utils::parse_raw_suggestions;
use cashtag_sniffer::{
    detect_cashtag, Error, NoopAddressVerifier, RawSuggestion, SelectionHistory, SuggestRequest,
    SuggestionOrchestrator, SuggestionProvider, SuggestionState, TokenIndex, UserType,
};
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Answers with canned model output so a session can be replayed without a network.
struct CannedProvider;

impl CannedProvider {
    fn model_output(request: &SuggestRequest) -> String {
        let prefix = request.prefix.to_uppercase();

        if request.live {
            format!(
                "```json\n[{{\"ticker\": \"{0}X\", \"name\": \"{0}X\", \"type\": \"crypto\", \"chain\": \"SOL\", \"reason\": \"Trending on X\", \"confidence\": 0.55}}]\n```",
                prefix
            )
        } else {
            // Rank the supplied candidates, most likely first
            let items: Vec<String> = request
                .candidates
                .iter()
                .flatten()
                .take(3)
                .map(|token| {
                    format!(
                        "{{\"ticker\": \"{}\", \"name\": \"{}\", \"type\": \"{}\", \"reason\": \"Matches ${}\", \"confidence\": 0.7}}",
                        token.ticker, token.name, token.asset_type, prefix
                    )
                })
                .collect();

            format!("[{}]", items.join(","))
        }
    }
}

#[async_trait]
impl SuggestionProvider for CannedProvider {
    async fn suggest(
        &self,
        request: &SuggestRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<RawSuggestion>, Error> {
        let latency = if request.live {
            Duration::from_millis(1500)
        } else {
            Duration::from_millis(300)
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Cancelled),
            _ = tokio::time::sleep(latency) => Ok(parse_raw_suggestions(&Self::model_output(request))),
        }
    }
}

fn print_state(state: &SuggestionState) {
    let tickers: Vec<String> = state
        .suggestions
        .iter()
        .map(|s| format!("{}({:.2})", s.ticker, s.confidence))
        .collect();

    println!(
        "  loading={} live_loading={} error={:?} [{}]",
        state.loading,
        state.live_loading,
        state.error,
        tickers.join(", ")
    );
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let index = Arc::new(TokenIndex::embedded()?);
    info!("Index holds {} entries", index.len());

    let mut orchestrator = SuggestionOrchestrator::new(
        index,
        SelectionHistory::in_memory(),
        Arc::new(CannedProvider),
        Arc::new(NoopAddressVerifier),
    );
    orchestrator.set_profile(Some(UserType::Crypto), Some("SOL"));

    let mut updates = orchestrator.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            print_state(&updates.borrow_and_update());
        }
    });

    let mut text = String::from("gm ");
    for keystroke in "$bon".chars() {
        text.push(keystroke);
        println!("> {}", text);

        let signal = detect_cashtag(&text, text.chars().count());
        orchestrator.handle_trigger(&signal, &text);
        tokio::time::sleep(Duration::from_millis(120)).await;
    }

    orchestrator.settle().await;
    orchestrator.record_selection("BONK");

    // Same prefix again, now answered from the cache
    text.push(' ');
    orchestrator.handle_trigger(&detect_cashtag(&text, text.chars().count()), &text);
    text.push_str("$bon");
    println!("> {}", text);
    orchestrator.handle_trigger(&detect_cashtag(&text, text.chars().count()), &text);

    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(orchestrator);
    printer.await.ok();

    Ok(())
}
