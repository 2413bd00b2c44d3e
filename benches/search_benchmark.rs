use cashtag_sniffer::utils::{parse_raw_suggestions, post_process_suggestions};
use cashtag_sniffer::{search_index, AddressMap, SelectionHistory, SuggestRequest, TokenIndex, UserType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_search_index(c: &mut Criterion) {
    let index = TokenIndex::embedded().expect("Failed to load embedded token index");

    let mut history = SelectionHistory::in_memory();
    history.record("BONK");
    history.record("AAPL");

    c.bench_function("search_index_short_prefix", |b| {
        b.iter(|| {
            search_index(
                black_box(index.tokens()),
                black_box("a"),
                Some(UserType::Stock),
                None,
                &history,
            )
        })
    });

    c.bench_function("search_index_biased_prefix", |b| {
        b.iter(|| {
            search_index(
                black_box(index.tokens()),
                black_box("usd"),
                Some(UserType::Crypto),
                Some("SOL"),
                &history,
            )
        })
    });
}

fn benchmark_post_process(c: &mut Criterion) {
    let index = TokenIndex::embedded().expect("Failed to load embedded token index");
    let history = SelectionHistory::in_memory();

    let candidates = search_index(index.tokens(), "usd", None, Some("SOL"), &history);
    let mut request = SuggestRequest::new("paying in $usd", "usd").with_candidates(candidates);
    request.preferred_chain = Some("SOL".to_string());

    let payload = r#"[
        {"ticker": "USDC", "name": "USD Coin", "type": "crypto", "chain": "ETH", "confidence": 0.95},
        {"ticker": "$usdt", "name": "Tether", "type": "crypto", "confidence": 0.9},
        {"ticker": "USDE", "name": "Ethena USDe", "type": "crypto", "chain": "null", "confidence": 0.7}
    ]"#;
    let address_map = AddressMap::new();

    c.bench_function("post_process_suggestions", |b| {
        b.iter(|| {
            let raw = parse_raw_suggestions(black_box(payload));
            post_process_suggestions(&raw, black_box(&request), &address_map)
        })
    });
}

criterion_group!(benches, benchmark_search_index, benchmark_post_process);
criterion_main!(benches);
