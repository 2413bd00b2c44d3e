use cashtag_sniffer::{search_index, SelectionHistory, TokenIndex, UserType};
use log::{error, warn};
use std::io::{self, BufRead};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let index = match TokenIndex::embedded() {
        Ok(index) => index,
        Err(e) => {
            error!("Failed to load token index: {}", e);
            eprintln!("Failed to load token index: {}", e);
            std::process::exit(1);
        }
    };

    let history = SelectionHistory::in_memory();

    // One query per line: `prefix [stock|crypto|mixed] [CHAIN]`
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        };

        let mut parts = line.split_whitespace();
        let Some(prefix) = parts.next() else {
            continue;
        };
        let prefix = prefix.trim_start_matches('$');

        let user_type = parts.next().and_then(|value| match value.parse::<UserType>() {
            Ok(user_type) => Some(user_type),
            Err(e) => {
                warn!("Ignoring user type: {}", e);
                None
            }
        });
        let preferred_chain = parts.next().map(|chain| chain.to_uppercase());

        let results = search_index(
            index.tokens(),
            prefix,
            user_type,
            preferred_chain.as_deref(),
            &history,
        );

        println!("${}", prefix.to_uppercase());
        for token in results {
            let venue = token
                .chain
                .as_deref()
                .or(token.exchange.as_deref())
                .unwrap_or("-");
            println!("  {:<8} {:<7} {:<8} {}", token.ticker, token.asset_type, venue, token.name);
        }
    }
}
