use crate::types::TickerSymbol;

/// Normalizes a ticker symbol to its canonical form.
///
/// Leading `$` characters and surrounding whitespace are stripped and the remainder is
/// uppercased.
///
/// # Example
/// ```
/// use cashtag_sniffer::utils::normalize_ticker;
///
/// assert_eq!(normalize_ticker("$btc"), "BTC");
/// assert_eq!(normalize_ticker(" $$Wif "), "WIF");
/// ```
pub fn normalize_ticker(ticker: &str) -> TickerSymbol {
    ticker.trim().trim_start_matches('$').to_uppercase()
}
