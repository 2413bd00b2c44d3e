use crate::constants::{
    BIAS_MIN_PREFIX_LEN, MAX_SEARCH_RESULTS, MAX_STOCK_TICKER_LEN, TIER1_TICKER_SET,
};
use crate::utils::dedup_by_ticker;
use crate::{IndexToken, SelectionHistory, UserType};
use std::cmp::Ordering;

/// Inputs shared by every ranking tier for one search.
pub struct RankingContext<'a> {
    pub prefix_len: usize,
    pub user_type: Option<UserType>,
    pub preferred_chain: Option<&'a str>,
    pub history: &'a SelectionHistory,
}

impl RankingContext<'_> {
    /// Short prefixes are too ambiguous to bias by domain ("$AA" could be AAPL, AAL or AAVE).
    pub fn applies_bias(&self) -> bool {
        self.prefix_len >= BIAS_MIN_PREFIX_LEN
    }
}

/// One tie-breaking step of the ranking comparator. `Ordering::Less` ranks `a` first.
pub type TierComparator = fn(&IndexToken, &IndexToken, &RankingContext) -> Ordering;

pub struct RankingTier {
    pub name: &'static str,
    /// Tiers behind the bias gate are skipped entirely for short prefixes.
    pub gated_by_bias: bool,
    pub compare: TierComparator,
}

/// Ranking tiers in priority order. Ties fall through to the next tier.
pub const RANKING_TIERS: &[RankingTier] = &[
    RankingTier {
        name: "selection_history",
        gated_by_bias: false,
        compare: by_selection_history,
    },
    RankingTier {
        name: "tier1_prominence",
        gated_by_bias: false,
        compare: by_tier1_prominence,
    },
    RankingTier {
        name: "preferred_chain",
        gated_by_bias: true,
        compare: by_preferred_chain,
    },
    RankingTier {
        name: "user_type",
        gated_by_bias: true,
        compare: by_user_type,
    },
];

/// Previously picked tickers first, most picked on top.
pub fn by_selection_history(a: &IndexToken, b: &IndexToken, ctx: &RankingContext) -> Ordering {
    ctx.history
        .count(&b.ticker)
        .cmp(&ctx.history.count(&a.ticker))
}

/// Globally prominent tickers before obscure ones.
pub fn by_tier1_prominence(a: &IndexToken, b: &IndexToken, _ctx: &RankingContext) -> Ordering {
    let is_tier1 = |token: &IndexToken| TIER1_TICKER_SET.contains(token.ticker.as_str());
    is_tier1(b).cmp(&is_tier1(a))
}

/// Entries on the preferred chain first.
pub fn by_preferred_chain(a: &IndexToken, b: &IndexToken, ctx: &RankingContext) -> Ordering {
    let Some(preferred_chain) = ctx.preferred_chain else {
        return Ordering::Equal;
    };

    let on_chain = |token: &IndexToken| token.chain.as_deref() == Some(preferred_chain);
    on_chain(b).cmp(&on_chain(a))
}

/// Entries of the user's asset type first. No effect for mixed or unknown users.
pub fn by_user_type(a: &IndexToken, b: &IndexToken, ctx: &RankingContext) -> Ordering {
    let Some(preferred_type) = ctx.user_type.and_then(UserType::preferred_asset_type) else {
        return Ordering::Equal;
    };

    let matches = |token: &IndexToken| token.asset_type == preferred_type;
    matches(b).cmp(&matches(a))
}

/// Combines `tiers` left to right; the first non-equal tier decides.
pub fn compare_by_tiers(
    a: &IndexToken,
    b: &IndexToken,
    ctx: &RankingContext,
    tiers: &[RankingTier],
) -> Ordering {
    for tier in tiers {
        if tier.gated_by_bias && !ctx.applies_bias() {
            break;
        }

        let ordering = (tier.compare)(a, b, ctx);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Searches the local index for tickers starting with `prefix` (case-insensitive).
///
/// ### Ranking (highest first):
/// 1. Selection history count.
/// 2. Tier-1 prominence.
/// 3. Preferred chain (prefix length >= 3 only).
/// 4. User type bias (prefix length >= 3 only).
///
/// Remaining ties keep index order. Stocks are excluded for prefixes longer than any stock
/// ticker. Results are deduplicated by ticker (highest ranked variant kept) and capped at 10.
/// An empty prefix returns nothing.
pub fn search_index(
    index: &[IndexToken],
    prefix: &str,
    user_type: Option<UserType>,
    preferred_chain: Option<&str>,
    history: &SelectionHistory,
) -> Vec<IndexToken> {
    let prefix = prefix.trim().to_uppercase();
    if prefix.is_empty() {
        return vec![];
    }

    let prefix_len = prefix.chars().count();
    let skip_stocks = prefix_len > MAX_STOCK_TICKER_LEN;

    let mut results: Vec<&IndexToken> = index
        .iter()
        .filter(|token| !(skip_stocks && token.is_stock()))
        .filter(|token| token.ticker.starts_with(&prefix))
        .collect();

    let ctx = RankingContext {
        prefix_len,
        user_type,
        preferred_chain,
        history,
    };

    // Stable sort, so full ties keep their index order
    results.sort_by(|a, b| compare_by_tiers(a, b, &ctx, RANKING_TIERS));

    let mut results = dedup_by_ticker(results, |token| &token.ticker);
    results.truncate(MAX_SEARCH_RESULTS);

    results.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(
        prefix_len: usize,
        user_type: Option<UserType>,
        preferred_chain: Option<&'a str>,
        history: &'a SelectionHistory,
    ) -> RankingContext<'a> {
        RankingContext {
            prefix_len,
            user_type,
            preferred_chain,
            history,
        }
    }

    #[test]
    fn test_selection_history_tier() {
        let mut history = SelectionHistory::in_memory();
        history.record("AAXX");
        let obscure = IndexToken::crypto("AAXX", "Obscure", None, None);
        let apple = IndexToken::stock("AAPL", "Apple Inc.", Some("NASDAQ"));

        let ctx = ctx(2, None, None, &history);
        assert_eq!(by_selection_history(&obscure, &apple, &ctx), Ordering::Less);
        assert_eq!(by_selection_history(&apple, &apple, &ctx), Ordering::Equal);
    }

    #[test]
    fn test_tier1_tier() {
        let history = SelectionHistory::in_memory();
        let btc = IndexToken::crypto("BTC", "Bitcoin", None, None);
        let obscure = IndexToken::crypto("BZZZ", "Buzz", None, None);

        assert_eq!(
            by_tier1_prominence(&obscure, &btc, &ctx(1, None, None, &history)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_preferred_chain_tier() {
        let history = SelectionHistory::in_memory();
        let usdc_sol = IndexToken::crypto("USDC", "USD Coin", Some("SOL"), None);
        let usdc_eth = IndexToken::crypto("USDC", "USD Coin", Some("ETH"), None);

        assert_eq!(
            by_preferred_chain(&usdc_eth, &usdc_sol, &ctx(3, None, Some("SOL"), &history)),
            Ordering::Greater
        );
        assert_eq!(
            by_preferred_chain(&usdc_eth, &usdc_sol, &ctx(3, None, None, &history)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_user_type_tier() {
        let history = SelectionHistory::in_memory();
        let stock = IndexToken::stock("XYZQ", "Xyz Corp", None);
        let token = IndexToken::crypto("XYZP", "Xyz Token", None, None);

        let stock_user = ctx(3, Some(UserType::Stock), None, &history);
        assert_eq!(by_user_type(&token, &stock, &stock_user), Ordering::Greater);

        let crypto_user = ctx(3, Some(UserType::Crypto), None, &history);
        assert_eq!(by_user_type(&token, &stock, &crypto_user), Ordering::Less);

        let mixed_user = ctx(3, Some(UserType::Mixed), None, &history);
        assert_eq!(by_user_type(&token, &stock, &mixed_user), Ordering::Equal);
    }

    #[test]
    fn test_bias_gate_short_circuits() {
        let history = SelectionHistory::in_memory();
        let usdc_sol = IndexToken::crypto("USDC", "USD Coin", Some("SOL"), None);
        let usdc_eth = IndexToken::crypto("USDC", "USD Coin", Some("ETH"), None);

        let short = ctx(2, Some(UserType::Crypto), Some("SOL"), &history);
        assert_eq!(
            compare_by_tiers(&usdc_eth, &usdc_sol, &short, RANKING_TIERS),
            Ordering::Equal
        );

        let long = ctx(3, Some(UserType::Crypto), Some("SOL"), &history);
        assert_eq!(
            compare_by_tiers(&usdc_eth, &usdc_sol, &long, RANKING_TIERS),
            Ordering::Greater
        );
    }

    #[test]
    fn test_tiers_are_reorderable() {
        let history = SelectionHistory::in_memory();
        let btc = IndexToken::crypto("BTC", "Bitcoin", None, None);
        let stock = IndexToken::stock("BZZZ", "Buzz Corp", None);
        let ctx = ctx(3, Some(UserType::Stock), None, &history);

        assert_eq!(
            compare_by_tiers(&stock, &btc, &ctx, RANKING_TIERS),
            Ordering::Greater
        );

        let type_first = [
            RankingTier {
                name: "user_type",
                gated_by_bias: false,
                compare: by_user_type,
            },
            RankingTier {
                name: "tier1_prominence",
                gated_by_bias: false,
                compare: by_tier1_prominence,
            },
        ];
        assert_eq!(
            compare_by_tiers(&stock, &btc, &ctx, &type_first),
            Ordering::Less
        );
    }

    #[test]
    fn test_empty_prefix_returns_nothing() {
        let index = vec![IndexToken::crypto("BTC", "Bitcoin", None, None)];
        let history = SelectionHistory::in_memory();

        assert!(search_index(&index, "", None, None, &history).is_empty());
        assert!(search_index(&index, "  ", None, None, &history).is_empty());
    }
}
