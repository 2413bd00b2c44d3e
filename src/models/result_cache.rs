use crate::models::suggest_request::CacheKey;
use crate::CashtagSuggestion;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// A cached value and the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub timestamp: Instant,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, timestamp: Instant) -> Self {
        CacheEntry { value, timestamp }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.timestamp) > ttl
    }
}

/// Short-lived cache of displayed suggestion lists, keyed by [`CacheKey`].
///
/// Lookup and store are separate operations taking an explicit `now`, so callers (and tests)
/// control time. Uses `tokio::time::Instant` so paused test clocks apply.
#[derive(Debug)]
pub struct ResultCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CacheEntry<Vec<CashtagSuggestion>>>,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        ResultCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached list if present and fresh. Expired entries are evicted.
    pub fn lookup(&mut self, key: &CacheKey, now: Instant) -> Option<Vec<CashtagSuggestion>> {
        let expired = self.entries.get(key)?.is_expired(now, self.ttl);

        if expired {
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Stores a list and drops every entry that has expired by `now`. Empty lists are never
    /// cached.
    pub fn store(&mut self, key: CacheKey, suggestions: Vec<CashtagSuggestion>, now: Instant) {
        if suggestions.is_empty() {
            return;
        }

        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(now, ttl));
        self.entries.insert(key, CacheEntry::new(suggestions, now));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetType, SuggestRequest};

    fn suggestion(ticker: &str) -> CashtagSuggestion {
        CashtagSuggestion {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            asset_type: AssetType::Crypto,
            chain: None,
            reason: "r".to_string(),
            address: None,
            exchange: None,
            confidence: 0.9,
            market_cap: None,
        }
    }

    #[test]
    fn test_entry_expiry_is_strictly_after_ttl() {
        let start = Instant::now();
        let entry = CacheEntry::new((), start);
        let ttl = Duration::from_secs(120);

        assert!(!entry.is_expired(start + ttl, ttl));
        assert!(entry.is_expired(start + ttl + Duration::from_millis(1), ttl));
    }

    #[test]
    fn test_lookup_hit_and_eviction() {
        let mut cache = ResultCache::new(Duration::from_secs(120));
        let key = SuggestRequest::new("", "BT").cache_key();
        let start = Instant::now();

        cache.store(key.clone(), vec![suggestion("BTC")], start);
        assert_eq!(
            cache.lookup(&key, start + Duration::from_secs(60)),
            Some(vec![suggestion("BTC")])
        );

        assert_eq!(cache.lookup(&key, start + Duration::from_secs(121)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_prunes_expired_entries() {
        let mut cache = ResultCache::new(Duration::from_secs(120));
        let start = Instant::now();
        let old_key = SuggestRequest::new("", "b").cache_key();
        let fresh_key = SuggestRequest::new("", "bo").cache_key();
        let new_key = SuggestRequest::new("", "bon").cache_key();

        cache.store(old_key.clone(), vec![suggestion("BTC")], start);
        cache.store(
            fresh_key.clone(),
            vec![suggestion("BOME")],
            start + Duration::from_secs(60),
        );
        cache.store(
            new_key.clone(),
            vec![suggestion("BONK")],
            start + Duration::from_secs(150),
        );

        assert_eq!(cache.len(), 2);
        let now = start + Duration::from_secs(150);
        assert_eq!(cache.lookup(&old_key, now), None);
        assert!(cache.lookup(&fresh_key, now).is_some());
        assert!(cache.lookup(&new_key, now).is_some());
    }

    #[test]
    fn test_empty_lists_are_not_stored() {
        let mut cache = ResultCache::new(Duration::from_secs(120));
        cache.store(
            SuggestRequest::new("", "x").cache_key(),
            vec![],
            Instant::now(),
        );
        assert!(cache.is_empty());
    }
}
