use crate::types::ChainCode;
use crate::{IndexToken, UserType};
use serde::{Deserialize, Serialize};

/// One ranking attempt as sent to an upstream suggestion provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// Free-text context (the message being composed).
    pub text: String,
    /// The typed prefix after the trigger character, as typed.
    pub prefix: String,
    #[serde(default)]
    pub user_type: Option<UserType>,
    /// Local index candidates, best match first. Switches the provider from discovery to ranking.
    #[serde(default)]
    pub candidates: Option<Vec<IndexToken>>,
    #[serde(default)]
    pub preferred_chain: Option<ChainCode>,
    /// `true` selects the slower live-search call quality.
    #[serde(default)]
    pub live: bool,
}

/// Two requests share cached results iff user type, preferred chain and lowercased prefix match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub user_type: Option<UserType>,
    pub preferred_chain: Option<ChainCode>,
    pub prefix: String,
}

impl SuggestRequest {
    pub fn new(text: &str, prefix: &str) -> Self {
        SuggestRequest {
            text: text.to_string(),
            prefix: prefix.to_string(),
            user_type: None,
            candidates: None,
            preferred_chain: None,
            live: false,
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            user_type: self.user_type,
            preferred_chain: self.preferred_chain.clone(),
            prefix: self.prefix.to_lowercase(),
        }
    }

    /// Attaches ranking hints. An empty candidate list is dropped rather than sent.
    pub fn with_candidates(mut self, candidates: Vec<IndexToken>) -> Self {
        self.candidates = if candidates.is_empty() {
            None
        } else {
            Some(candidates)
        };
        self
    }

    pub fn with_live(&self, live: bool) -> Self {
        SuggestRequest {
            live,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_ignores_prefix_case_and_text() {
        let mut a = SuggestRequest::new("gm", "Bon");
        let mut b = SuggestRequest::new("something else entirely", "bON");
        a.user_type = Some(UserType::Crypto);
        b.user_type = Some(UserType::Crypto);

        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_cache_key_distinguishes_chain_and_user_type() {
        let base = SuggestRequest::new("", "usd");
        let mut sol = base.clone();
        sol.preferred_chain = Some("SOL".to_string());
        let mut stock = base.clone();
        stock.user_type = Some(UserType::Stock);

        assert_ne!(base.cache_key(), sol.cache_key());
        assert_ne!(base.cache_key(), stock.cache_key());
    }

    #[test]
    fn test_empty_candidates_are_not_attached() {
        let request = SuggestRequest::new("", "zz").with_candidates(vec![]);
        assert!(request.candidates.is_none());
    }
}
