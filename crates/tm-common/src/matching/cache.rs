use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::{config::MissingFactorPolicy, scoring::MatchResult, weights::MatchWeights};
use crate::{TalentProfile, TalentRequest};

#[derive(Serialize)]
struct CacheKeyInput<'a> {
    request: &'a TalentRequest,
    pool: &'a [TalentProfile],
    weights: &'a MatchWeights,
    policy: MissingFactorPolicy,
    limit: Option<usize>,
}

/// SHA-256 over the canonical JSON of everything that influences a ranking.
/// `None` if the inputs cannot be serialized, in which case the run is not cached.
pub fn cache_key(
    request: &TalentRequest,
    pool: &[TalentProfile],
    weights: &MatchWeights,
    policy: MissingFactorPolicy,
    limit: Option<usize>,
) -> Option<String> {
    let bytes = serde_json::to_vec(&CacheKeyInput {
        request,
        pool,
        weights,
        policy,
        limit,
    })
    .ok()?;

    let digest = Sha256::digest(&bytes);
    Some(digest.iter().map(|b| format!("{b:02x}")).collect())
}

/// What a run produced, minus its run id.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedRun {
    pub results: Vec<MatchResult>,
    pub excluded: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CachedRun>,
    order: VecDeque<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded FIFO cache of finished runs. Matching is deterministic, so a hit
/// returns exactly what a fresh run would.
#[derive(Debug)]
pub struct MatchCache {
    capacity: usize,
    state: Mutex<CacheState>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MatchCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<CachedRun> {
        let found = self
            .state
            .lock()
            .ok()
            .and_then(|state| state.entries.get(key).cloned());

        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, key: String, run: CachedRun) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        if state.entries.insert(key.clone(), run).is_none() {
            state.order.push_back(key);
        }
        while state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.state.lock().map(|s| s.entries.len()).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::matching::weights::DEFAULT_WEIGHTS;

    fn result(id: &str) -> CachedRun {
        CachedRun {
            results: vec![MatchResult {
                profile_id: id.into(),
                score: 0.5,
                breakdown: BTreeMap::new(),
                explanation: String::new(),
            }],
            excluded: 1,
            skipped: 0,
        }
    }

    #[test]
    fn evicts_oldest_entry_past_capacity() {
        let cache = MatchCache::new(2);
        cache.insert("a".into(), result("a"));
        cache.insert("b".into(), result("b"));
        cache.insert("c".into(), result("c"));

        assert!(cache.get("a").is_none());
        let hit = cache.get("c").unwrap();
        assert_eq!(hit.results[0].profile_id, "c");
        assert_eq!(hit.excluded, 1);

        let stats = cache.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = MatchCache::new(0);
        cache.insert("a".into(), result("a"));
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn key_changes_with_inputs() {
        let request = TalentRequest {
            id: "req-1".into(),
            ..TalentRequest::default()
        };
        let pool = vec![TalentProfile {
            id: "p-1".into(),
            ..TalentProfile::default()
        }];

        let base = cache_key(&request, &pool, &DEFAULT_WEIGHTS, MissingFactorPolicy::Exclude, None);
        let same = cache_key(&request, &pool, &DEFAULT_WEIGHTS, MissingFactorPolicy::Exclude, None);
        let limited = cache_key(&request, &pool, &DEFAULT_WEIGHTS, MissingFactorPolicy::Exclude, Some(1));
        let zero = cache_key(&request, &pool, &DEFAULT_WEIGHTS, MissingFactorPolicy::Zero, None);

        assert_eq!(base, same);
        assert_ne!(base, limited);
        assert_ne!(base, zero);
        assert_eq!(base.unwrap().len(), 64);
    }
}
