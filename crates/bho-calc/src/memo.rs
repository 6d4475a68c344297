//! Shared memoization for repeated normalization of the same terms.

use std::collections::HashMap;
use std::sync::RwLock;

use bho_term::Term;

use crate::normalize::normalize;

/// A normalizer that caches results keyed by the input term.
///
/// Terms are immutable, so a cached canonical form never goes stale.
/// Lookups take the read lock; a miss recomputes outside any lock and
/// then races for the write lock, where losing the race just repeats an
/// idempotent insert. Lock poisoning is ignored for the same reason: a
/// panicking writer cannot leave a pure map half-updated in any way that
/// matters.
#[derive(Debug, Default)]
pub struct CachedNormalizer {
    cache: RwLock<HashMap<Term, Term>>,
}

impl CachedNormalizer {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `term`, serving repeated inputs from the cache.
    pub fn normalize(&self, term: &Term) -> Term {
        let guard = match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(hit) = guard.get(term) {
            return hit.clone();
        }
        drop(guard);

        let computed = normalize(term);
        let mut guard = match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.entry(term.clone()).or_insert_with(|| computed.clone());
        computed
    }

    /// Number of distinct terms cached so far.
    pub fn len(&self) -> usize {
        match self.cache.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Returns true when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
