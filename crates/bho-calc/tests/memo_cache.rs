use std::sync::Arc;
use std::thread;

use bho_calc::{normalize, CachedNormalizer};
use bho_term::Term;

fn sample() -> Term {
    Term::Sum(vec![
        Term::power(Term::Omega, Term::Sum(vec![Term::Omega, Term::Nat(1)])),
        Term::veblen(Term::Nat(1), Term::Omega),
        Term::Nat(3),
    ])
}

#[test]
fn cache_agrees_with_direct_normalization() {
    let cache = CachedNormalizer::new();
    let term = sample();
    let via_cache = cache.normalize(&term);
    assert_eq!(via_cache, normalize(&term));
    // Second call is served from the cache and stays identical.
    assert_eq!(cache.normalize(&term), via_cache);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_is_empty_until_first_use() {
    let cache = CachedNormalizer::new();
    assert!(cache.is_empty());
    cache.normalize(&Term::Omega);
    assert!(!cache.is_empty());
}

#[test]
fn concurrent_callers_see_consistent_results() {
    let cache = Arc::new(CachedNormalizer::new());
    let term = sample();
    let expected = normalize(&term);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let term = term.clone();
            thread::spawn(move || cache.normalize(&term))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("worker panicked");
        assert_eq!(result, expected);
    }
    // Racing writers for the same key collapse to one entry.
    assert_eq!(cache.len(), 1);
}
