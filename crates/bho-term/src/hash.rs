//! Structural hashing for ordinal terms.
//!
//! Two hashes are provided: a stable 64-bit SipHash-1-3 digest intended as
//! a memo-cache key, and a SHA-256 hex digest for artifacts that persist
//! terms alongside their identity. Both walk the same prefix encoding of
//! the tree, so structurally equal terms always hash equal on every
//! platform.

use std::hash::Hasher;

use sha2::{Digest, Sha256};
use siphasher::sip::SipHasher13;

use crate::term::Term;

// Prefix encoding: one tag byte per node, a little-endian u64 payload for
// naturals and sum lengths, children in left-to-right order.
fn visit(term: &Term, sink: &mut impl FnMut(&[u8])) {
    match term {
        Term::Zero => sink(&[0x00]),
        Term::Nat(n) => {
            sink(&[0x01]);
            sink(&n.to_le_bytes());
        }
        Term::Sum(terms) => {
            sink(&[0x02]);
            sink(&(terms.len() as u64).to_le_bytes());
            for child in terms {
                visit(child, sink);
            }
        }
        Term::Power(base, exponent) => {
            sink(&[0x03]);
            visit(base, sink);
            visit(exponent, sink);
        }
        Term::Omega => sink(&[0x04]),
        Term::Epsilon(index) => {
            sink(&[0x05]);
            visit(index, sink);
        }
        Term::Zeta(index) => {
            sink(&[0x06]);
            visit(index, sink);
        }
        Term::Eta(index) => {
            sink(&[0x07]);
            visit(index, sink);
        }
        Term::Veblen(index, argument) => {
            sink(&[0x08]);
            visit(index, sink);
            visit(argument, sink);
        }
        Term::Buchholz(index, argument) => {
            sink(&[0x09]);
            visit(index, sink);
            visit(argument, sink);
        }
    }
}

/// Computes the stable 64-bit structural hash of a term.
///
/// SipHash-1-3 with fixed zero keys, so the value is identical across
/// processes and platforms and is safe to use as a memoization key.
pub fn structural_hash(term: &Term) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    visit(term, &mut |bytes| hasher.write(bytes));
    hasher.finish()
}

/// Computes the canonical SHA-256 hex digest of a term.
pub fn canonical_hash(term: &Term) -> String {
    let mut hasher = Sha256::new();
    visit(term, &mut |bytes| hasher.update(bytes));
    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_terms_hash_equal() {
        let a = Term::sum(vec![Term::Omega, Term::nat(2)]);
        let b = Term::sum(vec![Term::Omega, Term::nat(2)]);
        assert_eq!(structural_hash(&a), structural_hash(&b));
        assert_eq!(canonical_hash(&a), canonical_hash(&b));
    }

    #[test]
    fn tag_bytes_separate_kinds() {
        // ε_0 and ζ_0 differ only in the node tag.
        let eps = Term::epsilon(Term::Zero);
        let zeta = Term::zeta(Term::Zero);
        assert_ne!(structural_hash(&eps), structural_hash(&zeta));
        assert_ne!(canonical_hash(&eps), canonical_hash(&zeta));
    }

    #[test]
    fn sum_length_is_hashed() {
        // Without the length prefix these two would collide.
        let a = Term::Sum(vec![Term::Omega, Term::Omega]);
        let b = Term::Sum(vec![Term::Omega, Term::Omega, Term::Omega]);
        assert_ne!(structural_hash(&a), structural_hash(&b));
    }
}
