//! Constructors for the hierarchy functions ε, ζ, η, φ, and ψ.
//!
//! Indices are accepted as arbitrary terms (so `ε_ω` is expressible, not
//! just integer subscripts) and are normalized before the node is built,
//! which lets the Veblen collapse rules and the Buchholz ceiling check
//! see canonical arguments.

use bho_term::{Term, TermError};

use crate::normalize::{normalize, veblen_canonical};

/// Builds the canonical `ε_index` term.
pub fn epsilon(index: &Term) -> Term {
    Term::epsilon(normalize(index))
}

/// Builds the canonical `ζ_index` term.
pub fn zeta(index: &Term) -> Term {
    Term::zeta(normalize(index))
}

/// Builds the canonical `η_index` term.
pub fn eta(index: &Term) -> Term {
    Term::eta(normalize(index))
}

/// Builds the canonical `φ_index(argument)` term, collapsing indices 0
/// through 3 into `ω^α`, `ε_α`, `ζ_α`, and `η_α` respectively.
pub fn veblen(index: &Term, argument: &Term) -> Term {
    veblen_canonical(&normalize(index), &normalize(argument))
}

/// Builds the canonical `ψ_index(argument)` term. The index must
/// normalize to a finite ordinal; anything larger is rejected with
/// `UnsupportedCollapse` since it would name ordinals past the
/// Bachmann-Howard ceiling.
pub fn buchholz(index: &Term, argument: &Term) -> Result<Term, TermError> {
    Term::buchholz(normalize(index), normalize(argument))
}
