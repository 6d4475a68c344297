//! Ordinal addition, multiplication, and exponentiation.
//!
//! Each operation accepts arbitrary raw terms, normalizes them, and runs
//! the canonical engine from `normalize`. All three are total and
//! deliberately non-commutative: `1 + ω = ω` while `ω + 1` keeps its
//! trailing summand, exactly as in Cantor normal form.

use bho_term::Term;

use crate::normalize::{add_canonical, multiply_canonical, normalize, power_canonical};

/// Adds two ordinals. The left operand is absorbed whenever the right
/// operand's leading Cantor degree dominates it.
pub fn add(a: &Term, b: &Term) -> Term {
    add_canonical(&normalize(a), &normalize(b))
}

/// Multiplies two ordinals, distributing over the right operand's
/// Cantor-normal-form summands.
pub fn multiply(a: &Term, b: &Term) -> Term {
    multiply_canonical(&normalize(a), &normalize(b))
}

/// Raises `a` to the power `b`, splitting the exponent along its
/// Cantor-normal-form decomposition (`a^(b1+b2) = a^b1 · a^b2`).
pub fn power(a: &Term, b: &Term) -> Term {
    power_canonical(&normalize(a), &normalize(b))
}
