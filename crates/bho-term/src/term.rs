use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, TermError};

/// Symbolic ordinal expression tree.
///
/// A `Term` is immutable once built: every operation in the workspace
/// either reads a term or allocates a new one, so shared substructure is
/// always safe to hand across threads. A freshly constructed term is *raw*
/// (syntactically valid but possibly non-canonical); only the normalizer
/// in `bho-calc` produces terms satisfying the canonical-form invariants
/// documented on each variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// The ordinal 0.
    Zero,
    /// A finite ordinal n >= 1. Zero is always `Term::Zero`, never `Nat(0)`.
    Nat(u64),
    /// Cantor-normal-form sum, left to right. Canonical form: at least two
    /// summands, none of them `Zero` or a nested `Sum`, ordered by
    /// non-increasing degree with adjacent equal `Nat`s merged.
    Sum(Vec<Term>),
    /// `base ^ exponent`. Canonical form: base is principal and the
    /// exponent is neither `Zero` nor `Nat(1)`.
    Power(Box<Term>, Box<Term>),
    /// The first infinite ordinal, kept as a leaf rather than
    /// `Power(Omega, Nat(1))` for pattern clarity.
    Omega,
    /// The index-th fixed point of `a -> ω^a`.
    Epsilon(Box<Term>),
    /// The index-th fixed point of the epsilon enumeration.
    Zeta(Box<Term>),
    /// The index-th fixed point of the zeta enumeration.
    Eta(Box<Term>),
    /// The Veblen function `φ_index(argument)`. Canonical form: index >= 4;
    /// smaller indices collapse to `Power(Omega, _)`, `Epsilon`, `Zeta`,
    /// or `Eta` during normalization.
    Veblen(Box<Term>, Box<Term>),
    /// The Buchholz collapsing function `ψ_index(argument)`. The index is
    /// restricted to finite ordinals at construction, which caps the
    /// representable range at the Bachmann-Howard ordinal.
    Buchholz(Box<Term>, Box<Term>),
}

impl Term {
    /// Builds a finite ordinal. `nat(0)` is `Term::Zero`, preserving the
    /// invariant that `Nat(0)` never occurs.
    pub fn nat(n: u64) -> Self {
        if n == 0 {
            Term::Zero
        } else {
            Term::Nat(n)
        }
    }

    /// Builds a raw sum. An empty sequence is `Zero` and a singleton is
    /// the summand itself, so the `Sum` length invariant can never be
    /// violated by construction.
    pub fn sum(mut terms: Vec<Term>) -> Self {
        match terms.len() {
            0 => Term::Zero,
            1 => terms.pop().unwrap_or(Term::Zero),
            _ => Term::Sum(terms),
        }
    }

    /// Builds a raw `base ^ exponent` node.
    pub fn power(base: Term, exponent: Term) -> Self {
        Term::Power(Box::new(base), Box::new(exponent))
    }

    /// Builds a raw `ε_index` node.
    pub fn epsilon(index: Term) -> Self {
        Term::Epsilon(Box::new(index))
    }

    /// Builds a raw `ζ_index` node.
    pub fn zeta(index: Term) -> Self {
        Term::Zeta(Box::new(index))
    }

    /// Builds a raw `η_index` node.
    pub fn eta(index: Term) -> Self {
        Term::Eta(Box::new(index))
    }

    /// Builds a raw `φ_index(argument)` node. Total: every representable
    /// index is a valid Veblen index (indices 0 through 3 collapse to the
    /// named hierarchies during normalization).
    pub fn veblen(index: Term, argument: Term) -> Self {
        Term::Veblen(Box::new(index), Box::new(argument))
    }

    /// Builds a `ψ_index(argument)` node, rejecting indices outside the
    /// supported collapsing range. Only finite indices are accepted; an
    /// infinite subscript would name ordinals past the Bachmann-Howard
    /// ordinal, which is the deliberate ceiling of this workspace.
    pub fn buchholz(index: Term, argument: Term) -> Result<Self, TermError> {
        if !index.is_finite() {
            return Err(TermError::UnsupportedCollapse(
                ErrorInfo::new(
                    "psi-infinite-index",
                    "Buchholz function index must be a finite ordinal",
                )
                .with_context("index", format!("{index:?}"))
                .with_hint("indices 0, 1, 2, ... are supported; ω and above are not"),
            ));
        }
        Ok(Term::Buchholz(Box::new(index), Box::new(argument)))
    }

    /// Returns true when the term is the ordinal 0.
    pub fn is_zero(&self) -> bool {
        matches!(self, Term::Zero)
    }

    /// Returns true when the term denotes a finite ordinal.
    pub fn is_finite(&self) -> bool {
        matches!(self, Term::Zero | Term::Nat(_))
    }

    /// Returns true for additively principal shapes: `Omega`, powers, and
    /// the hierarchy functions. Principal terms are closed under addition
    /// of smaller ordinals from the left, which is what lets the
    /// normalizer absorb dominated summands wholesale.
    pub fn is_principal(&self) -> bool {
        matches!(
            self,
            Term::Omega
                | Term::Power(_, _)
                | Term::Epsilon(_)
                | Term::Zeta(_)
                | Term::Eta(_)
                | Term::Veblen(_, _)
                | Term::Buchholz(_, _)
        )
    }

    /// Structural size: the number of nodes in the tree. Used to bound
    /// the work of normalization in the property tests.
    pub fn node_count(&self) -> usize {
        match self {
            Term::Zero | Term::Nat(_) | Term::Omega => 1,
            Term::Sum(terms) => 1 + terms.iter().map(Term::node_count).sum::<usize>(),
            Term::Power(base, exponent) => 1 + base.node_count() + exponent.node_count(),
            Term::Epsilon(index) | Term::Zeta(index) | Term::Eta(index) => 1 + index.node_count(),
            Term::Veblen(index, argument) | Term::Buchholz(index, argument) => {
                1 + index.node_count() + argument.node_count()
            }
        }
    }

    /// Splits a term into its additive summands: a `Sum` yields its
    /// elements, `Zero` yields nothing, anything else yields itself.
    pub fn summands(self) -> Vec<Term> {
        match self {
            Term::Zero => Vec::new(),
            Term::Sum(terms) => terms,
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nat_zero_collapses_to_zero() {
        assert_eq!(Term::nat(0), Term::Zero);
        assert_eq!(Term::nat(3), Term::Nat(3));
    }

    #[test]
    fn degenerate_sums_never_materialize() {
        assert_eq!(Term::sum(vec![]), Term::Zero);
        assert_eq!(Term::sum(vec![Term::Omega]), Term::Omega);
        assert!(matches!(
            Term::sum(vec![Term::Omega, Term::nat(1)]),
            Term::Sum(_)
        ));
    }

    #[test]
    fn buchholz_rejects_infinite_index() {
        assert!(Term::buchholz(Term::nat(2), Term::Omega).is_ok());
        let err = Term::buchholz(Term::Omega, Term::Omega).unwrap_err();
        assert_eq!(err.info().code, "psi-infinite-index");
    }
}
