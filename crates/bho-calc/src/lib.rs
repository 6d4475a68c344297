#![deny(missing_docs)]
#![doc = "Normalizer, comparator, and arithmetic engines for the BHO ordinal term algebra. Raw terms from bho-term come in, canonical terms come out; see the normalize module for the rewriting rules."]

/// Ordinal addition, multiplication, and exponentiation.
pub mod arith;
/// Total order on canonical terms.
pub mod compare;
/// Hierarchy function constructors (ε, ζ, η, φ, ψ).
pub mod hierarchy;
/// Memoizing normalizer for repeated inputs.
pub mod memo;
/// The canonical-form rewriting system.
pub mod normalize;

pub use arith::{add, multiply, power};
pub use compare::compare;
pub use hierarchy::{buchholz, epsilon, eta, veblen, zeta};
pub use memo::CachedNormalizer;
pub use normalize::{degree, normalize};
