#![deny(missing_docs)]
#![doc = "Ordinal term algebra up to the Bachmann-Howard ordinal: the Term data model, construction errors, structural hashing, and serialization. The normalizer, comparator, and arithmetic live in bho-calc."]

/// Structured error types reported at term construction and interchange.
pub mod errors;
/// Stable structural hashing (SipHash memo keys, SHA-256 artifacts).
pub mod hash;
/// JSON and binary serialization round-trips.
pub mod serde;
/// The ordinal expression tree and its smart constructors.
pub mod term;

pub use errors::{ErrorInfo, TermError};
pub use hash::{canonical_hash, structural_hash};
pub use term::Term;
