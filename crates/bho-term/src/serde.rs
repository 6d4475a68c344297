//! Serialization routines for JSON and binary round-trips.

use crate::errors::{ErrorInfo, TermError};
use crate::term::Term;

/// Serializes a term to a JSON string.
pub fn to_json(term: &Term) -> Result<String, TermError> {
    serde_json::to_string_pretty(term)
        .map_err(|err| TermError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a term from a JSON string.
pub fn from_json(data: &str) -> Result<Term, TermError> {
    serde_json::from_str(data)
        .map_err(|err| TermError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))
}

/// Serializes a term into a binary blob.
pub fn to_bytes(term: &Term) -> Result<Vec<u8>, TermError> {
    bincode::serialize(term)
        .map_err(|err| TermError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a term from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<Term, TermError> {
    bincode::deserialize(bytes)
        .map_err(|err| TermError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))
}
