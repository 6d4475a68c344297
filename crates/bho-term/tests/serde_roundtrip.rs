use bho_term::serde::{from_bytes, from_json, to_bytes, to_json};
use bho_term::{canonical_hash, structural_hash, Term};

fn deep_sample() -> Term {
    // ε_(ω^ω) + φ_4(ζ_1) + 7
    Term::sum(vec![
        Term::epsilon(Term::power(Term::Omega, Term::Omega)),
        Term::veblen(Term::nat(4), Term::zeta(Term::nat(1))),
        Term::nat(7),
    ])
}

#[test]
fn term_round_trip_json() {
    let term = deep_sample();
    let json = to_json(&term).expect("serialize");
    let decoded = from_json(&json).expect("deserialize");
    assert_eq!(decoded, term);
    assert_eq!(canonical_hash(&decoded), canonical_hash(&term));
}

#[test]
fn term_round_trip_bytes() {
    let term = deep_sample();
    let bytes = to_bytes(&term).expect("serialize");
    let decoded = from_bytes(&bytes).expect("deserialize");
    assert_eq!(decoded, term);
    assert_eq!(structural_hash(&decoded), structural_hash(&term));
}

#[test]
fn malformed_json_reports_serde_error() {
    let err = from_json("{\"not\": \"a term\"}").unwrap_err();
    assert_eq!(err.info().code, "json-deserialize");
}

#[test]
fn truncated_bytes_report_serde_error() {
    let term = deep_sample();
    let bytes = to_bytes(&term).expect("serialize");
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert_eq!(err.info().code, "bincode-deserialize");
}
