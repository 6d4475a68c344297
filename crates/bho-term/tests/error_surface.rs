use bho_term::errors::{ErrorInfo, TermError};
use bho_term::Term;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("input", "ψ_ω(0)")
        .with_context("position", "2")
}

#[test]
fn malformed_index_surface() {
    let err = TermError::MalformedIndex(sample_info("N001", "unexpected token"));
    assert_eq!(err.info().code, "N001");
    assert!(err.info().context.contains_key("input"));
}

#[test]
fn unsupported_collapse_surface() {
    let err = TermError::UnsupportedCollapse(sample_info("B001", "infinite subscript"));
    assert_eq!(err.info().code, "B001");
    assert!(err.info().context.contains_key("position"));
}

#[test]
fn serde_error_surface() {
    let err = TermError::Serde(sample_info("S001", "truncated payload"));
    assert_eq!(err.info().code, "S001");
}

#[test]
fn display_includes_context_and_hint() {
    let err = TermError::UnsupportedCollapse(
        ErrorInfo::new("B002", "index out of range").with_hint("use a finite index"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("index out of range"));
    assert!(rendered.contains("B002"));
    assert!(rendered.contains("use a finite index"));
}

#[test]
fn checked_construction_reports_unsupported_collapse() {
    let err = Term::buchholz(Term::epsilon(Term::Zero), Term::Omega).unwrap_err();
    assert!(matches!(err, TermError::UnsupportedCollapse(_)));
    assert_eq!(err.info().code, "psi-infinite-index");
    assert!(err.info().hint.is_some());
}
