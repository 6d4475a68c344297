//! Rendering of ordinal terms to the textual notation.
//!
//! Output re-parses to the same tree: sums and powers are parenthesized
//! wherever the grammar would otherwise regroup them, and compound
//! subscripts are wrapped so `ε_(ω+1)` cannot be misread as `ε_ω + 1`.

use bho_term::Term;

/// Renders a term as notation text (`ω^2+1`, `ε_1`, `φ_4(ω)`, ...).
pub fn render(term: &Term) -> String {
    match term {
        Term::Zero => "0".to_string(),
        Term::Nat(n) => n.to_string(),
        Term::Omega => "ω".to_string(),
        Term::Sum(terms) => terms
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join("+"),
        Term::Power(base, exponent) => {
            format!("{}^{}", render_operand(base), render_operand(exponent))
        }
        Term::Epsilon(index) => format!("ε_{}", render_subscript(index)),
        Term::Zeta(index) => format!("ζ_{}", render_subscript(index)),
        Term::Eta(index) => format!("η_{}", render_subscript(index)),
        Term::Veblen(index, argument) => {
            format!("φ_{}({})", render_subscript(index), render(argument))
        }
        Term::Buchholz(index, argument) => {
            format!("ψ_{}({})", render_subscript(index), render(argument))
        }
    }
}

// Base or exponent position: wrap anything the `^` grammar would split.
fn render_operand(term: &Term) -> String {
    match term {
        Term::Sum(_) | Term::Power(_, _) => format!("({})", render(term)),
        _ => render(term),
    }
}

// Subscript position: only digits and ω may appear bare.
fn render_subscript(term: &Term) -> String {
    match term {
        Term::Zero | Term::Nat(_) | Term::Omega => render(term),
        _ => format!("({})", render(term)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_render_bare() {
        assert_eq!(render(&Term::Zero), "0");
        assert_eq!(render(&Term::nat(42)), "42");
        assert_eq!(render(&Term::Omega), "ω");
    }

    #[test]
    fn sums_and_powers_compose() {
        let term = Term::Sum(vec![
            Term::power(Term::Omega, Term::nat(2)),
            Term::Nat(1),
        ]);
        assert_eq!(render(&term), "ω^2+1");
    }

    #[test]
    fn compound_exponents_are_parenthesized() {
        let term = Term::power(Term::Omega, Term::Sum(vec![Term::Omega, Term::Nat(1)]));
        assert_eq!(render(&term), "ω^(ω+1)");
        let tower = Term::power(Term::Omega, Term::power(Term::Omega, Term::Omega));
        assert_eq!(render(&tower), "ω^(ω^ω)");
    }

    #[test]
    fn hierarchy_subscripts() {
        assert_eq!(render(&Term::epsilon(Term::nat(1))), "ε_1");
        assert_eq!(render(&Term::zeta(Term::Omega)), "ζ_ω");
        let nested = Term::eta(Term::power(Term::Omega, Term::Omega));
        assert_eq!(render(&nested), "η_(ω^ω)");
        let veblen = Term::veblen(Term::nat(4), Term::Omega);
        assert_eq!(render(&veblen), "φ_4(ω)");
    }
}
