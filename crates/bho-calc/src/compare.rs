//! Total order on canonical ordinal terms.
//!
//! `compare` is defined on canonical-form terms only; it never
//! re-normalizes, which keeps it cheap enough to reuse inside the
//! normalizer's absorption rule. Two canonical terms compare `Equal`
//! exactly when they are structurally identical.

use std::cmp::Ordering;

use bho_term::Term;

/// Rank of a principal term's hierarchy, reflecting growth dominance.
/// `Power < Epsilon < Zeta < Eta < Veblen < Buchholz`; `Omega` ranks with
/// `Power` because it abbreviates `ω^1`.
fn kind_rank(term: &Term) -> u8 {
    match term {
        // Finite terms and sums are ordered before ranking applies.
        Term::Zero | Term::Nat(_) | Term::Sum(_) => 0,
        Term::Omega | Term::Power(_, _) => 1,
        Term::Epsilon(_) => 2,
        Term::Zeta(_) => 3,
        Term::Eta(_) => 4,
        Term::Veblen(_, _) => 5,
        Term::Buchholz(_, _) => 6,
    }
}

/// Compares two canonical terms under the ordinal well-order.
pub fn compare(a: &Term, b: &Term) -> Ordering {
    match (a, b) {
        (Term::Zero, Term::Zero) => Ordering::Equal,
        (Term::Zero, _) => Ordering::Less,
        (_, Term::Zero) => Ordering::Greater,
        (Term::Nat(m), Term::Nat(n)) => m.cmp(n),
        // Canonical sums lead with an infinite summand, so every
        // remaining shape is infinite and beats any finite term.
        (Term::Nat(_), _) => Ordering::Less,
        (_, Term::Nat(_)) => Ordering::Greater,
        (Term::Sum(xs), Term::Sum(ys)) => {
            for (x, y) in xs.iter().zip(ys.iter()) {
                match compare(x, y) {
                    Ordering::Equal => continue,
                    decided => return decided,
                }
            }
            // A shared prefix: the longer sum carries a positive tail.
            xs.len().cmp(&ys.len())
        }
        // An empty sum is only reachable through the raw enum; it means 0
        // and sorts below everything that got past the Zero arms.
        (Term::Sum(xs), _) => match xs.first() {
            None => Ordering::Less,
            Some(lead) => match compare(lead, b) {
                Ordering::Equal => Ordering::Greater,
                decided => decided,
            },
        },
        (_, Term::Sum(ys)) => match ys.first() {
            None => Ordering::Greater,
            Some(lead) => match compare(a, lead) {
                Ordering::Equal => Ordering::Less,
                decided => decided,
            },
        },
        _ => {
            let (rank_a, rank_b) = (kind_rank(a), kind_rank(b));
            if rank_a != rank_b {
                rank_a.cmp(&rank_b)
            } else {
                compare_same_kind(a, b)
            }
        }
    }
}

// Both terms are principal and share a kind rank; compare arguments
// positionally, index/base before argument/exponent.
fn compare_same_kind(a: &Term, b: &Term) -> Ordering {
    match (a, b) {
        (Term::Omega, Term::Omega) => Ordering::Equal,
        (Term::Omega, Term::Power(base, exponent)) => {
            match compare(&Term::Omega, base) {
                Ordering::Equal => compare(&Term::Nat(1), exponent),
                decided => decided,
            }
        }
        (Term::Power(base, exponent), Term::Omega) => {
            match compare(base, &Term::Omega) {
                Ordering::Equal => compare(exponent, &Term::Nat(1)),
                decided => decided,
            }
        }
        (Term::Power(base_a, exp_a), Term::Power(base_b, exp_b)) => {
            match compare(base_a, base_b) {
                Ordering::Equal => compare(exp_a, exp_b),
                decided => decided,
            }
        }
        (Term::Epsilon(i), Term::Epsilon(j))
        | (Term::Zeta(i), Term::Zeta(j))
        | (Term::Eta(i), Term::Eta(j)) => compare(i, j),
        (Term::Veblen(index_a, arg_a), Term::Veblen(index_b, arg_b))
        | (Term::Buchholz(index_a, arg_a), Term::Buchholz(index_b, arg_b)) => {
            match compare(index_a, index_b) {
                Ordering::Equal => compare(arg_a, arg_b),
                decided => decided,
            }
        }
        // Ranks matched, so the shapes match; nothing else reaches here.
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_terms_compare_numerically() {
        assert_eq!(compare(&Term::nat(2), &Term::nat(5)), Ordering::Less);
        assert_eq!(compare(&Term::nat(5), &Term::nat(5)), Ordering::Equal);
        assert_eq!(compare(&Term::Zero, &Term::nat(1)), Ordering::Less);
    }

    #[test]
    fn infinite_beats_finite() {
        assert_eq!(compare(&Term::nat(1_000_000), &Term::Omega), Ordering::Less);
        assert_eq!(compare(&Term::Omega, &Term::nat(1)), Ordering::Greater);
    }

    #[test]
    fn omega_ranks_with_its_power_form() {
        let omega_sq = Term::power(Term::Omega, Term::nat(2));
        assert_eq!(compare(&Term::Omega, &omega_sq), Ordering::Less);
        assert_eq!(compare(&omega_sq, &Term::Omega), Ordering::Greater);
    }

    #[test]
    fn hierarchy_ranks_dominate_arguments() {
        let big_power = Term::power(Term::Omega, Term::power(Term::Omega, Term::Omega));
        let eps = Term::epsilon(Term::Zero);
        assert_eq!(compare(&big_power, &eps), Ordering::Less);
        assert_eq!(
            compare(&Term::zeta(Term::Zero), &Term::epsilon(Term::Omega)),
            Ordering::Greater
        );
    }

    #[test]
    fn sums_compare_lexicographically() {
        let a = Term::Sum(vec![Term::power(Term::Omega, Term::nat(2)), Term::Nat(1)]);
        let b = Term::Sum(vec![Term::power(Term::Omega, Term::nat(2)), Term::Omega]);
        assert_eq!(compare(&a, &b), Ordering::Less);
        let prefix = Term::Sum(vec![Term::power(Term::Omega, Term::nat(2)), Term::Omega]);
        let longer = Term::Sum(vec![
            Term::power(Term::Omega, Term::nat(2)),
            Term::Omega,
            Term::Nat(1),
        ]);
        assert_eq!(compare(&prefix, &longer), Ordering::Less);
    }

    #[test]
    fn raw_empty_sum_compares_as_finite() {
        let empty = Term::Sum(Vec::new());
        assert_eq!(compare(&empty, &Term::Omega), Ordering::Less);
        assert_eq!(compare(&Term::Omega, &empty), Ordering::Greater);
        assert_eq!(compare(&empty, &empty), Ordering::Equal);
    }

    #[test]
    fn sum_beats_its_own_leading_summand() {
        let sum = Term::Sum(vec![Term::Omega, Term::Nat(1)]);
        assert_eq!(compare(&sum, &Term::Omega), Ordering::Greater);
        assert_eq!(compare(&Term::Omega, &sum), Ordering::Less);
    }
}
