//! The rewriting system that reduces any raw ordinal term to canonical
//! form.
//!
//! Rules fire innermost-out: every child position is normalized before a
//! parent rule applies, so each rule only ever sees canonical children.
//! Termination follows from a well-founded measure; every rule strictly
//! shrinks either the nesting depth or the summand count it works on.
//!
//! The canonical form produced here is stricter than "base is any
//! principal term": every surviving `Power` has base `ω`, because powers
//! of fixed-point bases rewrite through `p^e = ω^(p·e)`. Keeping a single
//! base shape is what makes canonical forms unique across the arithmetic
//! routes (`multiply(ε_0, ε_0)` and `power(ε_0, 2)` land on the same
//! tree).

use std::cmp::Ordering;

use bho_term::Term;

use crate::compare::compare;

/// Reduces a term to canonical form. Total and idempotent: normalizing a
/// canonical term returns it unchanged.
pub fn normalize(term: &Term) -> Term {
    match term {
        Term::Zero => Term::Zero,
        Term::Nat(n) => Term::nat(*n),
        Term::Omega => Term::Omega,
        Term::Sum(terms) => {
            let mut flat = Vec::with_capacity(terms.len());
            for child in terms {
                // Normalizing the child flattens nested sums and drops
                // zeros in one pass.
                flat.extend(normalize(child).summands());
            }
            rebuild_sum(flat)
        }
        Term::Power(base, exponent) => power_canonical(&normalize(base), &normalize(exponent)),
        Term::Epsilon(index) => Term::epsilon(normalize(index)),
        Term::Zeta(index) => Term::zeta(normalize(index)),
        Term::Eta(index) => Term::eta(normalize(index)),
        Term::Veblen(index, argument) => {
            veblen_canonical(&normalize(index), &normalize(argument))
        }
        Term::Buchholz(index, argument) => Term::Buchholz(
            Box::new(normalize(index)),
            Box::new(normalize(argument)),
        ),
    }
}

/// The ω-exponent of a term's leading Cantor summand: `degree(ω^x) = x`,
/// finite terms have degree 0, and the fixed-point hierarchies are their
/// own degree (`ε = ω^ε`). Sums take the degree of their leading summand.
pub fn degree(term: &Term) -> Term {
    match term {
        Term::Zero | Term::Nat(_) => Term::Zero,
        Term::Omega => Term::Nat(1),
        // An empty sum is only reachable through the raw enum; it means 0.
        Term::Sum(terms) => terms.first().map_or(Term::Zero, degree),
        Term::Power(base, exponent) => match base.as_ref() {
            Term::Omega => (**exponent).clone(),
            // b^e = ω^(degree(b)·e) for any other base shape.
            other => multiply_canonical(&degree(other), exponent),
        },
        fixed_point => fixed_point.clone(),
    }
}

/// Canonical addition over already-canonical operands.
pub(crate) fn add_canonical(a: &Term, b: &Term) -> Term {
    let mut flat = a.clone().summands();
    flat.extend(b.clone().summands());
    rebuild_sum(flat)
}

// Right-to-left absorption fold over flattened, canonical summands.
// Adjacent finite summands merge numerically; any other summand is
// dropped when its successor's degree is at least its own, the standard
// `α + β = β` rule for dominated left addends.
fn rebuild_sum(flat: Vec<Term>) -> Term {
    let mut kept_rev: Vec<Term> = Vec::new();
    for candidate in flat.into_iter().rev() {
        if let Some(successor) = kept_rev.last_mut() {
            if let (Term::Nat(m), Term::Nat(n)) = (&candidate, &*successor) {
                let merged = m
                    .checked_add(*n)
                    .unwrap_or_else(|| panic!("finite sum {m} + {n} overflows u64"));
                *successor = Term::Nat(merged);
                continue;
            }
            if compare(&degree(successor), &degree(&candidate)) != Ordering::Less {
                continue;
            }
        }
        kept_rev.push(candidate);
    }
    kept_rev.reverse();
    Term::sum(kept_rev)
}

/// Canonical multiplication over already-canonical operands.
pub(crate) fn multiply_canonical(a: &Term, b: &Term) -> Term {
    match (a, b) {
        (Term::Zero, _) | (_, Term::Zero) => Term::Zero,
        (Term::Nat(1), _) => b.clone(),
        (_, Term::Nat(1)) => a.clone(),
        (Term::Nat(k), Term::Nat(m)) => Term::nat(
            k.checked_mul(*m)
                .unwrap_or_else(|| panic!("finite product {k} * {m} overflows u64")),
        ),
        // Right distributivity: a·(b1 + b2 + ...) = a·b1 + a·b2 + ...
        (_, Term::Sum(parts)) => {
            let mut acc = Term::Zero;
            for part in parts {
                acc = add_canonical(&acc, &multiply_canonical(a, part));
            }
            acc
        }
        // Infinite · finite is repeated addition; absorption makes the
        // fold reach a fixed point almost immediately.
        (_, Term::Nat(n)) => {
            let mut acc = a.clone();
            for _ in 1..*n {
                let next = add_canonical(&acc, a);
                if next == acc {
                    break;
                }
                acc = next;
            }
            acc
        }
        // A finite left factor folds into the principal right factor.
        (Term::Nat(_), _) => b.clone(),
        // Both infinite, b principal: a·ω^x = ω^(degree(a) + x).
        _ => power_canonical(&Term::Omega, &add_canonical(&degree(a), &degree(b))),
    }
}

// Exact k^m over finite coefficients. Results past u64 are not
// representable, so overflow fails loudly instead of wrapping.
fn finite_power(k: u64, m: u64) -> u64 {
    u32::try_from(m)
        .ok()
        .and_then(|exp| k.checked_pow(exp))
        .unwrap_or_else(|| panic!("finite power {k} ^ {m} overflows u64"))
}

/// Canonical exponentiation over already-canonical operands.
pub(crate) fn power_canonical(base: &Term, exponent: &Term) -> Term {
    match (base, exponent) {
        (_, Term::Zero) => Term::Nat(1),
        (Term::Zero, _) => Term::Zero,
        (Term::Nat(1), _) => Term::Nat(1),
        (_, Term::Nat(1)) => base.clone(),
        (Term::Nat(k), Term::Nat(m)) => Term::nat(finite_power(*k, *m)),
        (Term::Nat(k), _) => finite_base_power(*k, exponent),
        (Term::Omega, _) => omega_power(exponent),
        // (b^x)^e = b^(x·e).
        (Term::Power(inner_base, inner_exp), _) => {
            power_canonical(inner_base, &multiply_canonical(inner_exp, exponent))
        }
        (Term::Sum(_), _) => sum_base_power(base, exponent),
        // Fixed-point base: p^e = (ω^p)^e = ω^(p·e).
        _ => power_canonical(&Term::Omega, &multiply_canonical(base, exponent)),
    }
}

/// Collapses `φ_index(argument)` into the named hierarchies for indices
/// 0 through 3; higher indices stay symbolic.
pub(crate) fn veblen_canonical(index: &Term, argument: &Term) -> Term {
    match index {
        Term::Zero => {
            if argument.is_zero() {
                Term::Nat(1)
            } else {
                power_canonical(&Term::Omega, argument)
            }
        }
        Term::Nat(1) => Term::epsilon(argument.clone()),
        Term::Nat(2) => Term::zeta(argument.clone()),
        Term::Nat(3) => Term::eta(argument.clone()),
        _ => Term::veblen(index.clone(), argument.clone()),
    }
}

// ω^e for canonical e, collapsing the fixed points of α ↦ ω^α back to
// their named forms. Buchholz terms are deliberately not collapsed; ψ is
// treated as a principal term with positional comparison only.
fn omega_power(exponent: &Term) -> Term {
    match exponent {
        Term::Zero => Term::Nat(1),
        Term::Nat(1) => Term::Omega,
        Term::Epsilon(_) | Term::Zeta(_) | Term::Eta(_) | Term::Veblen(_, _) => exponent.clone(),
        _ => Term::power(Term::Omega, exponent.clone()),
    }
}

// k^e for finite k >= 2 and infinite e, summand by summand:
// k^(ω^x) = ω^(ω^(-1+x)), which shifts only purely finite x, and a
// plain numeric power for the trailing finite part.
fn finite_base_power(k: u64, exponent: &Term) -> Term {
    let mut acc = Term::Nat(1);
    for summand in exponent.clone().summands() {
        let factor = match &summand {
            Term::Nat(m) => Term::nat(finite_power(k, *m)),
            principal => {
                let x = degree(principal);
                power_canonical(&Term::Omega, &power_canonical(&Term::Omega, &shift_down(&x)))
            }
        };
        acc = multiply_canonical(&acc, &factor);
    }
    acc
}

// a^e for a sum base: finite exponents expand by repeated multiplication,
// limit summands use the leading-term rule a^λ = ω^(degree(a)·λ).
fn sum_base_power(base: &Term, exponent: &Term) -> Term {
    match exponent {
        Term::Nat(n) => {
            let mut acc = base.clone();
            for _ in 1..*n {
                let next = multiply_canonical(&acc, base);
                if next == acc {
                    break;
                }
                acc = next;
            }
            acc
        }
        _ => {
            let mut acc = Term::Nat(1);
            for summand in exponent.clone().summands() {
                let factor = match &summand {
                    Term::Nat(_) => sum_base_power(base, &summand),
                    limit => {
                        power_canonical(&Term::Omega, &multiply_canonical(&degree(base), limit))
                    }
                };
                acc = multiply_canonical(&acc, &factor);
            }
            acc
        }
    }
}

// Computes `-1 + x` for a canonical exponent. Only a purely finite
// exponent shrinks; anything else leads with an infinite summand, which
// absorbs the subtracted one (`1 + x = x`), so it passes through intact.
fn shift_down(exponent: &Term) -> Term {
    match exponent {
        Term::Nat(n) => Term::nat(n - 1),
        _ => exponent.clone(),
    }
}
