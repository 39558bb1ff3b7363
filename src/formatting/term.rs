//! Formatting a single term from parallel coefficient and exponent lists

use tracing::debug;

use super::{apply_power, FormattingError};
use crate::settings::Power;

fn is_one(coefficient: &str) -> bool {
    coefficient
        .trim()
        .parse::<f64>()
        .map(|value| value == 1.0)
        .unwrap_or(false)
}

fn is_minus_one(coefficient: &str) -> bool {
    coefficient
        .trim()
        .parse::<f64>()
        .map(|value| value == -1.0)
        .unwrap_or(false)
}

/// One coefficient times the variable raised to `order`. Coefficients of
/// exactly one or minus one collapse into the sign of the variable.
pub fn format_monomial(coefficient: &str, order: &str, variable: &str) -> String {
    let order = order.trim();

    match order {
        "0" => {
            if is_one(coefficient) {
                "1".to_string()
            } else if is_minus_one(coefficient) {
                "-1".to_string()
            } else {
                coefficient.to_string()
            }
        }
        "1" => {
            if is_one(coefficient) {
                variable.to_string()
            } else if is_minus_one(coefficient) {
                format!("-{}", variable)
            } else {
                format!("{} {}", coefficient, variable)
            }
        }
        _ => {
            if is_one(coefficient) {
                format!("{}^{{{}}}", variable, order)
            } else if is_minus_one(coefficient) {
                format!("-{}^{{{}}}", variable, order)
            } else {
                format!("{} {}^{{{}}}", coefficient, variable, order)
            }
        }
    }
}

/// Fold `+ -` produced by joining signed monomials into a plain minus.
pub fn normalize_signs(text: &str) -> String {
    let re = crate::regex!(r"\+\s-");
    re.replace_all(text, "- ")
        .into_owned()
}

/// Build a term from its coefficient texts and matching exponents, then
/// apply the term's own power and root.
pub fn format_term<C, T>(
    coefficients: &[C],
    power: Power,
    term_ids: &[T],
    power_first: bool,
    variable: &str,
) -> Result<String, FormattingError>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    if coefficients.is_empty() {
        return Err(FormattingError::NoCoefficients);
    }
    if coefficients.len() != term_ids.len() {
        debug!(
            "Cannot pair {} coefficients with {} term ids",
            coefficients.len(),
            term_ids.len()
        );
        return Err(FormattingError::LengthMismatch {
            coefficients: coefficients.len(),
            term_ids: term_ids.len(),
        });
    }

    let monomials: Vec<String> = coefficients
        .iter()
        .zip(term_ids)
        .map(|(coefficient, order)| {
            format_monomial(coefficient.as_ref(), order.as_ref(), variable)
        })
        .collect();

    let joined = normalize_signs(&monomials.join(" + "));

    Ok(apply_power(&joined, power, power_first))
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn monomial_orders() {
        assert_eq!(format_monomial("a", "0", "x"), "a");
        assert_eq!(format_monomial("1", "0", "x"), "1");
        assert_eq!(format_monomial("-1.0", "0", "x"), "-1");
        assert_eq!(format_monomial("a", "1", "x"), "a x");
        assert_eq!(format_monomial("1", "1", "x"), "x");
        assert_eq!(format_monomial("-1", "1", "x"), "-x");
        assert_eq!(format_monomial("a", "3", "y"), "a y^{3}");
        assert_eq!(format_monomial("1", "2", "x"), "x^{2}");
        assert_eq!(format_monomial("-1", "2", "x"), "-x^{2}");
    }

    #[test]
    fn signs_collapse() {
        let result = format_term(&["a", "-b"], Power::new(1, 1), &["1", "1"], true, "x").unwrap();
        assert!(!result.contains("+ -"));
        assert_eq!(result, "a x - b x");

        let result = format_term(
            &["1", "-1", "3"],
            Power::new(1, 1),
            &["2", "1", "0"],
            true,
            "x",
        )
        .unwrap();
        assert_eq!(result, "x^{2} - x + 3");
    }

    #[test]
    fn term_power_applied() {
        let result = format_term(&["a", "b"], Power::new(2, 1), &["1", "0"], true, "x").unwrap();
        assert_eq!(result, "\\left(a x + b\\right)^{2}");
    }

    #[test]
    fn mismatched_lengths() {
        let result = format_term(&["a"], Power::new(1, 1), &["2", "1"], true, "x");
        assert_eq!(
            result,
            Err(FormattingError::LengthMismatch {
                coefficients: 1,
                term_ids: 2
            })
        );

        let empty: [&str; 0] = [];
        let result = format_term(&empty, Power::new(1, 1), &empty, true, "x");
        assert_eq!(result, Err(FormattingError::NoCoefficients));
    }
}
