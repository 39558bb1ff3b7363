//! Joining formatted fragments with a combination operator

use tracing::warn;

use super::apply_power;
use crate::settings::{CombinationType, Power};

fn grouped_product(fragments: &[String], open: &str, close: &str) -> String {
    fragments
        .iter()
        .map(|fragment| format!("{}{}{}", open, fragment, close))
        .collect::<Vec<_>>()
        .join(" \\cdot ")
}

/// Combine fragments according to `combination`, then apply the power and
/// root to the combined text. An empty list combines to an empty string.
pub fn format_combination(
    combination: &CombinationType,
    fragments: &[String],
    power: Power,
    power_first: bool,
) -> String {
    let Some(first) = fragments.first() else {
        warn!("No fragments to combine");
        return String::new();
    };

    let combined = match combination {
        CombinationType::Addition => fragments.join(" + "),
        CombinationType::Subtraction => fragments.join(" - "),
        CombinationType::Multiplication => grouped_product(fragments, "\\left(", "\\right)"),
        CombinationType::Division => {
            if fragments.len() > 1 {
                format!("\\frac{{{}}}{{{}}}", first, fragments[1..].join(" "))
            } else {
                first.clone()
            }
        }
        CombinationType::Power => {
            if let [base, exponent] = fragments {
                format!("\\left({} \\right)^{{{}}}", base, exponent)
            } else {
                warn!(
                    "Power combination needs exactly 2 fragments, found {}",
                    fragments.len()
                );
                grouped_product(fragments, "(", ")")
            }
        }
        CombinationType::RootSqDiv => {
            format!("\\frac{{\\sqrt{{({})^2}}}}{{{}}}", first, first)
        }
        CombinationType::None => first.clone(),
        CombinationType::Unrecognized(name) => {
            warn!("Unrecognized combination type '{}', using addition", name);
            fragments.join(" + ")
        }
    };

    apply_power(&combined, power, power_first)
}

#[cfg(test)]
mod check {
    use super::*;

    fn fragments(values: &[&str]) -> Vec<String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn sums_and_differences() {
        let parts = fragments(&["a", "b"]);
        assert_eq!(
            format_combination(&CombinationType::Addition, &parts, Power::IDENTITY, true),
            "a + b"
        );
        assert_eq!(
            format_combination(&CombinationType::Subtraction, &parts, Power::IDENTITY, true),
            "a - b"
        );
    }

    #[test]
    fn products_and_quotients() {
        let parts = fragments(&["a", "b", "c"]);
        assert_eq!(
            format_combination(&CombinationType::Multiplication, &parts, Power::IDENTITY, true),
            "\\left(a\\right) \\cdot \\left(b\\right) \\cdot \\left(c\\right)"
        );
        assert_eq!(
            format_combination(&CombinationType::Division, &parts, Power::IDENTITY, true),
            "\\frac{a}{b c}"
        );
        assert_eq!(
            format_combination(&CombinationType::Division, &parts[..1], Power::IDENTITY, true),
            "a"
        );
    }

    #[test]
    fn power_arity() {
        let parts = fragments(&["a", "b"]);
        assert_eq!(
            format_combination(&CombinationType::Power, &parts, Power::IDENTITY, true),
            "\\left(a \\right)^{b}"
        );

        let parts = fragments(&["a", "b", "c"]);
        assert_eq!(
            format_combination(&CombinationType::Power, &parts, Power::IDENTITY, true),
            "(a) \\cdot (b) \\cdot (c)"
        );
    }

    #[test]
    fn identities_and_fallbacks() {
        let parts = fragments(&["a", "b"]);
        assert_eq!(
            format_combination(&CombinationType::RootSqDiv, &parts, Power::IDENTITY, true),
            "\\frac{\\sqrt{(a)^2}}{a}"
        );
        assert_eq!(
            format_combination(&CombinationType::None, &parts, Power::IDENTITY, true),
            "a"
        );
        assert_eq!(
            format_combination(
                &CombinationType::Unrecognized("modulo".to_string()),
                &parts,
                Power::IDENTITY,
                true
            ),
            "a + b"
        );
        assert_eq!(
            format_combination(&CombinationType::Addition, &[], Power::IDENTITY, true),
            ""
        );
    }

    #[test]
    fn combined_power() {
        let parts = fragments(&["a", "b"]);
        assert_eq!(
            format_combination(&CombinationType::Addition, &parts, Power::new(1, 2), true),
            "\\sqrt{a + b}"
        );
    }
}
