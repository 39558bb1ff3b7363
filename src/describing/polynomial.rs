//! Descriptions of terms, term collections, and expressions

use tracing::{debug, warn};

use crate::formatting::{format_combination, format_term};
use crate::settings::*;

use super::coefficients::coefficient_name;
use super::Description;

pub const MISSING_TERM_IDS: &str = "Invalid term settings: termIds is missing.";

pub const MISMATCHED_TERM: &str =
    "Invalid term settings: coefficients and termIds differ in length.";

pub const MISSING_EXPRESSIONS: &str = "Invalid expression settings: missing expressions array";

/// Describe a term, naming its coefficients from `start` onward. The term
/// consumes one index per exponent.
pub fn describe_term(settings: &TermSettings, start: usize) -> Description {
    let count = settings
        .term_ids
        .len();

    if count == 0 {
        warn!("Term without termIds at index {}", start);
        return Description::placeholder(MISSING_TERM_IDS, start);
    }

    let supplied = settings
        .coefficients
        .coefficients
        .len();
    if supplied != count {
        warn!(
            "Term at index {} has {} coefficients for {} termIds",
            start, supplied, count
        );
        return Description::placeholder(MISMATCHED_TERM, start);
    }

    let names: Vec<String> = (0..count)
        .map(|i| coefficient_name(start.saturating_add(i)))
        .collect();

    match format_term(
        &names,
        settings.power,
        &settings.term_ids,
        settings.power_order,
        &settings.variable_name,
    ) {
        Ok(text) => Description {
            text,
            next_index: start.saturating_add(count),
        },
        Err(problem) => {
            warn!("Cannot describe term: {}", problem);
            Description::placeholder(MISSING_TERM_IDS, start)
        }
    }
}

pub fn describe_terms(settings: &TermsSettings, start: usize) -> Description {
    let mut next_index = start;
    let mut fragments = Vec::with_capacity(
        settings
            .terms
            .len(),
    );

    for term in &settings.terms {
        let description = describe_term(term, next_index);
        next_index = description.next_index;
        fragments.push(description.text);
    }

    Description {
        text: format_combination(
            &settings.combination_type,
            &fragments,
            settings.power,
            settings.power_order,
        ),
        next_index,
    }
}

pub fn describe_component(component: &Component, start: usize) -> Description {
    debug!("Describing {} child at index {}", component.kind(), start);
    match component {
        Component::Term(term) => describe_term(term, start),
        Component::Terms(terms) => describe_terms(terms, start),
        Component::Expression(expression) => describe_expression(expression, start),
    }
}

/// Describe each child in order, threading the coefficient index through
/// them, and combine the results.
pub fn describe_expression(settings: &ExpressionSettings, start: usize) -> Description {
    if settings
        .expressions
        .is_empty()
    {
        warn!("Expression without children at index {}", start);
        return Description::placeholder(MISSING_EXPRESSIONS, start);
    }

    let mut next_index = start;
    let mut fragments = Vec::with_capacity(
        settings
            .expressions
            .len(),
    );

    for component in &settings.expressions {
        let description = describe_component(component, next_index);
        next_index = description.next_index;
        fragments.push(description.text);
    }

    Description {
        text: format_combination(
            &settings.combination_type,
            &fragments,
            settings.power,
            settings.power_order,
        ),
        next_index,
    }
}

#[cfg(test)]
mod check {
    use super::*;

    fn term(ids: &[&str]) -> TermSettings {
        TermSettings {
            coefficients: CoefficientsSettings::default().resized(ids.len()),
            term_ids: ids
                .iter()
                .map(|id| id.to_string())
                .collect(),
            ..TermSettings::default()
        }
    }

    #[test]
    fn quadratic_term() {
        let result = describe_term(&term(&["2", "1"]), 1);
        assert_eq!(result.text, "a_{1} x^{2} + a_{2} x");
        assert_eq!(result.next_index, 3);
    }

    #[test]
    fn term_without_ids() {
        let result = describe_term(&term(&[]), 5);
        assert_eq!(result.text, MISSING_TERM_IDS);
        assert_eq!(result.next_index, 5);
    }

    #[test]
    fn term_with_unpaired_coefficients() {
        let settings = TermSettings {
            coefficients: CoefficientsSettings::default(),
            ..term(&["2", "1"])
        };
        let result = describe_term(&settings, 1);
        assert_eq!(result.text, MISMATCHED_TERM);
        assert_eq!(result.next_index, 1);

        let settings = TermSettings {
            coefficients: CoefficientsSettings::default().resized(3),
            ..term(&["1"])
        };
        assert_eq!(describe_term(&settings, 4).text, MISMATCHED_TERM);
    }

    #[test]
    fn indices_near_the_limit() {
        let result = describe_term(&term(&["1", "0"]), usize::MAX - 1);
        assert_eq!(result.next_index, usize::MAX);
    }

    #[test]
    fn terms_thread_indices() {
        let settings = TermsSettings {
            terms: vec![term(&["2", "1"]), term(&["0"])],
            combination_type: CombinationType::Subtraction,
            ..TermsSettings::default()
        };
        let result = describe_terms(&settings, 1);
        assert_eq!(result.text, "a_{1} x^{2} + a_{2} x - a_{3}");
        assert_eq!(result.next_index, 4);
    }

    #[test]
    fn nested_expression() {
        let inner = ExpressionSettings {
            expressions: vec![Component::Term(term(&["1"])), Component::Term(term(&["0"]))],
            combination_type: CombinationType::Multiplication,
            ..ExpressionSettings::default()
        };
        let outer = ExpressionSettings {
            expressions: vec![
                Component::Expression(inner),
                Component::Terms(TermsSettings {
                    terms: vec![term(&["3"])],
                    ..TermsSettings::default()
                }),
            ],
            combination_type: CombinationType::Division,
            ..ExpressionSettings::default()
        };

        let result = describe_expression(&outer, 1);
        assert_eq!(
            result.text,
            "\\frac{\\left(a_{1} x\\right) \\cdot \\left(a_{2}\\right)}{a_{3} x^{3}}"
        );
        assert_eq!(result.next_index, 4);
    }

    #[test]
    fn empty_expression() {
        let settings = ExpressionSettings {
            expressions: vec![],
            ..ExpressionSettings::default()
        };
        let result = describe_expression(&settings, 2);
        assert_eq!(result.text, MISSING_EXPRESSIONS);
        assert_eq!(result.next_index, 2);
    }
}
