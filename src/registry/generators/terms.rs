//! Collections of terms, varied over how they are combined and the power
//! applied to the result.

use crate::registry::{Generator, TestCase};
use crate::settings::*;

use super::term::POWERS;

const TERM_COUNTS: [usize; 2] = [2, 3];

/// The term each generated collection is built from.
pub fn template_term() -> PartialTermSettings {
    PartialTermSettings {
        term_ids: Some(vec!["1".to_string()]),
        variable_name: Some("x".to_string()),
        power_order: Some(false),
        ..Default::default()
    }
}

fn terms(count: usize) -> Vec<PartialTermSettings> {
    vec![template_term(); count]
}

pub struct TermsGenerator;

impl Generator for TermsGenerator {
    type Settings = PartialTermsSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Terms
    }

    fn wrap(&self, settings: PartialTermsSettings) -> PartialMathObject {
        PartialMathObject::Terms(settings)
    }

    fn validate(&self, settings: &PartialTermsSettings) -> bool {
        let count = settings
            .terms
            .as_ref()
            .map_or(2, Vec::len);

        match settings.combination_type {
            Some(CombinationType::Power) => count == 2,
            Some(CombinationType::Unrecognized(_)) => false,
            _ => count > 0,
        }
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(
            &CombinationType::KNOWN,
            "combinationType",
            |combination| PartialTermsSettings {
                combination_type: Some(combination.clone()),
                ..Default::default()
            },
        ));
        cases.extend(self.single(&POWERS, "power", |power| PartialTermsSettings {
            power: Some(*power),
            ..Default::default()
        }));
        cases.extend(self.single(&[true, false], "powerOrder", |order| {
            PartialTermsSettings {
                power: Some(POWERS[2]),
                power_order: Some(*order),
                ..Default::default()
            }
        }));
        cases.extend(self.single(&TERM_COUNTS, "termCount", |count| {
            PartialTermsSettings {
                terms: Some(terms(*count)),
                ..Default::default()
            }
        }));

        cases.extend(self.pairs(
            &CombinationType::KNOWN,
            &TERM_COUNTS,
            "combinationType, termCount",
            |combination, count| PartialTermsSettings {
                terms: Some(terms(*count)),
                combination_type: Some(combination.clone()),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &CombinationType::KNOWN,
            &POWERS,
            "combinationType, power",
            |combination, power| PartialTermsSettings {
                combination_type: Some(combination.clone()),
                power: Some(*power),
                ..Default::default()
            },
        ));

        cases
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn power_needs_two_terms() {
        let cases = TermsGenerator.generate_all();
        assert!(cases
            .iter()
            .any(|case| case.id
                == concat!(
                    "terms:terms=2;",
                    "terms[0].termIds=[1];terms[0].variableName=x;terms[0].powerOrder=false;",
                    "terms[1].termIds=[1];terms[1].variableName=x;terms[1].powerOrder=false;",
                    "combinationType=power"
                )));
        assert!(!cases
            .iter()
            .any(|case| case
                .id
                .starts_with("terms:terms=3")
                && case
                    .id
                    .ends_with("combinationType=power")));
    }

    #[test]
    fn subtraction_of_two_terms() {
        let cases = TermsGenerator.generate_all();
        let case = cases
            .iter()
            .find(|case| case.id == "terms:combinationType=subtraction")
            .expect("subtraction case");
        assert_eq!(case.description, "a_{1} x^{2} - a_{2} x^{2}");
    }
}
