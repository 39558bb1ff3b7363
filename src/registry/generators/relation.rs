//! Equations and inequalities, varied over their sides and relation.

use crate::registry::{Generator, TestCase};
use crate::settings::*;

use super::expression::arity_allowed;
use super::terms::template_term;

const CHILD_COUNTS: [usize; 3] = [2, 3, 4];

const SIDE_COMBINATIONS: [CombinationType; 3] = [
    CombinationType::Addition,
    CombinationType::Subtraction,
    CombinationType::Multiplication,
];

fn side(count: usize, combination: &CombinationType) -> PartialExpressionSettings {
    PartialExpressionSettings {
        expressions: Some(vec![PartialComponent::Term(template_term()); count]),
        combination_type: Some(combination.clone()),
        ..Default::default()
    }
}

// A side holding one collection of default terms.
fn terms_side() -> PartialExpressionSettings {
    PartialExpressionSettings {
        expressions: Some(vec![PartialComponent::Terms(PartialTermsSettings::default())]),
        ..Default::default()
    }
}

/// Pairs of sides used for explicit relations.
fn explicit_sides() -> Vec<Vec<PartialExpressionSettings>> {
    vec![
        vec![side(1, &CombinationType::None), side(1, &CombinationType::None)],
        vec![side(2, &CombinationType::Addition), side(1, &CombinationType::None)],
        vec![terms_side(), terms_side()],
        vec![side(3, &CombinationType::Subtraction), terms_side()],
    ]
}

fn sides_allowed(sides: Option<&Vec<PartialExpressionSettings>>) -> bool {
    match sides {
        None => true,
        Some(sides) => {
            (1..=2).contains(&sides.len())
                && sides
                    .iter()
                    .all(|side| {
                        let count = side
                            .expressions
                            .as_ref()
                            .map_or(1, Vec::len);
                        arity_allowed(
                            side.combination_type
                                .as_ref(),
                            count,
                        )
                    })
        }
    }
}

pub struct EquationGenerator;

impl Generator for EquationGenerator {
    type Settings = PartialEquationSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Equation
    }

    fn wrap(&self, settings: PartialEquationSettings) -> PartialMathObject {
        PartialMathObject::Equation(settings)
    }

    fn validate(&self, settings: &PartialEquationSettings) -> bool {
        sides_allowed(
            settings
                .terms
                .as_ref(),
        )
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.pairs(
            &SIDE_COMBINATIONS,
            &CHILD_COUNTS,
            "implicit side",
            |combination, count| PartialEquationSettings {
                terms: Some(vec![side(*count, combination)]),
            },
        ));
        cases.extend(self.single(&explicit_sides(), "explicit sides", |sides| {
            PartialEquationSettings {
                terms: Some(sides.clone()),
            }
        }));

        cases
    }
}

pub struct InequalityGenerator;

impl Generator for InequalityGenerator {
    type Settings = PartialInequalitySettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Inequality
    }

    fn wrap(&self, settings: PartialInequalitySettings) -> PartialMathObject {
        PartialMathObject::Inequality(settings)
    }

    fn validate(&self, settings: &PartialInequalitySettings) -> bool {
        sides_allowed(
            settings
                .terms
                .as_ref(),
        )
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&InequalityType::ALL, "inequalityType", |relation| {
            PartialInequalitySettings {
                inequality_type: Some(*relation),
                ..Default::default()
            }
        }));
        cases.extend(self.pairs(
            &InequalityType::ALL,
            &CHILD_COUNTS,
            "inequalityType, implicit side",
            |relation, count| PartialInequalitySettings {
                terms: Some(vec![side(*count, &CombinationType::Addition)]),
                inequality_type: Some(*relation),
            },
        ));
        cases.extend(self.pairs(
            &InequalityType::ALL,
            &explicit_sides(),
            "inequalityType, explicit sides",
            |relation, sides| PartialInequalitySettings {
                terms: Some(sides.clone()),
                inequality_type: Some(*relation),
            },
        ));

        cases
    }
}
