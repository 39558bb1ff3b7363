//! Expressions, varied over combination, power, and the kinds of children
//! they hold.

use crate::registry::{Generator, TestCase};
use crate::settings::*;

use super::term::POWERS;
use super::terms::template_term;

const CHILD_COUNTS: [usize; 3] = [1, 2, 3];

fn term_children(count: usize) -> Vec<PartialComponent> {
    vec![PartialComponent::Term(template_term()); count]
}

// One child of every kind.
fn mixed_children() -> Vec<PartialComponent> {
    vec![
        PartialComponent::Term(template_term()),
        PartialComponent::Terms(PartialTermsSettings {
            combination_type: Some(CombinationType::Subtraction),
            ..Default::default()
        }),
        PartialComponent::Expression(PartialExpressionSettings {
            expressions: Some(term_children(2)),
            combination_type: Some(CombinationType::Multiplication),
            ..Default::default()
        }),
    ]
}

/// Whether an expression with `count` children can be combined with
/// `combination`.
pub fn arity_allowed(combination: Option<&CombinationType>, count: usize) -> bool {
    match combination {
        Some(CombinationType::Power) => count == 2,
        Some(CombinationType::None) | None => count == 1,
        Some(CombinationType::Unrecognized(_)) => false,
        Some(_) => count > 0,
    }
}

pub struct ExpressionGenerator;

impl Generator for ExpressionGenerator {
    type Settings = PartialExpressionSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Expression
    }

    fn wrap(&self, settings: PartialExpressionSettings) -> PartialMathObject {
        PartialMathObject::Expression(settings)
    }

    fn validate(&self, settings: &PartialExpressionSettings) -> bool {
        let count = settings
            .expressions
            .as_ref()
            .map_or(1, Vec::len);

        arity_allowed(
            settings
                .combination_type
                .as_ref(),
            count,
        )
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(
            &CombinationType::KNOWN,
            "combinationType",
            |combination| PartialExpressionSettings {
                combination_type: Some(combination.clone()),
                ..Default::default()
            },
        ));
        cases.extend(self.single(&POWERS, "power", |power| PartialExpressionSettings {
            power: Some(*power),
            ..Default::default()
        }));
        cases.extend(self.single(&[true, false], "powerOrder", |order| {
            PartialExpressionSettings {
                power: Some(POWERS[1]),
                power_order: Some(*order),
                ..Default::default()
            }
        }));

        cases.extend(self.pairs(
            &CombinationType::KNOWN,
            &CHILD_COUNTS,
            "combinationType, children",
            |combination, count| PartialExpressionSettings {
                expressions: Some(term_children(*count)),
                combination_type: Some(combination.clone()),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &CombinationType::KNOWN,
            &POWERS,
            "combinationType, power",
            |combination, power| PartialExpressionSettings {
                expressions: Some(term_children(2)),
                combination_type: Some(combination.clone()),
                power: Some(*power),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &CombinationType::KNOWN,
            &POWERS,
            &[true, false],
            "combinationType, power, powerOrder",
            |combination, power, order| PartialExpressionSettings {
                expressions: Some(term_children(2)),
                combination_type: Some(combination.clone()),
                power: Some(*power),
                power_order: Some(*order),
            },
        ));
        cases.extend(self.single(
            &[CombinationType::Addition, CombinationType::Multiplication],
            "mixed children",
            |combination| PartialExpressionSettings {
                expressions: Some(mixed_children()),
                combination_type: Some(combination.clone()),
                ..Default::default()
            },
        ));

        cases
    }
}
