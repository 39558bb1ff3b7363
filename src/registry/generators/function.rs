//! Functions, varied over their name, variable, and body.

use crate::registry::{Generator, TestCase};
use crate::settings::*;

use super::terms::template_term;

// A single default-shaped term in the function's own variable.
fn body_in(variable: &str) -> PartialExpressionSettings {
    PartialExpressionSettings {
        expressions: Some(vec![PartialComponent::Term(PartialTermSettings {
            variable_name: Some(variable.to_string()),
            ..Default::default()
        })]),
        ..Default::default()
    }
}

fn bodies() -> Vec<PartialExpressionSettings> {
    vec![
        PartialExpressionSettings {
            expressions: Some(vec![PartialComponent::Term(PartialTermSettings {
                term_ids: Some(vec!["2".to_string(), "1".to_string(), "0".to_string()]),
                ..Default::default()
            })]),
            ..Default::default()
        },
        PartialExpressionSettings {
            expressions: Some(vec![PartialComponent::Term(template_term()); 2]),
            combination_type: Some(CombinationType::Division),
            ..Default::default()
        },
    ]
}

pub struct FunctionGenerator;

impl Generator for FunctionGenerator {
    type Settings = PartialFunctionSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Function
    }

    fn wrap(&self, settings: PartialFunctionSettings) -> PartialMathObject {
        PartialMathObject::Function(settings)
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&FUNCTION_NAMES, "functionName", |name| {
            PartialFunctionSettings {
                function_name: Some(name.to_string()),
                ..Default::default()
            }
        }));
        cases.extend(self.single(&VARIABLE_NAMES, "variableName", |name| {
            PartialFunctionSettings {
                expression: Some(body_in(name)),
                variable_name: Some(name.to_string()),
                ..Default::default()
            }
        }));
        cases.extend(self.pairs(
            &FUNCTION_NAMES,
            &VARIABLE_NAMES,
            "functionName, variableName",
            |function, variable| PartialFunctionSettings {
                expression: Some(body_in(variable)),
                function_name: Some(function.to_string()),
                variable_name: Some(variable.to_string()),
            },
        ));
        cases.extend(self.single(&bodies(), "expression", |body| {
            PartialFunctionSettings {
                expression: Some(body.clone()),
                ..Default::default()
            }
        }));

        cases
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn names_appear() {
        let cases = FunctionGenerator.generate_all();
        let case = cases
            .iter()
            .find(|case| {
                case.category
                    .as_deref()
                    == Some("functionName, variableName")
                    && case
                        .id
                        .contains("functionName=g;variableName=y")
            })
            .expect("named case");
        assert_eq!(case.description, "g(y) = a_{1} y^{2}");
    }

    #[test]
    fn quadratic_body() {
        let cases = FunctionGenerator.generate_all();
        let case = cases
            .iter()
            .find(|case| {
                case.category
                    .as_deref()
                    == Some("expression")
            })
            .expect("body case");
        assert_eq!(case.description, "f(x) = a_{1} x^{2} + a_{2} x + a_{3}");
    }
}
