//! Single coefficients, varied over number set, rules, representation, and
//! range.

use crate::registry::validation::is_coefficient_valid;
use crate::registry::{choose_three, choose_two, Generator, TestCase};
use crate::settings::*;

/// The ranges coefficients are generated over.
pub const RANGES: [[f64; 2]; 3] = [FULL_RANGE, POSITIVE_RANGE, NEGATIVE_RANGE];

pub struct CoefficientGenerator;

impl CoefficientGenerator {
    fn number_sets(&self) -> Vec<TestCase> {
        self.single(&NumberSet::ALL, "number set", |number_set| {
            PartialCoefficientSettings {
                number_set: Some(*number_set),
                ..Default::default()
            }
        })
    }

    fn rules(&self) -> Vec<TestCase> {
        self.single(&CoefficientRule::ALL, "single rule", |rule| {
            PartialCoefficientSettings {
                rules: Some(vec![*rule]),
                ..Default::default()
            }
        })
    }

    fn representations(&self) -> Vec<TestCase> {
        self.single(
            &RepresentationType::ALL,
            "representation type",
            |representation| PartialCoefficientSettings {
                representation_type: Some(*representation),
                ..Default::default()
            },
        )
    }

    fn ranges(&self) -> Vec<TestCase> {
        self.single(&RANGES, "range", |range| PartialCoefficientSettings {
            range: Some(*range),
            ..Default::default()
        })
    }

    fn two_properties(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.pairs(
            &NumberSet::ALL,
            &CoefficientRule::ALL,
            "number set and rule",
            |number_set, rule| PartialCoefficientSettings {
                number_set: Some(*number_set),
                rules: Some(vec![*rule]),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &NumberSet::ALL,
            &RepresentationType::ALL,
            "number set and representation",
            |number_set, representation| PartialCoefficientSettings {
                number_set: Some(*number_set),
                representation_type: Some(*representation),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &NumberSet::ALL,
            &RANGES,
            "number set and range",
            |number_set, range| PartialCoefficientSettings {
                number_set: Some(*number_set),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &CoefficientRule::ALL,
            &RepresentationType::ALL,
            "rule and representation",
            |rule, representation| PartialCoefficientSettings {
                rules: Some(vec![*rule]),
                representation_type: Some(*representation),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &CoefficientRule::ALL,
            &RANGES,
            "rule and range",
            |rule, range| PartialCoefficientSettings {
                rules: Some(vec![*rule]),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.single(
            &choose_two(&CoefficientRule::ALL),
            "two rules",
            |rules| PartialCoefficientSettings {
                rules: Some(rules.clone()),
                ..Default::default()
            },
        ));

        cases
    }

    fn three_properties(&self) -> Vec<TestCase> {
        let two_rules = choose_two(&CoefficientRule::ALL);
        let three_rules = choose_three(&CoefficientRule::ALL);
        let mut cases = Vec::new();

        cases.extend(self.triples(
            &NumberSet::ALL,
            &CoefficientRule::ALL,
            &RepresentationType::ALL,
            "number set and rule and representation",
            |number_set, rule, representation| PartialCoefficientSettings {
                number_set: Some(*number_set),
                rules: Some(vec![*rule]),
                representation_type: Some(*representation),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &NumberSet::ALL,
            &CoefficientRule::ALL,
            &RANGES,
            "number set and rule and range",
            |number_set, rule, range| PartialCoefficientSettings {
                number_set: Some(*number_set),
                rules: Some(vec![*rule]),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &NumberSet::ALL,
            &RepresentationType::ALL,
            &RANGES,
            "number set and representation and range",
            |number_set, representation, range| PartialCoefficientSettings {
                number_set: Some(*number_set),
                representation_type: Some(*representation),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &NumberSet::ALL,
            &two_rules,
            "number set and two rules",
            |number_set, rules| PartialCoefficientSettings {
                number_set: Some(*number_set),
                rules: Some(rules.clone()),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &CoefficientRule::ALL,
            &RepresentationType::ALL,
            &RANGES,
            "rule and representation and range",
            |rule, representation, range| PartialCoefficientSettings {
                rules: Some(vec![*rule]),
                representation_type: Some(*representation),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &two_rules,
            &RepresentationType::ALL,
            "two rules and representation",
            |rules, representation| PartialCoefficientSettings {
                rules: Some(rules.clone()),
                representation_type: Some(*representation),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &two_rules,
            &RANGES,
            "two rules and range",
            |rules, range| PartialCoefficientSettings {
                rules: Some(rules.clone()),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &NumberSet::ALL,
            &two_rules,
            &RepresentationType::ALL,
            "number set and two rules and representation",
            |number_set, rules, representation| PartialCoefficientSettings {
                number_set: Some(*number_set),
                rules: Some(rules.clone()),
                representation_type: Some(*representation),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &NumberSet::ALL,
            &two_rules,
            &RANGES,
            "number set and two rules and range",
            |number_set, rules, range| PartialCoefficientSettings {
                number_set: Some(*number_set),
                rules: Some(rules.clone()),
                range: Some(*range),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &three_rules,
            &RepresentationType::ALL,
            "three rules and representation",
            |rules, representation| PartialCoefficientSettings {
                rules: Some(rules.clone()),
                representation_type: Some(*representation),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &three_rules,
            &RANGES,
            "three rules and range",
            |rules, range| PartialCoefficientSettings {
                rules: Some(rules.clone()),
                range: Some(*range),
                ..Default::default()
            },
        ));

        cases
    }
}

impl Generator for CoefficientGenerator {
    type Settings = PartialCoefficientSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Coefficient
    }

    fn wrap(&self, settings: PartialCoefficientSettings) -> PartialMathObject {
        PartialMathObject::Coefficient(settings)
    }

    fn validate(&self, settings: &PartialCoefficientSettings) -> bool {
        is_coefficient_valid(settings)
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();
        cases.extend(self.number_sets());
        cases.extend(self.rules());
        cases.extend(self.representations());
        cases.extend(self.ranges());
        cases.extend(self.two_properties());
        cases.extend(self.three_properties());
        cases
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn every_case_is_valid() {
        let cases = CoefficientGenerator.generate_all();
        assert!(!cases.is_empty());

        for case in &cases {
            match &case.settings {
                PartialMathObject::Coefficient(settings) => {
                    assert!(is_coefficient_valid(settings), "{}", case.id)
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn conflicting_rules_are_left_out() {
        let cases = CoefficientGenerator.generate_all();
        assert!(cases
            .iter()
            .all(|case| !case
                .id
                .contains("rules=[odd,even]")));
        assert!(cases
            .iter()
            .any(|case| case.id == "coef:rules=[odd,square]"));
    }
}
