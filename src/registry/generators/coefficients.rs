//! Coefficient collections, varied over size, collection rules, and the
//! configuration of their members.

use crate::registry::validation::is_coefficient_valid;
use crate::registry::{choose_two, Generator, TestCase};
use crate::settings::*;

const COUNTS: [usize; 4] = [1, 2, 3, 5];

pub struct CoefficientsGenerator;

// Members that differ from one another, which forces the collection to be
// described one coefficient at a time.
fn mixed_members() -> Vec<Vec<PartialCoefficientSettings>> {
    vec![
        vec![
            PartialCoefficientSettings {
                number_set: Some(NumberSet::Integer),
                ..Default::default()
            },
            PartialCoefficientSettings {
                number_set: Some(NumberSet::Rational),
                representation_type: Some(RepresentationType::Fraction),
                ..Default::default()
            },
        ],
        vec![
            PartialCoefficientSettings {
                rules: Some(vec![CoefficientRule::Positive]),
                ..Default::default()
            },
            PartialCoefficientSettings {
                rules: Some(vec![CoefficientRule::Negative]),
                ..Default::default()
            },
            PartialCoefficientSettings {
                number_set: Some(NumberSet::Natural),
                rules: Some(vec![CoefficientRule::Prime]),
                range: Some(POSITIVE_RANGE),
                ..Default::default()
            },
        ],
    ]
}

impl Generator for CoefficientsGenerator {
    type Settings = PartialCoefficientsSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Coefficients
    }

    fn wrap(&self, settings: PartialCoefficientsSettings) -> PartialMathObject {
        PartialMathObject::Coefficients(settings)
    }

    fn validate(&self, settings: &PartialCoefficientsSettings) -> bool {
        let count = settings
            .collection_count
            .or_else(|| {
                settings
                    .coefficients
                    .as_ref()
                    .map(Vec::len)
            })
            .unwrap_or(1);
        let rules = settings
            .rules
            .as_deref()
            .unwrap_or(&[]);

        let ordered = rules.contains(&CoefficientsRule::Increasing)
            || rules.contains(&CoefficientsRule::Decreasing);

        if ordered && count < 2 {
            return false;
        }
        if rules.contains(&CoefficientsRule::Increasing)
            && rules.contains(&CoefficientsRule::Decreasing)
        {
            return false;
        }

        settings
            .coefficients
            .iter()
            .flatten()
            .all(is_coefficient_valid)
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&COUNTS, "collectionCount", |count| {
            PartialCoefficientsSettings {
                collection_count: Some(*count),
                ..Default::default()
            }
        }));
        cases.extend(self.single(&CoefficientsRule::ALL, "rules", |rule| {
            PartialCoefficientsSettings {
                collection_count: Some(2),
                rules: Some(vec![*rule]),
                ..Default::default()
            }
        }));
        cases.extend(self.pairs(
            &COUNTS,
            &CoefficientsRule::ALL,
            "collectionCount, rules",
            |count, rule| PartialCoefficientsSettings {
                collection_count: Some(*count),
                rules: Some(vec![*rule]),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &COUNTS,
            &choose_two(&CoefficientsRule::ALL),
            "collectionCount, two rules",
            |count, rules| PartialCoefficientsSettings {
                collection_count: Some(*count),
                rules: Some(rules.clone()),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &COUNTS,
            &NumberSet::ALL,
            "collectionCount, numberSet",
            |count, number_set| PartialCoefficientsSettings {
                coefficients: Some(vec![
                    PartialCoefficientSettings {
                        number_set: Some(*number_set),
                        ..Default::default()
                    };
                    *count
                ]),
                collection_count: Some(*count),
                ..Default::default()
            },
        ));
        cases.extend(self.single(&mixed_members(), "mixed coefficients", |members| {
            PartialCoefficientsSettings {
                coefficients: Some(members.clone()),
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
    fn ordering_needs_two_members() {
        let settings = PartialCoefficientsSettings {
            collection_count: Some(1),
            rules: Some(vec![CoefficientsRule::Increasing]),
            ..Default::default()
        };
        assert!(!CoefficientsGenerator.validate(&settings));

        let settings = PartialCoefficientsSettings {
            collection_count: Some(3),
            rules: Some(vec![CoefficientsRule::Increasing, CoefficientsRule::Decreasing]),
            ..Default::default()
        };
        assert!(!CoefficientsGenerator.validate(&settings));
    }

    #[test]
    fn mixed_members_are_listed_separately() {
        let cases = CoefficientsGenerator.generate_all();
        let mixed: Vec<&TestCase> = cases
            .iter()
            .filter(|case| case.category.as_deref() == Some("mixed coefficients"))
            .collect();

        assert_eq!(mixed.len(), 2);
        assert!(mixed[0]
            .description
            .contains(" \\quad \\quad "));
    }
}
