//! Points, sets, and intervals, varied over their names and shape.

use crate::registry::{Generator, TestCase};
use crate::settings::*;

const NAMES: [&str; 4] = ["A", "B", "M", "P"];

const SET_SIZES: [usize; 4] = [0, 1, 3, 5];

const MINIMUM_LENGTHS: [f64; 3] = [0.5, 1.0, 5.0];

fn sized(count: usize) -> PartialCoefficientsSettings {
    PartialCoefficientsSettings {
        collection_count: Some(count),
        ..Default::default()
    }
}

pub struct PointGenerator;

impl Generator for PointGenerator {
    type Settings = PartialPointSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Point
    }

    fn wrap(&self, settings: PartialPointSettings) -> PartialMathObject {
        PartialMathObject::Point(settings)
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&NAMES, "name", |name| PartialPointSettings {
            name: Some(name.to_string()),
            ..Default::default()
        }));
        cases.extend(self.pairs(&NAMES, &[true, false], "name, showName", |name, show| {
            PartialPointSettings {
                name: Some(name.to_string()),
                show_name: Some(*show),
                ..Default::default()
            }
        }));
        cases.extend(self.single(&NumberSet::ALL, "numberSet", |number_set| {
            PartialPointSettings {
                coefficients: Some(PartialCoefficientsSettings {
                    coefficients: Some(vec![
                        PartialCoefficientSettings {
                            number_set: Some(*number_set),
                            ..Default::default()
                        };
                        2
                    ]),
                    ..Default::default()
                }),
                ..Default::default()
            }
        }));

        cases
    }
}

pub struct SetGenerator;

impl Generator for SetGenerator {
    type Settings = PartialSetSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Set
    }

    fn wrap(&self, settings: PartialSetSettings) -> PartialMathObject {
        PartialMathObject::Set(settings)
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&NAMES, "name", |name| PartialSetSettings {
            name: Some(name.to_string()),
            ..Default::default()
        }));
        cases.extend(self.single(&SET_SIZES, "collectionCount", |count| {
            PartialSetSettings {
                coefficients: Some(sized(*count)),
                ..Default::default()
            }
        }));
        cases.extend(self.pairs(
            &SET_SIZES,
            &[true, false],
            "collectionCount, showName",
            |count, show| PartialSetSettings {
                coefficients: Some(sized(*count)),
                show_name: Some(*show),
                ..Default::default()
            },
        ));

        cases
    }
}

pub struct IntervalGenerator;

impl Generator for IntervalGenerator {
    type Settings = PartialIntervalSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Interval
    }

    fn wrap(&self, settings: PartialIntervalSettings) -> PartialMathObject {
        PartialMathObject::Interval(settings)
    }

    fn validate(&self, settings: &PartialIntervalSettings) -> bool {
        settings
            .minimum_length
            .map_or(true, |length| length > 0.0)
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&IntervalType::ALL, "intervalType", |interval| {
            PartialIntervalSettings {
                interval_type: Some(*interval),
                ..Default::default()
            }
        }));
        cases.extend(self.single(&MINIMUM_LENGTHS, "minimumLength", |length| {
            PartialIntervalSettings {
                minimum_length: Some(*length),
                ..Default::default()
            }
        }));
        cases.extend(self.pairs(
            &IntervalType::ALL,
            &NAMES,
            "intervalType, name",
            |interval, name| PartialIntervalSettings {
                interval_type: Some(*interval),
                name: Some(name.to_string()),
                ..Default::default()
            },
        ));
        cases.extend(self.triples(
            &IntervalType::ALL,
            &MINIMUM_LENGTHS,
            &[true, false],
            "intervalType, minimumLength, showName",
            |interval, length, show| PartialIntervalSettings {
                interval_type: Some(*interval),
                minimum_length: Some(*length),
                show_name: Some(*show),
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
    fn empty_set() {
        let cases = SetGenerator.generate_all();
        let case = cases
            .iter()
            .find(|case| case.id == "set:coefficients.collectionCount=0")
            .expect("empty set");
        assert_eq!(case.description, "A = \\emptyset");
    }

    #[test]
    fn hidden_point_name() {
        let cases = PointGenerator.generate_all();
        let case = cases
            .iter()
            .find(|case| case.id == "pt:name=B;showName=false")
            .expect("hidden point");
        assert_eq!(case.description, "(a_{1}; a_{2})");
    }

    #[test]
    fn every_interval_has_two_ends() {
        for case in IntervalGenerator.generate_all() {
            let MathObject::Interval(interval) = &case.merged else {
                panic!("unexpected {:?}", case.merged);
            };
            assert_eq!(
                interval
                    .coefficients
                    .coefficients
                    .len(),
                2
            );
        }
    }
}
