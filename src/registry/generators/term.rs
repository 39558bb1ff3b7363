//! Single terms, varied over variable, exponents, and the power applied to
//! the whole.

use crate::registry::{Generator, TestCase};
use crate::settings::*;

pub const TERM_ID_SETS: [&[&str]; 4] = [&["1"], &["1", "2"], &["1", "2", "3"], &["2", "1", "0"]];

pub const POWERS: [Power; 3] = [
    Power {
        exponent: 0,
        root: 2,
    },
    Power {
        exponent: 1,
        root: 3,
    },
    Power {
        exponent: 2,
        root: 4,
    },
];

pub fn term_ids(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .map(|id| id.to_string())
        .collect()
}

pub struct TermGenerator;

impl Generator for TermGenerator {
    type Settings = PartialTermSettings;

    fn object_type(&self) -> ObjectType {
        ObjectType::Term
    }

    fn wrap(&self, settings: PartialTermSettings) -> PartialMathObject {
        PartialMathObject::Term(settings)
    }

    fn validate(&self, settings: &PartialTermSettings) -> bool {
        !matches!(&settings.term_ids, Some(ids) if ids.is_empty())
    }

    fn generate_all(&self) -> Vec<TestCase> {
        let mut cases = Vec::new();

        cases.extend(self.single(&VARIABLE_NAMES, "variableName", |name| {
            PartialTermSettings {
                variable_name: Some(name.to_string()),
                ..Default::default()
            }
        }));
        cases.extend(self.single(&TERM_ID_SETS, "termIds", |ids| PartialTermSettings {
            term_ids: Some(term_ids(ids)),
            ..Default::default()
        }));
        cases.extend(self.single(&POWERS, "power", |power| PartialTermSettings {
            power: Some(*power),
            ..Default::default()
        }));
        cases.extend(self.single(&[true, false], "powerOrder", |order| {
            PartialTermSettings {
                power: Some(POWERS[1]),
                power_order: Some(*order),
                ..Default::default()
            }
        }));

        cases.extend(self.pairs(
            &VARIABLE_NAMES,
            &POWERS,
            "variableName, power",
            |name, power| PartialTermSettings {
                variable_name: Some(name.to_string()),
                power: Some(*power),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &VARIABLE_NAMES,
            &TERM_ID_SETS,
            "variableName, termIds",
            |name, ids| PartialTermSettings {
                variable_name: Some(name.to_string()),
                term_ids: Some(term_ids(ids)),
                ..Default::default()
            },
        ));
        cases.extend(self.pairs(
            &TERM_ID_SETS,
            &POWERS,
            "termIds, power",
            |ids, power| PartialTermSettings {
                term_ids: Some(term_ids(ids)),
                power: Some(*power),
                ..Default::default()
            },
        ));

        cases.extend(self.triples(
            &VARIABLE_NAMES,
            &TERM_ID_SETS,
            &POWERS,
            "variableName, termIds, power",
            |name, ids, power| PartialTermSettings {
                variable_name: Some(name.to_string()),
                term_ids: Some(term_ids(ids)),
                power: Some(*power),
                ..Default::default()
            },
        ));

        cases
    }
}
