//! Combinatorial generation of test cases

use std::collections::HashSet;

use tracing::debug;

use super::TestCase;
use crate::settings::{ObjectType, PartialMathObject};

/// Produces the test cases for one object type by varying properties over
/// fixed lists of representative values.
pub trait Generator {
    /// The partial settings this generator varies.
    type Settings;

    fn object_type(&self) -> ObjectType;

    fn wrap(&self, settings: Self::Settings) -> PartialMathObject;

    /// Whether a candidate is meaningful. Candidates failing this check are
    /// left out of the output.
    fn validate(&self, _settings: &Self::Settings) -> bool {
        true
    }

    fn generate_all(&self) -> Vec<TestCase>;

    fn create(&self, settings: Self::Settings, category: &str) -> Option<TestCase> {
        if !self.validate(&settings) {
            debug!("Rejected {} candidate in '{}'", self.object_type(), category);
            return None;
        }
        Some(TestCase::new(self.wrap(settings), Some(category)))
    }

    /// One case per value.
    fn single<V>(
        &self,
        values: &[V],
        category: &str,
        build: impl Fn(&V) -> Self::Settings,
    ) -> Vec<TestCase> {
        values
            .iter()
            .filter_map(|v| self.create(build(v), category))
            .collect()
    }

    /// One case per pair drawn from two value lists.
    fn pairs<A, B>(
        &self,
        first: &[A],
        second: &[B],
        category: &str,
        build: impl Fn(&A, &B) -> Self::Settings,
    ) -> Vec<TestCase> {
        let mut cases = Vec::new();
        for a in first {
            for b in second {
                cases.extend(self.create(build(a, b), category));
            }
        }
        cases
    }

    /// One case per triple drawn from three value lists.
    fn triples<A, B, C>(
        &self,
        first: &[A],
        second: &[B],
        third: &[C],
        category: &str,
        build: impl Fn(&A, &B, &C) -> Self::Settings,
    ) -> Vec<TestCase> {
        let mut cases = Vec::new();
        for a in first {
            for b in second {
                for c in third {
                    cases.extend(self.create(build(a, b, c), category));
                }
            }
        }
        cases
    }
}

/// Unordered pairs of distinct elements, in list order.
pub fn choose_two<T: Clone>(values: &[T]) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            result.push(vec![values[i].clone(), values[j].clone()]);
        }
    }
    result
}

/// Unordered triples of distinct elements, in list order.
pub fn choose_three<T: Clone>(values: &[T]) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            for k in j + 1..values.len() {
                result.push(vec![values[i].clone(), values[j].clone(), values[k].clone()]);
            }
        }
    }
    result
}

/// Drop every case whose identifier has already been seen, keeping the
/// first occurrence.
pub fn unique(cases: Vec<TestCase>) -> Vec<TestCase> {
    let mut seen = HashSet::new();
    let before = cases.len();

    let result: Vec<TestCase> = cases
        .into_iter()
        .filter(|case| {
            seen.insert(
                case.id
                    .clone(),
            )
        })
        .collect();

    if result.len() < before {
        debug!("Dropped {} duplicate test cases", before - result.len());
    }

    result
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn choosing() {
        let values = [1, 2, 3, 4];
        assert_eq!(choose_two(&values).len(), 6);
        assert_eq!(choose_three(&values).len(), 4);
        assert_eq!(choose_three(&values)[0], vec![1, 2, 3]);
        assert!(choose_two(&values[..1]).is_empty());
    }

    #[test]
    fn first_duplicate_wins() {
        let one = TestCase::new(PartialMathObject::empty(ObjectType::Set), Some("first"));
        let two = TestCase::new(PartialMathObject::empty(ObjectType::Set), Some("second"));
        let other = TestCase::new(PartialMathObject::empty(ObjectType::Point), None);

        let result = unique(vec![one, two, other]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].category, Some("first".to_string()));
    }
}
