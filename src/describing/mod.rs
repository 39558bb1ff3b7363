//! Turn complete settings into a textual description of the object they
//! configure.
//!
//! Every coefficient across a nested object receives its own subscript.
//! Describing returns the index after the last one used so that callers
//! composing several objects can keep numbering where the previous one left
//! off.

use std::fmt;

use tracing::debug;

use crate::settings::*;

mod coefficients;
mod collection;
mod polynomial;
mod relation;

pub use coefficients::*;
pub use collection::*;
pub use polynomial::*;
pub use relation::*;

/// A formatted description and the next free coefficient index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    pub next_index: usize,
}

impl Description {
    fn placeholder(text: &str, start: usize) -> Description {
        Description {
            text: text.to_string(),
            next_index: start,
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Describe any math object, numbering coefficients from `start`.
pub fn describe(object: &MathObject, mode: InterfaceMode, start: usize) -> Description {
    debug!("Describing {} from index {}", object.object_type(), start);

    let fixed = |text: String| Description {
        text,
        next_index: start,
    };

    match object {
        MathObject::Coefficient(settings) => Description {
            text: describe_coefficient(settings, start),
            next_index: start.saturating_add(1),
        },
        MathObject::Coefficients(settings) => describe_coefficients(settings, mode, start),
        MathObject::Term(settings) => describe_term(settings, start),
        MathObject::Terms(settings) => describe_terms(settings, start),
        MathObject::Expression(settings) => describe_expression(settings, start),
        MathObject::Equation(settings) => describe_equation(settings, mode, start),
        MathObject::Inequality(settings) => describe_inequality(settings, mode, start),
        MathObject::Function(settings) => describe_function(settings, start),
        MathObject::Point(settings) => fixed(describe_point(settings)),
        MathObject::Set(settings) => fixed(describe_set(settings)),
        MathObject::Interval(settings) => fixed(describe_interval(settings)),
    }
}

impl InterfaceMode {
    /// The mode an editor would present this object in: complex when it
    /// has explicitly separate parts, simple otherwise.
    pub fn infer(object: &MathObject) -> InterfaceMode {
        let explicit = match object {
            MathObject::Equation(settings) => matches!(settings.terms, Sides::Explicit(..)),
            MathObject::Inequality(settings) => matches!(settings.terms, Sides::Explicit(..)),
            MathObject::Coefficients(settings) => !settings.is_uniform(),
            _ => false,
        };

        if explicit {
            InterfaceMode::Complex
        } else {
            InterfaceMode::Simple
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn fixed_objects_keep_index() {
        let point = MathObject::default_for(ObjectType::Point);
        let result = describe(&point, InterfaceMode::Simple, 7);
        assert_eq!(result.text, "A = (a_{1}; a_{2})");
        assert_eq!(result.next_index, 7);
    }

    #[test]
    fn coefficient_consumes_one() {
        let coefficient = MathObject::default_for(ObjectType::Coefficient);
        let result = describe(&coefficient, InterfaceMode::Simple, 2);
        assert_eq!(result.next_index, 3);
        assert!(result
            .text
            .starts_with("a_{2} \\in "));
    }

    #[test]
    fn inferring_mode() {
        let simple = MathObject::Equation(EquationSettings::default());
        assert_eq!(InterfaceMode::infer(&simple), InterfaceMode::Simple);

        let complex = MathObject::Equation(EquationSettings::complex_default());
        assert_eq!(InterfaceMode::infer(&complex), InterfaceMode::Complex);

        let mut coefficients = CoefficientsSettings::default().resized(2);
        coefficients.coefficients[1].number_set = NumberSet::Real;
        assert_eq!(
            InterfaceMode::infer(&MathObject::Coefficients(coefficients)),
            InterfaceMode::Complex
        );
    }
}
