//! One generator per object type

mod coefficient;
mod coefficients;
mod collection;
mod expression;
mod function;
mod relation;
mod term;
mod terms;

// Re-export all public symbols
pub use coefficient::*;
pub use coefficients::*;
pub use collection::*;
pub use expression::*;
pub use function::*;
pub use relation::*;
pub use term::*;
pub use terms::*;

use super::{FactoryFn, Generator, GeneratorFn, TestCase};
use crate::settings::{ObjectType, PartialMathObject};

fn boxed<G>(generator: G) -> GeneratorFn
where
    G: Generator + Send + Sync + 'static,
{
    Box::new(move || generator.generate_all())
}

/// The generator for a type.
pub fn generator_for(object_type: ObjectType) -> GeneratorFn {
    match object_type {
        ObjectType::Coefficient => boxed(CoefficientGenerator),
        ObjectType::Coefficients => boxed(CoefficientsGenerator),
        ObjectType::Term => boxed(TermGenerator),
        ObjectType::Terms => boxed(TermsGenerator),
        ObjectType::Expression => boxed(ExpressionGenerator),
        ObjectType::Equation => boxed(EquationGenerator),
        ObjectType::Inequality => boxed(InequalityGenerator),
        ObjectType::Function => boxed(FunctionGenerator),
        ObjectType::Point => boxed(PointGenerator),
        ObjectType::Set => boxed(SetGenerator),
        ObjectType::Interval => boxed(IntervalGenerator),
    }
}

/// A factory building one case of the given type from caller supplied
/// settings. Settings of any other type are refused.
pub fn factory_for(object_type: ObjectType) -> FactoryFn {
    Box::new(move |settings: PartialMathObject| {
        if settings.object_type() == object_type {
            Some(TestCase::new(settings, None))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn every_type_generates() {
        for object_type in ObjectType::ALL {
            let cases = generator_for(object_type)();
            assert!(!cases.is_empty(), "{}", object_type);
            assert!(cases
                .iter()
                .all(|case| case.object_type == object_type));
        }
    }

    #[test]
    fn factories_check_the_type() {
        let factory = factory_for(ObjectType::Set);
        assert!(factory(PartialMathObject::empty(ObjectType::Set)).is_some());
        assert!(factory(PartialMathObject::empty(ObjectType::Point)).is_none());
    }
}
