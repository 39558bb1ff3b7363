//! The defaults table. Each settings type has one canonical default,
//! composed bottom-up from the defaults of the types it contains.

use super::options::*;
use super::types::*;

impl Default for CoefficientSettings {
    fn default() -> Self {
        CoefficientSettings {
            number_set: NumberSet::Integer,
            representation_type: RepresentationType::Decimal,
            rules: Vec::new(),
            range: DEFAULT_RANGE,
        }
    }
}

impl Default for CoefficientsSettings {
    fn default() -> Self {
        CoefficientsSettings {
            coefficients: vec![CoefficientSettings::default()],
            collection_count: 1,
            rules: Vec::new(),
        }
    }
}

impl Default for TermSettings {
    fn default() -> Self {
        TermSettings {
            coefficients: CoefficientsSettings::default(),
            term_ids: vec!["2".to_string()],
            variable_name: "x".to_string(),
            power: Power::IDENTITY,
            power_order: true,
        }
    }
}

impl Default for TermsSettings {
    fn default() -> Self {
        TermsSettings {
            terms: vec![TermSettings::default(), TermSettings::default()],
            combination_type: CombinationType::Addition,
            power: Power::IDENTITY,
            power_order: true,
        }
    }
}

impl Default for ExpressionSettings {
    fn default() -> Self {
        ExpressionSettings {
            expressions: vec![Component::default()],
            combination_type: CombinationType::None,
            power: Power::IDENTITY,
            power_order: true,
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Component::Term(TermSettings::default())
    }
}

impl Default for Sides {
    fn default() -> Self {
        Sides::Implicit(ExpressionSettings::two_term_sum())
    }
}

impl ExpressionSettings {
    /// A sum of two default terms; the single side of the simple equation
    /// and inequality defaults.
    pub fn two_term_sum() -> ExpressionSettings {
        ExpressionSettings {
            expressions: vec![Component::default(), Component::default()],
            combination_type: CombinationType::Addition,
            ..ExpressionSettings::default()
        }
    }

    /// An expression wrapping a single default term collection; each side
    /// of the complex equation default.
    pub fn single_terms() -> ExpressionSettings {
        ExpressionSettings {
            expressions: vec![Component::Terms(TermsSettings::default())],
            ..ExpressionSettings::default()
        }
    }
}

impl Default for EquationSettings {
    fn default() -> Self {
        EquationSettings {
            terms: Sides::default(),
        }
    }
}

impl EquationSettings {
    /// Two explicit sides, each holding a collection of terms.
    pub fn complex_default() -> EquationSettings {
        EquationSettings {
            terms: Sides::Explicit(
                ExpressionSettings::single_terms(),
                ExpressionSettings::single_terms(),
            ),
        }
    }
}

impl Default for InequalitySettings {
    fn default() -> Self {
        InequalitySettings {
            terms: Sides::default(),
            inequality_type: InequalityType::Less,
        }
    }
}

impl InequalitySettings {
    /// Two explicit sides, each holding a single term.
    pub fn complex_default() -> InequalitySettings {
        InequalitySettings {
            terms: Sides::Explicit(ExpressionSettings::default(), ExpressionSettings::default()),
            inequality_type: InequalityType::Less,
        }
    }
}

impl Default for FunctionSettings {
    fn default() -> Self {
        FunctionSettings {
            expression: ExpressionSettings::default(),
            function_name: "f".to_string(),
            variable_name: Some("x".to_string()),
        }
    }
}

impl Default for PointSettings {
    fn default() -> Self {
        PointSettings {
            coefficients: CoefficientsSettings::default().resized(2),
            name: "A".to_string(),
            show_name: true,
        }
    }
}

impl Default for SetSettings {
    fn default() -> Self {
        SetSettings {
            coefficients: CoefficientsSettings::default(),
            name: "A".to_string(),
            show_name: true,
        }
    }
}

impl Default for IntervalSettings {
    fn default() -> Self {
        IntervalSettings {
            coefficients: CoefficientsSettings {
                rules: vec![CoefficientsRule::Increasing, CoefficientsRule::Neq],
                ..CoefficientsSettings::default().resized(2)
            },
            minimum_length: 1.0,
            interval_type: IntervalType::Closed,
            name: "A".to_string(),
            show_name: true,
        }
    }
}

impl MathObject {
    /// The canonical default object for a type. Equations and inequalities
    /// use their simple (single side) defaults.
    pub fn default_for(object_type: ObjectType) -> MathObject {
        match object_type {
            ObjectType::Coefficient => MathObject::Coefficient(Default::default()),
            ObjectType::Coefficients => MathObject::Coefficients(Default::default()),
            ObjectType::Term => MathObject::Term(Default::default()),
            ObjectType::Terms => MathObject::Terms(Default::default()),
            ObjectType::Expression => MathObject::Expression(Default::default()),
            ObjectType::Equation => MathObject::Equation(Default::default()),
            ObjectType::Inequality => MathObject::Inequality(Default::default()),
            ObjectType::Function => MathObject::Function(Default::default()),
            ObjectType::Point => MathObject::Point(Default::default()),
            ObjectType::Set => MathObject::Set(Default::default()),
            ObjectType::Interval => MathObject::Interval(Default::default()),
        }
    }
}

pub const DEFAULT_EXAMPLE: &str = "";
pub const DEFAULT_PRIORITY: i32 = 0;
pub const DEFAULT_DEPENDENCY: &str = "none";

impl MathObjectSettings {
    pub fn new(object: MathObject) -> MathObjectSettings {
        MathObjectSettings {
            object,
            example: DEFAULT_EXAMPLE.to_string(),
            priority: DEFAULT_PRIORITY,
            dependency: DEFAULT_DEPENDENCY.to_string(),
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        let term = TermSettings::default();
        assert_eq!(
            term.coefficients
                .coefficients
                .len(),
            term.term_ids
                .len()
        );

        let point = PointSettings::default();
        assert_eq!(
            point
                .coefficients
                .collection_count,
            2
        );
        assert_eq!(
            point
                .coefficients
                .coefficients
                .len(),
            2
        );

        let interval = IntervalSettings::default();
        assert_eq!(
            interval
                .coefficients
                .rules,
            vec![CoefficientsRule::Increasing, CoefficientsRule::Neq]
        );
    }

    #[test]
    fn equation_defaults() {
        let simple = EquationSettings::default();
        assert_eq!(
            simple
                .terms
                .len(),
            1
        );
        assert_eq!(
            simple
                .terms
                .first()
                .expressions
                .len(),
            2
        );

        let complex = EquationSettings::complex_default();
        assert_eq!(
            complex
                .terms
                .len(),
            2
        );
    }

    #[test]
    fn default_for_every_type() {
        for object_type in ObjectType::ALL {
            assert_eq!(MathObject::default_for(object_type).object_type(), object_type);
        }
    }
}
