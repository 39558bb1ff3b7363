//! Enumerations shared across the settings model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SettingsError;

/// Discriminator naming which kind of math object a settings value
/// describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Coefficient,
    Coefficients,
    Term,
    Terms,
    Expression,
    Equation,
    Inequality,
    Function,
    Point,
    Set,
    Interval,
}

impl ObjectType {
    pub const ALL: [ObjectType; 11] = [
        ObjectType::Coefficient,
        ObjectType::Coefficients,
        ObjectType::Term,
        ObjectType::Terms,
        ObjectType::Expression,
        ObjectType::Equation,
        ObjectType::Inequality,
        ObjectType::Function,
        ObjectType::Point,
        ObjectType::Set,
        ObjectType::Interval,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Coefficient => "coefficient",
            ObjectType::Coefficients => "coefficients",
            ObjectType::Term => "term",
            ObjectType::Terms => "terms",
            ObjectType::Expression => "expression",
            ObjectType::Equation => "equation",
            ObjectType::Inequality => "inequality",
            ObjectType::Function => "function",
            ObjectType::Point => "point",
            ObjectType::Set => "set",
            ObjectType::Interval => "interval",
        }
    }

    /// Short prefix used when deriving test case identifiers.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ObjectType::Coefficient => "coef",
            ObjectType::Coefficients => "coefs",
            ObjectType::Term => "term",
            ObjectType::Terms => "terms",
            ObjectType::Expression => "expr",
            ObjectType::Equation => "eq",
            ObjectType::Inequality => "ineq",
            ObjectType::Function => "fn",
            ObjectType::Point => "pt",
            ObjectType::Set => "set",
            ObjectType::Interval => "int",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| SettingsError::UnsupportedObjectType(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberSet {
    Real,
    Rational,
    Irrational,
    Integer,
    Natural,
}

impl NumberSet {
    pub const ALL: [NumberSet; 5] = [
        NumberSet::Real,
        NumberSet::Rational,
        NumberSet::Irrational,
        NumberSet::Integer,
        NumberSet::Natural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberSet::Real => "real",
            NumberSet::Rational => "rational",
            NumberSet::Irrational => "irrational",
            NumberSet::Integer => "integer",
            NumberSet::Natural => "natural",
        }
    }

    /// Blackboard-style markup for the set.
    pub fn symbol(&self) -> &'static str {
        match self {
            NumberSet::Real => "\\mathbf{R}",
            NumberSet::Rational => "\\mathbf{Q}",
            NumberSet::Irrational => "\\mathbf{I}",
            NumberSet::Integer => "\\mathbf{Z}",
            NumberSet::Natural => "\\mathbf{N}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepresentationType {
    Fraction,
    Mixed,
    Decimal,
    Root,
    Logarithm,
}

impl RepresentationType {
    pub const ALL: [RepresentationType; 5] = [
        RepresentationType::Fraction,
        RepresentationType::Mixed,
        RepresentationType::Decimal,
        RepresentationType::Root,
        RepresentationType::Logarithm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepresentationType::Fraction => "fraction",
            RepresentationType::Mixed => "mixed",
            RepresentationType::Decimal => "decimal",
            RepresentationType::Root => "root",
            RepresentationType::Logarithm => "logarithm",
        }
    }
}

/// Constraint placed on an individual coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoefficientRule {
    Odd,
    Even,
    Square,
    Cube,
    Prime,
    Nonzero,
    Positive,
    Negative,
    Unit,
}

impl CoefficientRule {
    pub const ALL: [CoefficientRule; 9] = [
        CoefficientRule::Odd,
        CoefficientRule::Even,
        CoefficientRule::Square,
        CoefficientRule::Cube,
        CoefficientRule::Prime,
        CoefficientRule::Nonzero,
        CoefficientRule::Positive,
        CoefficientRule::Negative,
        CoefficientRule::Unit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoefficientRule::Odd => "odd",
            CoefficientRule::Even => "even",
            CoefficientRule::Square => "square",
            CoefficientRule::Cube => "cube",
            CoefficientRule::Prime => "prime",
            CoefficientRule::Nonzero => "nonzero",
            CoefficientRule::Positive => "positive",
            CoefficientRule::Negative => "negative",
            CoefficientRule::Unit => "unit",
        }
    }
}

/// Constraint placed on a collection of coefficients as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoefficientsRule {
    Increasing,
    Decreasing,
    Neq,
}

impl CoefficientsRule {
    pub const ALL: [CoefficientsRule; 3] = [
        CoefficientsRule::Increasing,
        CoefficientsRule::Decreasing,
        CoefficientsRule::Neq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoefficientsRule::Increasing => "increasing",
            CoefficientsRule::Decreasing => "decreasing",
            CoefficientsRule::Neq => "neq",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalType {
    Open,
    Closed,
    ClosedOpen,
    OpenClosed,
}

impl IntervalType {
    pub const ALL: [IntervalType; 4] = [
        IntervalType::Open,
        IntervalType::Closed,
        IntervalType::ClosedOpen,
        IntervalType::OpenClosed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalType::Open => "open",
            IntervalType::Closed => "closed",
            IntervalType::ClosedOpen => "closed_open",
            IntervalType::OpenClosed => "open_closed",
        }
    }

    /// Opening and closing bracket for this kind of interval.
    pub fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            IntervalType::Open => ("(", ")"),
            IntervalType::Closed => ("[", "]"),
            IntervalType::ClosedOpen => ("[", ")"),
            IntervalType::OpenClosed => ("(", "]"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InequalityType {
    Less,
    Greater,
    Leq,
    Geq,
}

impl InequalityType {
    pub const ALL: [InequalityType; 4] = [
        InequalityType::Less,
        InequalityType::Greater,
        InequalityType::Leq,
        InequalityType::Geq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InequalityType::Less => "less",
            InequalityType::Greater => "greater",
            InequalityType::Leq => "leq",
            InequalityType::Geq => "geq",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InequalityType::Less => "<",
            InequalityType::Greater => ">",
            InequalityType::Leq => "\\leq",
            InequalityType::Geq => "\\geq",
        }
    }
}

/// Operator used to join several formatted fragments. Values that arrive
/// from outside and match none of the known operators are retained so they
/// can be reported, and are combined as a sum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CombinationType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Power,
    RootSqDiv,
    None,
    Unrecognized(String),
}

impl CombinationType {
    pub const KNOWN: [CombinationType; 7] = [
        CombinationType::Addition,
        CombinationType::Subtraction,
        CombinationType::Multiplication,
        CombinationType::Division,
        CombinationType::Power,
        CombinationType::RootSqDiv,
        CombinationType::None,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            CombinationType::Addition => "addition",
            CombinationType::Subtraction => "subtraction",
            CombinationType::Multiplication => "multiplication",
            CombinationType::Division => "division",
            CombinationType::Power => "power",
            CombinationType::RootSqDiv => "root_sq_div",
            CombinationType::None => "none",
            CombinationType::Unrecognized(other) => other,
        }
    }
}

impl From<String> for CombinationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "addition" => CombinationType::Addition,
            "subtraction" => CombinationType::Subtraction,
            "multiplication" => CombinationType::Multiplication,
            "division" => CombinationType::Division,
            "power" => CombinationType::Power,
            "root_sq_div" => CombinationType::RootSqDiv,
            "none" => CombinationType::None,
            _ => CombinationType::Unrecognized(value),
        }
    }
}

impl From<CombinationType> for String {
    fn from(value: CombinationType) -> Self {
        match value {
            CombinationType::Unrecognized(other) => other,
            known => known
                .as_str()
                .to_string(),
        }
    }
}

/// Rendering strategy for objects made of several parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceMode {
    Simple,
    Complex,
}

impl FromStr for InterfaceMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "simple" => Ok(InterfaceMode::Simple),
            "complex" => Ok(InterfaceMode::Complex),
            other => Err(format!("unknown interface mode '{}'", other)),
        }
    }
}

/// Exponent and root index applied to a formatted fragment. Serialized as
/// the pair `[exponent, root]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Power {
    pub exponent: i32,
    pub root: i32,
}

impl Power {
    pub const IDENTITY: Power = Power {
        exponent: 1,
        root: 1,
    };

    pub fn new(exponent: i32, root: i32) -> Power {
        Power { exponent, root }
    }

    pub fn is_identity(&self) -> bool {
        self.exponent == 1 && self.root == 1
    }
}

impl Default for Power {
    fn default() -> Self {
        Power::IDENTITY
    }
}

impl From<(i32, i32)> for Power {
    fn from((exponent, root): (i32, i32)) -> Self {
        Power { exponent, root }
    }
}

impl From<Power> for (i32, i32) {
    fn from(power: Power) -> Self {
        (power.exponent, power.root)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.exponent, self.root)
    }
}

pub const VARIABLE_NAMES: [&str; 7] = ["x", "y", "z", "a", "b", "c", "d"];

pub const FUNCTION_NAMES: [&str; 9] = ["f", "g", "h", "p", "q", "r", "s", "t", "v"];

pub const OBJECT_NAMES: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

pub const FULL_RANGE: [f64; 2] = [-100.0, 100.0];
pub const NEGATIVE_RANGE: [f64; 2] = [-100.0, -1.0];
pub const POSITIVE_RANGE: [f64; 2] = [1.0, 100.0];
pub const DEFAULT_RANGE: [f64; 2] = [-10.0, 10.0];

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn object_type_names() {
        for object_type in ObjectType::ALL {
            let parsed: ObjectType = object_type
                .as_str()
                .parse()
                .unwrap();
            assert_eq!(parsed, object_type);
        }

        let result = "polygon".parse::<ObjectType>();
        assert_eq!(
            result,
            Err(SettingsError::UnsupportedObjectType("polygon".to_string()))
        );
    }

    #[test]
    fn combination_type_strings() {
        assert_eq!(
            CombinationType::from("root_sq_div".to_string()),
            CombinationType::RootSqDiv
        );
        assert_eq!(
            CombinationType::from("modulo".to_string()),
            CombinationType::Unrecognized("modulo".to_string())
        );
        assert_eq!(String::from(CombinationType::None), "none");
    }

    #[test]
    fn power_as_pair() {
        let power: Power = serde_json::from_str("[2, 3]").unwrap();
        assert_eq!(power, Power::new(2, 3));
        assert_eq!(serde_json::to_string(&power).unwrap(), "[2,3]");
        assert!(Power::default().is_identity());
    }
}
