//! Complete settings for each kind of math object. Values of these types
//! have every field populated; partially specified input lives in the
//! mirrored types in `partial.rs` until it has been merged against defaults.

use serde::{Deserialize, Serialize};

use super::options::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientSettings {
    pub number_set: NumberSet,
    pub representation_type: RepresentationType,
    pub rules: Vec<CoefficientRule>,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientsSettings {
    pub coefficients: Vec<CoefficientSettings>,
    pub collection_count: usize,
    pub rules: Vec<CoefficientsRule>,
}

impl CoefficientsSettings {
    /// A collection of `count` copies of this collection's first coefficient
    /// (or the default coefficient if there is none).
    pub fn resized(&self, count: usize) -> CoefficientsSettings {
        let template = self
            .coefficients
            .first()
            .cloned()
            .unwrap_or_default();

        CoefficientsSettings {
            coefficients: vec![template; count],
            collection_count: count,
            rules: self
                .rules
                .clone(),
        }
    }

    /// Whether every coefficient in the collection is configured
    /// identically.
    pub fn is_uniform(&self) -> bool {
        match self
            .coefficients
            .split_first()
        {
            Some((first, rest)) => rest
                .iter()
                .all(|other| other == first),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSettings {
    pub coefficients: CoefficientsSettings,
    pub term_ids: Vec<String>,
    pub variable_name: String,
    pub power: Power,
    pub power_order: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsSettings {
    pub terms: Vec<TermSettings>,
    pub combination_type: CombinationType,
    pub power: Power,
    pub power_order: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionSettings {
    pub expressions: Vec<Component>,
    pub combination_type: CombinationType,
    pub power: Power,
    pub power_order: bool,
}

/// A child of an expression: a single term, a combined collection of terms,
/// or a nested expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Component {
    Term(TermSettings),
    Terms(TermsSettings),
    Expression(ExpressionSettings),
}

impl Component {
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Term(_) => "term",
            Component::Terms(_) => "terms",
            Component::Expression(_) => "expression",
        }
    }
}

/// The sides of an equation or inequality. A single expression is
/// implicitly compared against zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<ExpressionSettings>",
    into = "Vec<ExpressionSettings>"
)]
pub enum Sides {
    Implicit(ExpressionSettings),
    Explicit(ExpressionSettings, ExpressionSettings),
}

impl Sides {
    pub fn len(&self) -> usize {
        match self {
            Sides::Implicit(_) => 1,
            Sides::Explicit(_, _) => 2,
        }
    }

    pub fn first(&self) -> &ExpressionSettings {
        match self {
            Sides::Implicit(first) => first,
            Sides::Explicit(first, _) => first,
        }
    }

    pub fn to_vec(&self) -> Vec<ExpressionSettings> {
        self.clone()
            .into()
    }
}

impl TryFrom<Vec<ExpressionSettings>> for Sides {
    type Error = String;

    fn try_from(mut sides: Vec<ExpressionSettings>) -> Result<Self, Self::Error> {
        match sides.len() {
            1 => Ok(Sides::Implicit(sides.remove(0))),
            2 => {
                let right = sides.remove(1);
                let left = sides.remove(0);
                Ok(Sides::Explicit(left, right))
            }
            n => Err(format!("expected one or two sides, found {}", n)),
        }
    }
}

impl From<Sides> for Vec<ExpressionSettings> {
    fn from(sides: Sides) -> Self {
        match sides {
            Sides::Implicit(only) => vec![only],
            Sides::Explicit(left, right) => vec![left, right],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationSettings {
    pub terms: Sides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InequalitySettings {
    pub terms: Sides,
    pub inequality_type: InequalityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSettings {
    pub expression: ExpressionSettings,
    pub function_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSettings {
    pub coefficients: CoefficientsSettings,
    pub name: String,
    pub show_name: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSettings {
    pub coefficients: CoefficientsSettings,
    pub name: String,
    pub show_name: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSettings {
    pub coefficients: CoefficientsSettings,
    pub minimum_length: f64,
    pub interval_type: IntervalType,
    pub name: String,
    pub show_name: bool,
}

/// One fully specified math object; the variant is the object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "objectType", content = "settings", rename_all = "lowercase")]
pub enum MathObject {
    Coefficient(CoefficientSettings),
    Coefficients(CoefficientsSettings),
    Term(TermSettings),
    Terms(TermsSettings),
    Expression(ExpressionSettings),
    Equation(EquationSettings),
    Inequality(InequalitySettings),
    Function(FunctionSettings),
    Point(PointSettings),
    Set(SetSettings),
    Interval(IntervalSettings),
}

impl MathObject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            MathObject::Coefficient(_) => ObjectType::Coefficient,
            MathObject::Coefficients(_) => ObjectType::Coefficients,
            MathObject::Term(_) => ObjectType::Term,
            MathObject::Terms(_) => ObjectType::Terms,
            MathObject::Expression(_) => ObjectType::Expression,
            MathObject::Equation(_) => ObjectType::Equation,
            MathObject::Inequality(_) => ObjectType::Inequality,
            MathObject::Function(_) => ObjectType::Function,
            MathObject::Point(_) => ObjectType::Point,
            MathObject::Set(_) => ObjectType::Set,
            MathObject::Interval(_) => ObjectType::Interval,
        }
    }
}

/// A math object together with the metadata an exercise keeps about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathObjectSettings {
    pub object: MathObject,
    pub example: String,
    pub priority: i32,
    pub dependency: String,
}
