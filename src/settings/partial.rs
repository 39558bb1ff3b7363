//! Partially specified settings, as supplied by callers and generators.
//! Every field is optional; an absent field is filled from the defaults
//! table when the value is merged.

use serde::{Deserialize, Serialize};

use super::options::*;
use super::ObjectType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialCoefficientSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_set: Option<NumberSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation_type: Option<RepresentationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CoefficientRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialCoefficientsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<PartialCoefficientSettings>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CoefficientsRule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTermSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<PartialCoefficientsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_order: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTermsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<PartialTermSettings>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_type: Option<CombinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_order: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialExpressionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressions: Option<Vec<PartialComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_type: Option<CombinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_order: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PartialComponent {
    Term(PartialTermSettings),
    Terms(PartialTermsSettings),
    Expression(PartialExpressionSettings),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialEquationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<PartialExpressionSettings>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialInequalitySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<PartialExpressionSettings>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inequality_type: Option<InequalityType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialFunctionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<PartialExpressionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialPointSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<PartialCoefficientsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_name: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSetSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<PartialCoefficientsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_name: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialIntervalSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<PartialCoefficientsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_type: Option<IntervalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_name: Option<bool>,
}

/// A partially specified math object; the variant is the object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "objectType", content = "settings", rename_all = "lowercase")]
pub enum PartialMathObject {
    Coefficient(PartialCoefficientSettings),
    Coefficients(PartialCoefficientsSettings),
    Term(PartialTermSettings),
    Terms(PartialTermsSettings),
    Expression(PartialExpressionSettings),
    Equation(PartialEquationSettings),
    Inequality(PartialInequalitySettings),
    Function(PartialFunctionSettings),
    Point(PartialPointSettings),
    Set(PartialSetSettings),
    Interval(PartialIntervalSettings),
}

impl PartialMathObject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            PartialMathObject::Coefficient(_) => ObjectType::Coefficient,
            PartialMathObject::Coefficients(_) => ObjectType::Coefficients,
            PartialMathObject::Term(_) => ObjectType::Term,
            PartialMathObject::Terms(_) => ObjectType::Terms,
            PartialMathObject::Expression(_) => ObjectType::Expression,
            PartialMathObject::Equation(_) => ObjectType::Equation,
            PartialMathObject::Inequality(_) => ObjectType::Inequality,
            PartialMathObject::Function(_) => ObjectType::Function,
            PartialMathObject::Point(_) => ObjectType::Point,
            PartialMathObject::Set(_) => ObjectType::Set,
            PartialMathObject::Interval(_) => ObjectType::Interval,
        }
    }

    /// An object of the given type with nothing specified.
    pub fn empty(object_type: ObjectType) -> PartialMathObject {
        match object_type {
            ObjectType::Coefficient => PartialMathObject::Coefficient(Default::default()),
            ObjectType::Coefficients => PartialMathObject::Coefficients(Default::default()),
            ObjectType::Term => PartialMathObject::Term(Default::default()),
            ObjectType::Terms => PartialMathObject::Terms(Default::default()),
            ObjectType::Expression => PartialMathObject::Expression(Default::default()),
            ObjectType::Equation => PartialMathObject::Equation(Default::default()),
            ObjectType::Inequality => PartialMathObject::Inequality(Default::default()),
            ObjectType::Function => PartialMathObject::Function(Default::default()),
            ObjectType::Point => PartialMathObject::Point(Default::default()),
            ObjectType::Set => PartialMathObject::Set(Default::default()),
            ObjectType::Interval => PartialMathObject::Interval(Default::default()),
        }
    }
}
