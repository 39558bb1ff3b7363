//! The all-slots shape in which an editor hands over the object it is
//! working on. Only the slot named by `objectType` is read.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults::{DEFAULT_DEPENDENCY, DEFAULT_EXAMPLE, DEFAULT_PRIORITY};
use super::partial::*;
use super::{ObjectType, SettingsError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MathInput {
    pub object_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficient_settings: Option<PartialCoefficientSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients_settings: Option<PartialCoefficientsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_settings: Option<PartialTermSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_settings: Option<PartialTermsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_settings: Option<PartialExpressionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation_settings: Option<PartialEquationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inequality_settings: Option<PartialInequalitySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_settings: Option<PartialFunctionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_settings: Option<PartialPointSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_settings: Option<PartialSetSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_settings: Option<PartialIntervalSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,
}

/// Exercise metadata carried alongside the active settings slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub example: String,
    pub priority: i32,
    pub dependency: String,
}

impl MathInput {
    /// Place a partial object into the slot matching its type.
    pub fn from_partial(partial: PartialMathObject) -> MathInput {
        let mut input = MathInput {
            object_type: partial
                .object_type()
                .to_string(),
            ..MathInput::default()
        };

        match partial {
            PartialMathObject::Coefficient(s) => input.coefficient_settings = Some(s),
            PartialMathObject::Coefficients(s) => input.coefficients_settings = Some(s),
            PartialMathObject::Term(s) => input.term_settings = Some(s),
            PartialMathObject::Terms(s) => input.terms_settings = Some(s),
            PartialMathObject::Expression(s) => input.expression_settings = Some(s),
            PartialMathObject::Equation(s) => input.equation_settings = Some(s),
            PartialMathObject::Inequality(s) => input.inequality_settings = Some(s),
            PartialMathObject::Function(s) => input.function_settings = Some(s),
            PartialMathObject::Point(s) => input.point_settings = Some(s),
            PartialMathObject::Set(s) => input.set_settings = Some(s),
            PartialMathObject::Interval(s) => input.interval_settings = Some(s),
        }

        input
    }

    /// Pick out the active slot. Fails if the discriminator names no known
    /// type or if the matching slot was not supplied.
    pub fn resolve(self) -> Result<(PartialMathObject, Metadata), SettingsError> {
        let object_type: ObjectType = self
            .object_type
            .parse()?;

        let missing = || SettingsError::MissingSettings(object_type);

        let partial = match object_type {
            ObjectType::Coefficient => PartialMathObject::Coefficient(
                self.coefficient_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Coefficients => PartialMathObject::Coefficients(
                self.coefficients_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Term => PartialMathObject::Term(
                self.term_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Terms => PartialMathObject::Terms(
                self.terms_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Expression => PartialMathObject::Expression(
                self.expression_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Equation => PartialMathObject::Equation(
                self.equation_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Inequality => PartialMathObject::Inequality(
                self.inequality_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Function => PartialMathObject::Function(
                self.function_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Point => PartialMathObject::Point(
                self.point_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Set => PartialMathObject::Set(
                self.set_settings
                    .ok_or_else(missing)?,
            ),
            ObjectType::Interval => PartialMathObject::Interval(
                self.interval_settings
                    .ok_or_else(missing)?,
            ),
        };

        debug!("Resolved input slot for {}", object_type);

        let metadata = Metadata {
            example: self
                .example
                .unwrap_or_else(|| DEFAULT_EXAMPLE.to_string()),
            priority: self
                .priority
                .unwrap_or(DEFAULT_PRIORITY),
            dependency: self
                .dependency
                .unwrap_or_else(|| DEFAULT_DEPENDENCY.to_string()),
        };

        Ok((partial, metadata))
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn resolving_active_slot() {
        let input = MathInput::from_partial(PartialMathObject::Term(PartialTermSettings {
            term_ids: Some(vec!["1".to_string()]),
            ..Default::default()
        }));
        assert_eq!(input.object_type, "term");

        let (partial, metadata) = input
            .resolve()
            .unwrap();
        assert_eq!(partial.object_type(), ObjectType::Term);
        assert_eq!(metadata.dependency, "none");
        assert_eq!(metadata.priority, 0);
    }

    #[test]
    fn unknown_discriminator() {
        let input = MathInput {
            object_type: "matrix".to_string(),
            ..MathInput::default()
        };
        assert_eq!(
            input.resolve(),
            Err(SettingsError::UnsupportedObjectType("matrix".to_string()))
        );
    }

    #[test]
    fn absent_slot() {
        let input = MathInput {
            object_type: "point".to_string(),
            set_settings: Some(PartialSetSettings::default()),
            ..MathInput::default()
        };
        assert_eq!(
            input.resolve(),
            Err(SettingsError::MissingSettings(ObjectType::Point))
        );
    }
}
