use std::{fmt, path::Path};

use super::ObjectType;

/// Caller errors raised when a settings payload cannot be matched to an
/// object type. These indicate configuration bugs rather than incomplete
/// input, so they fail instead of degrading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    UnsupportedObjectType(String),
    MissingSettings(ObjectType),
    MismatchedSettings {
        expected: ObjectType,
        found: ObjectType,
    },
}

impl SettingsError {
    pub fn message(&self) -> String {
        match self {
            SettingsError::UnsupportedObjectType(name) => {
                format!("Unsupported object type '{}'", name)
            }
            SettingsError::MissingSettings(object_type) => {
                format!("No settings supplied for object type '{}'", object_type)
            }
            SettingsError::MismatchedSettings { expected, found } => format!(
                "Settings for '{}' supplied where '{}' was expected",
                found, expected
            ),
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for SettingsError {}

/// Problems reading or decoding an input file. The position, when known, is
/// the one-origin line and column reported by the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    pub position: Option<(usize, usize)>,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}
