//! Loading settings from input files and completing them against defaults

use std::path::Path;
use tracing::debug;

use crate::settings::{LoadingError, MathInput, MathObjectSettings, SettingsError};

mod merge;

pub use merge::*;

/// Read a file and return an owned String. Ownership passes back to the
/// caller so that errors produced by parse() below can borrow the filename.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                    position: None,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                    position: None,
                }),
            }
        }
    }
}

// Either a single object or an exercise made of several.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Inputs {
    Many(Vec<MathInput>),
    One(MathInput),
}

/// Decode JSON text into the list of objects it holds. A file containing a
/// single object yields a list of one.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Vec<MathInput>, LoadingError<'i>> {
    // decode once as a plain value first so syntax errors keep their
    // position; untagged enums discard it
    let value: serde_json::Value = serde_json::from_str(content).map_err(|error| LoadingError {
        problem: "Invalid JSON".to_string(),
        details: error.to_string(),
        filename,
        position: Some((error.line(), error.column())),
    })?;

    let inputs: Inputs = serde_json::from_value(value).map_err(|error| LoadingError {
        problem: "Unrecognized settings".to_string(),
        details: error.to_string(),
        filename,
        position: None,
    })?;

    let inputs = match inputs {
        Inputs::Many(inputs) => inputs,
        Inputs::One(input) => vec![input],
    };

    debug!(
        "Found {} object{}",
        inputs.len(),
        if inputs.len() == 1 { "" } else { "s" }
    );

    Ok(inputs)
}

impl MathInput {
    /// Resolve the active slot and complete it against the defaults for its
    /// object type. Unknown types and absent slots are errors; incomplete
    /// settings are not.
    pub fn convert(self) -> Result<Merged<MathObjectSettings>, SettingsError> {
        let (partial, metadata) = self.resolve()?;
        let result = merge_settings(partial.object_type(), partial)?;

        Ok(result.map(|object| MathObjectSettings {
            object,
            example: metadata.example,
            priority: metadata.priority,
            dependency: metadata.dependency,
        }))
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::settings::*;

    #[test]
    fn single_and_many() {
        let path = Path::new("input.json");

        let one = parse(path, r#"{ "objectType": "term", "termSettings": {} }"#).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse(
            path,
            r#"[
                { "objectType": "term", "termSettings": {} },
                { "objectType": "set", "setSettings": { "name": "B" } }
            ]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].object_type, "set");
    }

    #[test]
    fn syntax_error_position() {
        let path = Path::new("input.json");

        let error = parse(path, "{\n  \"objectType\": ,\n}").unwrap_err();
        assert_eq!(error.problem, "Invalid JSON");
        assert_eq!(
            error
                .position
                .map(|(line, _)| line),
            Some(2)
        );
    }

    #[test]
    fn convert_merges_active_slot() {
        let input = MathInput {
            object_type: "interval".to_string(),
            interval_settings: Some(PartialIntervalSettings {
                interval_type: Some(IntervalType::Open),
                ..Default::default()
            }),
            priority: Some(3),
            ..MathInput::default()
        };

        let result = input
            .convert()
            .unwrap();
        assert_eq!(
            result
                .merged
                .priority,
            3
        );
        match result
            .merged
            .object
        {
            MathObject::Interval(interval) => {
                assert_eq!(interval.interval_type, IntervalType::Open);
                assert_eq!(interval.name, "A");
            }
            other => panic!("expected interval, found {:?}", other),
        }
        assert!(result
            .missing
            .contains(&"coefficients".to_string()));
    }
}
