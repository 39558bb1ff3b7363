use std::fmt;

use crate::formatting::FormattingError;
use crate::settings::NumberSet;

/// Reasons a numeric instance cannot be generated from complete settings.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The coefficient settings describe no number at all.
    Impossible(String),
    NoCandidate {
        number_set: NumberSet,
        range: [f64; 2],
    },
    Exhausted {
        attempts: usize,
    },
    NotDistinct {
        index: usize,
    },
    TooShort {
        length: f64,
        minimum: f64,
    },
    EmptyStructure(&'static str),
    Formatting(FormattingError),
}

impl GenerationError {
    pub fn message(&self) -> String {
        match self {
            GenerationError::Impossible(reason) => {
                format!("coefficient settings are contradictory: {}", reason)
            }
            GenerationError::NoCandidate { number_set, range } => format!(
                "no {} number in [{}; {}] satisfies the rules",
                number_set.as_str(),
                range[0],
                range[1]
            ),
            GenerationError::Exhausted { attempts } => {
                format!("no acceptable value after {} attempts", attempts)
            }
            GenerationError::NotDistinct { index } => {
                format!("could not find a distinct value for coefficient {}", index + 1)
            }
            GenerationError::TooShort { length, minimum } => {
                format!("interval length {:.2} is below the minimum {}", length, minimum)
            }
            GenerationError::EmptyStructure(what) => format!("nothing to generate in {}", what),
            GenerationError::Formatting(problem) => problem.message(),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for GenerationError {}

impl From<FormattingError> for GenerationError {
    fn from(problem: FormattingError) -> Self {
        GenerationError::Formatting(problem)
    }
}
