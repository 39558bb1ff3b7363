use std::fmt;

/// Reasons a term cannot be formatted from its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattingError {
    NoCoefficients,
    LengthMismatch { coefficients: usize, term_ids: usize },
}

impl FormattingError {
    pub fn message(&self) -> String {
        match self {
            FormattingError::NoCoefficients => "no coefficients to format".to_string(),
            FormattingError::LengthMismatch {
                coefficients,
                term_ids,
            } => format!(
                "{} coefficients cannot pair with {} term ids",
                coefficients, term_ids
            ),
        }
    }
}

impl fmt::Display for FormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FormattingError {}
