//! Template trait for rendering lists of test cases

use tinytemplate::error::Error;

use crate::registry::TestCase;

/// Trait for templates that present a list of test cases as a document
pub trait Template {
    /// Render the given cases, in order
    fn render(&self, cases: &[&TestCase]) -> Result<String, Error>;
}
