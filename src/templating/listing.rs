//! Listing template - one highlighted entry per test case

use tinytemplate::error::Error;

use crate::formatting::Render;
use crate::registry::TestCase;
use crate::rendering::{case_fragments, render};

use super::Template;

/// Template listing each case's identifier, category, and description
/// through a renderer.
pub struct Listing<'r, R: Render>(pub &'r R);

impl<R: Render> Template for Listing<'_, R> {
    fn render(&self, cases: &[&TestCase]) -> Result<String, Error> {
        Ok(cases
            .iter()
            .map(|case| render(self.0, case_fragments(case)))
            .collect())
    }
}
