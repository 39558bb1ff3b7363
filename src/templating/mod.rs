//! Templates for presenting generated test cases

mod catalogue;
mod listing;
mod template;

pub use catalogue::Catalogue;
pub use listing::Listing;
pub use template::Template;

use crate::registry::TestCase;

/// Render test cases using the specified template
pub fn fill(
    template: &impl Template,
    cases: &[&TestCase],
) -> Result<String, tinytemplate::error::Error> {
    template.render(cases)
}
