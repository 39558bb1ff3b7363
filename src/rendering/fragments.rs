//! Convert descriptions, merge results, and test cases into tagged
//! fragments ready for a renderer.

use crate::describing::Description;
use crate::merging::Merged;
use crate::registry::TestCase;
use crate::settings::{MathObjectSettings, ObjectType};

use crate::formatting::Syntax;

fn fragment(syntax: Syntax, content: impl Into<String>) -> (Syntax, String) {
    (syntax, content.into())
}

/// `type: formula`
pub fn formula_fragments(object_type: ObjectType, formula: &str) -> Vec<(Syntax, String)> {
    vec![
        fragment(Syntax::Label, object_type.as_str()),
        fragment(Syntax::Neutral, ": "),
        fragment(Syntax::Formula, formula),
        fragment(Syntax::Newline, "\n"),
    ]
}

pub fn description_fragments(
    object_type: ObjectType,
    description: &Description,
) -> Vec<(Syntax, String)> {
    formula_fragments(object_type, &description.text)
}

/// `type: problem` for an object that could not be instantiated.
pub fn failure_fragments(object_type: ObjectType, problem: &str) -> Vec<(Syntax, String)> {
    vec![
        fragment(Syntax::Label, object_type.as_str()),
        fragment(Syntax::Neutral, ": "),
        fragment(Syntax::Error, problem),
        fragment(Syntax::Newline, "\n"),
    ]
}

/// The paths filled from defaults and any critical problems, one per line.
pub fn report_fragments(merged: &Merged<MathObjectSettings>) -> Vec<(Syntax, String)> {
    let mut fragments = Vec::new();

    for path in &merged.missing {
        fragments.push(fragment(Syntax::Label, "missing"));
        fragments.push(fragment(Syntax::Neutral, ": "));
        fragments.push(fragment(Syntax::Path, path.as_str()));
        fragments.push(fragment(Syntax::Newline, "\n"));
    }

    for critical in &merged.critical {
        fragments.push(fragment(Syntax::Error, "critical"));
        fragments.push(fragment(Syntax::Neutral, ": "));
        fragments.push(fragment(Syntax::Path, critical.path()));
        fragments.push(fragment(Syntax::Neutral, " "));
        fragments.push(fragment(Syntax::Warning, critical.message()));
        fragments.push(fragment(Syntax::Newline, "\n"));
    }

    fragments
}

/// The identifier and category on one line, the description indented
/// below.
pub fn case_fragments(case: &TestCase) -> Vec<(Syntax, String)> {
    let mut fragments = vec![fragment(Syntax::Identifier, case.id.as_str())];

    if let Some(category) = &case.category {
        fragments.push(fragment(Syntax::Neutral, "  "));
        fragments.push(fragment(Syntax::Category, category.as_str()));
    }

    fragments.push(fragment(Syntax::Newline, "\n"));
    fragments.push(fragment(Syntax::Neutral, "    "));
    fragments.push(fragment(Syntax::Formula, case.description.as_str()));
    fragments.push(fragment(Syntax::Newline, "\n"));

    fragments
}
