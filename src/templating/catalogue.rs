//! Catalogue template - a Markdown document of test cases grouped by type

use serde::Serialize;
use tinytemplate::error::Error;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::registry::TestCase;

use super::Template;

static CATALOGUE: &str = r#"# Test cases

{total} cases across {kinds} object types.
{{ for group in groups }}
## {group.name} ({group.count})

{{ for case in group.cases }}- `{case.id}`{{ if case.category }} ({case.category}){{ endif }}: ${case.description}$
{{ endfor }}{{ endfor }}"#;

#[derive(Serialize)]
struct Row<'a> {
    id: &'a str,
    category: Option<&'a str>,
    description: &'a str,
}

#[derive(Serialize)]
struct Group<'a> {
    name: &'a str,
    count: usize,
    cases: Vec<Row<'a>>,
}

#[derive(Serialize)]
struct Context<'a> {
    total: usize,
    kinds: usize,
    groups: Vec<Group<'a>>,
}

// Consecutive cases of the same type form one group.
fn grouped<'a>(cases: &[&'a TestCase]) -> Vec<Group<'a>> {
    let mut groups: Vec<Group<'a>> = Vec::new();

    for case in cases {
        let row = Row {
            id: &case.id,
            category: case
                .category
                .as_deref(),
            description: &case.description,
        };
        let name = case
            .object_type
            .as_str();

        match groups.last_mut() {
            Some(group) if group.name == name => {
                group.count += 1;
                group
                    .cases
                    .push(row);
            }
            _ => groups.push(Group {
                name,
                count: 1,
                cases: vec![row],
            }),
        }
    }

    groups
}

/// Template producing a Markdown catalogue, each description set as inline
/// math.
pub struct Catalogue;

impl Template for Catalogue {
    fn render(&self, cases: &[&TestCase]) -> Result<String, Error> {
        let groups = grouped(cases);
        debug!("Cataloguing {} cases in {} groups", cases.len(), groups.len());

        let context = Context {
            total: cases.len(),
            kinds: groups.len(),
            groups,
        };

        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template("catalogue", CATALOGUE)?;
        tt.render("catalogue", &context)
    }
}
