//! Two pass rendering of fragments

use crate::formatting::*;

/// We do output in two passes. First the things being shown are converted
/// into a Vec of "fragments" (Syntax tag, String pairs); see fragments.rs.
/// Then second we apply the specified renderer to each pair to result in an
/// embellished/highlighted/marked-up String.
pub fn render(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn trailing_newline() {
        let fragments = vec![
            (Syntax::Label, "term".to_string()),
            (Syntax::Neutral, ": ".to_string()),
            (Syntax::Formula, "a_{1} x".to_string()),
        ];
        assert_eq!(render(&Identity, fragments), "term: a_{1} x\n");
        assert_eq!(render(&Identity, Vec::new()), "");
    }
}
