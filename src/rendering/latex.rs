//! Renderer producing LaTeX markup

use std::borrow::Cow;

use crate::formatting::*;

/// Add markup around fragments for inclusion in LaTeX documents. Formulas
/// are placed in inline math; everything else is escaped text.
pub struct Latex;

impl Render for Latex {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Formula => format!("${}$", content),
            Syntax::Newline => "\\\\\n".to_string(),
            Syntax::Neutral => escape_latex(content).into_owned(),
            Syntax::Label => markup("textbf", &escape_latex(content)),
            Syntax::Identifier => markup("texttt", &escape_latex(content)),
            Syntax::Category => markup("textit", &escape_latex(content)),
            Syntax::Path => markup("texttt", &escape_latex(content)),
            Syntax::Warning => markup("textsl", &escape_latex(content)),
            Syntax::Error => markup("textbf", &escape_latex(content)),
        }
    }
}

fn escape_latex(content: &str) -> Cow<'_, str> {
    if content.contains(['\\', '_', '#', '%', '&', '$', '{', '}']) {
        let mut result = String::with_capacity(content.len() + 8);
        for c in content.chars() {
            match c {
                '\\' => result.push_str("\\textbackslash{}"),
                '_' | '#' | '%' | '&' | '$' | '{' | '}' => {
                    result.push('\\');
                    result.push(c);
                }
                _ => result.push(c),
            }
        }
        Cow::Owned(result)
    } else {
        Cow::Borrowed(content)
    }
}

fn markup(command: &str, content: &str) -> String {
    format!("\\{}{{{}}}", command, content)
}
