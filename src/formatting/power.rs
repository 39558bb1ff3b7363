//! Power and root markup around an already formatted fragment

use crate::settings::Power;

// A numeral needs no grouping before it is raised to a power.
fn is_bare_numeral(text: &str) -> bool {
    let re = crate::regex!(r"^[0-9]+(?:\.[0-9]+)?$");
    re.is_match(text.trim())
}

fn raise(text: &str, exponent: i32) -> String {
    if is_bare_numeral(text) {
        format!("{}^{{{}}}", text, exponent)
    } else {
        format!("\\left({}\\right)^{{{}}}", text, exponent)
    }
}

fn extract(text: &str, root: i32) -> String {
    if root == 2 {
        format!("\\sqrt{{{}}}", text)
    } else {
        format!("\\sqrt[{}]{{{}}}", root, text)
    }
}

/// Apply an exponent and root index to `text`. A trivial exponent or root
/// (1) is omitted. When both apply, `power_first` raises the text before
/// taking the root; otherwise the root is taken first and the result is
/// raised.
pub fn apply_power(text: &str, power: Power, power_first: bool) -> String {
    let Power { exponent, root } = power;

    match (exponent, root) {
        (1, 1) => text.to_string(),
        (_, 1) => raise(text, exponent),
        (1, _) => extract(text, root),
        _ => {
            if power_first {
                extract(&raise(text, exponent), root)
            } else {
                raise(&extract(text, root), exponent)
            }
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn identity_unchanged() {
        assert_eq!(apply_power("x", Power::new(1, 1), true), "x");
        assert_eq!(apply_power("x + 1", Power::new(1, 1), false), "x + 1");
    }

    #[test]
    fn exponent_grouping() {
        assert_eq!(apply_power("5", Power::new(3, 1), true), "5^{3}");
        assert_eq!(apply_power("2.5", Power::new(2, 1), true), "2.5^{2}");
        assert_eq!(
            apply_power("x+1", Power::new(2, 1), true),
            "\\left(x+1\\right)^{2}"
        );
        assert_eq!(apply_power("-5", Power::new(2, 1), true), "\\left(-5\\right)^{2}");
    }

    #[test]
    fn root_index() {
        assert_eq!(apply_power("x", Power::new(1, 2), true), "\\sqrt{x}");
        assert_eq!(apply_power("x", Power::new(1, 3), true), "\\sqrt[3]{x}");
    }

    #[test]
    fn order_of_power_and_root() {
        assert_eq!(
            apply_power("x", Power::new(2, 3), true),
            "\\sqrt[3]{\\left(x\\right)^{2}}"
        );
        assert_eq!(
            apply_power("x", Power::new(2, 3), false),
            "\\left(\\sqrt[3]{x}\\right)^{2}"
        );
        assert_eq!(apply_power("4", Power::new(2, 2), true), "\\sqrt{4^{2}}");
        assert_eq!(
            apply_power("4", Power::new(2, 2), false),
            "\\left(\\sqrt{4}\\right)^{2}"
        );
    }
}
