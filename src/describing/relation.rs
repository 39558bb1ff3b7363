//! Descriptions of equations, inequalities, and functions

use crate::settings::*;

use super::polynomial::describe_expression;
use super::Description;

// An empty side reads as zero.
fn describe_side(side: &ExpressionSettings, start: usize) -> Description {
    if side
        .expressions
        .is_empty()
    {
        Description {
            text: "0".to_string(),
            next_index: start,
        }
    } else {
        describe_expression(side, start)
    }
}

/// Divide a single expression's children into a left and right half. Two
/// children split one each; otherwise the left takes the smaller half.
pub fn split_expression(
    expression: &ExpressionSettings,
) -> (ExpressionSettings, ExpressionSettings) {
    let count = expression
        .expressions
        .len();
    let middle = if count == 2 { 1 } else { count / 2 };

    let (left, right) = expression
        .expressions
        .split_at(middle);

    (
        ExpressionSettings {
            expressions: left.to_vec(),
            ..expression.clone()
        },
        ExpressionSettings {
            expressions: right.to_vec(),
            ..expression.clone()
        },
    )
}

/// Describe both sides, the right continuing the index where the left
/// stopped.
fn describe_sides(sides: &Sides, mode: InterfaceMode, start: usize) -> (Description, Description) {
    match (sides, mode) {
        (Sides::Implicit(only), InterfaceMode::Simple) => {
            let (left, right) = split_expression(only);
            let left = describe_side(&left, start);
            let right = describe_side(&right, left.next_index);
            (left, right)
        }
        (Sides::Implicit(only), InterfaceMode::Complex) => {
            let left = describe_side(only, start);
            let right = Description {
                text: "0".to_string(),
                next_index: left.next_index,
            };
            (left, right)
        }
        (Sides::Explicit(left, right), _) => {
            let left = describe_side(left, start);
            let right = describe_side(right, left.next_index);
            (left, right)
        }
    }
}

pub fn describe_equation(
    settings: &EquationSettings,
    mode: InterfaceMode,
    start: usize,
) -> Description {
    let (left, right) = describe_sides(&settings.terms, mode, start);

    Description {
        text: format!("{} = {}", left.text, right.text),
        next_index: right.next_index,
    }
}

pub fn describe_inequality(
    settings: &InequalitySettings,
    mode: InterfaceMode,
    start: usize,
) -> Description {
    let (left, right) = describe_sides(&settings.terms, mode, start);

    Description {
        text: format!(
            "{} {} {}",
            left.text,
            settings
                .inequality_type
                .symbol(),
            right.text
        ),
        next_index: right.next_index,
    }
}

pub fn describe_function(settings: &FunctionSettings, start: usize) -> Description {
    let body = describe_expression(&settings.expression, start);
    let variable = settings
        .variable_name
        .as_deref()
        .unwrap_or("x");

    Description {
        text: format!("{}({}) = {}", settings.function_name, variable, body.text),
        next_index: body.next_index,
    }
}
