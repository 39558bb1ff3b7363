//! Descriptions of coefficients as set memberships

use crate::settings::*;

use super::Description;

/// The display name of the coefficient at `index`.
pub fn coefficient_name(index: usize) -> String {
    format!("a_{{{}}}", index)
}

// How a coefficient of the given representation is written, ending with the
// membership sign.
fn prefix(representation: RepresentationType, name: &str) -> String {
    match representation {
        RepresentationType::Decimal => format!("{} \\in ", name),
        RepresentationType::Fraction => format!("{} = \\frac{{b}}{{c}} \\in ", name),
        RepresentationType::Mixed => format!("{} = n \\frac{{b}}{{c}} \\in ", name),
        RepresentationType::Root => format!("{} = a \\sqrt{{b}} \\in ", name),
        RepresentationType::Logarithm => format!("{} = \\log_{{b}}{{c}} \\in ", name),
    }
}

pub fn rule_symbol(rule: CoefficientRule) -> &'static str {
    match rule {
        CoefficientRule::Odd => "\\{ 2n+1 \\mid n \\in \\mathbf{Z} \\}",
        CoefficientRule::Even => "\\{ 2n \\mid n \\in \\mathbf{Z} \\}",
        CoefficientRule::Square => "\\{ n^2 \\mid n \\in \\mathbf{Z} \\}",
        CoefficientRule::Cube => "\\{ n^3 \\mid n \\in \\mathbf{Z} \\}",
        CoefficientRule::Prime => "\\mathbf{P}",
        CoefficientRule::Nonzero => "\\mathbf{R} \\setminus \\{0\\}",
        CoefficientRule::Positive => "\\mathbf{R}_{+}",
        CoefficientRule::Negative => "\\mathbf{R}_{-}",
        CoefficientRule::Unit => "\\{ -1; 1 \\}",
    }
}

pub fn range_interval(range: [f64; 2]) -> String {
    format!("[{}; {}]", range[0], range[1])
}

// The sets a coefficient belongs to: its number set, its range, and one set
// per rule.
fn intersection(settings: &CoefficientSettings) -> String {
    let mut sets = vec![
        settings
            .number_set
            .symbol()
            .to_string(),
        range_interval(settings.range),
    ];
    sets.extend(
        settings
            .rules
            .iter()
            .map(|rule| rule_symbol(*rule).to_string()),
    );
    sets.join(" \\cap ")
}

pub fn describe_coefficient(settings: &CoefficientSettings, index: usize) -> String {
    format!(
        "{}{}",
        prefix(settings.representation_type, &coefficient_name(index)),
        intersection(settings)
    )
}

/// In simple mode every coefficient shares the first one's description; in
/// complex mode each is described on its own.
pub fn describe_coefficients(
    settings: &CoefficientsSettings,
    mode: InterfaceMode,
    start: usize,
) -> Description {
    let count = settings
        .coefficients
        .len();

    let Some(first) = settings
        .coefficients
        .first()
    else {
        return Description {
            text: String::new(),
            next_index: start,
        };
    };

    let text = match mode {
        InterfaceMode::Simple => {
            let names = (0..count)
                .map(|i| coefficient_name(start.saturating_add(i)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{}{}",
                prefix(first.representation_type, &names),
                intersection(first)
            )
        }
        InterfaceMode::Complex => settings
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, coefficient)| describe_coefficient(coefficient, start.saturating_add(i)))
            .collect::<Vec<_>>()
            .join(" \\quad \\quad "),
    };

    Description {
        text,
        next_index: start.saturating_add(count),
    }
}
