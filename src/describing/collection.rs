//! Descriptions of points, sets, and intervals. These number their own
//! coordinates from one and leave the shared coefficient index untouched.

use crate::settings::*;

use super::coefficients::coefficient_name;

pub(crate) fn named(name: &str, show_name: bool, body: String) -> String {
    if show_name {
        format!("{} = {}", name, body)
    } else {
        body
    }
}

pub fn describe_point(settings: &PointSettings) -> String {
    named(
        &settings.name,
        settings.show_name,
        format!("({}; {})", coefficient_name(1), coefficient_name(2)),
    )
}

pub fn describe_set(settings: &SetSettings) -> String {
    let count = settings
        .coefficients
        .collection_count;

    let body = if count == 0 {
        "\\emptyset".to_string()
    } else {
        let elements = (1..=count)
            .map(coefficient_name)
            .collect::<Vec<_>>()
            .join("; ");
        format!("\\{{ {} \\}}", elements)
    };

    named(&settings.name, settings.show_name, body)
}

pub fn describe_interval(settings: &IntervalSettings) -> String {
    let (open, close) = settings
        .interval_type
        .brackets();

    named(
        &settings.name,
        settings.show_name,
        format!(
            "{}{}; {}{}",
            open,
            coefficient_name(1),
            coefficient_name(2),
            close
        ),
    )
}
