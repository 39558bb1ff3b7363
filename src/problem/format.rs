use mathobject::settings::{LoadingError, SettingsError};
use owo_colors::OwoColorize;

/// Format a LoadingError with full details, including the offending line
/// of the input when the decoder reported a position
pub fn full_loading_error<'i>(error: &LoadingError<'i>, source: &'i str) -> String {
    let Some((line, column)) = error.position else {
        return format!(
            "{}: {}: {}\n\n{}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold(),
            error.details
        );
    };

    let code = source
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("?");
    let column = column.max(1);
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        error
            .filename
            .display(),
        line,
        column,
        error
            .problem
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        error.details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    match error.position {
        Some((line, column)) => format!(
            "{}: {}:{}:{} {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            line,
            column,
            error
                .problem
                .bold()
        ),
        None => format!(
            "{}: {}: {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold()
        ),
    }
}

/// Format a failure to convert one of the objects in an input file
pub fn settings_error(filename: &str, index: usize, error: &SettingsError) -> String {
    format!(
        "{}: {}: object {}: {}",
        "error".bright_red(),
        filename,
        index + 1,
        error
            .message()
            .bold()
    )
}
