//! Numeric instances of math objects. Where a description names each
//! coefficient `a_{i}`, an instance draws a concrete value for it that
//! respects the coefficient's number set, rules and range, and writes it in
//! the requested representation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::describing::{named, split_expression};
use crate::formatting::{format_combination, format_term, FormattingError};
use crate::settings::*;

mod coefficient;
mod collection;
mod error;
mod representation;
mod value;

// Re-export all public symbols
pub use coefficient::*;
pub use collection::*;
pub use error::*;
pub use representation::*;
pub use value::{Numeral, Value};

fn texts(numerals: &[Numeral]) -> Vec<&str> {
    numerals
        .iter()
        .map(|numeral| numeral.text.as_str())
        .collect()
}

fn term<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &TermSettings,
) -> Result<String, GenerationError> {
    if settings
        .term_ids
        .is_empty()
    {
        return Err(GenerationError::EmptyStructure("termIds"));
    }

    let numerals = generate_numerals(rng, &settings.coefficients)?;
    if numerals.len() != settings
        .term_ids
        .len()
    {
        return Err(GenerationError::Formatting(FormattingError::LengthMismatch {
            coefficients: numerals.len(),
            term_ids: settings
                .term_ids
                .len(),
        }));
    }

    Ok(format_term(
        &texts(&numerals),
        settings.power,
        &settings.term_ids,
        settings.power_order,
        &settings.variable_name,
    )?)
}

fn terms<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &TermsSettings,
) -> Result<String, GenerationError> {
    let fragments = settings
        .terms
        .iter()
        .map(|child| term(rng, child))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format_combination(
        &settings.combination_type,
        &fragments,
        settings.power,
        settings.power_order,
    ))
}

fn expression<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &ExpressionSettings,
) -> Result<String, GenerationError> {
    if settings
        .expressions
        .is_empty()
    {
        return Err(GenerationError::EmptyStructure("expressions"));
    }

    let fragments = settings
        .expressions
        .iter()
        .map(|component| match component {
            Component::Term(child) => term(rng, child),
            Component::Terms(child) => terms(rng, child),
            Component::Expression(child) => expression(rng, child),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format_combination(
        &settings.combination_type,
        &fragments,
        settings.power,
        settings.power_order,
    ))
}

fn side<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &ExpressionSettings,
) -> Result<String, GenerationError> {
    if settings
        .expressions
        .is_empty()
    {
        Ok("0".to_string())
    } else {
        expression(rng, settings)
    }
}

fn sides<R: Rng + ?Sized>(
    rng: &mut R,
    sides: &Sides,
    mode: InterfaceMode,
) -> Result<(String, String), GenerationError> {
    match (sides, mode) {
        (Sides::Implicit(only), InterfaceMode::Simple) => {
            let (left, right) = split_expression(only);
            Ok((side(rng, &left)?, side(rng, &right)?))
        }
        (Sides::Implicit(only), InterfaceMode::Complex) => Ok((side(rng, only)?, "0".to_string())),
        (Sides::Explicit(left, right), _) => Ok((side(rng, left)?, side(rng, right)?)),
    }
}

fn interval<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &IntervalSettings,
) -> Result<String, GenerationError> {
    let mut shortest = f64::INFINITY;

    for _ in 0..ATTEMPTS {
        let numerals = generate_numerals(rng, &settings.coefficients)?;
        let [low, high] = numerals.as_slice() else {
            return Err(GenerationError::EmptyStructure("interval endpoints"));
        };

        let length = (high
            .value
            .approximate()
            - low
                .value
                .approximate())
        .abs();
        if length >= settings.minimum_length {
            let (open, close) = settings
                .interval_type
                .brackets();
            return Ok(named(
                &settings.name,
                settings.show_name,
                format!("{}{}; {}{}", open, low.text, high.text, close),
            ));
        }
        shortest = shortest.min(length);
    }

    Err(GenerationError::TooShort {
        length: shortest,
        minimum: settings.minimum_length,
    })
}

/// Generate a numeric instance of an object. Equations and inequalities are
/// arranged as `mode` describes them.
pub fn instantiate<R: Rng + ?Sized>(
    rng: &mut R,
    object: &MathObject,
    mode: InterfaceMode,
) -> Result<String, GenerationError> {
    debug!("Instantiating {}", object.object_type());

    match object {
        MathObject::Coefficient(settings) => Ok(generate_numeral(rng, settings)?.text),
        MathObject::Coefficients(settings) => {
            let numerals = generate_numerals(rng, settings)?;
            Ok(texts(&numerals).join(", "))
        }
        MathObject::Term(settings) => term(rng, settings),
        MathObject::Terms(settings) => terms(rng, settings),
        MathObject::Expression(settings) => expression(rng, settings),
        MathObject::Equation(settings) => {
            let (left, right) = sides(rng, &settings.terms, mode)?;
            Ok(format!("{} = {}", left, right))
        }
        MathObject::Inequality(settings) => {
            let (left, right) = sides(rng, &settings.terms, mode)?;
            Ok(format!(
                "{} {} {}",
                left,
                settings
                    .inequality_type
                    .symbol(),
                right
            ))
        }
        MathObject::Function(settings) => {
            let body = expression(rng, &settings.expression)?;
            let variable = settings
                .variable_name
                .as_deref()
                .unwrap_or("x");
            Ok(format!("{}({}) = {}", settings.function_name, variable, body))
        }
        MathObject::Point(settings) => {
            let numerals = generate_numerals(rng, &settings.coefficients)?;
            Ok(named(
                &settings.name,
                settings.show_name,
                format!("({})", texts(&numerals).join("; ")),
            ))
        }
        MathObject::Set(settings) => {
            let numerals = generate_numerals(rng, &settings.coefficients)?;
            let body = if numerals.is_empty() {
                "\\emptyset".to_string()
            } else {
                format!("\\{{ {} \\}}", texts(&numerals).join("; "))
            };
            Ok(named(&settings.name, settings.show_name, body))
        }
        MathObject::Interval(settings) => interval(rng, settings),
    }
}

/// Instantiate a sequence of objects from one seeded generator, so the same
/// seed always yields the same instances. Without a seed the generator is
/// seeded from the operating system.
pub fn instantiate_all(
    objects: &[(&MathObject, InterfaceMode)],
    seed: Option<u64>,
) -> Vec<Result<String, GenerationError>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    objects
        .iter()
        .map(|(object, mode)| instantiate(&mut rng, object, *mode))
        .collect()
}
