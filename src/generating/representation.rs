//! Writing a generated value in its requested representation

use rand::Rng;

use super::value::gcd;
use super::Value;
use crate::formatting::apply_power;
use crate::settings::{NumberSet, Power, RepresentationType};

const LOGARITHM_BASES: std::ops::RangeInclusive<i64> = 2..=15;

fn sign(negative: bool) -> &'static str {
    if negative {
        "-"
    } else {
        ""
    }
}

// Decimals keep at most two places and drop trailing zeros.
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let text = format!("{:.2}", value);
    let trimmed = text
        .trim_end_matches('0')
        .trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn fraction(numerator: i64, denominator: i64) -> String {
    if denominator == 1 {
        return numerator.to_string();
    }
    format!(
        "{}\\frac{{{}}}{{{}}}",
        sign(numerator < 0),
        numerator.abs(),
        denominator
    )
}

fn mixed(numerator: i64, denominator: i64) -> String {
    let whole = numerator.abs() / denominator;
    let remainder = numerator.abs() % denominator;
    let negative = numerator < 0;

    if remainder == 0 {
        return format!("{}{}", sign(negative), whole);
    }

    let divisor = gcd(remainder, denominator);
    let part = format!("\\frac{{{}}}{{{}}}", remainder / divisor, denominator / divisor);
    if whole == 0 {
        format!("{}{}", sign(negative), part)
    } else {
        format!("{}{} {}", sign(negative), whole, part)
    }
}

fn surd(factor: i64, radicand: i64) -> String {
    match factor {
        1 => format!("\\sqrt{{{}}}", radicand),
        -1 => format!("-\\sqrt{{{}}}", radicand),
        _ => format!("{} \\sqrt{{{}}}", factor, radicand),
    }
}

// A rational written as the root of its square, the square as a decimal
// when short enough and otherwise as a fraction or mixed number.
fn rational_in_root<R: Rng + ?Sized>(rng: &mut R, numerator: i64, denominator: i64) -> String {
    let negative = numerator < 0;
    let squared_numerator = numerator * numerator;
    let squared_denominator = denominator * denominator;

    let inner = if (1000 * squared_numerator) % squared_denominator == 0 {
        format!("{}", squared_numerator as f64 / squared_denominator as f64)
    } else if rng.gen_bool(0.5) {
        mixed(squared_numerator, squared_denominator)
    } else {
        fraction(squared_numerator, squared_denominator)
    };

    format!("{}\\sqrt{{{}}}", sign(negative), inner)
}

fn reciprocal_if(negative: bool, argument: String) -> String {
    if negative {
        format!("\\frac{{1}}{{{}}}", argument)
    } else {
        argument
    }
}

fn rational_logarithm(numerator: i64, denominator: i64, base: i64) -> String {
    if numerator == 0 {
        return format!("\\log_{{{}}}{{1}}", base);
    }

    let negative = numerator < 0;
    let magnitude = numerator.abs();

    let argument = match (magnitude, denominator) {
        (1, 2) => format!("\\sqrt{{{}}}", base),
        (1, 4) => format!("\\sqrt[4]{{{}}}", base),
        (1, 8) => format!("\\sqrt[8]{{{}}}", base),
        (k, 1) if k <= 10 => base
            .checked_pow(k as u32)
            .map(|power| power.to_string())
            .unwrap_or_else(|| format!("{}^{{{}}}", base, k)),
        _ => apply_power(
            &base.to_string(),
            Power::new(magnitude as i32, denominator as i32),
            true,
        ),
    };

    format!("\\log_{{{}}}{{{}}}", base, reciprocal_if(negative, argument))
}

// The argument is rounded, so the logarithm only approximates the value.
fn irrational_logarithm(value: f64, base: i64) -> String {
    if value == 0.0 {
        return format!("\\log_{{{}}}{{1}}", base);
    }

    let rounded = (base as f64)
        .powf(value.abs())
        .round() as i64;
    let argument = if rounded > 0 { rounded } else { 2 };

    format!(
        "\\log_{{{}}}{{{}}}",
        base,
        reciprocal_if(value < 0.0, argument.to_string())
    )
}

/// Format a generated value. `number_set` is the set the value was drawn
/// from, never `Real`.
pub fn format_value<R: Rng + ?Sized>(
    rng: &mut R,
    value: Value,
    representation: RepresentationType,
    number_set: NumberSet,
) -> String {
    match (value, representation) {
        (Value::Surd { .. }, RepresentationType::Decimal) => {
            format!("{:.4}\\ldots", value.approximate())
        }
        (
            Value::Ratio {
                numerator,
                denominator,
            },
            RepresentationType::Root,
        ) if number_set != NumberSet::Irrational => {
            rational_in_root(rng, numerator, denominator)
        }
        (Value::Surd { factor, radicand }, RepresentationType::Root) => surd(factor, radicand),
        (
            Value::Ratio {
                numerator,
                denominator,
            },
            representation,
        ) => match representation {
            RepresentationType::Fraction => fraction(numerator, denominator),
            RepresentationType::Mixed => mixed(numerator, denominator),
            RepresentationType::Logarithm => {
                rational_logarithm(numerator, denominator, rng.gen_range(LOGARITHM_BASES))
            }
            RepresentationType::Decimal | RepresentationType::Root => {
                decimal(value.approximate())
            }
        },
        (Value::Surd { .. }, RepresentationType::Logarithm) => {
            irrational_logarithm(value.approximate(), rng.gen_range(LOGARITHM_BASES))
        }
        (Value::Surd { factor, radicand }, _) => surd(factor, radicand),
    }
}

#[cfg(test)]
mod check {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn write(value: Value, representation: RepresentationType) -> String {
        let mut rng = StdRng::seed_from_u64(1);
        format_value(&mut rng, value, representation, NumberSet::Rational)
    }

    #[test]
    fn fractions_and_mixed_numbers() {
        assert_eq!(write(Value::ratio(-3, 4), RepresentationType::Fraction), "-\\frac{3}{4}");
        assert_eq!(write(Value::ratio(6, 1), RepresentationType::Fraction), "6");
        assert_eq!(write(Value::ratio(7, 2), RepresentationType::Mixed), "3 \\frac{1}{2}");
        assert_eq!(write(Value::ratio(-1, 3), RepresentationType::Mixed), "-\\frac{1}{3}");
        assert_eq!(write(Value::ratio(-8, 4), RepresentationType::Mixed), "-2");
    }

    #[test]
    fn decimals() {
        assert_eq!(write(Value::integer(-7), RepresentationType::Decimal), "-7");
        assert_eq!(write(Value::ratio(1, 4), RepresentationType::Decimal), "0.25");
        assert_eq!(write(Value::ratio(1, 3), RepresentationType::Decimal), "0.33");
        assert_eq!(write(Value::ratio(1, 2), RepresentationType::Decimal), "0.5");

        let mut rng = StdRng::seed_from_u64(1);
        let surd = Value::Surd {
            factor: 2,
            radicand: 3,
        };
        assert_eq!(
            format_value(&mut rng, surd, RepresentationType::Decimal, NumberSet::Irrational),
            "3.4641\\ldots"
        );
    }

    #[test]
    fn roots() {
        assert_eq!(write(Value::integer(-3), RepresentationType::Root), "-\\sqrt{9}");
        assert_eq!(write(Value::ratio(1, 2), RepresentationType::Root), "\\sqrt{0.25}");
        assert_eq!(write(Value::ratio(-5, 2), RepresentationType::Root), "-\\sqrt{6.25}");

        let third = write(Value::ratio(1, 3), RepresentationType::Root);
        assert_eq!(third, "\\sqrt{\\frac{1}{9}}");

        let mut rng = StdRng::seed_from_u64(1);
        let surd = Value::Surd {
            factor: -1,
            radicand: 5,
        };
        assert_eq!(
            format_value(&mut rng, surd, RepresentationType::Root, NumberSet::Irrational),
            "-\\sqrt{5}"
        );
    }

    #[test]
    fn logarithms() {
        assert_eq!(rational_logarithm(2, 1, 3), "\\log_{3}{9}");
        assert_eq!(rational_logarithm(-1, 1, 5), "\\log_{5}{\\frac{1}{5}}");
        assert_eq!(rational_logarithm(1, 2, 7), "\\log_{7}{\\sqrt{7}}");
        assert_eq!(rational_logarithm(0, 1, 4), "\\log_{4}{1}");
        assert_eq!(irrational_logarithm(1.5, 4), "\\log_{4}{8}");
    }
}
