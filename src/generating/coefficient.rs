//! Drawing a single coefficient value that honours its settings

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::{GenerationError, Value};
use crate::merging::Merge;
use crate::registry::validation::check_coefficient;
use crate::settings::*;

pub const ATTEMPTS: usize = 1000;

/// Integer ranges at most this wide are searched exhaustively.
const SMALL_RANGE: i64 = 200;

const MAX_DENOMINATOR: i64 = 10;

const MAX_RADICAND: i64 = 10_000;

fn integer_bounds(range: [f64; 2]) -> Option<(i64, i64)> {
    let low = range[0].ceil() as i64;
    let high = range[1].floor() as i64;
    (low <= high).then_some((low, high))
}

fn rational<R: Rng + ?Sized>(rng: &mut R, range: [f64; 2]) -> Option<Value> {
    let [min, max] = range;
    for _ in 0..ATTEMPTS {
        let denominator = rng.gen_range(1..=MAX_DENOMINATOR);
        let low = (min * denominator as f64).ceil() as i64;
        let high = (max * denominator as f64).floor() as i64;
        if low <= high {
            return Some(Value::ratio(rng.gen_range(low..=high), denominator));
        }
    }
    None
}

fn irrational<R: Rng + ?Sized>(rng: &mut R, range: [f64; 2]) -> Option<Value> {
    let [min, max] = range;
    let widest = min
        .abs()
        .max(max.abs());
    let largest = ((widest * widest).floor() as i64).min(MAX_RADICAND);

    let radicands: Vec<i64> = (2..=largest)
        .filter(|b| !Value::integer(*b).satisfies(CoefficientRule::Square))
        .collect();
    let radicand = *radicands.choose(rng)?;

    let root = (radicand as f64).sqrt();
    let factors: Vec<i64> = ((min / root).ceil() as i64..=(max / root).floor() as i64)
        .filter(|a| *a != 0)
        .collect();
    let factor = *factors.choose(rng)?;

    Some(Value::Surd { factor, radicand })
}

/// One candidate drawn from `number_set`, with the set actually used. A
/// real number is drawn from one of the concrete sets.
fn candidate<R: Rng + ?Sized>(
    rng: &mut R,
    number_set: NumberSet,
    range: [f64; 2],
) -> Option<(Value, NumberSet)> {
    let number_set = match number_set {
        NumberSet::Real => {
            let options: &[NumberSet] = if range[0] < 0.0 {
                &[NumberSet::Rational, NumberSet::Irrational, NumberSet::Integer]
            } else {
                &[
                    NumberSet::Rational,
                    NumberSet::Irrational,
                    NumberSet::Integer,
                    NumberSet::Natural,
                ]
            };
            *options.choose(rng)?
        }
        other => other,
    };

    let value = match number_set {
        NumberSet::Rational => rational(rng, range)?,
        NumberSet::Irrational => irrational(rng, range)?,
        NumberSet::Integer => {
            let (low, high) = integer_bounds(range)?;
            Value::integer(rng.gen_range(low..=high))
        }
        NumberSet::Natural | NumberSet::Real => {
            let (low, high) = integer_bounds(range)?;
            let low = low.max(1);
            if low > high {
                return None;
            }
            Value::integer(rng.gen_range(low..=high))
        }
    };

    Some((value, number_set))
}

fn unit<R: Rng + ?Sized>(
    rng: &mut R,
    rules: &[CoefficientRule],
) -> Result<(Value, NumberSet), GenerationError> {
    let positive = rules.contains(&CoefficientRule::Positive);
    let negative = rules.contains(&CoefficientRule::Negative);

    let value = match (positive, negative) {
        (true, true) => {
            return Err(GenerationError::Impossible(
                "a unit cannot be both positive and negative".to_string(),
            ))
        }
        (true, false) => 1,
        (false, true) => -1,
        (false, false) => {
            if rng.gen_bool(0.5) {
                1
            } else {
                -1
            }
        }
    };

    let value = Value::integer(value);
    if value.satisfies_all(rules) {
        Ok((value, NumberSet::Integer))
    } else {
        Err(GenerationError::Impossible(format!(
            "no unit value satisfies {}",
            rules
                .iter()
                .map(CoefficientRule::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

// Every admissible integer of a narrow range, or None when the range is too
// wide to enumerate.
fn exhaustive<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &CoefficientSettings,
) -> Option<Result<(Value, NumberSet), GenerationError>> {
    if !matches!(settings.number_set, NumberSet::Integer | NumberSet::Natural) {
        return None;
    }

    let no_candidate = || GenerationError::NoCandidate {
        number_set: settings.number_set,
        range: settings.range,
    };

    let Some((low, high)) = integer_bounds(settings.range) else {
        return Some(Err(no_candidate()));
    };
    let low = if settings.number_set == NumberSet::Natural {
        low.max(1)
    } else {
        low
    };
    if low > high {
        return Some(Err(no_candidate()));
    }
    if high - low + 1 > SMALL_RANGE {
        return None;
    }

    let admissible: Vec<Value> = (low..=high)
        .map(Value::integer)
        .filter(|value| value.satisfies_all(&settings.rules))
        .collect();

    Some(match admissible.choose(rng) {
        Some(value) => Ok((*value, settings.number_set)),
        None => Err(no_candidate()),
    })
}

/// Draw a value for one coefficient. Contradictory settings are refused
/// before any drawing starts.
pub fn generate_value<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &CoefficientSettings,
) -> Result<(Value, NumberSet), GenerationError> {
    if settings
        .rules
        .contains(&CoefficientRule::Unit)
    {
        return unit(rng, &settings.rules);
    }

    check_coefficient(
        &settings
            .clone()
            .into_partial(),
    )
    .map_err(GenerationError::Impossible)?;

    if let Some(result) = exhaustive(rng, settings) {
        return result;
    }

    for attempt in 1..=ATTEMPTS {
        let Some((value, number_set)) = candidate(rng, settings.number_set, settings.range) else {
            continue;
        };
        if value.satisfies_all(&settings.rules) {
            debug!("Accepted {:?} after {} attempts", value, attempt);
            return Ok((value, number_set));
        }
    }

    warn!(
        "No {} value in [{}; {}] after {} attempts",
        settings
            .number_set
            .as_str(),
        settings.range[0],
        settings.range[1],
        ATTEMPTS
    );
    Err(GenerationError::Exhausted { attempts: ATTEMPTS })
}

#[cfg(test)]
mod check {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn settings(
        number_set: NumberSet,
        rules: &[CoefficientRule],
        range: [f64; 2],
    ) -> CoefficientSettings {
        CoefficientSettings {
            number_set,
            rules: rules.to_vec(),
            range,
            ..CoefficientSettings::default()
        }
    }

    #[test]
    fn values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);

        for number_set in NumberSet::ALL {
            let settings = settings(number_set, &[], DEFAULT_RANGE);
            for _ in 0..50 {
                let (value, used) = generate_value(&mut rng, &settings).expect("value");
                let approximate = value.approximate();
                assert!((-10.0..=10.0).contains(&approximate), "{:?}", value);
                assert_ne!(used, NumberSet::Real);
            }
        }
    }

    #[test]
    fn rules_are_honoured() {
        let mut rng = StdRng::seed_from_u64(3);

        let primes = settings(NumberSet::Natural, &[CoefficientRule::Prime], POSITIVE_RANGE);
        let odd_negatives = settings(
            NumberSet::Integer,
            &[CoefficientRule::Odd, CoefficientRule::Negative],
            FULL_RANGE,
        );

        for _ in 0..50 {
            let (value, _) = generate_value(&mut rng, &primes).expect("prime");
            assert!(value.satisfies(CoefficientRule::Prime));

            let (value, _) = generate_value(&mut rng, &odd_negatives).expect("odd");
            assert!(value.satisfies_all(&[CoefficientRule::Odd, CoefficientRule::Negative]));
        }
    }

    #[test]
    fn units_follow_sign() {
        let mut rng = StdRng::seed_from_u64(5);
        let negative = settings(
            NumberSet::Integer,
            &[CoefficientRule::Unit, CoefficientRule::Negative],
            DEFAULT_RANGE,
        );
        assert_eq!(
            generate_value(&mut rng, &negative),
            Ok((Value::integer(-1), NumberSet::Integer))
        );
    }

    #[test]
    fn contradictions_are_refused() {
        let mut rng = StdRng::seed_from_u64(0);

        let parity = settings(
            NumberSet::Integer,
            &[CoefficientRule::Odd, CoefficientRule::Even],
            DEFAULT_RANGE,
        );
        assert!(matches!(
            generate_value(&mut rng, &parity),
            Err(GenerationError::Impossible(_))
        ));

        let empty = settings(NumberSet::Natural, &[], NEGATIVE_RANGE);
        assert!(matches!(
            generate_value(&mut rng, &empty),
            Err(GenerationError::Impossible(_))
        ));
    }
}
