//! Conceptual validation of coefficient settings: whether a combination of
//! number set, representation, rules, and range can describe any number at
//! all, and whether it does so without redundancy.

use crate::settings::*;

use CoefficientRule::*;

/// Rules that may not accompany a unit (±1) coefficient.
const UNIT_INCOMPATIBLE: [CoefficientRule; 2] = [Even, Prime];

/// Rules that may not accompany a prime coefficient.
const PRIME_INCOMPATIBLE: [CoefficientRule; 4] = [Square, Cube, Unit, Negative];

/// Rules meaningful only for whole numbers, and so not for mixed numbers.
const MIXED_INCOMPATIBLE: [CoefficientRule; 4] = [Odd, Even, Prime, Unit];

fn pair_conflict(a: CoefficientRule, b: CoefficientRule) -> Option<&'static str> {
    let either = |x: CoefficientRule, y: CoefficientRule| (a == x && b == y) || (a == y && b == x);

    if a == b {
        return Some("rule repeated");
    }
    if either(Odd, Even) {
        return Some("parity conflict");
    }
    if either(Positive, Negative) {
        return Some("sign conflict");
    }
    if either(Nonzero, Positive) || either(Nonzero, Negative) {
        return Some("nonzero is implied by a sign");
    }
    if either(Nonzero, Odd) || either(Nonzero, Unit) {
        return Some("nonzero is implied");
    }
    let excludes = |rule: CoefficientRule, others: &[CoefficientRule]| {
        (a == rule && others.contains(&b)) || (b == rule && others.contains(&a))
    };
    if excludes(Unit, &UNIT_INCOMPATIBLE) {
        return Some("incompatible with unit");
    }
    if excludes(Prime, &PRIME_INCOMPATIBLE) {
        return Some("incompatible with prime");
    }
    None
}

fn rule_allowed(rule: CoefficientRule, number_set: NumberSet) -> bool {
    use NumberSet::*;
    match rule {
        Odd | Even => matches!(number_set, Integer | Natural),
        Prime => number_set == Natural,
        Square | Cube => matches!(number_set, Integer | Natural | Rational),
        Unit => number_set != Irrational,
        Negative => number_set != Natural,
        // every natural number is already positive and nonzero
        Positive | Nonzero => number_set != Natural,
    }
}

fn representation_allowed(representation: RepresentationType, number_set: NumberSet) -> bool {
    use RepresentationType::*;
    match number_set {
        NumberSet::Natural | NumberSet::Integer => {
            matches!(representation, Decimal | Root | Logarithm)
        }
        NumberSet::Rational => matches!(representation, Decimal | Fraction | Mixed),
        NumberSet::Irrational => matches!(representation, Decimal | Root | Logarithm),
        NumberSet::Real => true,
    }
}

fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// The integers inside the range, as an inclusive pair, if there are any.
fn integers(range: [f64; 2]) -> Option<(i64, i64)> {
    let low = range[0].ceil() as i64;
    let high = range[1].floor() as i64;
    if low <= high {
        Some((low, high))
    } else {
        None
    }
}

fn satisfiable(rule: CoefficientRule, range: [f64; 2]) -> bool {
    let [min, max] = range;
    match rule {
        Positive => max > 0.0,
        Negative => min < 0.0,
        // nonzero only says something when zero could otherwise be chosen
        Nonzero => min <= 0.0 && max >= 0.0 && !(min == 0.0 && max == 0.0),
        Unit => (min <= 1.0 && max >= 1.0) || (min <= -1.0 && max >= -1.0),
        Odd | Even => match integers(range) {
            Some((low, high)) => {
                let wanted = if rule == Odd { 1 } else { 0 };
                high > low || low.rem_euclid(2) == wanted
            }
            None => false,
        },
        Prime => match integers(range) {
            Some((low, high)) => (low.max(2)..=high).any(is_prime),
            None => false,
        },
        Square => match integers(range) {
            Some((low, high)) => {
                if high < 0 {
                    return false;
                }
                let mut k = (low.max(0) as f64)
                    .sqrt()
                    .floor() as i64;
                while k * k < low {
                    k += 1;
                }
                k * k <= high
            }
            None => false,
        },
        Cube => match integers(range) {
            Some((low, high)) => {
                let mut k = (low as f64)
                    .cbrt()
                    .floor() as i64;
                while k * k * k < low {
                    k += 1;
                }
                k * k * k <= high
            }
            None => false,
        },
    }
}

/// Check a candidate coefficient. Absent number set and representation are
/// not checked; an absent range is checked as the default range.
pub fn check_coefficient(settings: &PartialCoefficientSettings) -> Result<(), String> {
    let rules = settings
        .rules
        .as_deref()
        .unwrap_or(&[]);
    let range = settings
        .range
        .unwrap_or(DEFAULT_RANGE);

    for (i, a) in rules
        .iter()
        .enumerate()
    {
        for b in &rules[i + 1..] {
            if let Some(problem) = pair_conflict(*a, *b) {
                return Err(format!("{} and {}: {}", a.as_str(), b.as_str(), problem));
            }
        }
    }

    if range[0] > range[1] {
        return Err("range is reversed".to_string());
    }

    if let Some(number_set) = settings.number_set {
        if let Some(rule) = rules
            .iter()
            .find(|rule| !rule_allowed(**rule, number_set))
        {
            return Err(format!(
                "{} does not apply to {} numbers",
                rule.as_str(),
                number_set.as_str()
            ));
        }

        if let Some(representation) = settings.representation_type {
            if !representation_allowed(representation, number_set) {
                return Err(format!(
                    "{} numbers are not written as {}",
                    number_set.as_str(),
                    representation.as_str()
                ));
            }
        }

        if number_set == NumberSet::Natural && range[1] < 1.0 {
            return Err("no natural numbers in range".to_string());
        }
    }

    if settings.representation_type == Some(RepresentationType::Mixed) {
        if let Some(rule) = rules
            .iter()
            .find(|rule| MIXED_INCOMPATIBLE.contains(*rule))
        {
            return Err(format!("mixed numbers cannot be {}", rule.as_str()));
        }
    }

    if let Some(rule) = rules
        .iter()
        .find(|rule| !satisfiable(**rule, range))
    {
        return Err(format!(
            "no {} value in [{}; {}]",
            rule.as_str(),
            range[0],
            range[1]
        ));
    }

    Ok(())
}

pub fn is_coefficient_valid(settings: &PartialCoefficientSettings) -> bool {
    check_coefficient(settings).is_ok()
}
