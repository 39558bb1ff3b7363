//! Exact values of generated coefficients and the rules they satisfy

use crate::settings::{CoefficientRule, NumberSet};

/// A generated number, kept exact so that rules can be checked without
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// `numerator / denominator`, the denominator always positive
    Ratio { numerator: i64, denominator: i64 },
    /// `factor * sqrt(radicand)`, the radicand never a perfect square
    Surd { factor: i64, radicand: i64 },
}

pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.max(1)
}

fn perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let root = (n as f64)
        .sqrt()
        .round() as i64;
    root * root == n
}

fn perfect_cube(n: i64) -> bool {
    let root = (n.abs() as f64)
        .cbrt()
        .round() as i64;
    root * root * root == n.abs()
}

pub(crate) fn is_prime(n: i64) -> bool {
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

impl Value {
    pub fn integer(n: i64) -> Value {
        Value::Ratio {
            numerator: n,
            denominator: 1,
        }
    }

    /// The fraction in lowest terms with a positive denominator.
    pub fn ratio(numerator: i64, denominator: i64) -> Value {
        let divisor = gcd(numerator, denominator);
        let sign = if denominator < 0 { -1 } else { 1 };
        Value::Ratio {
            numerator: sign * numerator / divisor,
            denominator: sign * denominator / divisor,
        }
    }

    pub fn approximate(&self) -> f64 {
        match *self {
            Value::Ratio {
                numerator,
                denominator,
            } => numerator as f64 / denominator as f64,
            Value::Surd { factor, radicand } => factor as f64 * (radicand as f64).sqrt(),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Ratio {
                numerator,
                denominator,
            } if numerator % denominator == 0 => Some(numerator / denominator),
            _ => None,
        }
    }

    pub fn satisfies(&self, rule: CoefficientRule) -> bool {
        use CoefficientRule::*;

        let value = self.approximate();
        match rule {
            Nonzero => value != 0.0,
            Positive => value > 0.0,
            Negative => value < 0.0,
            Unit => self.as_integer() == Some(1) || self.as_integer() == Some(-1),
            Odd => matches!(self.as_integer(), Some(n) if n.rem_euclid(2) == 1),
            Even => matches!(self.as_integer(), Some(n) if n.rem_euclid(2) == 0),
            Prime => matches!(self.as_integer(), Some(n) if is_prime(n)),
            Square => match *self {
                Value::Ratio {
                    numerator,
                    denominator,
                } => perfect_square(numerator) && perfect_square(denominator),
                Value::Surd { .. } => false,
            },
            Cube => match *self {
                Value::Ratio {
                    numerator,
                    denominator,
                } => perfect_cube(numerator) && perfect_cube(denominator),
                Value::Surd { .. } => false,
            },
        }
    }

    pub fn satisfies_all(&self, rules: &[CoefficientRule]) -> bool {
        rules
            .iter()
            .all(|rule| self.satisfies(*rule))
    }
}

/// A generated coefficient: its exact value, the number set it was drawn
/// from, and its formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub value: Value,
    pub number_set: NumberSet,
    pub text: String,
}

#[cfg(test)]
mod check {
    use super::*;
    use CoefficientRule::*;

    #[test]
    fn ratios_are_reduced() {
        assert_eq!(
            Value::ratio(4, -6),
            Value::Ratio {
                numerator: -2,
                denominator: 3
            }
        );
        assert_eq!(Value::ratio(0, 5), Value::integer(0));
    }

    #[test]
    fn rules_on_values() {
        assert!(Value::integer(7).satisfies_all(&[Odd, Prime, Positive, Nonzero]));
        assert!(Value::integer(-8).satisfies_all(&[Even, Cube, Negative]));
        assert!(!Value::integer(-4).satisfies(Square));
        assert!(Value::ratio(9, 4).satisfies(Square));
        assert!(!Value::ratio(1, 2).satisfies(Odd));
        assert!(Value::integer(-1).satisfies(Unit));

        let surd = Value::Surd {
            factor: -2,
            radicand: 3,
        };
        assert!(surd.satisfies(Negative));
        assert!(!surd.satisfies(Square));
        assert!(!surd.satisfies(Even));
    }
}
