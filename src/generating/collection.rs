//! Generating every member of a coefficient collection

use std::cmp::Ordering;

use rand::Rng;
use tracing::warn;

use super::coefficient::{generate_value, ATTEMPTS};
use super::representation::format_value;
use super::{GenerationError, Numeral};
use crate::settings::{CoefficientSettings, CoefficientsRule, CoefficientsSettings};

/// Generate and format one coefficient.
pub fn generate_numeral<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &CoefficientSettings,
) -> Result<Numeral, GenerationError> {
    let (value, number_set) = generate_value(rng, settings)?;
    let text = format_value(rng, value, settings.representation_type, number_set);

    Ok(Numeral {
        value,
        number_set,
        text,
    })
}

/// Generate the members of a collection in order. With `neq` no two members
/// share a text; `increasing` and `decreasing` sort the result by value.
pub fn generate_numerals<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &CoefficientsSettings,
) -> Result<Vec<Numeral>, GenerationError> {
    let mut count = settings.collection_count;
    if count > settings
        .coefficients
        .len()
    {
        warn!(
            "collectionCount {} exceeds the {} coefficient settings given",
            count,
            settings
                .coefficients
                .len()
        );
        count = settings
            .coefficients
            .len();
    }

    let distinct = settings
        .rules
        .contains(&CoefficientsRule::Neq);

    let mut numerals: Vec<Numeral> = Vec::with_capacity(count);
    for (index, member) in settings
        .coefficients
        .iter()
        .take(count)
        .enumerate()
    {
        let mut numeral = generate_numeral(rng, member)?;
        let mut attempts = 1;
        while distinct
            && numerals
                .iter()
                .any(|existing| existing.text == numeral.text)
        {
            if attempts >= ATTEMPTS {
                return Err(GenerationError::NotDistinct { index });
            }
            numeral = generate_numeral(rng, member)?;
            attempts += 1;
        }
        numerals.push(numeral);
    }

    let by_value = |a: &Numeral, b: &Numeral| -> Ordering {
        a.value
            .approximate()
            .total_cmp(
                &b.value
                    .approximate(),
            )
    };
    if settings
        .rules
        .contains(&CoefficientsRule::Increasing)
    {
        numerals.sort_by(by_value);
    } else if settings
        .rules
        .contains(&CoefficientsRule::Decreasing)
    {
        numerals.sort_by(|a, b| by_value(b, a));
    }

    Ok(numerals)
}

#[cfg(test)]
mod check {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::settings::*;

    #[test]
    fn ordered_and_distinct() {
        let mut rng = StdRng::seed_from_u64(21);
        let settings = CoefficientsSettings {
            rules: vec![CoefficientsRule::Neq, CoefficientsRule::Decreasing],
            ..CoefficientsSettings::default().resized(6)
        };

        for _ in 0..20 {
            let numerals = generate_numerals(&mut rng, &settings).expect("numerals");
            assert_eq!(numerals.len(), 6);
            for pair in numerals.windows(2) {
                assert!(pair[0].value.approximate() > pair[1].value.approximate());
            }
        }
    }

    #[test]
    fn distinctness_can_run_out() {
        let mut rng = StdRng::seed_from_u64(2);
        let member = CoefficientSettings {
            range: [1.0, 2.0],
            ..CoefficientSettings::default()
        };
        let settings = CoefficientsSettings {
            coefficients: vec![member; 3],
            collection_count: 3,
            rules: vec![CoefficientsRule::Neq],
        };

        assert_eq!(
            generate_numerals(&mut rng, &settings),
            Err(GenerationError::NotDistinct { index: 2 })
        );
    }

    #[test]
    fn count_is_clamped_to_members() {
        let mut rng = StdRng::seed_from_u64(8);
        let settings = CoefficientsSettings {
            collection_count: 4,
            ..CoefficientsSettings::default()
        };
        assert_eq!(
            generate_numerals(&mut rng, &settings)
                .expect("numerals")
                .len(),
            1
        );
    }
}
