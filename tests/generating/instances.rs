#[cfg(test)]
mod verify {
    use std::path::Path;

    use mathobject::generating::{instantiate, instantiate_all};
    use mathobject::merging::{self, Merged};
    use mathobject::settings::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn exercise() -> Vec<Merged<MathObjectSettings>> {
        let path = Path::new("tests/golden/exercise.json");
        let content = merging::load(path).expect("exercise file");
        merging::parse(path, &content)
            .expect("exercise parses")
            .into_iter()
            .map(|input| {
                input
                    .convert()
                    .expect("converts")
            })
            .collect()
    }

    fn arranged(results: &[Merged<MathObjectSettings>]) -> Vec<(&MathObject, InterfaceMode)> {
        results
            .iter()
            .map(|result| {
                let object = &result
                    .merged
                    .object;
                (object, InterfaceMode::infer(object))
            })
            .collect()
    }

    #[test]
    fn exercise_instantiates() {
        let results = exercise();
        let objects = arranged(&results);

        let instances: Vec<String> = instantiate_all(&objects, Some(2024))
            .into_iter()
            .map(|instance| instance.expect("instance"))
            .collect();

        assert_eq!(instances.len(), 4);
        for instance in &instances {
            assert!(!instance.contains("a_{"), "{}", instance);
        }

        assert!(instances[0].contains(" = "));
        let prime: i64 = instances[1]
            .parse()
            .expect("integer text");
        assert!([2, 3, 5, 7].contains(&prime));
        assert!(instances[2].starts_with("I = ("));
        assert!(instances[3].starts_with("\\{ "));
    }

    #[test]
    fn seed_fixes_the_instances() {
        let results = exercise();
        let objects = arranged(&results);

        assert_eq!(instantiate_all(&objects, Some(9)), instantiate_all(&objects, Some(9)));
    }

    #[test]
    fn interval_endpoints_are_ordered() {
        let object = MathObject::default_for(ObjectType::Interval);
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..25 {
            let text = instantiate(&mut rng, &object, InterfaceMode::Simple).expect("interval");
            let inner = text
                .trim_start_matches("A = [")
                .trim_end_matches(']');
            let ends: Vec<i64> = inner
                .split("; ")
                .map(|end| {
                    end.parse()
                        .expect("integer end")
                })
                .collect();
            assert_eq!(ends.len(), 2);
            assert!(ends[1] - ends[0] >= 1, "{}", text);
        }
    }
}
