#[cfg(test)]
mod verify {
    use std::path::Path;

    use mathobject::merging;
    use mathobject::settings::*;

    #[test]
    fn missing_file() {
        let error = merging::load(Path::new("tests/golden/nonexistent.json")).unwrap_err();
        assert_eq!(error.problem, "File not found");
    }

    #[test]
    fn exercise_file_converts() {
        let path = Path::new("tests/golden/exercise.json");
        let content = merging::load(path).expect("exercise file");
        let inputs = merging::parse(path, &content).expect("exercise parses");

        assert_eq!(inputs.len(), 4);

        let results: Vec<_> = inputs
            .into_iter()
            .map(|input| {
                input
                    .convert()
                    .expect("converts")
            })
            .collect();

        assert_eq!(
            results[0]
                .merged
                .priority,
            1
        );
        assert_eq!(
            results[0]
                .merged
                .dependency,
            DEFAULT_DEPENDENCY
        );
        assert_eq!(
            results[3]
                .merged
                .object
                .object_type(),
            ObjectType::Set
        );
    }

    #[test]
    fn unknown_object_type() {
        let path = Path::new("input.json");
        let inputs = merging::parse(path, r#"{ "objectType": "matrix" }"#).expect("parses");

        let error = inputs
            .into_iter()
            .next()
            .expect("one input")
            .convert()
            .unwrap_err();
        assert_eq!(error, SettingsError::UnsupportedObjectType("matrix".to_string()));
    }

    #[test]
    fn absent_slot() {
        let path = Path::new("input.json");
        let inputs = merging::parse(path, r#"{ "objectType": "point", "setSettings": {} }"#)
            .expect("parses");

        let error = inputs
            .into_iter()
            .next()
            .expect("one input")
            .convert()
            .unwrap_err();
        assert_eq!(error, SettingsError::MissingSettings(ObjectType::Point));
    }
}
