#[cfg(test)]
mod verify {
    use std::collections::HashSet;

    use mathobject::registry::{generator_for, Registry, RegistryConfig};
    use mathobject::settings::ObjectType;

    #[test]
    fn coefficient_generation_is_deterministic() {
        let generate = generator_for(ObjectType::Coefficient);

        let first: Vec<String> = generate()
            .into_iter()
            .map(|case| case.id)
            .collect();
        let second: Vec<String> = generate()
            .into_iter()
            .map(|case| case.id)
            .collect();

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn identifiers_are_unique() {
        let registry = Registry::initialize(&RegistryConfig::default());

        for object_type in registry.available_types() {
            let cases = registry.cases(object_type);
            let ids: HashSet<&str> = cases
                .iter()
                .map(|case| case.id.as_str())
                .collect();
            assert_eq!(ids.len(), cases.len(), "{}", object_type);
        }
    }

    #[test]
    fn identifiers_start_with_the_abbreviation() {
        let registry = Registry::initialize(&RegistryConfig::default());

        for case in registry.test_cases(None) {
            let prefix = format!("{}:", case.object_type.abbreviation());
            assert!(case
                .id
                .starts_with(&prefix), "{}", case.id);
        }
    }

    #[test]
    fn generated_cases_are_described() {
        let registry = Registry::initialize(&RegistryConfig::default());

        for case in registry.test_cases(None) {
            assert!(!case
                .description
                .is_empty(), "{}", case.id);
            assert!(case
                .critical
                .is_empty(), "{}: {:?}", case.id, case.critical);
        }
    }
}
