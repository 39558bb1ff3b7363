#[cfg(test)]
mod verify {
    use mathobject::registry::{Registry, RegistryConfig};
    use mathobject::settings::*;

    #[test]
    fn disabled_type_is_excluded() {
        let config = RegistryConfig {
            disabled: vec![ObjectType::Function, ObjectType::Set],
        };
        let registry = Registry::initialize(&config);

        let available = registry.available_types();
        assert!(!available.contains(&ObjectType::Function));
        assert!(!available.contains(&ObjectType::Set));
        assert_eq!(available.len(), ObjectType::ALL.len() - 2);

        assert!(registry
            .test_cases(Some(ObjectType::Function))
            .is_empty());
        assert!(registry
            .create_test_case(ObjectType::Set, PartialMathObject::empty(ObjectType::Set))
            .is_none());

        assert!(registry
            .test_cases(None)
            .iter()
            .all(|case| case.object_type != ObjectType::Function));
    }

    #[test]
    fn factory_builds_from_supplied_settings() {
        let registry = Registry::initialize(&RegistryConfig::default());

        let settings = PartialMathObject::Term(PartialTermSettings {
            variable_name: Some("y".to_string()),
            term_ids: Some(vec!["3".to_string(), "0".to_string()]),
            ..Default::default()
        });

        let case = registry
            .create_test_case(ObjectType::Term, settings)
            .expect("term factory");

        assert_eq!(case.id, "term:termIds=[3,0];variableName=y");
        assert_eq!(case.description, "a_{1} y^{3} + a_{2}");
        assert_eq!(case.category, None);
    }

    #[test]
    fn factory_refuses_other_types() {
        let registry = Registry::initialize(&RegistryConfig::default());

        assert!(registry
            .create_test_case(ObjectType::Term, PartialMathObject::empty(ObjectType::Point))
            .is_none());
    }

    #[test]
    fn cached_until_invalidated() {
        let mut registry = Registry::initialize(&RegistryConfig::default());

        let first = registry
            .cases(ObjectType::Point)
            .as_ptr();
        let second = registry
            .cases(ObjectType::Point)
            .as_ptr();
        assert_eq!(first, second);

        registry.invalidate(ObjectType::Point);
        let regenerated = registry
            .cases(ObjectType::Point)
            .len();
        assert!(regenerated > 0);
    }
}
