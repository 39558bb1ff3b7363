#[cfg(test)]
mod verify {
    use mathobject::merging::{complete, merge_settings};
    use mathobject::registry::{Registry, RegistryConfig};
    use mathobject::settings::*;

    #[test]
    fn merging_complete_settings_reports_nothing() {
        let registry = Registry::initialize(&RegistryConfig::default());

        for case in registry.test_cases(None) {
            let again = merge_settings(
                case.object_type,
                case.merged
                    .clone()
                    .into_partial(),
            )
            .expect("same type");

            assert!(again.missing.is_empty(), "{}: {:?}", case.id, again.missing);
            assert_eq!(again.merged, case.merged, "{}", case.id);
        }
    }

    #[test]
    fn term_coefficients_match_term_ids() {
        let registry = Registry::initialize(&RegistryConfig::default());

        for case in registry.test_cases(Some(ObjectType::Term)) {
            let MathObject::Term(term) = &case.merged else {
                panic!("{} is not a term", case.id);
            };
            assert_eq!(
                term.coefficients
                    .coefficients
                    .len(),
                term.term_ids
                    .len(),
                "{}",
                case.id
            );
        }
    }

    #[test]
    fn empty_input_takes_every_default() {
        for object_type in ObjectType::ALL {
            let result = complete(PartialMathObject::empty(object_type));
            assert_eq!(result.merged, MathObject::default_for(object_type));
            assert!(!result
                .missing
                .is_empty());
            assert!(result
                .critical
                .is_empty());
        }
    }

    #[test]
    fn wrong_payload_is_refused() {
        let result = merge_settings(ObjectType::Term, PartialMathObject::empty(ObjectType::Set));
        assert_eq!(
            result.unwrap_err(),
            SettingsError::MismatchedSettings {
                expected: ObjectType::Term,
                found: ObjectType::Set,
            }
        );
    }
}
