#[cfg(test)]
mod verify {
    use mathobject::describing::*;
    use mathobject::formatting::{apply_power, format_term};
    use mathobject::merging::complete;
    use mathobject::settings::*;

    fn single_term_side(ids: &[&str]) -> PartialExpressionSettings {
        PartialExpressionSettings {
            expressions: Some(vec![PartialComponent::Term(PartialTermSettings {
                term_ids: Some(
                    ids.iter()
                        .map(|id| id.to_string())
                        .collect(),
                ),
                ..Default::default()
            })]),
            ..Default::default()
        }
    }

    #[test]
    fn end_to_end_term() {
        let partial = PartialMathObject::Term(PartialTermSettings {
            variable_name: Some("x".to_string()),
            term_ids: Some(vec!["2".to_string(), "1".to_string()]),
            power: Some(Power::new(1, 1)),
            ..Default::default()
        });

        let result = complete(partial);
        let description = describe(&result.merged, InterfaceMode::Simple, 1);

        assert_eq!(description.text, "a_{1} x^{2} + a_{2} x");
        assert_eq!(description.next_index, 3);
    }

    #[test]
    fn right_side_continues_index() {
        for start in [1, 4, 10] {
            let partial = PartialMathObject::Equation(PartialEquationSettings {
                terms: Some(vec![single_term_side(&["2", "1"]), single_term_side(&["1"])]),
            });

            let result = complete(partial);
            let description = describe(&result.merged, InterfaceMode::Complex, start);

            let right = format!("= a_{{{}}} x", start + 2);
            assert!(
                description
                    .text
                    .ends_with(&right),
                "{} should end with {}",
                description.text,
                right
            );
            assert_eq!(description.next_index, start + 3);
        }
    }

    #[test]
    fn power_and_root_boundaries() {
        assert_eq!(apply_power("x", Power::new(1, 1), true), "x");
        assert_eq!(apply_power("5", Power::new(3, 1), true), "5^{3}");
        assert_eq!(
            apply_power("x+1", Power::new(2, 1), true),
            "\\left(x+1\\right)^{2}"
        );
        assert_eq!(apply_power("x", Power::new(1, 2), true), "\\sqrt{x}");
        assert_eq!(apply_power("x", Power::new(1, 3), true), "\\sqrt[3]{x}");
    }

    #[test]
    fn signs_are_normalized() {
        let result = format_term(&["a", "-b"], Power::new(1, 1), &["1", "1"], true, "x")
            .expect("formatted term");
        assert!(!result.contains("+ -"));
    }

    #[test]
    fn descriptions_never_fail() {
        for object_type in ObjectType::ALL {
            let object = MathObject::default_for(object_type);
            for mode in [InterfaceMode::Simple, InterfaceMode::Complex] {
                let description = describe(&object, mode, 1);
                assert!(
                    !description
                        .text
                        .is_empty(),
                    "{} in {:?}",
                    object_type,
                    mode
                );
                assert!(description.next_index >= 1);
            }
        }
    }

    #[test]
    fn missing_term_ids_is_reported_in_text() {
        let settings = TermSettings {
            term_ids: Vec::new(),
            ..TermSettings::default()
        };
        let description = describe_term(&settings, 5);
        assert_eq!(description.text, MISSING_TERM_IDS);
        assert_eq!(description.next_index, 5);
    }
}
