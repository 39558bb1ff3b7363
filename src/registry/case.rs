//! Test cases, and the identifiers that tell them apart

use std::fmt::Display;

use crate::describing::describe;
use crate::merging::{complete, Critical};
use crate::settings::*;

/// One generated (or explicitly constructed) settings instance, completed
/// and described.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub id: String,
    pub object_type: ObjectType,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub settings: PartialMathObject,
    pub merged: MathObject,
    pub missing: Vec<String>,
    pub critical: Vec<Critical>,
    pub description: String,
}

impl TestCase {
    pub fn new(settings: PartialMathObject, category: Option<&str>) -> TestCase {
        let object_type = settings.object_type();
        let id = identifier(&settings, None);

        let result = complete(settings.clone());
        let mode = InterfaceMode::infer(&result.merged);
        let description = describe(&result.merged, mode, 1).text;

        TestCase {
            id,
            object_type,
            category: category.map(str::to_string),
            tag: None,
            settings,
            merged: result.merged,
            missing: result.missing,
            critical: result.critical,
            description,
        }
    }

    /// Mark the case with a tag, which becomes part of its identifier.
    pub fn with_tag(mut self, tag: &str) -> TestCase {
        self.tag = Some(tag.to_string());
        self.id = identifier(&self.settings, Some(tag));
        self
    }
}

/// Type abbreviation, then every supplied property as `key=value`, then the
/// tag if there is one.
pub fn identifier(settings: &PartialMathObject, tag: Option<&str>) -> String {
    let properties = settings.properties();

    let mut id = if properties.is_empty() {
        format!("{}:default", settings.object_type().abbreviation())
    } else {
        format!(
            "{}:{}",
            settings
                .object_type()
                .abbreviation(),
            properties.join(";")
        )
    };

    if let Some(tag) = tag {
        id.push('#');
        id.push_str(tag);
    }

    id
}

/// Partial settings that can list which of their properties were supplied.
pub trait Properties {
    fn collect(&self, prefix: &str, out: &mut Vec<String>);

    fn properties(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect("", &mut out);
        out
    }
}

fn key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn push(out: &mut Vec<String>, prefix: &str, name: &str, value: Option<impl Display>) {
    if let Some(value) = value {
        out.push(format!("{}={}", key(prefix, name), value));
    }
}

fn listing<T>(items: &[T], show: impl Fn(&T) -> String) -> String {
    let shown: Vec<String> = items
        .iter()
        .map(show)
        .collect();
    format!("[{}]", shown.join(","))
}

fn range(range: &[f64; 2]) -> String {
    format!("[{},{}]", range[0], range[1])
}

// The element count, then each element's own properties under an indexed
// prefix.
fn nested_list<T: Properties>(
    out: &mut Vec<String>,
    prefix: &str,
    name: &str,
    items: Option<&Vec<T>>,
) {
    if let Some(items) = items {
        let here = key(prefix, name);
        out.push(format!("{}={}", here, items.len()));
        for (i, item) in items
            .iter()
            .enumerate()
        {
            item.collect(&format!("{}[{}]", here, i), out);
        }
    }
}

fn nested<T: Properties>(out: &mut Vec<String>, prefix: &str, name: &str, item: Option<&T>) {
    if let Some(item) = item {
        item.collect(&key(prefix, name), out);
    }
}

impl Properties for PartialCoefficientSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        push(out, prefix, "numberSet", self.number_set.map(|v| v.as_str()));
        push(
            out,
            prefix,
            "representationType",
            self.representation_type
                .map(|v| v.as_str()),
        );
        push(
            out,
            prefix,
            "rules",
            self.rules
                .as_ref()
                .map(|rules| listing(rules, |rule| rule.as_str().to_string())),
        );
        push(out, prefix, "range", self.range.as_ref().map(range));
    }
}

impl Properties for PartialCoefficientsSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested_list(out, prefix, "coefficients", self.coefficients.as_ref());
        push(out, prefix, "collectionCount", self.collection_count);
        push(
            out,
            prefix,
            "rules",
            self.rules
                .as_ref()
                .map(|rules| listing(rules, |rule| rule.as_str().to_string())),
        );
    }
}

impl Properties for PartialTermSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested(out, prefix, "coefficients", self.coefficients.as_ref());
        push(
            out,
            prefix,
            "termIds",
            self.term_ids
                .as_ref()
                .map(|ids| listing(ids, |id| id.clone())),
        );
        push(out, prefix, "variableName", self.variable_name.as_ref());
        push(out, prefix, "power", self.power);
        push(out, prefix, "powerOrder", self.power_order);
    }
}

impl Properties for PartialTermsSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested_list(out, prefix, "terms", self.terms.as_ref());
        push(
            out,
            prefix,
            "combinationType",
            self.combination_type
                .as_ref()
                .map(|v| v.as_str()),
        );
        push(out, prefix, "power", self.power);
        push(out, prefix, "powerOrder", self.power_order);
    }
}

impl Properties for PartialComponent {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            PartialComponent::Term(term) => {
                out.push(format!("{}=term", prefix));
                term.collect(prefix, out);
            }
            PartialComponent::Terms(terms) => {
                out.push(format!("{}=terms", prefix));
                terms.collect(prefix, out);
            }
            PartialComponent::Expression(expression) => {
                out.push(format!("{}=expression", prefix));
                expression.collect(prefix, out);
            }
        }
    }
}

impl Properties for PartialExpressionSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested_list(out, prefix, "expressions", self.expressions.as_ref());
        push(
            out,
            prefix,
            "combinationType",
            self.combination_type
                .as_ref()
                .map(|v| v.as_str()),
        );
        push(out, prefix, "power", self.power);
        push(out, prefix, "powerOrder", self.power_order);
    }
}

impl Properties for PartialEquationSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested_list(out, prefix, "terms", self.terms.as_ref());
    }
}

impl Properties for PartialInequalitySettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested_list(out, prefix, "terms", self.terms.as_ref());
        push(
            out,
            prefix,
            "inequalityType",
            self.inequality_type
                .map(|v| v.as_str()),
        );
    }
}

impl Properties for PartialFunctionSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested(out, prefix, "expression", self.expression.as_ref());
        push(out, prefix, "functionName", self.function_name.as_ref());
        push(out, prefix, "variableName", self.variable_name.as_ref());
    }
}

impl Properties for PartialPointSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested(out, prefix, "coefficients", self.coefficients.as_ref());
        push(out, prefix, "name", self.name.as_ref());
        push(out, prefix, "showName", self.show_name);
    }
}

impl Properties for PartialSetSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested(out, prefix, "coefficients", self.coefficients.as_ref());
        push(out, prefix, "name", self.name.as_ref());
        push(out, prefix, "showName", self.show_name);
    }
}

impl Properties for PartialIntervalSettings {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        nested(out, prefix, "coefficients", self.coefficients.as_ref());
        push(out, prefix, "minimumLength", self.minimum_length);
        push(
            out,
            prefix,
            "intervalType",
            self.interval_type
                .map(|v| v.as_str()),
        );
        push(out, prefix, "name", self.name.as_ref());
        push(out, prefix, "showName", self.show_name);
    }
}

impl Properties for PartialMathObject {
    fn collect(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            PartialMathObject::Coefficient(s) => s.collect(prefix, out),
            PartialMathObject::Coefficients(s) => s.collect(prefix, out),
            PartialMathObject::Term(s) => s.collect(prefix, out),
            PartialMathObject::Terms(s) => s.collect(prefix, out),
            PartialMathObject::Expression(s) => s.collect(prefix, out),
            PartialMathObject::Equation(s) => s.collect(prefix, out),
            PartialMathObject::Inequality(s) => s.collect(prefix, out),
            PartialMathObject::Function(s) => s.collect(prefix, out),
            PartialMathObject::Point(s) => s.collect(prefix, out),
            PartialMathObject::Set(s) => s.collect(prefix, out),
            PartialMathObject::Interval(s) => s.collect(prefix, out),
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn identifiers_from_supplied_properties() {
        let settings = PartialMathObject::Coefficient(PartialCoefficientSettings {
            number_set: Some(NumberSet::Integer),
            rules: Some(vec![CoefficientRule::Odd, CoefficientRule::Prime]),
            ..Default::default()
        });
        assert_eq!(
            identifier(&settings, None),
            "coef:numberSet=integer;rules=[odd,prime]"
        );
        assert_eq!(
            identifier(&PartialMathObject::empty(ObjectType::Point), Some("origin")),
            "pt:default#origin"
        );
    }

    #[test]
    fn nested_identifiers() {
        let settings = PartialMathObject::Expression(PartialExpressionSettings {
            expressions: Some(vec![PartialComponent::Term(PartialTermSettings {
                term_ids: Some(vec!["2".to_string(), "1".to_string()]),
                ..Default::default()
            })]),
            power: Some(Power::new(2, 1)),
            ..Default::default()
        });
        assert_eq!(
            identifier(&settings, None),
            "expr:expressions=1;expressions[0]=term;expressions[0].termIds=[2,1];power=[2,1]"
        );
    }

    #[test]
    fn cases_are_described() {
        let case = TestCase::new(
            PartialMathObject::Term(PartialTermSettings {
                term_ids: Some(vec!["2".to_string(), "1".to_string()]),
                ..Default::default()
            }),
            Some("termIds"),
        );
        assert_eq!(case.description, "a_{1} x^{2} + a_{2} x");
        assert_eq!(case.category, Some("termIds".to_string()));
        assert!(case
            .critical
            .is_empty());

        let tagged = case
            .clone()
            .with_tag("quadratic");
        assert!(tagged
            .id
            .ends_with("#quadratic"));
        assert_ne!(tagged.id, case.id);
    }
}
