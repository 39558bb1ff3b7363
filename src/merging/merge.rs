//! Reconcile partially specified settings against the defaults table.
//!
//! Every field absent from the partial value is taken from the default and
//! its path is recorded. Nested settings are merged recursively. Lists of
//! settings follow the length of the supplied list, with each supplied
//! element merged against the first element of the default list. Merging
//! never fails; structural problems that will make the result describe
//! badly are collected as critical diagnostics instead.

use std::fmt;

use tracing::{debug, error};

use crate::settings::*;

/// Structural problems that survive merging.
#[derive(Debug, Clone, PartialEq)]
pub enum Critical {
    /// A mandatory list (`expressions`, `termIds`) is empty.
    EmptyStructure(String),
    /// A term whose coefficients and exponents are not paired one to one.
    LengthMismatch {
        path: String,
        coefficients: usize,
        term_ids: usize,
    },
    /// A declared `collectionCount` disagreeing with the coefficient list.
    CountMismatch {
        path: String,
        declared: usize,
        actual: usize,
    },
    ReversedRange {
        path: String,
        min: f64,
        max: f64,
    },
    /// An equation or inequality supplied with other than one or two sides.
    SideCount { path: String, found: usize },
}

impl Critical {
    pub fn path(&self) -> &str {
        match self {
            Critical::EmptyStructure(path) => path,
            Critical::LengthMismatch { path, .. } => path,
            Critical::CountMismatch { path, .. } => path,
            Critical::ReversedRange { path, .. } => path,
            Critical::SideCount { path, .. } => path,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Critical::EmptyStructure(_) => "required list is empty".to_string(),
            Critical::LengthMismatch {
                coefficients,
                term_ids,
                ..
            } => format!(
                "{} coefficients paired with {} term ids",
                coefficients, term_ids
            ),
            Critical::CountMismatch {
                declared, actual, ..
            } => format!(
                "collection count {} but {} coefficients",
                declared, actual
            ),
            Critical::ReversedRange { min, max, .. } => {
                format!("range [{}; {}] is reversed", min, max)
            }
            Critical::SideCount { found, .. } => {
                format!("expected one or two sides, found {}", found)
            }
        }
    }
}

impl fmt::Display for Critical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path(), self.message())
    }
}

/// The outcome of a merge: the completed value, the paths of every field
/// that was filled from defaults, and any critical diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<T> {
    pub merged: T,
    pub missing: Vec<String>,
    pub critical: Vec<Critical>,
}

impl<T> Merged<T> {
    pub fn is_complete(&self) -> bool {
        self.missing
            .is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Merged<U> {
        Merged {
            merged: f(self.merged),
            missing: self.missing,
            critical: self.critical,
        }
    }
}

/// Accumulates missing paths and critical diagnostics during one merge.
#[derive(Debug, Default)]
pub struct Report {
    pub missing: Vec<String>,
    pub critical: Vec<Critical>,
}

// Fields whose absence means the object has no real content of its own.
const STRUCTURAL: [&str; 4] = ["expressions", "terms", "termIds", "range"];

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}

impl Report {
    fn absent(&mut self, path: &str, key: &str) {
        let here = join(path, key);
        if STRUCTURAL.contains(&key) {
            debug!("Structural field missing: {}", here);
        }
        self.missing
            .push(here);
    }

    fn flag(&mut self, critical: Critical) {
        error!("{}", critical);
        self.critical
            .push(critical);
    }

    /// Take a supplied scalar, or the default.
    fn take<T: Clone>(&mut self, value: Option<T>, default: &T, path: &str, key: &str) -> T {
        match value {
            Some(value) => value,
            None => {
                self.absent(path, key);
                default.clone()
            }
        }
    }

    /// Merge a supplied nested object, or take the default whole.
    fn nested<M: Merge>(
        &mut self,
        value: Option<M::Partial>,
        default: &M,
        path: &str,
        key: &str,
    ) -> M {
        match value {
            Some(partial) => M::merge(default, partial, &join(path, key), self),
            None => {
                self.absent(path, key);
                default.clone()
            }
        }
    }

    /// Merge each supplied element against the first default element, or
    /// take the default list whole.
    fn each<M: Merge>(
        &mut self,
        values: Option<Vec<M::Partial>>,
        defaults: &[M],
        path: &str,
        key: &str,
    ) -> Vec<M> {
        match values {
            Some(items) => {
                let here = join(path, key);
                let template = defaults
                    .first()
                    .cloned()
                    .unwrap_or_default();
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, partial)| M::merge(&template, partial, &index(&here, i), self))
                    .collect()
            }
            None => {
                self.absent(path, key);
                defaults.to_vec()
            }
        }
    }
}

/// Settings that can be completed from a default of the same type.
pub trait Merge: Clone + Default {
    type Partial;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self;

    /// Convert a complete value back into a partial one with every field
    /// present.
    fn into_partial(self) -> Self::Partial;
}

/// Merge a partial value against a default, starting from the root path.
pub fn merge<M: Merge>(default: &M, partial: M::Partial) -> Merged<M> {
    let mut report = Report::default();
    let merged = M::merge(default, partial, "", &mut report);

    if !report
        .missing
        .is_empty()
    {
        debug!(
            "Missing attributes filled from defaults: {}",
            report
                .missing
                .join(", ")
        );
    }

    Merged {
        merged,
        missing: report.missing,
        critical: report.critical,
    }
}

impl Merge for CoefficientSettings {
    type Partial = PartialCoefficientSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        let result = CoefficientSettings {
            number_set: report.take(partial.number_set, &default.number_set, path, "numberSet"),
            representation_type: report.take(
                partial.representation_type,
                &default.representation_type,
                path,
                "representationType",
            ),
            rules: report.take(partial.rules, &default.rules, path, "rules"),
            range: report.take(partial.range, &default.range, path, "range"),
        };

        let [min, max] = result.range;
        if min > max {
            report.flag(Critical::ReversedRange {
                path: join(path, "range"),
                min,
                max,
            });
        }

        result
    }

    fn into_partial(self) -> Self::Partial {
        PartialCoefficientSettings {
            number_set: Some(self.number_set),
            representation_type: Some(self.representation_type),
            rules: Some(self.rules),
            range: Some(self.range),
        }
    }
}

impl CoefficientsSettings {
    /// Merge with an expected size. When the caller supplies neither the
    /// coefficient list nor a count, the default template is repeated
    /// `wanted` times (if given) so that the collection pairs up with
    /// whatever it is attached to.
    fn merge_sized(
        default: &Self,
        partial: PartialCoefficientsSettings,
        path: &str,
        report: &mut Report,
        wanted: Option<usize>,
    ) -> Self {
        let rules = report.take(partial.rules, &default.rules, path, "rules");

        let coefficients = match partial.coefficients {
            Some(items) => report.each(Some(items), &default.coefficients, path, "coefficients"),
            None => {
                report.absent(path, "coefficients");
                let count = partial
                    .collection_count
                    .or(wanted)
                    .unwrap_or(
                        default
                            .coefficients
                            .len(),
                    );
                default
                    .resized(count)
                    .coefficients
            }
        };

        let collection_count = match partial.collection_count {
            Some(declared) => {
                if declared != coefficients.len() {
                    report.flag(Critical::CountMismatch {
                        path: join(path, "collectionCount"),
                        declared,
                        actual: coefficients.len(),
                    });
                }
                declared
            }
            None => {
                report.absent(path, "collectionCount");
                coefficients.len()
            }
        };

        CoefficientsSettings {
            coefficients,
            collection_count,
            rules,
        }
    }
}

impl Merge for CoefficientsSettings {
    type Partial = PartialCoefficientsSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        CoefficientsSettings::merge_sized(default, partial, path, report, None)
    }

    fn into_partial(self) -> Self::Partial {
        PartialCoefficientsSettings {
            coefficients: Some(
                self.coefficients
                    .into_iter()
                    .map(Merge::into_partial)
                    .collect(),
            ),
            collection_count: Some(self.collection_count),
            rules: Some(self.rules),
        }
    }
}

impl Merge for TermSettings {
    type Partial = PartialTermSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        let term_ids = report.take(partial.term_ids, &default.term_ids, path, "termIds");
        let wanted = term_ids.len();

        let coefficients = match partial.coefficients {
            Some(supplied) => CoefficientsSettings::merge_sized(
                &default.coefficients,
                supplied,
                &join(path, "coefficients"),
                report,
                Some(wanted),
            ),
            None => {
                report.absent(path, "coefficients");
                default
                    .coefficients
                    .resized(wanted)
            }
        };

        if term_ids.is_empty() {
            report.flag(Critical::EmptyStructure(join(path, "termIds")));
        } else if coefficients
            .coefficients
            .len()
            != wanted
        {
            report.flag(Critical::LengthMismatch {
                path: path.to_string(),
                coefficients: coefficients
                    .coefficients
                    .len(),
                term_ids: wanted,
            });
        }

        TermSettings {
            coefficients,
            term_ids,
            variable_name: report.take(
                partial.variable_name,
                &default.variable_name,
                path,
                "variableName",
            ),
            power: report.take(partial.power, &default.power, path, "power"),
            power_order: report.take(partial.power_order, &default.power_order, path, "powerOrder"),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialTermSettings {
            coefficients: Some(
                self.coefficients
                    .into_partial(),
            ),
            term_ids: Some(self.term_ids),
            variable_name: Some(self.variable_name),
            power: Some(self.power),
            power_order: Some(self.power_order),
        }
    }
}

impl Merge for TermsSettings {
    type Partial = PartialTermsSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        TermsSettings {
            terms: report.each(partial.terms, &default.terms, path, "terms"),
            combination_type: report.take(
                partial.combination_type,
                &default.combination_type,
                path,
                "combinationType",
            ),
            power: report.take(partial.power, &default.power, path, "power"),
            power_order: report.take(partial.power_order, &default.power_order, path, "powerOrder"),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialTermsSettings {
            terms: Some(
                self.terms
                    .into_iter()
                    .map(Merge::into_partial)
                    .collect(),
            ),
            combination_type: Some(self.combination_type),
            power: Some(self.power),
            power_order: Some(self.power_order),
        }
    }
}

impl Merge for Component {
    type Partial = PartialComponent;

    // A child whose kind differs from the template is merged against the
    // canonical default of its own kind.
    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        match (partial, default) {
            (PartialComponent::Term(partial), Component::Term(template)) => {
                Component::Term(TermSettings::merge(template, partial, path, report))
            }
            (PartialComponent::Term(partial), _) => Component::Term(TermSettings::merge(
                &TermSettings::default(),
                partial,
                path,
                report,
            )),
            (PartialComponent::Terms(partial), Component::Terms(template)) => {
                Component::Terms(TermsSettings::merge(template, partial, path, report))
            }
            (PartialComponent::Terms(partial), _) => Component::Terms(TermsSettings::merge(
                &TermsSettings::default(),
                partial,
                path,
                report,
            )),
            (PartialComponent::Expression(partial), Component::Expression(template)) => {
                Component::Expression(ExpressionSettings::merge(template, partial, path, report))
            }
            (PartialComponent::Expression(partial), _) => {
                Component::Expression(ExpressionSettings::merge(
                    &ExpressionSettings::default(),
                    partial,
                    path,
                    report,
                ))
            }
        }
    }

    fn into_partial(self) -> Self::Partial {
        match self {
            Component::Term(term) => PartialComponent::Term(term.into_partial()),
            Component::Terms(terms) => PartialComponent::Terms(terms.into_partial()),
            Component::Expression(expression) => {
                PartialComponent::Expression(expression.into_partial())
            }
        }
    }
}

impl Merge for ExpressionSettings {
    type Partial = PartialExpressionSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        let expressions = report.each(
            partial.expressions,
            &default.expressions,
            path,
            "expressions",
        );

        if expressions.is_empty() {
            report.flag(Critical::EmptyStructure(join(path, "expressions")));
        }

        ExpressionSettings {
            expressions,
            combination_type: report.take(
                partial.combination_type,
                &default.combination_type,
                path,
                "combinationType",
            ),
            power: report.take(partial.power, &default.power, path, "power"),
            power_order: report.take(partial.power_order, &default.power_order, path, "powerOrder"),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialExpressionSettings {
            expressions: Some(
                self.expressions
                    .into_iter()
                    .map(Merge::into_partial)
                    .collect(),
            ),
            combination_type: Some(self.combination_type),
            power: Some(self.power),
            power_order: Some(self.power_order),
        }
    }
}

/// Merge the sides of an equation or inequality. Anything other than one
/// or two sides is flagged; an empty list falls back to the default sides
/// and surplus sides are dropped.
fn merge_sides(
    default: &Sides,
    partial: Option<Vec<PartialExpressionSettings>>,
    path: &str,
    report: &mut Report,
) -> Sides {
    let supplied = partial.is_some();
    let mut sides = report.each(partial, &default.to_vec(), path, "terms");

    if supplied && (sides.is_empty() || sides.len() > 2) {
        report.flag(Critical::SideCount {
            path: join(path, "terms"),
            found: sides.len(),
        });
        sides.truncate(2);
    }

    Sides::try_from(sides).unwrap_or_else(|_| default.clone())
}

impl Merge for EquationSettings {
    type Partial = PartialEquationSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        EquationSettings {
            terms: merge_sides(&default.terms, partial.terms, path, report),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialEquationSettings {
            terms: Some(sides_into_partial(self.terms)),
        }
    }
}

impl Merge for InequalitySettings {
    type Partial = PartialInequalitySettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        InequalitySettings {
            terms: merge_sides(&default.terms, partial.terms, path, report),
            inequality_type: report.take(
                partial.inequality_type,
                &default.inequality_type,
                path,
                "inequalityType",
            ),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialInequalitySettings {
            terms: Some(sides_into_partial(self.terms)),
            inequality_type: Some(self.inequality_type),
        }
    }
}

fn sides_into_partial(sides: Sides) -> Vec<PartialExpressionSettings> {
    Vec::from(sides)
        .into_iter()
        .map(Merge::into_partial)
        .collect()
}

impl Merge for FunctionSettings {
    type Partial = PartialFunctionSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        let variable_name = match partial.variable_name {
            Some(name) => Some(name),
            None => {
                report.absent(path, "variableName");
                default
                    .variable_name
                    .clone()
            }
        };

        FunctionSettings {
            expression: report.nested(partial.expression, &default.expression, path, "expression"),
            function_name: report.take(
                partial.function_name,
                &default.function_name,
                path,
                "functionName",
            ),
            variable_name,
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialFunctionSettings {
            expression: Some(
                self.expression
                    .into_partial(),
            ),
            function_name: Some(self.function_name),
            variable_name: self.variable_name,
        }
    }
}

impl Merge for PointSettings {
    type Partial = PartialPointSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        PointSettings {
            coefficients: report.nested(
                partial.coefficients,
                &default.coefficients,
                path,
                "coefficients",
            ),
            name: report.take(partial.name, &default.name, path, "name"),
            show_name: report.take(partial.show_name, &default.show_name, path, "showName"),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialPointSettings {
            coefficients: Some(
                self.coefficients
                    .into_partial(),
            ),
            name: Some(self.name),
            show_name: Some(self.show_name),
        }
    }
}

impl Merge for SetSettings {
    type Partial = PartialSetSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        SetSettings {
            coefficients: report.nested(
                partial.coefficients,
                &default.coefficients,
                path,
                "coefficients",
            ),
            name: report.take(partial.name, &default.name, path, "name"),
            show_name: report.take(partial.show_name, &default.show_name, path, "showName"),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialSetSettings {
            coefficients: Some(
                self.coefficients
                    .into_partial(),
            ),
            name: Some(self.name),
            show_name: Some(self.show_name),
        }
    }
}

impl Merge for IntervalSettings {
    type Partial = PartialIntervalSettings;

    fn merge(default: &Self, partial: Self::Partial, path: &str, report: &mut Report) -> Self {
        IntervalSettings {
            coefficients: report.nested(
                partial.coefficients,
                &default.coefficients,
                path,
                "coefficients",
            ),
            minimum_length: report.take(
                partial.minimum_length,
                &default.minimum_length,
                path,
                "minimumLength",
            ),
            interval_type: report.take(
                partial.interval_type,
                &default.interval_type,
                path,
                "intervalType",
            ),
            name: report.take(partial.name, &default.name, path, "name"),
            show_name: report.take(partial.show_name, &default.show_name, path, "showName"),
        }
    }

    fn into_partial(self) -> Self::Partial {
        PartialIntervalSettings {
            coefficients: Some(
                self.coefficients
                    .into_partial(),
            ),
            minimum_length: Some(self.minimum_length),
            interval_type: Some(self.interval_type),
            name: Some(self.name),
            show_name: Some(self.show_name),
        }
    }
}

/// Complete a partial object against the defaults for the requested type.
/// Fails only when the payload is for a different type.
pub fn merge_settings(
    object_type: ObjectType,
    partial: PartialMathObject,
) -> Result<Merged<MathObject>, SettingsError> {
    let found = partial.object_type();
    if found != object_type {
        return Err(SettingsError::MismatchedSettings {
            expected: object_type,
            found,
        });
    }

    Ok(complete(partial))
}

/// Complete a partial object against the defaults for its own type.
pub fn complete(partial: PartialMathObject) -> Merged<MathObject> {
    match partial {
        PartialMathObject::Coefficient(p) => {
            merge(&CoefficientSettings::default(), p).map(MathObject::Coefficient)
        }
        PartialMathObject::Coefficients(p) => {
            merge(&CoefficientsSettings::default(), p).map(MathObject::Coefficients)
        }
        PartialMathObject::Term(p) => {
            merge(&TermSettings::default(), p).map(MathObject::Term)
        }
        PartialMathObject::Terms(p) => {
            merge(&TermsSettings::default(), p).map(MathObject::Terms)
        }
        PartialMathObject::Expression(p) => {
            merge(&ExpressionSettings::default(), p).map(MathObject::Expression)
        }
        PartialMathObject::Equation(p) => {
            merge(&EquationSettings::default(), p).map(MathObject::Equation)
        }
        PartialMathObject::Inequality(p) => {
            merge(&InequalitySettings::default(), p).map(MathObject::Inequality)
        }
        PartialMathObject::Function(p) => {
            merge(&FunctionSettings::default(), p).map(MathObject::Function)
        }
        PartialMathObject::Point(p) => {
            merge(&PointSettings::default(), p).map(MathObject::Point)
        }
        PartialMathObject::Set(p) => {
            merge(&SetSettings::default(), p).map(MathObject::Set)
        }
        PartialMathObject::Interval(p) => {
            merge(&IntervalSettings::default(), p).map(MathObject::Interval)
        }
    }
}

impl MathObject {
    pub fn into_partial(self) -> PartialMathObject {
        match self {
            MathObject::Coefficient(s) => PartialMathObject::Coefficient(s.into_partial()),
            MathObject::Coefficients(s) => PartialMathObject::Coefficients(s.into_partial()),
            MathObject::Term(s) => PartialMathObject::Term(s.into_partial()),
            MathObject::Terms(s) => PartialMathObject::Terms(s.into_partial()),
            MathObject::Expression(s) => PartialMathObject::Expression(s.into_partial()),
            MathObject::Equation(s) => PartialMathObject::Equation(s.into_partial()),
            MathObject::Inequality(s) => PartialMathObject::Inequality(s.into_partial()),
            MathObject::Function(s) => PartialMathObject::Function(s.into_partial()),
            MathObject::Point(s) => PartialMathObject::Point(s.into_partial()),
            MathObject::Set(s) => PartialMathObject::Set(s.into_partial()),
            MathObject::Interval(s) => PartialMathObject::Interval(s.into_partial()),
        }
    }
}
