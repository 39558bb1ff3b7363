//! The test case registry: per type generators and factories, with
//! generated cases cached until invalidated.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, info, warn};

use crate::settings::{ObjectType, PartialMathObject};

mod case;
mod generator;
mod generators;
pub mod validation;

// Re-export all public symbols
pub use case::*;
pub use generator::*;
pub use generators::{factory_for, generator_for};

pub type GeneratorFn = Box<dyn Fn() -> Vec<TestCase> + Send + Sync>;

pub type FactoryFn = Box<dyn Fn(PartialMathObject) -> Option<TestCase> + Send + Sync>;

/// Which object types take part. A disabled type never has its generator
/// or factory registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub disabled: Vec<ObjectType>,
}

struct Entry {
    generator: Option<GeneratorFn>,
    factory: Option<FactoryFn>,
    cache: OnceLock<Vec<TestCase>>,
}

impl Entry {
    fn new() -> Entry {
        Entry {
            generator: None,
            factory: None,
            cache: OnceLock::new(),
        }
    }
}

#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<ObjectType, Entry>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// A registry holding the generator and factory of every type not
    /// disabled by the configuration.
    pub fn initialize(config: &RegistryConfig) -> Registry {
        let mut registry = Registry::new();

        for object_type in ObjectType::ALL {
            if config
                .disabled
                .contains(&object_type)
            {
                debug!("Object type {} is disabled", object_type);
                continue;
            }
            registry.register(object_type, generator_for(object_type));
            registry.register_factory(object_type, factory_for(object_type));
        }

        registry
    }

    pub fn register(&mut self, object_type: ObjectType, generator: GeneratorFn) {
        let entry = self
            .entries
            .entry(object_type)
            .or_insert_with(Entry::new);
        entry.generator = Some(generator);
        entry.cache = OnceLock::new();
    }

    pub fn register_factory(&mut self, object_type: ObjectType, factory: FactoryFn) {
        let entry = self
            .entries
            .entry(object_type)
            .or_insert_with(Entry::new);
        entry.factory = Some(factory);
        entry.cache = OnceLock::new();
    }

    /// The types with a registered generator, in declaration order.
    pub fn available_types(&self) -> Vec<ObjectType> {
        self.entries
            .iter()
            .filter(|(_, entry)| {
                entry
                    .generator
                    .is_some()
            })
            .map(|(object_type, _)| *object_type)
            .collect()
    }

    /// The generated cases for a type, running its generator the first
    /// time and keeping only the first case of each id. A type with no
    /// generator has no cases.
    pub fn cases(&self, object_type: ObjectType) -> &[TestCase] {
        let Some(entry) = self
            .entries
            .get(&object_type)
        else {
            return &[];
        };
        let Some(generator) = &entry.generator else {
            return &[];
        };

        entry
            .cache
            .get_or_init(|| {
                info!("Generating test cases for {}", object_type);
                let cases = unique(generator());
                debug!("Generated {} test cases for {}", cases.len(), object_type);
                cases
            })
    }

    /// The cases for one type, or for every available type.
    pub fn test_cases(&self, object_type: Option<ObjectType>) -> Vec<&TestCase> {
        match object_type {
            Some(object_type) => self
                .cases(object_type)
                .iter()
                .collect(),
            None => self
                .available_types()
                .into_iter()
                .flat_map(|object_type| self.cases(object_type))
                .collect(),
        }
    }

    /// Build one case from caller supplied settings through the type's
    /// factory.
    pub fn create_test_case(
        &self,
        object_type: ObjectType,
        settings: PartialMathObject,
    ) -> Option<TestCase> {
        let factory = self
            .entries
            .get(&object_type)
            .and_then(|entry| {
                entry
                    .factory
                    .as_ref()
            });

        match factory {
            Some(factory) => factory(settings),
            None => {
                warn!("No factory registered for {}", object_type);
                None
            }
        }
    }

    pub fn clear_cache(&mut self) {
        for entry in self
            .entries
            .values_mut()
        {
            entry.cache = OnceLock::new();
        }
    }

    pub fn invalidate(&mut self, object_type: ObjectType) {
        if let Some(entry) = self
            .entries
            .get_mut(&object_type)
        {
            entry.cache = OnceLock::new();
        }
    }
}

#[cfg(test)]
mod check {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counting(calls: Arc<AtomicUsize>) -> GeneratorFn {
        Box::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![TestCase::new(PartialMathObject::empty(ObjectType::Point), None)]
        })
    }

    #[test]
    fn generated_once_until_invalidated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = Registry::new();
        registry.register(ObjectType::Point, counting(calls.clone()));

        assert_eq!(
            registry
                .cases(ObjectType::Point)
                .len(),
            1
        );
        registry.cases(ObjectType::Point);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        registry.invalidate(ObjectType::Point);
        registry.cases(ObjectType::Point);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        registry.clear_cache();
        registry.cases(ObjectType::Point);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let mut registry = Registry::new();
        registry.register(
            ObjectType::Point,
            Box::new(|| {
                vec![
                    TestCase::new(PartialMathObject::empty(ObjectType::Point), Some("first")),
                    TestCase::new(PartialMathObject::empty(ObjectType::Point), Some("second")),
                ]
            }),
        );

        let cases = registry.test_cases(Some(ObjectType::Point));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].id, "pt:default");
        assert_eq!(cases[0].category.as_deref(), Some("first"));
    }

    #[test]
    fn unregistered_types_are_empty() {
        let registry = Registry::new();
        assert!(registry
            .cases(ObjectType::Term)
            .is_empty());
        assert!(registry
            .available_types()
            .is_empty());
        assert!(registry
            .create_test_case(ObjectType::Term, PartialMathObject::empty(ObjectType::Term))
            .is_none());
    }

    #[test]
    fn disabled_types_are_skipped() {
        let config = RegistryConfig {
            disabled: vec![ObjectType::Interval],
        };
        let registry = Registry::initialize(&config);

        assert_eq!(
            registry
                .available_types()
                .len(),
            10
        );
        assert!(!registry
            .available_types()
            .contains(&ObjectType::Interval));
        assert!(registry
            .test_cases(Some(ObjectType::Interval))
            .is_empty());
    }
}
