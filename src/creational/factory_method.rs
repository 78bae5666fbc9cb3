//! Factory method: create animals from a string key via an explicit registry.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::error::{PatternError, PatternResult};

pub trait Animal {
    fn kind(&self) -> &'static str;
    fn sound(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn kind(&self) -> &'static str {
        "dog"
    }

    fn sound(&self) -> &'static str {
        "Woof!"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn kind(&self) -> &'static str {
        "cat"
    }

    fn sound(&self) -> &'static str {
        "Meow!"
    }
}

/// Constructor registered under a key.
pub type AnimalConstructor = fn() -> Box<dyn Animal>;

/// Key → constructor map. Lookups of unregistered keys fail.
#[derive(Debug, Clone)]
pub struct AnimalFactory {
    constructors: BTreeMap<String, AnimalConstructor>,
}

impl Default for AnimalFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AnimalFactory {
    /// Factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Factory knowing `dog` and `cat`.
    pub fn with_defaults() -> Self {
        let mut factory = Self::empty();
        factory.register("dog", || Box::new(Dog));
        factory.register("cat", || Box::new(Cat));
        factory
    }

    /// Register (or replace) the constructor for `key`.
    pub fn register(&mut self, key: impl Into<String>, constructor: AnimalConstructor) {
        let key = key.into();
        debug!(%key, "registering animal");
        self.constructors.insert(key, constructor);
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn create(&self, key: &str) -> PatternResult<Box<dyn Animal>> {
        self.constructors
            .get(key)
            .map(|construct| construct())
            .ok_or_else(|| PatternError::unknown("animal kind", key))
    }
}

/// Create an animal and report the sound it makes.
pub fn interact(factory: &AnimalFactory, key: &str) -> PatternResult<String> {
    let animal = factory.create(key)?;
    Ok(format!("The {} says: {}", animal.kind(), animal.sound()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Cow;

    impl Animal for Cow {
        fn kind(&self) -> &'static str {
            "cow"
        }

        fn sound(&self) -> &'static str {
            "Moo!"
        }
    }

    #[test]
    fn given_default_factory_when_creating_known_kind_then_returns_animal() {
        let factory = AnimalFactory::with_defaults();
        assert_eq!(interact(&factory, "dog").unwrap(), "The dog says: Woof!");
        assert_eq!(interact(&factory, "cat").unwrap(), "The cat says: Meow!");
    }

    #[test]
    fn given_unknown_kind_when_creating_then_errors() {
        let factory = AnimalFactory::with_defaults();
        let result = factory.create("dragon");
        assert!(matches!(
            result,
            Err(PatternError::UnknownCategory { key, .. }) if key == "dragon"
        ));
    }

    #[test]
    fn given_registered_kind_when_creating_then_uses_new_constructor() {
        let mut factory = AnimalFactory::empty();
        assert!(factory.create("cow").is_err());

        factory.register("cow", || Box::new(Cow));

        assert_eq!(factory.kinds(), vec!["cow"]);
        assert_eq!(factory.create("cow").unwrap().sound(), "Moo!");
    }
}
