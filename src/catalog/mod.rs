//! Pattern catalog: registry of every pattern and its demonstration.

pub mod demos;

use std::fmt;
use std::str::FromStr;

use tracing::instrument;

use crate::config::Settings;
use crate::error::{PatternError, PatternResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Behavioural,
    Creational,
    Structural,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Behavioural,
        Category::Creational,
        Category::Structural,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioural => "behavioural",
            Category::Creational => "creational",
            Category::Structural => "structural",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "behavioural" | "behavioral" => Ok(Category::Behavioural),
            "creational" => Ok(Category::Creational),
            "structural" => Ok(Category::Structural),
            _ => Err(PatternError::unknown("category", s)),
        }
    }
}

/// Demonstration driver: pure, returns the lines a harness would print.
pub type DemoFn = fn(&Settings) -> PatternResult<Vec<String>>;

#[derive(Clone, Copy)]
pub struct PatternEntry {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub demo: DemoFn,
}

impl PatternEntry {
    pub fn run(&self, settings: &Settings) -> PatternResult<Vec<String>> {
        (self.demo)(settings)
    }
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

static ENTRIES: &[PatternEntry] = &[
    PatternEntry {
        name: "chain-of-responsibility",
        category: Category::Behavioural,
        summary: "Pass a request along a chain of handlers until one handles it.",
        demo: demos::chain_of_responsibility,
    },
    PatternEntry {
        name: "command",
        category: Category::Behavioural,
        summary: "Turn requests into objects that can be queued and executed later.",
        demo: demos::command,
    },
    PatternEntry {
        name: "interpreter",
        category: Category::Behavioural,
        summary: "Represent a grammar as a tree of expressions and evaluate it.",
        demo: demos::interpreter,
    },
    PatternEntry {
        name: "observer",
        category: Category::Behavioural,
        summary: "Notify all subscribers when the subject publishes something.",
        demo: demos::observer,
    },
    PatternEntry {
        name: "state",
        category: Category::Behavioural,
        summary: "Change an object's behaviour when its internal state changes.",
        demo: demos::state,
    },
    PatternEntry {
        name: "strategy",
        category: Category::Behavioural,
        summary: "Swap interchangeable algorithms behind a common interface.",
        demo: demos::strategy,
    },
    PatternEntry {
        name: "template-method",
        category: Category::Behavioural,
        summary: "Fix an algorithm's skeleton and let implementors fill in the steps.",
        demo: demos::template_method,
    },
    PatternEntry {
        name: "abstract-factory",
        category: Category::Creational,
        summary: "Create families of related objects without naming concrete types.",
        demo: demos::abstract_factory,
    },
    PatternEntry {
        name: "builder",
        category: Category::Creational,
        summary: "Construct a complex object step by step under a director.",
        demo: demos::builder,
    },
    PatternEntry {
        name: "factory-method",
        category: Category::Creational,
        summary: "Create objects from a key without the caller naming the type.",
        demo: demos::factory_method,
    },
    PatternEntry {
        name: "prototype",
        category: Category::Creational,
        summary: "Create new objects by copying a configured prototype.",
        demo: demos::prototype,
    },
    PatternEntry {
        name: "singleton",
        category: Category::Creational,
        summary: "Share one configuration instance, owned and lent out by the caller.",
        demo: demos::singleton,
    },
    PatternEntry {
        name: "adapter",
        category: Category::Structural,
        summary: "Make an incompatible interface usable where another is expected.",
        demo: demos::adapter,
    },
    PatternEntry {
        name: "bridge",
        category: Category::Structural,
        summary: "Split an abstraction from its implementation so both can vary.",
        demo: demos::bridge,
    },
    PatternEntry {
        name: "composite",
        category: Category::Structural,
        summary: "Treat single objects and groups of objects uniformly as a tree.",
        demo: demos::composite,
    },
    PatternEntry {
        name: "decorator",
        category: Category::Structural,
        summary: "Wrap an object to add behaviour without changing its interface.",
        demo: demos::decorator,
    },
    PatternEntry {
        name: "facade",
        category: Category::Structural,
        summary: "Offer one simple interface over a set of subsystems.",
        demo: demos::facade,
    },
    PatternEntry {
        name: "proxy",
        category: Category::Structural,
        summary: "Stand in for another object to defer or control access to it.",
        demo: demos::proxy,
    },
];

/// Read-only view over all registered patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    pub fn entries(&self) -> &'static [PatternEntry] {
        ENTRIES
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'static PatternEntry> {
        ENTRIES.iter().filter(move |e| e.category == category)
    }

    /// Look up a pattern by name. Underscores and case are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, name: &str) -> PatternResult<&'static PatternEntry> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        ENTRIES
            .iter()
            .find(|e| e.name == wanted)
            .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
    }
}
