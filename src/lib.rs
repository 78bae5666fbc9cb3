//! Catalog of classic design patterns.
//!
//! Every pattern lives in its own module and exposes a pure API: operations
//! return values and never print. The [`catalog`] registers a demonstration
//! per pattern; the `patternbook` binary is a thin harness around it.

pub mod behavioural;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod creational;
pub mod error;
pub mod exitcode;
pub mod structural;
pub mod util;

pub use catalog::{Catalog, Category, PatternEntry};
pub use config::Settings;
pub use error::{PatternError, PatternResult};
