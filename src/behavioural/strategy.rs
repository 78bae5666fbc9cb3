//! Strategy: interchangeable sorting algorithms behind one interface.

use itertools::Itertools;

use crate::error::{PatternError, PatternResult};

pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, items: &[i64]) -> Vec<i64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl SortStrategy for Ascending {
    fn name(&self) -> &'static str {
        "ascending"
    }

    fn sort(&self, items: &[i64]) -> Vec<i64> {
        items.iter().copied().sorted().collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl SortStrategy for Descending {
    fn name(&self) -> &'static str {
        "descending"
    }

    fn sort(&self, items: &[i64]) -> Vec<i64> {
        items.iter().copied().sorted_by(|a, b| b.cmp(a)).collect()
    }
}

/// Look up a strategy by its configuration key.
pub fn strategy_for(key: &str) -> PatternResult<Box<dyn SortStrategy>> {
    match key.trim().to_ascii_lowercase().as_str() {
        "ascending" | "asc" => Ok(Box::new(Ascending)),
        "descending" | "desc" => Ok(Box::new(Descending)),
        _ => Err(PatternError::unknown("sort order", key)),
    }
}

/// Context: delegates to whichever strategy is currently set.
pub struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    pub fn new(strategy: impl SortStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn sort(&self, items: &[i64]) -> Vec<i64> {
        self.strategy.sort(items)
    }
}
