//! Bounded insight log
//!
//! Insertion-ordered; once full, every new insight evicts the oldest one
//! regardless of weight.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// A labeled observation and its recency weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryInsight {
    pub label: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextualMemory {
    insights: VecDeque<MemoryInsight>,
    capacity: usize,
}

impl ContextualMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            insights: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an insight, dropping the oldest past capacity
    pub fn store(&mut self, label: impl Into<String>, weight: f64) {
        self.insights.push_back(MemoryInsight {
            label: label.into(),
            weight,
        });
        while self.insights.len() > self.capacity {
            self.insights.pop_front();
        }
    }

    /// The `count` heaviest insights, heaviest first
    ///
    /// Equal weights keep insertion order.
    pub fn retrieve_top_insights(&self, count: usize) -> Vec<&MemoryInsight> {
        let mut sorted: Vec<&MemoryInsight> = self.insights.iter().collect();
        sorted.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        sorted.truncate(count);
        sorted
    }

    pub fn insights(&self) -> impl Iterator<Item = &MemoryInsight> {
        self.insights.iter()
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(insights: Vec<&MemoryInsight>) -> Vec<&str> {
        insights.into_iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_fifo_eviction_ignores_weight() {
        let mut memory = ContextualMemory::new(2);
        memory.store("a", 2.0);
        memory.store("b", 0.1);
        memory.store("c", 0.5);

        assert_eq!(memory.len(), 2);
        let held: Vec<_> = memory.insights().map(|i| i.label.as_str()).collect();
        assert_eq!(held, vec!["b", "c"]);
    }

    #[test]
    fn test_top_insights_sorted_by_weight() {
        let mut memory = ContextualMemory::new(10);
        memory.store("low", 0.2);
        memory.store("high", 1.8);
        memory.store("mid", 1.0);

        assert_eq!(labels(memory.retrieve_top_insights(2)), vec!["high", "mid"]);
        assert_eq!(memory.retrieve_top_insights(10).len(), 3);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut memory = ContextualMemory::new(10);
        memory.store("first", 1.0);
        memory.store("second", 1.0);
        memory.store("third", 1.0);

        assert_eq!(labels(memory.retrieve_top_insights(3)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut memory = ContextualMemory::new(0);
        memory.store("a", 1.0);
        assert!(memory.is_empty());
        assert!(memory.retrieve_top_insights(3).is_empty());
    }
}
