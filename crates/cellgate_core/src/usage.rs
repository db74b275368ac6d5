//! Per-rule usage counters collected during grid generation.

use cellgate_data::RULE_TABLE_LENGTH;
use serde::{Deserialize, Serialize};

/// How many times each rule-table index was looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUsage {
    counts: Vec<u64>,
}

impl Default for RuleUsage {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleUsage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: vec![0; RULE_TABLE_LENGTH],
        }
    }

    #[inline]
    pub fn record(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &RuleUsage) {
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }

    #[must_use]
    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of each index in percent. All zeros when nothing was recorded.
    #[must_use]
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / total as f64 * 100.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut usage = RuleUsage::new();
        usage.record(0);
        usage.record(0);
        usage.record(63);
        assert_eq!(usage.count(0), 2);
        assert_eq!(usage.total(), 3);
    }

    #[test]
    fn test_merge() {
        let mut a = RuleUsage::new();
        let mut b = RuleUsage::new();
        a.record(5);
        b.record(5);
        b.record(6);
        a.merge(&b);
        assert_eq!(a.count(5), 2);
        assert_eq!(a.count(6), 1);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let mut usage = RuleUsage::new();
        for i in 0..10 {
            usage.record(i);
        }
        let sum: f64 = usage.percentages().iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(RuleUsage::new().percentages().iter().all(|p| *p == 0.0));
    }
}
