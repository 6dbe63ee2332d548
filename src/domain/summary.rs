//! Summary: ordered label/count pairs for one dimension.
//!
//! Serializes as `[{"name": ..., "value": ...}, ...]`, the shape chart
//! components bind to directly.

use serde::Serialize;

/// How many records fall under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    #[serde(rename = "name")]
    pub label: String,
    pub value: u64,
}

/// One entry per label of the dimension, in the dimension's canonical order.
///
/// Only the aggregator builds these, so every label is present exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    entries: Vec<CategoryCount>,
}

impl Summary {
    pub(crate) fn from_counts(labels: &[String], counts: Vec<u64>) -> Self {
        debug_assert_eq!(labels.len(), counts.len());
        let entries = labels
            .iter()
            .zip(counts)
            .map(|(label, value)| CategoryCount {
                label: label.clone(),
                value,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryCount> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Count for `label`, or `None` if the label is not part of the dimension.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value)
    }

    /// Sum of all counts. Equals the number of records summarized.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// Fraction of the total under `label`. 0.0 for an empty summary.
    pub fn share(&self, label: &str) -> Option<f64> {
        let value = self.get(label)?;
        let total = self.total();
        if total == 0 {
            return Some(0.0);
        }
        Some(value as f64 / total as f64)
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a CategoryCount;
    type IntoIter = std::slice::Iter<'a, CategoryCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
