use std::collections::HashMap;

use serde::Serialize;

/// One (key, count) entry of a summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow<K> {
    pub key: K,
    pub count: u64,
}

/// Ordered grouping output shared by every count-style aggregation.
///
/// Rows are sorted descending by count; equal counts order ascending by key
/// (lexicographic for labels, numeric for scores). The tie-break is part of
/// the contract: "most common" is always the first row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable<K> {
    rows: Vec<SummaryRow<K>>,
}

impl<K: Ord> SummaryTable<K> {
    pub fn from_counts(counts: HashMap<K, u64>) -> Self {
        let mut rows: Vec<SummaryRow<K>> = counts
            .into_iter()
            .map(|(key, count)| SummaryRow { key, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow<K>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Key with the highest count; None on an empty table.
    pub fn most_common(&self) -> Option<&K> {
        self.rows.first().map(|row| &row.key)
    }

    /// Head of the descending list.
    pub fn top(&self, n: usize) -> &[SummaryRow<K>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Head of the ascending list, i.e. the reverse of the descending rows.
    pub fn bottom(&self, n: usize) -> Vec<&SummaryRow<K>> {
        self.rows.iter().rev().take(n).collect()
    }

    /// Sum of all counts, the size of the counted row population.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|row| row.count).sum()
    }

    pub fn count_for(&self, key: &K) -> Option<u64> {
        self.rows.iter().find(|row| &row.key == key).map(|r| r.count)
    }
}
