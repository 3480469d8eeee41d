pub mod loader;


use chrono::NaiveDate;

use crate::engine::types::OrderRecord;
use crate::shared::datetime::DateRange;

/// Immutable handle over the loaded order export.
///
/// Records are sorted by approval timestamp at construction, so a date-range
/// filter is a contiguous slice found by binary search. The handle is built
/// once at startup and threaded through every aggregation call; nothing
/// mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    pub fn new(mut records: Vec<OrderRecord>) -> Self {
        records.sort_by_key(|r| r.order_approved_at);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Earliest approval date in the dataset.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.approved_date())
    }

    /// Latest approval date in the dataset.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.approved_date())
    }

    /// Default selector range: the full observed min..max span.
    pub fn full_range(&self) -> Option<DateRange> {
        match (self.min_date(), self.max_date()) {
            // min <= max holds by construction, new() cannot fail here
            (Some(min), Some(max)) => DateRange::new(min, max).ok(),
            _ => None,
        }
    }

    /// Records whose approval date falls inside `range`, both ends inclusive.
    pub fn slice(&self, range: &DateRange) -> &[OrderRecord] {
        let lo = self
            .records
            .partition_point(|r| r.approved_date() < range.start());
        let hi = self
            .records
            .partition_point(|r| r.approved_date() <= range.end());
        &self.records[lo..hi]
    }
}
