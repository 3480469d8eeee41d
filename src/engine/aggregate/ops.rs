//! Pure aggregation functions over an already date-filtered record slice.
//!
//! Every function is deterministic and leaves its input untouched; calling
//! one twice on the same slice yields identical output. Empty input is never
//! an error: tables come back empty and the income average is zero.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::aggregate::table::SummaryTable;
use crate::engine::types::OrderRecord;

/// One calendar day of order activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    /// Distinct order ids approved that day, not line-item rows.
    pub order_count: u64,
    pub revenue: Decimal,
}

/// Per-day payment totals, the series behind the income chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySpend {
    pub date: NaiveDate,
    pub total_spend: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeSummary {
    pub total: Decimal,
    /// total / row count; zero when there are no rows.
    pub average: Decimal,
}

/// Group by approval day: distinct order count plus summed payments.
/// Ascending by date; days without records are omitted, no zero-fill.
pub fn daily_revenue(records: &[OrderRecord]) -> Vec<DailyRevenue> {
    let mut days: BTreeMap<NaiveDate, (HashSet<&str>, Decimal)> = BTreeMap::new();
    for record in records {
        let (orders, revenue) = days.entry(record.approved_date()).or_default();
        orders.insert(record.order_id.as_str());
        *revenue += record.payment_value;
    }
    days.into_iter()
        .map(|(date, (orders, revenue))| DailyRevenue {
            date,
            order_count: orders.len() as u64,
            revenue,
        })
        .collect()
}

/// Per-day payment totals, ascending by date.
pub fn daily_spend(records: &[OrderRecord]) -> Vec<DailySpend> {
    let mut days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in records {
        *days.entry(record.approved_date()).or_default() += record.payment_value;
    }
    days.into_iter()
        .map(|(date, total_spend)| DailySpend { date, total_spend })
        .collect()
}

/// Total and mean payment value over all rows.
pub fn income_summary(records: &[OrderRecord]) -> IncomeSummary {
    let total: Decimal = records.iter().map(|r| r.payment_value).sum();
    let average = if records.is_empty() {
        Decimal::ZERO
    } else {
        total / Decimal::from(records.len() as u64)
    };
    IncomeSummary { total, average }
}

/// Row count per product category; rows without a category are excluded.
pub fn product_category_counts(records: &[OrderRecord]) -> SummaryTable<String> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        if let Some(category) = &record.product_category {
            *counts.entry(category.clone()).or_default() += 1;
        }
    }
    SummaryTable::from_counts(counts)
}

/// Count per review score (1..=5); unreviewed rows are excluded. Equal counts
/// resolve to the smallest score.
pub fn review_score_distribution(records: &[OrderRecord]) -> SummaryTable<u8> {
    let mut counts: HashMap<u8, u64> = HashMap::new();
    for record in records {
        if let Some(score) = record.review_score {
            *counts.entry(score).or_default() += 1;
        }
    }
    SummaryTable::from_counts(counts)
}

/// Distinct customers per state. Repeat orders from one customer count once.
pub fn customers_by_state(records: &[OrderRecord]) -> SummaryTable<String> {
    distinct_customers_by(records, |r| &r.customer_state)
}

/// Distinct customers per city.
pub fn customers_by_city(records: &[OrderRecord]) -> SummaryTable<String> {
    distinct_customers_by(records, |r| &r.customer_city)
}

/// Row count per order status label.
pub fn order_status_distribution(records: &[OrderRecord]) -> SummaryTable<String> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.order_status.clone()).or_default() += 1;
    }
    SummaryTable::from_counts(counts)
}

fn distinct_customers_by<'a>(
    records: &'a [OrderRecord],
    key: impl Fn(&'a OrderRecord) -> &'a str,
) -> SummaryTable<String> {
    let mut groups: HashMap<&str, HashSet<&str>> = HashMap::new();
    for record in records {
        groups
            .entry(key(record))
            .or_default()
            .insert(record.customer_id.as_str());
    }
    let counts = groups
        .into_iter()
        .map(|(key, customers)| (key.to_string(), customers.len() as u64))
        .collect();
    SummaryTable::from_counts(counts)
}
