
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::engine::aggregate::{
    DailyRevenue, DailySpend, IncomeSummary, SummaryTable, customers_by_city, customers_by_state,
    daily_revenue, daily_spend, income_summary, order_status_distribution,
    product_category_counts, review_score_distribution,
};
use crate::engine::dataset::Dataset;
use crate::engine::errors::ReportError;
use crate::shared::datetime::DateRange;

/// Full dashboard snapshot for one date range.
///
/// The interactive shell recomputes this on every range change; one call
/// replaces the source scripts' whole-script re-run. Everything here is plain
/// structured data: currency formatting, colors and layout stay with the
/// rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub range: DateRange,
    pub record_count: usize,
    pub daily_revenue: Vec<DailyRevenue>,
    pub daily_spend: Vec<DailySpend>,
    pub income: IncomeSummary,
    pub categories: SummaryTable<String>,
    pub review_scores: SummaryTable<u8>,
    pub most_common_score: Option<u8>,
    pub states: SummaryTable<String>,
    pub most_common_state: Option<String>,
    pub cities: SummaryTable<String>,
    pub most_common_city: Option<String>,
    pub statuses: SummaryTable<String>,
    pub most_common_status: Option<String>,
}

impl DashboardReport {
    /// Run every aggregation over the records inside `range`.
    ///
    /// An empty slice is not an error: tables come back empty and income is
    /// zero, so the shell can render a blank dashboard.
    pub fn compute(dataset: &Dataset, range: DateRange) -> Self {
        let records = dataset.slice(&range);
        debug!(%range, records = records.len(), "Recomputing dashboard report");

        let categories = product_category_counts(records);
        let review_scores = review_score_distribution(records);
        let states = customers_by_state(records);
        let cities = customers_by_city(records);
        let statuses = order_status_distribution(records);

        Self {
            range,
            record_count: records.len(),
            daily_revenue: daily_revenue(records),
            daily_spend: daily_spend(records),
            income: income_summary(records),
            most_common_score: review_scores.most_common().copied(),
            most_common_state: states.most_common().cloned(),
            most_common_city: cities.most_common().cloned(),
            most_common_status: statuses.most_common().cloned(),
            categories,
            review_scores,
            states,
            cities,
            statuses,
        }
    }

    /// Build the range and compute in one step; rejects start > end before
    /// touching the dataset.
    pub fn compute_between(
        dataset: &Dataset,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ReportError> {
        let range = DateRange::new(start, end)?;
        Ok(Self::compute(dataset, range))
    }
}
