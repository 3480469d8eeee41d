pub mod ops;
pub mod table;

#[cfg(test)]
mod ops_test;

pub use ops::{
    DailyRevenue, DailySpend, IncomeSummary, customers_by_city, customers_by_state, daily_revenue,
    daily_spend, income_summary, order_status_distribution, product_category_counts,
    review_score_distribution,
};
pub use table::{SummaryRow, SummaryTable};
