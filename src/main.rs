use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use vitrine::engine::aggregate::SummaryRow;
use vitrine::engine::dataset::loader;
use vitrine::engine::report::DashboardReport;
use vitrine::logging;
use vitrine::shared::config::CONFIG;

/// Text dashboard over the merged e-commerce order export.
#[derive(Debug, Parser)]
#[command(name = "vitrine")]
struct Args {
    /// CSV export path; defaults to dataset.path from config.toml
    #[arg(long)]
    data: Option<PathBuf>,

    /// Range start, YYYY-MM-DD; defaults to the earliest approval date
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Range end, YYYY-MM-DD; defaults to the latest approval date
    #[arg(long)]
    to: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    logging::init()?;
    let args = Args::parse();

    let path = args
        .data
        .unwrap_or_else(|| PathBuf::from(&CONFIG.dataset.path));
    let dataset = loader::load_from_path(&path)
        .with_context(|| format!("loading order export from {}", path.display()))?;

    let Some(full_range) = dataset.full_range() else {
        bail!("order export at {} contains no usable rows", path.display());
    };
    let start = args.from.unwrap_or_else(|| full_range.start());
    let end = args.to.unwrap_or_else(|| full_range.end());

    let report = DashboardReport::compute_between(&dataset, start, end)?;
    info!(range = %report.range, records = report.record_count, "Report ready");

    print_report(&report);
    Ok(())
}

fn print_report(report: &DashboardReport) {
    println!("E-Commerce Dashboard  {}", report.range);
    println!("Records in range: {}", report.record_count);

    println!("\n== Income ==");
    println!("Total income:   {}", format_brl(report.income.total));
    println!("Average income: {}", format_brl(report.income.average));
    println!("Days with orders: {}", report.daily_revenue.len());

    let cfg = &CONFIG.report;
    println!("\n== Product Sales ==");
    println!("Top {} categories:", cfg.top_categories);
    for row in report.categories.top(cfg.top_categories) {
        println!("  {:<40} {}", row.key, row.count);
    }
    println!("Bottom {} categories:", cfg.bottom_categories);
    for row in report.categories.bottom(cfg.bottom_categories) {
        println!("  {:<40} {}", row.key, row.count);
    }

    println!("\n== Review Scores ==");
    for row in report.review_scores.rows() {
        println!("  score {}: {}", row.key, row.count);
    }
    if let Some(score) = report.most_common_score {
        println!("Most common score: {score}");
    }

    println!("\n== Customers by State ==");
    print_rows(report.states.rows());
    if let Some(state) = &report.most_common_state {
        println!("Most common state: {state}");
    }

    println!("\n== Customers by City (top {}) ==", cfg.top_cities);
    print_rows(report.cities.top(cfg.top_cities));
    if let Some(city) = &report.most_common_city {
        println!("Most common city: {city}");
    }

    println!("\n== Order Status ==");
    print_rows(report.statuses.rows());
    if let Some(status) = &report.most_common_status {
        println!("Most common status: {status}");
    }
}

fn print_rows(rows: &[SummaryRow<String>]) {
    for row in rows {
        println!("  {:<40} {}", row.key, row.count);
    }
}

/// pt-BR currency rendering: R$ 1.234,56. Display-only, the engine never
/// formats money.
fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{rounded:.2}");
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = integer
        .strip_prefix('-')
        .map_or(("", integer), |rest| ("-", rest));

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}R$ {grouped},{fraction}")
}
