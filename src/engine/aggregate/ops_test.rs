use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::engine::aggregate::ops::{
    customers_by_city, customers_by_state, daily_revenue, daily_spend, income_summary,
    order_status_distribution, product_category_counts, review_score_distribution,
};
use crate::engine::types::OrderRecord;
use crate::test_helpers::factories::OrderFactory;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// daily_revenue -----------------------------------------------------------

#[test]
fn daily_revenue_counts_distinct_orders_per_day() {
    // o1 has two line items on Jan 1; o2 same day; o3 on Jan 3
    let records = vec![
        OrderFactory::new()
            .order_id("o1")
            .approved_on(2018, 1, 1)
            .payment(dec!(10.00))
            .create(),
        OrderFactory::new()
            .order_id("o1")
            .approved_on(2018, 1, 1)
            .payment(dec!(2.50))
            .create(),
        OrderFactory::new()
            .order_id("o2")
            .approved_on(2018, 1, 1)
            .payment(dec!(5.00))
            .create(),
        OrderFactory::new()
            .order_id("o3")
            .approved_on(2018, 1, 3)
            .payment(dec!(7.25))
            .create(),
    ];

    let days = daily_revenue(&records);
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].date, date(2018, 1, 1));
    assert_eq!(days[0].order_count, 2);
    assert_eq!(days[0].revenue, dec!(17.50));

    // Jan 2 has no records and is omitted
    assert_eq!(days[1].date, date(2018, 1, 3));
    assert_eq!(days[1].order_count, 1);
    assert_eq!(days[1].revenue, dec!(7.25));
}

#[test]
fn daily_revenue_conserves_total_income() {
    let records: Vec<OrderRecord> = (0..10)
        .map(|i| {
            OrderFactory::new()
                .order_id(&format!("o{i}"))
                .approved_on(2018, 1, 1 + (i % 4))
                .payment(Decimal::new(100 + i as i64 * 37, 2))
                .create()
        })
        .collect();

    let summed: Decimal = daily_revenue(&records).iter().map(|d| d.revenue).sum();
    assert_eq!(summed, income_summary(&records).total);
}

#[test]
fn daily_spend_matches_daily_revenue_sums() {
    let records = vec![
        OrderFactory::new()
            .approved_on(2018, 1, 1)
            .payment(dec!(3.00))
            .create(),
        OrderFactory::new()
            .approved_on(2018, 1, 2)
            .payment(dec!(4.00))
            .create(),
        OrderFactory::new()
            .approved_on(2018, 1, 2)
            .payment(dec!(5.00))
            .create(),
    ];

    let spend = daily_spend(&records);
    assert_eq!(spend.len(), 2);
    assert_eq!(spend[0].total_spend, dec!(3.00));
    assert_eq!(spend[1].total_spend, dec!(9.00));

    let revenue = daily_revenue(&records);
    for (s, r) in spend.iter().zip(revenue.iter()) {
        assert_eq!(s.date, r.date);
        assert_eq!(s.total_spend, r.revenue);
    }
}

// income_summary ----------------------------------------------------------

#[test]
fn income_summary_totals_and_averages() {
    let records = vec![
        OrderFactory::new().payment(dec!(10.00)).create(),
        OrderFactory::new().payment(dec!(20.00)).create(),
        OrderFactory::new().payment(dec!(30.00)).create(),
    ];
    let income = income_summary(&records);
    assert_eq!(income.total, dec!(60.00));
    assert_eq!(income.average, dec!(20.00));
}

#[test]
fn income_summary_of_empty_input_is_zero() {
    let income = income_summary(&[]);
    assert_eq!(income.total, Decimal::ZERO);
    assert_eq!(income.average, Decimal::ZERO);
}

// product_category_counts -------------------------------------------------

#[test]
fn category_counts_exclude_null_categories() {
    let records = vec![
        OrderFactory::new().category(Some("toys")).create(),
        OrderFactory::new().category(Some("toys")).create(),
        OrderFactory::new().category(Some("garden")).create(),
        OrderFactory::new().category(None).create(),
    ];

    let table = product_category_counts(&records);
    assert_eq!(table.len(), 2);
    assert_eq!(table.most_common().map(String::as_str), Some("toys"));
    // partition property over the categorized rows only
    assert_eq!(table.total(), 3);
}

// review_score_distribution -----------------------------------------------

#[test]
fn review_scores_tie_break_to_smallest_score() {
    let records = vec![
        OrderFactory::new().review(Some(5)).create(),
        OrderFactory::new().review(Some(5)).create(),
        OrderFactory::new().review(Some(1)).create(),
        OrderFactory::new().review(Some(1)).create(),
        OrderFactory::new().review(None).create(),
    ];

    let table = review_score_distribution(&records);
    assert_eq!(table.total(), 4);
    assert_eq!(table.most_common(), Some(&1));
}

// customers_by_state / customers_by_city ----------------------------------

#[test]
fn state_counts_are_distinct_customers() {
    // three orders from c1 plus one from c2, all in SP
    let records = vec![
        OrderFactory::new()
            .order_id("o1")
            .customer("c1", "SP", "sao paulo")
            .create(),
        OrderFactory::new()
            .order_id("o2")
            .customer("c1", "SP", "sao paulo")
            .create(),
        OrderFactory::new()
            .order_id("o3")
            .customer("c1", "SP", "campinas")
            .create(),
        OrderFactory::new()
            .order_id("o4")
            .customer("c2", "SP", "sao paulo")
            .create(),
    ];

    let states = customers_by_state(&records);
    assert_eq!(states.count_for(&"SP".to_string()), Some(2));

    let cities = customers_by_city(&records);
    assert_eq!(cities.count_for(&"sao paulo".to_string()), Some(2));
    assert_eq!(cities.count_for(&"campinas".to_string()), Some(1));
}

#[test]
fn state_ties_break_ascending_by_label() {
    let records = vec![
        OrderFactory::new().customer("c1", "RJ", "rio").create(),
        OrderFactory::new().customer("c2", "MG", "bh").create(),
    ];
    let states = customers_by_state(&records);
    assert_eq!(states.most_common().map(String::as_str), Some("MG"));
}

// order_status_distribution -----------------------------------------------

#[test]
fn status_counts_partition_all_rows() {
    let records = vec![
        OrderFactory::new().status("delivered").create(),
        OrderFactory::new().status("delivered").create(),
        OrderFactory::new().status("shipped").create(),
        OrderFactory::new().status("canceled").create(),
    ];

    let table = order_status_distribution(&records);
    assert_eq!(table.total(), records.len() as u64);
    assert_eq!(table.most_common().map(String::as_str), Some("delivered"));
    assert_eq!(table.most_common().unwrap(), &table.rows()[0].key);
}

// purity ------------------------------------------------------------------

#[test]
fn aggregations_are_idempotent_over_the_same_input() {
    let records: Vec<OrderRecord> = OrderFactory::new().create_list(8);

    assert_eq!(daily_revenue(&records), daily_revenue(&records));
    assert_eq!(income_summary(&records), income_summary(&records));
    assert_eq!(
        product_category_counts(&records),
        product_category_counts(&records)
    );
    assert_eq!(customers_by_state(&records), customers_by_state(&records));
    assert_eq!(
        order_status_distribution(&records),
        order_status_distribution(&records)
    );
}

#[test]
fn empty_input_yields_empty_outputs_everywhere() {
    let records: Vec<OrderRecord> = Vec::new();
    assert!(daily_revenue(&records).is_empty());
    assert!(daily_spend(&records).is_empty());
    assert!(product_category_counts(&records).is_empty());
    assert!(review_score_distribution(&records).is_empty());
    assert!(customers_by_state(&records).is_empty());
    assert!(customers_by_city(&records).is_empty());
    assert!(order_status_distribution(&records).is_empty());
}
